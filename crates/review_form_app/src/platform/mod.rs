mod app;
pub mod config;
pub mod console;
mod effects;
pub mod logging;
mod memory_page;
mod scheduler;
pub mod ui;
mod view;

pub use app::FormController;
pub use memory_page::MemoryPage;
pub use scheduler::{ClockScheduler, ManualScheduler, Scheduler};
pub use view::{Element, EventKind, EventOutcome, EventSource, FormEvent, FormView, ViewCommand};
