//! Review form app: platform glue around the pure review form core.
pub mod platform;

pub use platform::{
    ClockScheduler, Element, EventKind, EventOutcome, EventSource, FormController, FormEvent,
    FormView, ManualScheduler, MemoryPage, Scheduler, ViewCommand,
};
