//! Review form core: pure state machine and view-model helpers.
mod config;
mod effect;
mod examples;
mod keyboard;
mod metrics;
mod msg;
mod notification;
mod state;
mod update;
mod view_model;

pub use config::{FormConfig, Messages};
pub use effect::{Effect, TimerId, TimerTask};
pub use examples::EXAMPLE_REVIEWS;
pub use keyboard::{Key, KeyPress, Modifiers, Shortcut};
pub use metrics::{count_tier, input_height, CountTier, CountTiers, InputLayout};
pub use msg::Msg;
pub use notification::{Notification, NotificationId, NotificationKind, NotificationPhase};
pub use state::FormState;
pub use update::update;
pub use view_model::{FormViewModel, NotificationView, Opacity, SubmitLabel};
