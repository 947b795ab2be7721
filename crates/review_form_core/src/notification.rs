use crate::TimerId;

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }

    /// Background colour, as a CSS custom property name.
    pub fn background_var(self) -> &'static str {
        match self {
            NotificationKind::Info => "--primary",
            NotificationKind::Warning => "--neutral",
            NotificationKind::Error => "--negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    /// Slide-out animation running; detached when it ends.
    Exiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
    /// Auto-dismiss timer while visible, detach timer while exiting.
    pub(crate) pending_timer: Option<TimerId>,
}
