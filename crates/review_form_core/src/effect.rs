use std::time::Duration;

use crate::NotificationId;

pub type TimerId = u64;

/// Deferred work the host runs once a scheduled delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Start the exit animation of a notification that was never dismissed.
    AutoDismiss(NotificationId),
    /// Detach a notification whose exit animation has finished.
    Detach(NotificationId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel the native action of the event being handled.
    PreventDefault,
    FocusInput,
    /// Overwrite the textarea value (the host does not echo this back as input).
    ReplaceInput { text: String },
    /// Ask the page to submit the form natively, as if the submit button was clicked.
    SubmitForm,
    InjectNotificationStyles,
    ScheduleTimer {
        timer: TimerId,
        delay: Duration,
        task: TimerTask,
    },
    CancelTimer { timer: TimerId },
    ScrollToResults,
}
