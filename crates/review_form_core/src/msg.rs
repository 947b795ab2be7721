use crate::{KeyPress, NotificationId, NotificationKind, TimerTask};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the review textarea.
    InputChanged(String),
    /// The form's native submit event fired.
    SubmitAttempted,
    /// Key pressed anywhere on the page; focus and the presence of the form
    /// and its submit button are sampled when the event fires.
    KeyPressed {
        key: KeyPress,
        input_focused: bool,
        submit_wired: bool,
    },
    /// Show a notification, replacing any current one.
    Notify {
        message: String,
        kind: NotificationKind,
    },
    /// User clicked a notification's close button.
    DismissClicked(NotificationId),
    /// A scheduled delay elapsed.
    TimerFired(TimerTask),
    /// User picked one of the canned example reviews.
    ExampleChosen(usize),
    /// The analysis request completed without a page reload.
    SubmissionFinished,
}
