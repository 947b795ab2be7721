use crate::{CountTier, NotificationId, NotificationKind, NotificationPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opacity {
    #[default]
    Full,
    Dimmed,
}

impl Opacity {
    pub fn as_css(self) -> &'static str {
        match self {
            Opacity::Full => "1",
            Opacity::Dimmed => "0.7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitLabel {
    #[default]
    Idle,
    Busy,
}

impl SubmitLabel {
    pub fn text(self) -> &'static str {
        match self {
            SubmitLabel::Idle => "Analyze Review",
            SubmitLabel::Busy => "Analyzing...",
        }
    }

    /// Font Awesome icon name shown before the text.
    pub fn icon(self) -> &'static str {
        match self {
            SubmitLabel::Idle => "fa-search",
            SubmitLabel::Busy => "fa-spinner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub char_count: usize,
    pub char_count_text: String,
    pub count_tier: CountTier,
    pub input_height_px: u32,
    pub submit_enabled: bool,
    pub submit_opacity: Opacity,
    pub submit_label: SubmitLabel,
    pub results_loading: bool,
    pub notification: Option<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}
