//! Seams between the controller and the page it drives.
//!
//! `FormView` is the view handle: presence checks, the few values the
//! controller reads back, and a single `apply` for every mutation.
//! `EventSource` is where the controller registers the events it wants.
//! Both are usually implemented by the same page object.

use review_form_core::{KeyPress, NotificationId, NotificationView};

/// Page elements the controller knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    ReviewInput,
    SubmitButton,
    CharCount,
    ResultSection,
    Form,
    ExampleButtons,
    /// The document itself; always present.
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Input,
    Submit,
    KeyDown,
    Click,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The review textarea's value changed.
    Input,
    /// The form is about to be submitted natively.
    Submit,
    KeyDown(KeyPress),
    /// The close button of a notification was clicked.
    NotificationClosed(NotificationId),
    /// One of the example review buttons was clicked.
    ExampleClicked(usize),
}

impl FormEvent {
    /// Element and event kind a listener has to be registered for.
    pub fn route(&self) -> (Element, EventKind) {
        match self {
            FormEvent::Input => (Element::ReviewInput, EventKind::Input),
            FormEvent::Submit => (Element::Form, EventKind::Submit),
            FormEvent::KeyDown(_) => (Element::Document, EventKind::KeyDown),
            FormEvent::NotificationClosed(_) => (Element::Document, EventKind::Click),
            FormEvent::ExampleClicked(_) => (Element::ExampleButtons, EventKind::Click),
        }
    }
}

/// Result of handling an event, reported back to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The page must skip the event's native action (e.g. form navigation).
    pub default_prevented: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    SetCharCount {
        text: String,
        color_var: &'static str,
    },
    SetInputHeight {
        px: u32,
    },
    SetInputValue {
        text: String,
    },
    FocusInput,
    SetSubmitState {
        enabled: bool,
        opacity: &'static str,
    },
    SetSubmitLabel {
        icon: &'static str,
        text: &'static str,
        loading: bool,
    },
    SetResultsLoading {
        loading: bool,
    },
    ScrollResultsIntoView,
    SubmitForm,
    /// Show `Some` notification in place of the current one, or clear it.
    SetNotification(Option<NotificationView>),
    InjectStyles {
        marker: &'static str,
        css: &'static str,
    },
}

impl ViewCommand {
    pub fn target(&self) -> Element {
        match self {
            ViewCommand::SetCharCount { .. } => Element::CharCount,
            ViewCommand::SetInputHeight { .. }
            | ViewCommand::SetInputValue { .. }
            | ViewCommand::FocusInput => Element::ReviewInput,
            ViewCommand::SetSubmitState { .. } | ViewCommand::SetSubmitLabel { .. } => {
                Element::SubmitButton
            }
            ViewCommand::SetResultsLoading { .. } | ViewCommand::ScrollResultsIntoView => {
                Element::ResultSection
            }
            ViewCommand::SubmitForm => Element::Form,
            ViewCommand::SetNotification(_) | ViewCommand::InjectStyles { .. } => {
                Element::Document
            }
        }
    }
}

pub trait FormView {
    fn has_element(&self, element: Element) -> bool;

    /// Current textarea value, `None` when the textarea is missing.
    fn input_value(&self) -> Option<String>;

    fn input_focused(&self) -> bool;

    /// Whether a style element with this id is already in the document.
    fn has_style_marker(&self, marker: &str) -> bool;

    fn apply(&mut self, command: ViewCommand);
}

pub trait EventSource {
    fn subscribe(&mut self, target: Element, kind: EventKind);
}
