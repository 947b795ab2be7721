use std::collections::BTreeSet;

use review_form_core::{NotificationPhase, NotificationView};

use super::{Element, EventKind, EventSource, FormView, ViewCommand};

/// Headless page holding the rendered state of the form in memory. Backs the
/// console host and the controller tests.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    elements: BTreeSet<Element>,
    value: String,
    focused: bool,
    char_count: Option<(String, &'static str)>,
    input_height_px: Option<u32>,
    submit_enabled: bool,
    submit_opacity: &'static str,
    submit_label: Option<(&'static str, &'static str)>,
    submit_loading: bool,
    results_loading: bool,
    notification: Option<NotificationView>,
    notification_history: Vec<NotificationView>,
    style_markers: Vec<&'static str>,
    subscriptions: Vec<(Element, EventKind)>,
    submissions: usize,
    results_scrolls: usize,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::with_elements([
            Element::ReviewInput,
            Element::SubmitButton,
            Element::CharCount,
            Element::ResultSection,
            Element::Form,
            Element::ExampleButtons,
        ])
    }
}

impl MemoryPage {
    /// A page with every element the controller knows about.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let mut elements: BTreeSet<Element> = elements.into_iter().collect();
        elements.insert(Element::Document);
        Self {
            elements,
            value: String::new(),
            focused: false,
            char_count: None,
            input_height_px: None,
            submit_enabled: true,
            submit_opacity: "1",
            submit_label: None,
            submit_loading: false,
            results_loading: false,
            notification: None,
            notification_history: Vec::new(),
            style_markers: Vec::new(),
            subscriptions: Vec::new(),
            submissions: 0,
            results_scrolls: 0,
        }
    }

    pub fn without(mut self, element: Element) -> Self {
        if element != Element::Document {
            self.elements.remove(&element);
        }
        self
    }

    /// Sets the textarea value the way typing would. The caller still has to
    /// deliver the input event.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused && self.elements.contains(&Element::ReviewInput);
    }

    /// Records a native form submission the page went ahead with.
    pub fn record_submission(&mut self) {
        self.submissions += 1;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn char_count(&self) -> Option<&str> {
        self.char_count.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn char_count_color(&self) -> Option<&'static str> {
        self.char_count.as_ref().map(|(_, color)| *color)
    }

    pub fn input_height_px(&self) -> Option<u32> {
        self.input_height_px
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn submit_opacity(&self) -> &'static str {
        self.submit_opacity
    }

    /// Button icon and text, once rendered.
    pub fn submit_label(&self) -> Option<(&'static str, &'static str)> {
        self.submit_label
    }

    pub fn submit_loading(&self) -> bool {
        self.submit_loading
    }

    pub fn results_loading(&self) -> bool {
        self.results_loading
    }

    pub fn notification(&self) -> Option<&NotificationView> {
        self.notification.as_ref()
    }

    /// Every distinct notification that was ever inserted, oldest first.
    pub fn notification_history(&self) -> &[NotificationView] {
        &self.notification_history
    }

    pub fn style_markers(&self) -> &[&'static str] {
        &self.style_markers
    }

    pub fn subscriptions(&self) -> &[(Element, EventKind)] {
        &self.subscriptions
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn results_scrolls(&self) -> usize {
        self.results_scrolls
    }

    /// One-line summary used by the console host.
    pub fn describe(&self) -> String {
        let count = self.char_count().unwrap_or("-");
        let button = match self.submit_label {
            Some((_, text)) => text,
            None => "-",
        };
        let state = if self.submit_enabled {
            "enabled"
        } else {
            "disabled"
        };
        let notification = match &self.notification {
            Some(n) => {
                let phase = match n.phase {
                    NotificationPhase::Visible => "",
                    NotificationPhase::Exiting => ", closing",
                };
                format!("[{}{}] {}", n.kind.css_class(), phase, n.message)
            }
            None => "none".to_string(),
        };
        format!(
            "{count} | button: {button} ({state}) | loading: {} | notification: {notification} | submissions: {}",
            self.results_loading, self.submissions
        )
    }
}

impl FormView for MemoryPage {
    fn has_element(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    fn input_value(&self) -> Option<String> {
        self.elements
            .contains(&Element::ReviewInput)
            .then(|| self.value.clone())
    }

    fn input_focused(&self) -> bool {
        self.focused
    }

    fn has_style_marker(&self, marker: &str) -> bool {
        self.style_markers.iter().any(|m| *m == marker)
    }

    fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::SetCharCount { text, color_var } => {
                self.char_count = Some((text, color_var));
            }
            ViewCommand::SetInputHeight { px } => self.input_height_px = Some(px),
            ViewCommand::SetInputValue { text } => self.value = text,
            ViewCommand::FocusInput => self.focused = true,
            ViewCommand::SetSubmitState { enabled, opacity } => {
                self.submit_enabled = enabled;
                self.submit_opacity = opacity;
            }
            ViewCommand::SetSubmitLabel {
                icon,
                text,
                loading,
            } => {
                self.submit_label = Some((icon, text));
                self.submit_loading = loading;
            }
            ViewCommand::SetResultsLoading { loading } => self.results_loading = loading,
            ViewCommand::ScrollResultsIntoView => self.results_scrolls += 1,
            ViewCommand::SubmitForm => self.submissions += 1,
            ViewCommand::SetNotification(next) => {
                if let Some(shown) = &next {
                    let is_new = self.notification.as_ref().map(|n| n.id) != Some(shown.id);
                    if is_new {
                        self.notification_history.push(shown.clone());
                    }
                }
                self.notification = next;
            }
            ViewCommand::InjectStyles { marker, .. } => self.style_markers.push(marker),
        }
    }
}

impl EventSource for MemoryPage {
    fn subscribe(&mut self, target: Element, kind: EventKind) {
        self.subscriptions.push((target, kind));
    }
}
