use crate::platform::Element;

pub const INPUT_REVIEW: &str = "reviewInput";
pub const BUTTON_ANALYZE: &str = "analyzeBtn";
pub const LABEL_CHAR_COUNT: &str = "charCount";
pub const SECTION_RESULTS: &str = "resultSection";
pub const PANEL_EXAMPLES: &str = "exampleButtons";
pub const STYLE_NOTIFICATIONS: &str = "notification-styles";

/// DOM id (or selector, for the form) of each element.
pub fn dom_selector(element: Element) -> &'static str {
    match element {
        Element::ReviewInput => INPUT_REVIEW,
        Element::SubmitButton => BUTTON_ANALYZE,
        Element::CharCount => LABEL_CHAR_COUNT,
        Element::ResultSection => SECTION_RESULTS,
        Element::ExampleButtons => PANEL_EXAMPLES,
        Element::Form => "form",
        Element::Document => "document",
    }
}
