use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use review_form_core::{
    update, Effect, FormState, Msg, NotificationKind, SubmitLabel, TimerTask,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(form_logging::initialize_for_tests);
}

fn submit(state: FormState, input: &str) -> (FormState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitAttempted)
}

#[test]
fn empty_review_is_rejected_with_error() {
    init_logging();
    let (state, effects) = submit(FormState::new(), "");

    assert_eq!(
        effects,
        vec![
            Effect::PreventDefault,
            Effect::InjectNotificationStyles,
            Effect::ScheduleTimer {
                timer: 1,
                delay: Duration::from_millis(5000),
                task: TimerTask::AutoDismiss(1),
            },
            Effect::FocusInput,
        ]
    );
    let view = state.view();
    let notification = view.notification.expect("notification shown");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Please enter a movie review to analyze.");
    assert!(!state.is_busy());
    assert!(!view.results_loading);
}

#[test]
fn whitespace_review_counts_as_empty() {
    init_logging();
    let (state, effects) = submit(FormState::new(), "   \n  ");

    assert_eq!(effects.first(), Some(&Effect::PreventDefault));
    assert!(effects.contains(&Effect::FocusInput));
    assert_eq!(
        state.notification().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
}

#[test]
fn short_review_is_rejected_with_warning() {
    init_logging();
    let (state, effects) = submit(FormState::new(), "  Meh film ");

    assert_eq!(effects.first(), Some(&Effect::PreventDefault));
    assert!(!effects.contains(&Effect::FocusInput));
    let notification = state.notification().expect("notification shown");
    assert_eq!(notification.kind, NotificationKind::Warning);
    assert_eq!(
        notification.message,
        "Please enter a longer review for better analysis."
    );
    assert!(!state.is_busy());
}

#[test]
fn length_check_uses_trimmed_text() {
    init_logging();
    // Ten characters once the padding is gone.
    let (state, effects) = submit(FormState::new(), "   too short?   ");

    assert!(effects.is_empty());
    assert!(state.is_busy());
}

#[test]
fn emoji_review_meets_minimum_in_code_units() {
    init_logging();
    // Five clapperboards are ten UTF-16 code units.
    let (state, effects) = submit(FormState::new(), " 🎬🎬🎬🎬🎬 ");
    assert!(effects.is_empty());
    assert!(state.is_busy());

    let (state, effects) = submit(FormState::new(), "🎬🎬🎬🎬");
    assert_eq!(effects.first(), Some(&Effect::PreventDefault));
    assert_eq!(
        state.notification().map(|n| n.kind),
        Some(NotificationKind::Warning)
    );
}

#[test]
fn ten_char_review_proceeds_and_enters_busy_state() {
    init_logging();
    let (mut state, effects) = submit(FormState::new(), "Good movie");

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, SubmitLabel::Busy);
    assert_eq!(view.submit_label.text(), "Analyzing...");
    assert!(view.results_loading);
    assert!(view.notification.is_none());
    assert!(state.consume_dirty());
}

#[test]
fn second_submit_while_busy_is_cancelled() {
    init_logging();
    let (state, _) = submit(FormState::new(), "Good movie");
    let (state, effects) = update(state, Msg::SubmitAttempted);

    assert_eq!(effects, vec![Effect::PreventDefault]);
    assert!(state.is_busy());
    assert!(state.notification().is_none());
}

#[test]
fn submission_finished_clears_busy_state() {
    init_logging();
    let (state, _) = submit(FormState::new(), "A wonderful, moving film.");
    let (state, effects) = update(state, Msg::SubmissionFinished);

    assert_eq!(effects, vec![Effect::ScrollToResults]);
    let view = state.view();
    assert!(!state.is_busy());
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label, SubmitLabel::Idle);
    assert_eq!(view.submit_label.icon(), "fa-search");
    assert!(!view.results_loading);
}

#[test]
fn typing_while_busy_keeps_submit_disabled() {
    init_logging();
    let (state, _) = submit(FormState::new(), "Good movie");
    let (state, _) = update(state, Msg::InputChanged("Good movie, really".to_string()));

    assert!(!state.view().submit_enabled);
    assert!(state.view().results_loading);
}
