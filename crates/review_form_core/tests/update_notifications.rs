use std::time::Duration;

use pretty_assertions::assert_eq;
use review_form_core::{
    update, Effect, FormState, Msg, NotificationKind, NotificationPhase, TimerTask,
};

fn notify(state: FormState, message: &str, kind: NotificationKind) -> (FormState, Vec<Effect>) {
    update(
        state,
        Msg::Notify {
            message: message.to_string(),
            kind,
        },
    )
}

#[test]
fn first_notification_injects_styles_and_schedules_auto_dismiss() {
    let (state, effects) = notify(FormState::new(), "hello", NotificationKind::Info);

    assert_eq!(
        effects,
        vec![
            Effect::InjectNotificationStyles,
            Effect::ScheduleTimer {
                timer: 1,
                delay: Duration::from_millis(5000),
                task: TimerTask::AutoDismiss(1),
            },
        ]
    );
    let shown = state.view().notification.expect("shown");
    assert_eq!(shown.message, "hello");
    assert_eq!(shown.phase, NotificationPhase::Visible);
}

#[test]
fn new_notification_replaces_previous_and_cancels_its_timer() {
    let (state, _) = notify(FormState::new(), "first", NotificationKind::Info);
    let (state, effects) = notify(state, "second", NotificationKind::Warning);

    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer { timer: 1 },
            Effect::ScheduleTimer {
                timer: 2,
                delay: Duration::from_millis(5000),
                task: TimerTask::AutoDismiss(2),
            },
        ]
    );
    let shown = state.view().notification.expect("shown");
    assert_eq!(shown.id, 2);
    assert_eq!(shown.message, "second");
    assert_eq!(shown.kind, NotificationKind::Warning);
}

#[test]
fn styles_are_injected_once() {
    let mut state = FormState::new();
    let mut injections = 0;
    for i in 0..5 {
        let (next, effects) = notify(state, &format!("n{i}"), NotificationKind::Error);
        injections += effects
            .iter()
            .filter(|e| **e == Effect::InjectNotificationStyles)
            .count();
        state = next;
    }
    assert_eq!(injections, 1);
}

#[test]
fn auto_dismiss_runs_exit_animation_then_detaches() {
    let (state, _) = notify(FormState::new(), "bye", NotificationKind::Info);

    let (state, effects) = update(state, Msg::TimerFired(TimerTask::AutoDismiss(1)));
    assert_eq!(
        effects,
        vec![Effect::ScheduleTimer {
            timer: 2,
            delay: Duration::from_millis(300),
            task: TimerTask::Detach(1),
        }]
    );
    assert_eq!(
        state.view().notification.map(|n| n.phase),
        Some(NotificationPhase::Exiting)
    );

    let (state, effects) = update(state, Msg::TimerFired(TimerTask::Detach(1)));
    assert!(effects.is_empty());
    assert!(state.view().notification.is_none());
}

#[test]
fn manual_dismiss_cancels_auto_dismiss() {
    let (state, _) = notify(FormState::new(), "x", NotificationKind::Info);
    let (state, effects) = update(state, Msg::DismissClicked(1));

    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer { timer: 1 },
            Effect::ScheduleTimer {
                timer: 2,
                delay: Duration::from_millis(300),
                task: TimerTask::Detach(1),
            },
        ]
    );

    // Clicking again during the exit animation changes nothing.
    let (state, effects) = update(state, Msg::DismissClicked(1));
    assert!(effects.is_empty());

    // A late auto-dismiss is ignored too.
    let (state, effects) = update(state, Msg::TimerFired(TimerTask::AutoDismiss(1)));
    assert!(effects.is_empty());
    assert_eq!(
        state.view().notification.map(|n| n.phase),
        Some(NotificationPhase::Exiting)
    );
}

#[test]
fn stale_timers_do_not_touch_newer_notification() {
    let (state, _) = notify(FormState::new(), "old", NotificationKind::Info);
    let (state, _) = update(state, Msg::DismissClicked(1));
    let (state, _) = notify(state, "new", NotificationKind::Error);

    let (state, effects) = update(state, Msg::TimerFired(TimerTask::AutoDismiss(1)));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::TimerFired(TimerTask::Detach(1)));
    assert!(effects.is_empty());

    let shown = state.view().notification.expect("newer notification kept");
    assert_eq!(shown.id, 2);
    assert_eq!(shown.phase, NotificationPhase::Visible);
}

#[test]
fn detach_of_unknown_notification_is_noop() {
    let mut state = FormState::new();
    let (mut next, effects) = update(state.clone(), Msg::TimerFired(TimerTask::Detach(42)));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, state);
    assert!(!state.consume_dirty());
}

#[test]
fn kinds_map_to_page_colours() {
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
    assert_eq!(NotificationKind::Info.background_var(), "--primary");
    assert_eq!(NotificationKind::Warning.background_var(), "--neutral");
    assert_eq!(NotificationKind::Error.background_var(), "--negative");
    assert_eq!(NotificationKind::Error.css_class(), "error");
}
