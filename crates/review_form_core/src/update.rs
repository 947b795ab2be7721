use crate::state::DismissCause;
use crate::{Effect, FormState, Msg, NotificationKind, Shortcut, TimerTask, EXAMPLE_REVIEWS};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitAttempted => {
            if state.is_busy() {
                // A request is already in flight; don't dispatch a second one.
                return (state, vec![Effect::PreventDefault]);
            }
            let (accepted, rejection) = gate_submission(&mut state);
            if accepted {
                Vec::new()
            } else {
                let mut effects = Vec::with_capacity(rejection.len() + 1);
                effects.push(Effect::PreventDefault);
                effects.extend(rejection);
                effects
            }
        }
        Msg::KeyPressed {
            key,
            input_focused,
            submit_wired,
        } => {
            if !input_focused {
                return (state, Vec::new());
            }
            match key.shortcut() {
                Some(Shortcut::Submit) => {
                    let mut effects = vec![Effect::PreventDefault];
                    // Activating a disabled button, or one outside a form, submits nothing.
                    if submit_wired && state.submit_enabled() {
                        let (accepted, rejection) = gate_submission(&mut state);
                        if accepted {
                            effects.push(Effect::SubmitForm);
                        } else {
                            effects.extend(rejection);
                        }
                    }
                    effects
                }
                Some(Shortcut::Clear) => {
                    state.set_input(String::new());
                    let mut effects = vec![Effect::ReplaceInput {
                        text: String::new(),
                    }];
                    let message = state.config().messages.input_cleared.clone();
                    effects.extend(state.show_notification(message, NotificationKind::Info));
                    effects
                }
                None => Vec::new(),
            }
        }
        Msg::Notify { message, kind } => state.show_notification(message, kind),
        Msg::DismissClicked(id) => state.dismiss_notification(id, DismissCause::User),
        Msg::TimerFired(TimerTask::AutoDismiss(id)) => {
            state.dismiss_notification(id, DismissCause::Timeout)
        }
        Msg::TimerFired(TimerTask::Detach(id)) => {
            state.detach_notification(id);
            Vec::new()
        }
        Msg::ExampleChosen(index) => match EXAMPLE_REVIEWS.get(index) {
            Some(example) => {
                state.set_input((*example).to_string());
                vec![Effect::ReplaceInput {
                    text: (*example).to_string(),
                }]
            }
            None => Vec::new(),
        },
        Msg::SubmissionFinished => {
            if state.is_busy() {
                state.set_busy(false);
                vec![Effect::ScrollToResults]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}

/// Validates the review. On success enters the busy state and returns `true`;
/// otherwise returns the effects that report the rejection.
fn gate_submission(state: &mut FormState) -> (bool, Vec<Effect>) {
    let trimmed_len = state.trimmed_len();
    if trimmed_len == 0 {
        let message = state.config().messages.empty_review.clone();
        let mut effects = state.show_notification(message, NotificationKind::Error);
        effects.push(Effect::FocusInput);
        return (false, effects);
    }
    if trimmed_len < state.config().min_review_chars {
        let message = state.config().messages.short_review.clone();
        return (false, state.show_notification(message, NotificationKind::Warning));
    }
    state.set_busy(true);
    (true, Vec::new())
}
