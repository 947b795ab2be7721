use form_logging::{form_debug, form_info};
use review_form_core::Effect;

use super::ui::constants::{dom_selector, STYLE_NOTIFICATIONS};
use super::ui::styles::NOTIFICATION_CSS;
use super::{FormView, Scheduler, ViewCommand};

/// Executes core effects against the page and the scheduler.
pub(crate) struct EffectRunner<'a, V, S> {
    view: &'a mut V,
    scheduler: &'a mut S,
}

impl<'a, V: FormView, S: Scheduler> EffectRunner<'a, V, S> {
    pub(crate) fn new(view: &'a mut V, scheduler: &'a mut S) -> Self {
        Self { view, scheduler }
    }

    /// Runs all effects in order. Returns whether the current event's default
    /// action must be prevented.
    pub(crate) fn run(&mut self, effects: Vec<Effect>) -> bool {
        let mut default_prevented = false;
        for effect in effects {
            match effect {
                Effect::PreventDefault => default_prevented = true,
                Effect::FocusInput => self.apply(ViewCommand::FocusInput),
                Effect::ReplaceInput { text } => self.apply(ViewCommand::SetInputValue { text }),
                Effect::SubmitForm => {
                    form_info!("Submitting review for analysis");
                    self.apply(ViewCommand::SubmitForm);
                }
                Effect::InjectNotificationStyles => {
                    if self.view.has_style_marker(STYLE_NOTIFICATIONS) {
                        form_debug!("Notification styles already present");
                    } else {
                        self.apply(ViewCommand::InjectStyles {
                            marker: STYLE_NOTIFICATIONS,
                            css: NOTIFICATION_CSS,
                        });
                    }
                }
                Effect::ScheduleTimer { timer, delay, task } => {
                    form_debug!("Schedule timer {} in {:?}: {:?}", timer, delay, task);
                    self.scheduler.schedule(timer, delay, task);
                }
                Effect::CancelTimer { timer } => {
                    form_debug!("Cancel timer {}", timer);
                    self.scheduler.cancel(timer);
                }
                Effect::ScrollToResults => self.apply(ViewCommand::ScrollResultsIntoView),
            }
        }
        default_prevented
    }

    /// Applies a command unless its target element is missing from the page.
    pub(crate) fn apply(&mut self, command: ViewCommand) {
        apply_to_view(&mut *self.view, command);
    }
}

pub(crate) fn apply_to_view<V: FormView>(view: &mut V, command: ViewCommand) {
    let target = command.target();
    if view.has_element(target) {
        view.apply(command);
    } else {
        form_debug!("Skipping {:?}: {} not on page", command, dom_selector(target));
    }
}
