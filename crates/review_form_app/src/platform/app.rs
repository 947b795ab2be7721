use std::collections::HashSet;

use form_logging::{form_debug, form_info};
use review_form_core::{update, FormConfig, FormState, Msg, NotificationKind};

use super::effects::{apply_to_view, EffectRunner};
use super::ui;
use super::{Element, EventKind, EventOutcome, EventSource, FormEvent, FormView, Scheduler};

/// Owns the form state for one page and routes page events through the pure
/// core, applying the resulting effects and re-rendering when state changes.
pub struct FormController<V, S> {
    state: FormState,
    view: V,
    scheduler: S,
    subscriptions: HashSet<(Element, EventKind)>,
    event_seq: u64,
}

impl<V, S> FormController<V, S>
where
    V: FormView + EventSource,
    S: Scheduler,
{
    /// Registers listeners for the elements present on the page and renders
    /// the initial state.
    pub fn attach(mut view: V, scheduler: S, config: FormConfig) -> Self {
        let mut subscriptions = HashSet::new();
        let mut listen = |view: &mut V, target: Element, kind: EventKind| {
            view.subscribe(target, kind);
            subscriptions.insert((target, kind));
        };

        if view.has_element(Element::ReviewInput) {
            listen(&mut view, Element::ReviewInput, EventKind::Input);
        }
        if view.has_element(Element::Form) {
            listen(&mut view, Element::Form, EventKind::Submit);
        }
        if view.has_element(Element::ExampleButtons) {
            listen(&mut view, Element::ExampleButtons, EventKind::Click);
        }
        listen(&mut view, Element::Document, EventKind::KeyDown);
        listen(&mut view, Element::Document, EventKind::Click);

        // Pick up a value the page may have been served with.
        let initial = view.input_value().unwrap_or_default();
        let (mut state, _) = update(FormState::with_config(config), Msg::InputChanged(initial));
        state.consume_dirty();

        let mut controller = Self {
            state,
            view,
            scheduler,
            subscriptions,
            event_seq: 0,
        };
        controller.render();
        form_info!("Movie Sentiment Analyzer initialized");
        controller
    }

    /// Handles one page event. Events nobody subscribed to are ignored.
    pub fn handle_event(&mut self, event: FormEvent) -> EventOutcome {
        if !self.subscriptions.contains(&event.route()) {
            form_debug!("No listener for {:?}", event);
            return EventOutcome::default();
        }
        self.event_seq += 1;
        form_logging::set_event_seq(self.event_seq);

        let msg = match event {
            FormEvent::Input => Msg::InputChanged(self.view.input_value().unwrap_or_default()),
            FormEvent::Submit => {
                let Some(value) = self.view.input_value() else {
                    form_debug!("Review input missing; submitting without validation");
                    return EventOutcome::default();
                };
                if value != self.state.input() {
                    self.dispatch(Msg::InputChanged(value));
                }
                Msg::SubmitAttempted
            }
            FormEvent::KeyDown(key) => Msg::KeyPressed {
                key,
                input_focused: self.view.has_element(Element::ReviewInput)
                    && self.view.input_focused(),
                submit_wired: self.view.has_element(Element::Form)
                    && self.view.has_element(Element::SubmitButton),
            },
            FormEvent::NotificationClosed(id) => Msg::DismissClicked(id),
            FormEvent::ExampleClicked(index) => Msg::ExampleChosen(index),
        };
        self.dispatch(msg)
    }

    /// Shows a notification, replacing any visible one.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.dispatch(Msg::Notify {
            message: message.into(),
            kind,
        });
    }

    /// Leaves the busy state once the analysis response has been rendered
    /// in place. Hosts that reload the page never need this.
    pub fn finish_submission(&mut self) {
        self.dispatch(Msg::SubmissionFinished);
    }

    /// Runs every scheduled task that is due. Returns how many ran.
    pub fn run_due_timers(&mut self) -> usize {
        let mut ran = 0;
        loop {
            let due = self.scheduler.take_due();
            if due.is_empty() {
                return ran;
            }
            for task in due {
                ran += 1;
                self.dispatch(Msg::TimerFired(task));
            }
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn dispatch(&mut self, msg: Msg) -> EventOutcome {
        form_debug!("Dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let default_prevented = EffectRunner::new(&mut self.view, &mut self.scheduler).run(effects);
        if was_dirty {
            self.render();
        }
        EventOutcome { default_prevented }
    }

    fn render(&mut self) {
        for command in ui::render::render(&self.state.view()) {
            apply_to_view(&mut self.view, command);
        }
    }
}
