use crate::view_model::{FormViewModel, NotificationView, Opacity, SubmitLabel};
use crate::{
    count_tier, input_height, Effect, FormConfig, Notification, NotificationId, NotificationKind,
    NotificationPhase, TimerId, TimerTask,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    config: FormConfig,
    input: String,
    busy: bool,
    notification: Option<Notification>,
    styles_injected: bool,
    next_notification_id: NotificationId,
    next_timer_id: TimerId,
    dirty: bool,
}

/// What started a notification's exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DismissCause {
    User,
    Timeout,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Length of the input once surrounding whitespace is removed, in UTF-16
    /// code units like the page's own `value.length`.
    pub fn trimmed_len(&self) -> usize {
        self.input.trim().encode_utf16().count()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn submit_enabled(&self) -> bool {
        self.trimmed_len() > 0 && !self.busy
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn view(&self) -> FormViewModel {
        let char_count = self.input.encode_utf16().count();
        let has_text = self.trimmed_len() > 0;
        FormViewModel {
            char_count,
            char_count_text: format!("{char_count} characters"),
            count_tier: count_tier(char_count, &self.config.count_tiers),
            input_height_px: input_height(
                &self.input,
                &self.config.layout,
                self.config.max_input_height_px,
            ),
            submit_enabled: self.submit_enabled(),
            submit_opacity: if has_text {
                Opacity::Full
            } else {
                Opacity::Dimmed
            },
            submit_label: if self.busy {
                SubmitLabel::Busy
            } else {
                SubmitLabel::Idle
            },
            results_loading: self.busy,
            notification: self.notification.as_ref().map(|n| NotificationView {
                id: n.id,
                message: n.message.clone(),
                kind: n.kind,
                phase: n.phase,
            }),
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        if self.busy != busy {
            self.busy = busy;
            self.mark_dirty();
        }
    }

    fn allocate_timer(&mut self) -> TimerId {
        self.next_timer_id += 1;
        self.next_timer_id
    }

    /// Replaces the current notification, if any, with a fresh visible one.
    pub(crate) fn show_notification(
        &mut self,
        message: String,
        kind: NotificationKind,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(timer) = self
            .notification
            .take()
            .and_then(|previous| previous.pending_timer)
        {
            effects.push(Effect::CancelTimer { timer });
        }
        if !self.styles_injected {
            self.styles_injected = true;
            effects.push(Effect::InjectNotificationStyles);
        }

        self.next_notification_id += 1;
        let id = self.next_notification_id;
        let timer = self.allocate_timer();
        self.notification = Some(Notification {
            id,
            message,
            kind,
            phase: NotificationPhase::Visible,
            pending_timer: Some(timer),
        });
        effects.push(Effect::ScheduleTimer {
            timer,
            delay: self.config.notification_timeout(),
            task: TimerTask::AutoDismiss(id),
        });
        self.mark_dirty();
        effects
    }

    /// Starts the exit animation. No-op unless `id` is the visible notification.
    pub(crate) fn dismiss_notification(
        &mut self,
        id: NotificationId,
        cause: DismissCause,
    ) -> Vec<Effect> {
        let pending = match self.notification.as_ref() {
            Some(n) if n.id == id && n.phase == NotificationPhase::Visible => n.pending_timer,
            _ => return Vec::new(),
        };

        let mut effects = Vec::with_capacity(2);
        if cause == DismissCause::User {
            if let Some(timer) = pending {
                effects.push(Effect::CancelTimer { timer });
            }
        }
        let timer = self.allocate_timer();
        if let Some(current) = self.notification.as_mut() {
            current.phase = NotificationPhase::Exiting;
            current.pending_timer = Some(timer);
        }
        effects.push(Effect::ScheduleTimer {
            timer,
            delay: self.config.exit_animation(),
            task: TimerTask::Detach(id),
        });
        self.mark_dirty();
        effects
    }

    /// Removes an exiting notification. Returns false when it is already gone.
    pub(crate) fn detach_notification(&mut self, id: NotificationId) -> bool {
        match self.notification.as_ref() {
            Some(n) if n.id == id && n.phase == NotificationPhase::Exiting => {
                self.notification = None;
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }
}
