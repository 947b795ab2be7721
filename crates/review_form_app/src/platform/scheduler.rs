use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use review_form_core::{TimerId, TimerTask};

/// Deferred task runner. The controller schedules by id and later drains the
/// tasks whose deadline has passed.
pub trait Scheduler {
    fn schedule(&mut self, timer: TimerId, delay: Duration, task: TimerTask);

    /// Cancelling an unknown or already fired timer is a no-op.
    fn cancel(&mut self, timer: TimerId);

    /// Removes and returns due tasks, earliest deadline first.
    fn take_due(&mut self) -> Vec<TimerTask>;
}

/// Pending timers keyed by deadline (offset from a fixed origin).
#[derive(Debug, Default)]
struct TimerQueue {
    by_deadline: BTreeMap<(Duration, TimerId), TimerTask>,
    deadlines: HashMap<TimerId, Duration>,
}

impl TimerQueue {
    fn insert(&mut self, timer: TimerId, deadline: Duration, task: TimerTask) {
        self.remove(timer);
        self.by_deadline.insert((deadline, timer), task);
        self.deadlines.insert(timer, deadline);
    }

    fn remove(&mut self, timer: TimerId) {
        if let Some(deadline) = self.deadlines.remove(&timer) {
            self.by_deadline.remove(&(deadline, timer));
        }
    }

    fn drain_until(&mut self, now: Duration) -> Vec<TimerTask> {
        let mut due = Vec::new();
        while let Some(entry) = self.by_deadline.first_entry() {
            let (deadline, timer) = *entry.key();
            if deadline > now {
                break;
            }
            due.push(entry.remove());
            self.deadlines.remove(&timer);
        }
        due
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.by_deadline.keys().next().map(|(deadline, _)| *deadline)
    }

    fn len(&self) -> usize {
        self.by_deadline.len()
    }
}

/// Virtual clock for deterministic tests; time only moves on `advance`.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    queue: TimerQueue,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, timer: TimerId, delay: Duration, task: TimerTask) {
        self.queue.insert(timer, self.now + delay, task);
    }

    fn cancel(&mut self, timer: TimerId) {
        self.queue.remove(timer);
    }

    fn take_due(&mut self) -> Vec<TimerTask> {
        self.queue.drain_until(self.now)
    }
}

/// Wall-clock scheduler, polled by the host's event loop.
#[derive(Debug)]
pub struct ClockScheduler {
    origin: Instant,
    queue: TimerQueue,
}

impl Default for ClockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockScheduler {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: TimerQueue::default(),
        }
    }

    /// Time until the earliest pending deadline, zero if already due.
    pub fn time_until_next(&self) -> Option<Duration> {
        let elapsed = self.origin.elapsed();
        self.queue
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(elapsed))
    }
}

impl Scheduler for ClockScheduler {
    fn schedule(&mut self, timer: TimerId, delay: Duration, task: TimerTask) {
        let deadline = self.origin.elapsed() + delay;
        self.queue.insert(timer, deadline, task);
    }

    fn cancel(&mut self, timer: TimerId) {
        self.queue.remove(timer);
    }

    fn take_due(&mut self) -> Vec<TimerTask> {
        self.queue.drain_until(self.origin.elapsed())
    }
}
