/// Delayed continuations — the explicit replacement for engine
/// coroutine waits. The host drives `tick` from its game loop; due
/// actions come back in the order they were scheduled.

/// Cancellation handle for a scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// What to do when a delay elapses.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduledAction {
    StartStory,
    AdvanceSequence,
    LoadScene(String),
}

struct PendingTask {
    handle: TaskHandle,
    remaining: f32,
    action: ScheduledAction,
}

/// Single-writer timer queue. No threads; time only moves when the
/// host calls `tick`.
pub struct Scheduler {
    next_handle: u64,
    pending: Vec<PendingTask>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `action` to fire once `delay` time-units have ticked by.
    /// A zero or negative delay fires on the next `tick`.
    pub fn schedule(&mut self, delay: f32, action: ScheduledAction) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        log::debug!("scheduled {action:?} in {delay} time-units");
        self.pending.push(PendingTask {
            handle,
            remaining: delay,
            action,
        });
        handle
    }

    /// Cancel a pending action. Returns false if it already fired or
    /// was cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.handle != handle);
        self.pending.len() != before
    }

    /// Advance time and drain every action whose delay has elapsed,
    /// preserving schedule order.
    pub fn tick(&mut self, dt: f32) -> Vec<ScheduledAction> {
        let mut due = Vec::new();
        let mut keep = Vec::new();
        for mut task in self.pending.drain(..) {
            task.remaining -= dt;
            if task.remaining <= 0.0 {
                due.push(task.action);
            } else {
                keep.push(task);
            }
        }
        self.pending = keep;
        due
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
