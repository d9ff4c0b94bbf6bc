//! Frame-driven one-shot timers with explicit cancellation.
//!
//! Tasks are due at an absolute time on the caller's clock and only fire
//! when the owner calls [`Scheduler::drain_due`]. A [`TimerSlot`] holds at
//! most one live handle: arming it again cancels whatever it held before.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Clone, Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    due_at: f64,
    task: T,
}

#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    tasks: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_at: f64, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(Scheduled {
            handle,
            due_at,
            task,
        });
        handle
    }

    /// Returns false when the handle already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Remove and return every task due at or before `now`, earliest first.
    /// Ties keep scheduling order.
    pub fn drain_due(&mut self, now: f64) -> SmallVec<[(TaskHandle, T); 4]> {
        let mut due: SmallVec<[Scheduled<T>; 4]> = SmallVec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due_at <= now {
                due.push(self.tasks.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| {
            a.due_at
                .total_cmp(&b.due_at)
                .then(a.handle.0.cmp(&b.handle.0))
        });
        due.into_iter().map(|s| (s.handle, s.task)).collect()
    }
}

/// Owner-side holder for one outstanding timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerSlot(Option<TaskHandle>);

impl TimerSlot {
    pub fn arm<T>(&mut self, scheduler: &mut Scheduler<T>, due_at: f64, task: T) -> TaskHandle {
        self.disarm(scheduler);
        let handle = scheduler.schedule(due_at, task);
        self.0 = Some(handle);
        handle
    }

    pub fn disarm<T>(&mut self, scheduler: &mut Scheduler<T>) -> bool {
        match self.0.take() {
            Some(handle) => scheduler.cancel(handle),
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    /// Forget `handle` once it has fired. Returns whether it was ours.
    pub fn release(&mut self, handle: TaskHandle) -> bool {
        if self.0 == Some(handle) {
            self.0 = None;
            true
        } else {
            false
        }
    }
}
