//! Manual-clock scheduler for deterministic tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use drawerkit_core::{Scheduler, SchedulerHandle, TimerId};

struct TimerEntry {
    id: TimerId,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerState {
    now: Duration,
    next_id: TimerId,
    timers: Vec<TimerEntry>,
    frames: Vec<(TimerId, Box<dyn FnOnce()>)>,
}

/// Virtual-time [`Scheduler`] backend.
///
/// Timers fire only when the test advances the clock with
/// [`TestScheduler::advance`]; frame callbacks fire on
/// [`TestScheduler::pump_frame`]. Callbacks run outside the internal borrow
/// so they are free to schedule or cancel further work.
#[derive(Clone, Default)]
pub struct TestScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl TestScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle::new(Rc::new(self.clone()))
    }

    /// Advance virtual time, running every timer that becomes due, in due
    /// order. Timers scheduled by a running callback also fire if their
    /// deadline falls inside the advanced window.
    pub fn advance(&self, delta: Duration) {
        let target = self.state.borrow().now + delta;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due_index = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(index, _)| index);
                match due_index {
                    Some(index) => {
                        let entry = state.timers.remove(index);
                        state.now = entry.due.max(state.now);
                        Some(entry.callback)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }

    /// Run all currently queued frame callbacks. Callbacks queued while
    /// pumping wait for the next pump, mirroring a real frame tick.
    pub fn pump_frame(&self) {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        for (_, callback) in frames {
            callback();
        }
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }
}

impl Scheduler for TestScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.timers.push(TimerEntry { id, due, callback });
        Some(id)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.frames.push((id, callback));
        Some(id)
    }

    fn cancel(&self, id: TimerId) {
        let mut state = self.state.borrow_mut();
        state.timers.retain(|entry| entry.id != id);
        state.frames.retain(|(frame_id, _)| *frame_id != id);
    }
}

impl std::fmt::Debug for TestScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestScheduler")
            .field("now", &self.now())
            .field("pending_timers", &self.pending_timers())
            .field("pending_frames", &self.pending_frames())
            .finish()
    }
}
