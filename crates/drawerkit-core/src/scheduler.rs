//! Timer and frame-callback scheduling.
//!
//! All suspension in drawerkit goes through a host-provided [`Scheduler`]:
//! "clear the transition after its duration", "reset the drag flag next
//! frame", "detach the content once the close animation has played". Every
//! registration is scoped: dropping (or cancelling) a [`TimerRegistration`]
//! guarantees the callback will not run, so an unmounting drawer can never
//! mutate a detached surface.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use web_time::Instant;

/// Identifier for a scheduled timer or frame callback.
pub type TimerId = u64;

/// Host-provided scheduling backend.
///
/// `schedule` and `request_frame` return `None` when the backend is shutting
/// down and can no longer accept work; callers receive an inactive
/// registration and the callback is silently dropped.
pub trait Scheduler {
    /// Run `callback` once after `delay` has elapsed.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimerId>;

    /// Run `callback` once on the next frame tick.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<TimerId>;

    /// Cancel a previously returned registration. Unknown ids are ignored.
    fn cancel(&self, id: TimerId);
}

/// Cheap cloneable handle over a scheduler backend.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Rc<dyn Scheduler>,
}

impl SchedulerHandle {
    pub fn new(inner: Rc<dyn Scheduler>) -> Self {
        Self { inner }
    }

    /// Schedule a one-shot timer, returning a scoped registration.
    pub fn schedule(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> TimerRegistration {
        match self.inner.schedule(delay, Box::new(callback)) {
            Some(id) => TimerRegistration::new(self.inner.clone(), id),
            None => TimerRegistration::inactive(self.inner.clone()),
        }
    }

    /// Schedule a callback for the next frame tick, returning a scoped
    /// registration.
    pub fn request_frame(&self, callback: impl FnOnce() + 'static) -> TimerRegistration {
        match self.inner.request_frame(Box::new(callback)) {
            Some(id) => TimerRegistration::new(self.inner.clone(), id),
            None => TimerRegistration::inactive(self.inner.clone()),
        }
    }
}

impl std::fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerHandle").finish_non_exhaustive()
    }
}

/// Scoped handle to a pending timer or frame callback.
///
/// Cancels on drop; `cancel()` is available when the intent should be
/// explicit at the call site.
pub struct TimerRegistration {
    scheduler: Rc<dyn Scheduler>,
    id: Option<TimerId>,
}

impl TimerRegistration {
    fn new(scheduler: Rc<dyn Scheduler>, id: TimerId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    fn inactive(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            id: None,
        }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl std::fmt::Debug for TimerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("id", &self.id)
            .finish()
    }
}

struct TimerEntry {
    id: TimerId,
    due: Instant,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct LoopState {
    next_id: TimerId,
    timers: Vec<TimerEntry>,
    frames: Vec<(TimerId, Box<dyn FnOnce()>)>,
}

/// Wall-clock scheduler for hosts without timer infrastructure of their own.
///
/// The host pumps it from its event loop: call [`LoopScheduler::run_due`]
/// once per frame and due timers plus all pending frame callbacks fire in
/// order. Uses `web_time::Instant` so the same host code works on wasm.
#[derive(Clone, Default)]
pub struct LoopScheduler {
    state: Rc<RefCell<LoopState>>,
}

impl LoopScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle::new(Rc::new(self.clone()))
    }

    /// Run every timer whose deadline has passed, then drain the frame
    /// queue. Callbacks may schedule new work; work scheduled while running
    /// waits for the next pump.
    pub fn run_due(&self) {
        let now = Instant::now();
        let mut due = Vec::new();
        let frames = {
            let mut state = self.state.borrow_mut();
            let mut index = 0;
            while index < state.timers.len() {
                if state.timers[index].due <= now {
                    due.push(state.timers.remove(index));
                } else {
                    index += 1;
                }
            }
            std::mem::take(&mut state.frames)
        };
        due.sort_by_key(|entry| (entry.due, entry.id));
        for entry in due {
            (entry.callback)();
        }
        for (_, callback) in frames {
            callback();
        }
    }

    /// Number of timers that have not fired yet.
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }
}

impl Scheduler for LoopScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.timers.push(TimerEntry {
            id,
            due: Instant::now() + delay,
            callback,
        });
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

impl std::fmt::Debug for LoopScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopScheduler")
            .field("pending_timers", &self.pending_timers())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
