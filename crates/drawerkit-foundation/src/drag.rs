//! The drag gesture tracker.
//!
//! A two-state machine (`Idle`/`Dragging`) that follows the pointer 1:1
//! while a drag is active and classifies the release direction for the snap
//! resolver. The tracker owns the single [`DragSession`] of its drawer
//! instance; other components only see it through the tracker's own
//! operations.

use std::cell::RefCell;
use std::rc::Rc;

use drawerkit_core::{
    PageEffects, SchedulerHandle, StyleProperty, StyleValue, Surface, TimerRegistration,
};

use crate::gesture_constants::DIRECTION_DEADBAND;
use crate::input::{PointerEvent, PointerEventKind};

/// Net direction of a drag, classified once the pointer has moved past the
/// deadband.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragDirection {
    Up,
    Down,
    /// No qualifying movement: a tap or a sub-deadband wiggle.
    #[default]
    None,
}

/// What a finished drag reports to the snap resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOutcome {
    pub direction: DragDirection,
    /// Drawer position at release.
    pub release_y: f32,
}

/// Geometry the tracker needs while a drag is in flight, supplied per event
/// by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnvelope {
    pub viewport_height: f32,
    pub content_height: f32,
    /// Canonical offset treated as fully dimmed (overlay opacity 1) while
    /// dragging; the offset of the phase the drawer is currently open at.
    pub open_threshold: f32,
}

#[derive(Debug, Default)]
struct DragSession {
    is_dragging: bool,
    /// Last known drawer position. Persists across sessions; the single
    /// source of truth for "where is the drawer right now".
    current_translate_y: f32,
    drag_start_pointer_y: f32,
    pointer_offset_within_drawer: f32,
    direction: DragDirection,
    /// Still true for one frame after release so the synthetic click from
    /// the terminating mouse-up is not taken for an overlay-dismiss click.
    started_on_drawer: bool,
}

/// Pointer-driven drag state machine for one drawer instance.
pub struct DragTracker {
    session: Rc<RefCell<DragSession>>,
    drawer: Rc<dyn Surface>,
    overlay: Rc<dyn Surface>,
    page: Rc<dyn PageEffects>,
    scheduler: SchedulerHandle,
    reset_registration: Option<TimerRegistration>,
}

impl DragTracker {
    pub fn new(
        drawer: Rc<dyn Surface>,
        overlay: Rc<dyn Surface>,
        page: Rc<dyn PageEffects>,
        scheduler: SchedulerHandle,
    ) -> Self {
        Self {
            session: Rc::new(RefCell::new(DragSession::default())),
            drawer,
            overlay,
            page,
            scheduler,
            reset_registration: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.borrow().is_dragging
    }

    pub fn started_on_drawer(&self) -> bool {
        self.session.borrow().started_on_drawer
    }

    pub fn current_translate_y(&self) -> f32 {
        self.session.borrow().current_translate_y
    }

    /// Record a position reached outside of dragging (open/close/snap
    /// animations settle the drawer at canonical offsets).
    pub fn set_current_translate_y(&self, translate_y: f32) {
        self.session.borrow_mut().current_translate_y = translate_y;
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Returns a [`DragOutcome`] when the event ended an active drag.
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        envelope: &DragEnvelope,
    ) -> Option<DragOutcome> {
        match event.kind {
            PointerEventKind::Down => {
                self.on_down(event);
                None
            }
            PointerEventKind::Move => {
                self.on_move(event, envelope);
                None
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_up(),
        }
    }

    fn on_down(&mut self, event: &PointerEvent) {
        let mut session = self.session.borrow_mut();
        // Only one drag session per instance; a second pointer-down while
        // dragging is ignored.
        if session.is_dragging {
            return;
        }
        if let Some(registration) = self.reset_registration.take() {
            registration.cancel();
        }
        session.is_dragging = true;
        session.started_on_drawer = true;
        session.drag_start_pointer_y = event.y;
        session.pointer_offset_within_drawer = event.y - session.current_translate_y;
        session.direction = DragDirection::None;
        log::trace!("drag start at pointer y {}", event.y);
        self.page.set_text_selection_suppressed(true);
    }

    fn on_move(&mut self, event: &PointerEvent, envelope: &DragEnvelope) {
        let mut session = self.session.borrow_mut();
        if !session.is_dragging {
            return;
        }

        // Keep the grabbed point pinned under the pointer.
        let new_translate_y = event.y - session.pointer_offset_within_drawer;

        // The drawer cannot be dragged further open than its full-open
        // content extent; such moves are rejected outright, leaving the
        // transform at the last valid value.
        let visible_height = envelope.viewport_height - new_translate_y;
        if visible_height > envelope.content_height {
            return;
        }

        session.current_translate_y = new_translate_y;
        // Manual 1:1 follow, deliberately bypassing the animation driver.
        self.drawer
            .set_property(StyleProperty::Transform, StyleValue::TranslateY(new_translate_y));

        let displacement = event.y - session.drag_start_pointer_y;
        if displacement.abs() > DIRECTION_DEADBAND {
            session.direction = if displacement < 0.0 {
                DragDirection::Up
            } else {
                DragDirection::Down
            };
        }

        let dim_range = envelope.viewport_height - envelope.open_threshold;
        let opacity = if dim_range <= 0.0 {
            1.0
        } else {
            ((envelope.viewport_height - new_translate_y) / dim_range).clamp(0.0, 1.0)
        };
        self.overlay
            .set_property(StyleProperty::Opacity, StyleValue::Opacity(opacity));

        event.consume();
    }

    fn on_up(&mut self) -> Option<DragOutcome> {
        let outcome = {
            let mut session = self.session.borrow_mut();
            if !session.is_dragging {
                return None;
            }
            session.is_dragging = false;
            let outcome = DragOutcome {
                direction: session.direction,
                release_y: session.current_translate_y,
            };
            session.direction = DragDirection::None;
            outcome
        };
        self.page.set_text_selection_suppressed(false);
        log::trace!(
            "drag end: direction {:?} at y {}",
            outcome.direction,
            outcome.release_y
        );

        // The mouse-up that ends the drag bubbles to the host as a click on
        // the overlay; keep started_on_drawer set until the next frame so
        // that click is not treated as a dismissal.
        let session = Rc::clone(&self.session);
        self.reset_registration = Some(self.scheduler.request_frame(move || {
            session.borrow_mut().started_on_drawer = false;
        }));

        Some(outcome)
    }

    /// Abandon any in-flight session and pending deferred work. Used by the
    /// controller's `stop()`.
    pub fn shutdown(&mut self) {
        if let Some(registration) = self.reset_registration.take() {
            registration.cancel();
        }
        let was_dragging = {
            let mut session = self.session.borrow_mut();
            let was_dragging = session.is_dragging;
            session.is_dragging = false;
            session.direction = DragDirection::None;
            session.started_on_drawer = false;
            was_dragging
        };
        if was_dragging {
            self.page.set_text_selection_suppressed(false);
        }
    }
}

impl std::fmt::Debug for DragTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragTracker")
            .field("session", &self.session.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
