use super::*;

use std::rc::Rc;

use drawerkit_testing::{TestPage, TestScheduler, TestSurface};

use crate::input::{PointerEvent, PointerEventKind};

fn down(y: f32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Down, 0.0, y)
}

fn moved(y: f32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Move, 0.0, y)
}

fn up(y: f32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Up, 0.0, y)
}

struct Rig {
    scheduler: TestScheduler,
    drawer: TestSurface,
    overlay: TestSurface,
    page: TestPage,
    tracker: DragTracker,
    envelope: DragEnvelope,
}

/// Viewport 800, content 300, drawer resting at its full-open offset 500.
fn rig() -> Rig {
    let scheduler = TestScheduler::new();
    let drawer = TestSurface::new();
    let overlay = TestSurface::new();
    let page = TestPage::new();
    let tracker = DragTracker::new(
        Rc::new(drawer.clone()),
        Rc::new(overlay.clone()),
        Rc::new(page.clone()),
        scheduler.handle(),
    );
    tracker.set_current_translate_y(500.0);
    Rig {
        scheduler,
        drawer,
        overlay,
        page,
        tracker,
        envelope: DragEnvelope {
            viewport_height: 800.0,
            content_height: 300.0,
            open_threshold: 500.0,
        },
    }
}

#[test]
fn press_pins_the_grab_point_under_the_pointer() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(520.0), &rig.envelope);
    assert!(rig.tracker.is_dragging());
    assert!(rig.page.selection_suppressed());

    // Grabbed 20px below the drawer top; that offset is preserved.
    rig.tracker.on_pointer_event(&moved(620.0), &rig.envelope);
    assert_eq!(rig.drawer.translate_y(), Some(600.0));
    assert_eq!(rig.tracker.current_translate_y(), 600.0);
}

#[test]
fn move_without_press_is_ignored() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&moved(620.0), &rig.envelope);
    assert_eq!(rig.drawer.translate_y(), None);
    assert_eq!(rig.tracker.current_translate_y(), 500.0);
}

#[test]
fn second_press_while_dragging_is_ignored() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(520.0), &rig.envelope);
    rig.tracker.on_pointer_event(&down(700.0), &rig.envelope);

    // Still the first session's grab offset.
    rig.tracker.on_pointer_event(&moved(620.0), &rig.envelope);
    assert_eq!(rig.drawer.translate_y(), Some(600.0));
}

#[test]
fn dragging_past_full_open_extent_is_rejected() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(510.0), &rig.envelope);

    // Would show 340px of a 300px-tall content: rejected outright.
    rig.tracker.on_pointer_event(&moved(470.0), &rig.envelope);
    assert_eq!(rig.drawer.translate_y(), None, "no transform write");
    assert_eq!(rig.tracker.current_translate_y(), 500.0);

    // The rejected move also classified no direction.
    let outcome = rig
        .tracker
        .on_pointer_event(&up(470.0), &rig.envelope)
        .expect("drag ended");
    assert_eq!(outcome.direction, DragDirection::None);
    assert_eq!(outcome.release_y, 500.0);
}

#[test]
fn direction_needs_the_deadband() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(520.0), &rig.envelope);
    rig.tracker.on_pointer_event(&moved(530.0), &rig.envelope);

    let outcome = rig
        .tracker
        .on_pointer_event(&up(530.0), &rig.envelope)
        .expect("drag ended");
    assert_eq!(outcome.direction, DragDirection::None);
    assert_eq!(outcome.release_y, 510.0);
}

#[test]
fn direction_is_sticky_across_sub_deadband_reversals() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(520.0), &rig.envelope);
    rig.tracker.on_pointer_event(&moved(560.0), &rig.envelope); // +40: Down
    rig.tracker.on_pointer_event(&moved(528.0), &rig.envelope); // +8: below deadband

    let outcome = rig
        .tracker
        .on_pointer_event(&up(528.0), &rig.envelope)
        .expect("drag ended");
    assert_eq!(outcome.direction, DragDirection::Down);
}

#[test]
fn opposite_move_past_deadband_overwrites_direction() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(520.0), &rig.envelope);
    rig.tracker.on_pointer_event(&moved(560.0), &rig.envelope); // +40: Down
    rig.tracker.on_pointer_event(&moved(500.0), &rig.envelope); // -20: Up

    let outcome = rig
        .tracker
        .on_pointer_event(&up(500.0), &rig.envelope)
        .expect("drag ended");
    assert_eq!(outcome.direction, DragDirection::Up);
}

#[test]
fn overlay_opacity_follows_position_linearly() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(510.0), &rig.envelope);

    // Translate 650 is halfway between the open threshold (500) and the
    // viewport bottom (800).
    rig.tracker.on_pointer_event(&moved(660.0), &rig.envelope);
    let opacity = rig.overlay.opacity().expect("opacity written");
    assert!((opacity - 0.5).abs() < 1e-4, "got {opacity}");

    // Fully dimmed once back at the threshold.
    rig.tracker.on_pointer_event(&moved(510.0), &rig.envelope);
    assert_eq!(rig.overlay.opacity(), Some(1.0));
}

#[test]
fn release_defers_the_started_on_drawer_reset_by_one_frame() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(520.0), &rig.envelope);
    rig.tracker.on_pointer_event(&moved(560.0), &rig.envelope);
    rig.tracker
        .on_pointer_event(&up(560.0), &rig.envelope)
        .expect("drag ended");

    assert!(!rig.tracker.is_dragging());
    assert!(!rig.page.selection_suppressed());
    assert!(
        rig.tracker.started_on_drawer(),
        "flag survives until the next frame"
    );

    rig.scheduler.pump_frame();
    assert!(!rig.tracker.started_on_drawer());
}

#[test]
fn release_without_drag_reports_nothing() {
    let mut rig = rig();
    assert!(rig
        .tracker
        .on_pointer_event(&up(560.0), &rig.envelope)
        .is_none());
}

#[test]
fn shutdown_restores_selection_and_cancels_deferred_work() {
    let mut rig = rig();
    rig.tracker.on_pointer_event(&down(520.0), &rig.envelope);
    assert!(rig.page.selection_suppressed());

    rig.tracker.shutdown();
    assert!(!rig.page.selection_suppressed());
    assert!(!rig.tracker.is_dragging());
    assert_eq!(rig.scheduler.pending_frames(), 0);
}
