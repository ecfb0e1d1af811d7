//! start/stop lifecycle and geometry changes.

use std::time::Duration;

use drawerkit_core::DrawerConfig;
use drawerkit_testing::DrawerRobot;
use drawerkit_ui::DrawerPhase;

#[test]
fn stop_cancels_all_timers_and_restores_page_flags() {
    let robot = DrawerRobot::new(DrawerConfig::new(), 800.0, 300.0);
    robot.open();
    assert!(robot.scheduler.pending_timers() > 0, "clear timers in flight");

    // Leave a drag mid-flight so the selection flag is held.
    robot.press_at(510.0);
    assert!(robot.page.selection_suppressed());

    robot.controller().stop();

    assert_eq!(robot.scheduler.pending_timers(), 0);
    assert_eq!(robot.scheduler.pending_frames(), 0);
    assert!(!robot.page.scroll_locked());
    assert!(!robot.page.selection_suppressed());
}

#[test]
fn stopped_controller_ignores_events() {
    let robot = DrawerRobot::new(DrawerConfig::new(), 800.0, 300.0);
    robot.controller().stop();

    robot.open();
    assert_eq!(robot.phase(), DrawerPhase::Closed);
    assert!(!robot.mounted());
}

#[test]
fn start_and_stop_are_idempotent() {
    let robot = DrawerRobot::new(DrawerConfig::new(), 800.0, 300.0);
    robot.controller().start();
    robot.controller().stop();
    robot.controller().stop();

    robot.controller().start();
    robot.open();
    assert_eq!(robot.phase(), DrawerPhase::OpenFull);
}

#[test]
fn viewport_resize_resettles_an_open_drawer() {
    let robot = DrawerRobot::new(DrawerConfig::new(), 800.0, 300.0);
    robot.open();
    robot.settle();
    assert_eq!(robot.translate_y(), Some(500.0));

    robot.geometry.set_viewport_height(600.0);
    robot.controller().viewport_resized();

    assert_eq!(robot.translate_y(), Some(300.0));
    assert_eq!(robot.phase(), DrawerPhase::OpenFull);
}

#[test]
fn content_resize_resettles_an_open_drawer() {
    let robot = DrawerRobot::new(DrawerConfig::new(), 800.0, 300.0);
    robot.open();
    robot.settle();

    robot.geometry.set_content_height(400.0);
    robot.controller().content_resized();

    assert_eq!(robot.translate_y(), Some(400.0));
}

#[test]
fn resize_while_closed_parks_at_the_new_bottom() {
    let robot = DrawerRobot::new(DrawerConfig::new(), 800.0, 300.0);
    robot.open();
    robot.settle();
    robot.close();
    robot.advance(Duration::from_millis(300));
    assert!(!robot.mounted());

    robot.geometry.set_viewport_height(600.0);
    robot.controller().viewport_resized();

    assert_eq!(robot.controller().translate_y(), 600.0);
    assert_eq!(robot.phase(), DrawerPhase::Closed);
}

#[test]
fn resting_phase_tracks_the_current_offset() {
    let robot = DrawerRobot::new(DrawerConfig::new(), 800.0, 300.0);
    assert_eq!(robot.controller().resting_phase(), Some(DrawerPhase::Closed));

    robot.open();
    robot.settle();
    assert_eq!(robot.controller().resting_phase(), Some(DrawerPhase::OpenFull));

    // Mid-drag positions rest nowhere.
    robot.press_at(510.0);
    robot.move_to(650.0);
    assert_eq!(robot.controller().resting_phase(), None);
}
