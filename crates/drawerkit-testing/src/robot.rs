//! Robot-style harness for end-to-end drawer testing.
//!
//! Wires a [`DrawerController`] to recording fakes and exposes interaction
//! helpers (press, drag, release, clicks, key presses) plus virtual-time
//! control, so tests read like a user session:
//!
//! ```
//! use drawerkit_core::DrawerConfig;
//! use drawerkit_testing::DrawerRobot;
//!
//! let robot = DrawerRobot::new(DrawerConfig::new(), 800.0, 300.0);
//! robot.open();
//! robot.settle();
//! assert_eq!(robot.translate_y(), Some(500.0));
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use drawerkit_animation::TransitionSpec;
use drawerkit_core::DrawerConfig;
use drawerkit_foundation::{Key, PointerEvent, PointerEventKind};
use drawerkit_ui::{DrawerController, DrawerHandles, DrawerPhase};

use crate::scheduler::TestScheduler;
use crate::surface::{TestGeometry, TestPage, TestSurface};

/// Programmatic control over a fully wired drawer instance.
pub struct DrawerRobot {
    pub scheduler: TestScheduler,
    pub drawer: TestSurface,
    pub overlay: TestSurface,
    pub background: TestSurface,
    pub geometry: TestGeometry,
    pub page: TestPage,
    controller: DrawerController,
    close_requests: Rc<Cell<u32>>,
}

impl DrawerRobot {
    /// Build and `start()` a controller against recording fakes.
    ///
    /// The drawer and overlay surfaces follow the controller's mount state,
    /// as a real host's conditional subtree would; the background surface is
    /// the page behind the drawer and is always mounted.
    pub fn new(config: DrawerConfig, viewport_height: f32, content_height: f32) -> Self {
        let scheduler = TestScheduler::new();
        let drawer = TestSurface::new();
        let overlay = TestSurface::new();
        let background = TestSurface::new();
        let geometry = TestGeometry::new(viewport_height, content_height);
        let page = TestPage::new();

        drawer.set_mounted(false);
        overlay.set_mounted(false);

        let close_requests = Rc::new(Cell::new(0));
        let recorded = Rc::clone(&close_requests);
        let controller = DrawerController::new(
            config,
            DrawerHandles {
                drawer: Rc::new(drawer.clone()),
                overlay: Rc::new(overlay.clone()),
                background: Rc::new(background.clone()),
                geometry: Rc::new(geometry.clone()),
                page: Rc::new(page.clone()),
                scheduler: scheduler.handle(),
            },
            move || recorded.set(recorded.get() + 1),
        );

        let mounted_drawer = drawer.clone();
        let mounted_overlay = overlay.clone();
        controller.mounted_cell().watch(move |mounted| {
            mounted_drawer.set_mounted(*mounted);
            mounted_overlay.set_mounted(*mounted);
        });

        controller.start();

        Self {
            scheduler,
            drawer,
            overlay,
            background,
            geometry,
            page,
            controller,
            close_requests,
        }
    }

    pub fn controller(&self) -> &DrawerController {
        &self.controller
    }

    pub fn open(&self) {
        self.controller.open();
    }

    pub fn close(&self) {
        self.controller.close();
    }

    /// Press the pointer at vertical position `y` on the drawer surface.
    pub fn press_at(&self, y: f32) {
        self.controller
            .handle_pointer(&PointerEvent::new(PointerEventKind::Down, 0.0, y));
    }

    pub fn move_to(&self, y: f32) {
        self.controller
            .handle_pointer(&PointerEvent::new(PointerEventKind::Move, 0.0, y));
    }

    pub fn release_at(&self, y: f32) {
        self.controller
            .handle_pointer(&PointerEvent::new(PointerEventKind::Up, 0.0, y));
    }

    /// Press at `from_y`, move to `to_y` in smooth steps, release.
    pub fn drag(&self, from_y: f32, to_y: f32) {
        self.press_at(from_y);
        let steps = 10;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(from_y + (to_y - from_y) * t);
        }
        self.release_at(to_y);
    }

    /// Press and release with no movement in between.
    pub fn tap_at(&self, y: f32) {
        self.press_at(y);
        self.release_at(y);
    }

    /// Report a click on the overlay. `target_on_drawer` mirrors whether the
    /// click target sat inside the drawer surface.
    pub fn overlay_click(&self, target_on_drawer: bool) {
        self.controller.handle_overlay_click(target_on_drawer);
    }

    pub fn key(&self, key: Key) {
        self.controller.handle_key(key);
    }

    /// Advance virtual time.
    pub fn advance(&self, duration: Duration) {
        self.scheduler.advance(duration);
    }

    /// Run queued frame callbacks (one frame tick).
    pub fn pump_frame(&self) {
        self.scheduler.pump_frame();
    }

    /// Wait out the default transition and a frame tick.
    pub fn settle(&self) {
        self.advance(TransitionSpec::default().duration);
        self.pump_frame();
    }

    pub fn phase(&self) -> DrawerPhase {
        self.controller.phase()
    }

    pub fn mounted(&self) -> bool {
        self.controller.is_content_mounted()
    }

    /// Drawer surface position as last written, `None` before any write.
    pub fn translate_y(&self) -> Option<f32> {
        self.drawer.translate_y()
    }

    pub fn overlay_opacity(&self) -> Option<f32> {
        self.overlay.opacity()
    }

    /// How many times the close callback has been invoked.
    pub fn close_requests(&self) -> u32 {
        self.close_requests.get()
    }
}

impl std::fmt::Debug for DrawerRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerRobot")
            .field("phase", &self.phase())
            .field("mounted", &self.mounted())
            .field("translate_y", &self.translate_y())
            .finish_non_exhaustive()
    }
}
