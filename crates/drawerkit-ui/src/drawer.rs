//! The drawer controller.
//!
//! Owns the open/closed intent, routes pointer events through the drag
//! tracker, applies snap decisions, and keeps the drawer, its overlay, and
//! the page background moving together. The controller never inspects
//! pointer data itself; drags reach it only as [`DragOutcome`]s.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use drawerkit_animation::{AnimationDriver, ChannelId, TransitionSpec};
use drawerkit_core::{
    CanonicalOffsets, DrawerConfig, GeometryHost, PageEffects, SchedulerHandle, StyleProperty,
    StyleValue, Surface, TimerRegistration, ValueCell, ViewportMetrics,
};
use drawerkit_foundation::{DragEnvelope, DragOutcome, DragTracker, Key, PointerEvent};

use crate::snap::{phase_at, resolve_snap, SnapDecision};

pub const DRAWER_CHANNEL: ChannelId = ChannelId("drawer");
pub const OVERLAY_CHANNEL: ChannelId = ChannelId("overlay");
pub const BACKGROUND_CHANNEL: ChannelId = ChannelId("background");

// Background inset while the drawer is open.
const INSET_SCALE: f32 = 0.93;
const INSET_TRANSLATE: f32 = 14.0;
const INSET_RADIUS: f32 = 12.0;

/// The controller's orchestration states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerPhase {
    #[default]
    Closed,
    /// Partially open. Only reachable when a peek height is configured.
    OpenPeek,
    OpenFull,
}

/// Everything the host wires into a drawer instance.
pub struct DrawerHandles {
    pub drawer: Rc<dyn Surface>,
    pub overlay: Rc<dyn Surface>,
    pub background: Rc<dyn Surface>,
    pub geometry: Rc<dyn GeometryHost>,
    pub page: Rc<dyn PageEffects>,
    pub scheduler: SchedulerHandle,
}

struct ControllerInner {
    config: DrawerConfig,
    drawer: Rc<dyn Surface>,
    geometry: Rc<dyn GeometryHost>,
    page: Rc<dyn PageEffects>,
    scheduler: SchedulerHandle,
    driver: AnimationDriver,
    tracker: DragTracker,
    phase: ValueCell<DrawerPhase>,
    /// Whether the drawer subtree should exist in the host's render tree.
    /// Stays true for the unmount grace period after a close begins.
    mounted: ValueCell<bool>,
    on_close: Rc<dyn Fn()>,
    transition: TransitionSpec,
    unmount_grace: Duration,
    unmount_timer: Option<TimerRegistration>,
    started: bool,
}

impl ControllerInner {
    fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics::new(
            self.geometry.viewport_height(),
            self.geometry.content_height(),
        )
    }

    fn offsets(&self) -> CanonicalOffsets {
        CanonicalOffsets::resolve(&self.config, self.metrics())
    }

    fn animate_open(&mut self, target_y: f32) {
        let spec = self.transition.clone();
        self.driver.animate(
            DRAWER_CHANNEL,
            &[(StyleProperty::Transform, StyleValue::TranslateY(target_y))],
            &spec.for_properties([StyleProperty::Transform]),
        );
        self.driver.animate(
            OVERLAY_CHANNEL,
            &[(StyleProperty::Opacity, StyleValue::Opacity(1.0))],
            &spec.for_properties([StyleProperty::Opacity]),
        );
        self.driver.animate(
            BACKGROUND_CHANNEL,
            &[
                (
                    StyleProperty::Transform,
                    StyleValue::ScaleAndTranslateY {
                        scale: INSET_SCALE,
                        translate_y: INSET_TRANSLATE,
                    },
                ),
                (StyleProperty::BorderRadius, StyleValue::Radius(INSET_RADIUS)),
            ],
            &spec.for_properties([StyleProperty::Transform, StyleProperty::BorderRadius]),
        );
    }

    fn animate_closed(&mut self, closed_y: f32) {
        let spec = self.transition.clone();
        self.driver.animate(
            DRAWER_CHANNEL,
            &[(StyleProperty::Transform, StyleValue::TranslateY(closed_y))],
            &spec.for_properties([StyleProperty::Transform]),
        );
        self.driver.animate(
            OVERLAY_CHANNEL,
            &[(StyleProperty::Opacity, StyleValue::Opacity(0.0))],
            &spec.for_properties([StyleProperty::Opacity]),
        );
        self.driver.animate(
            BACKGROUND_CHANNEL,
            &[
                (
                    StyleProperty::Transform,
                    StyleValue::ScaleAndTranslateY {
                        scale: 1.0,
                        translate_y: 0.0,
                    },
                ),
                (StyleProperty::BorderRadius, StyleValue::Radius(0.0)),
            ],
            &spec.for_properties([StyleProperty::Transform, StyleProperty::BorderRadius]),
        );
    }
}

/// Orchestrating state machine for one drawer instance.
///
/// Host contract: call [`start`](Self::start) on mount and
/// [`stop`](Self::stop) on unmount (or config change), forward pointer
/// events that begin on the drawer surface to
/// [`handle_pointer`](Self::handle_pointer), key presses to
/// [`handle_key`](Self::handle_key), and clicks anywhere on the overlay to
/// [`handle_overlay_click`](Self::handle_overlay_click). Render the drawer
/// subtree while [`is_content_mounted`](Self::is_content_mounted) is true.
pub struct DrawerController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl DrawerController {
    pub fn new(config: DrawerConfig, handles: DrawerHandles, on_close: impl Fn() + 'static) -> Self {
        let DrawerHandles {
            drawer,
            overlay,
            background,
            geometry,
            page,
            scheduler,
        } = handles;

        let mut driver = AnimationDriver::new(scheduler.clone());
        driver.register(DRAWER_CHANNEL, Rc::clone(&drawer));
        driver.register(OVERLAY_CHANNEL, Rc::clone(&overlay));
        driver.register(BACKGROUND_CHANNEL, background);

        let tracker = DragTracker::new(
            Rc::clone(&drawer),
            overlay,
            Rc::clone(&page),
            scheduler.clone(),
        );

        let transition = TransitionSpec::default();
        let unmount_grace = transition.duration;
        Self {
            inner: Rc::new(RefCell::new(ControllerInner {
                config,
                drawer,
                geometry,
                page,
                scheduler,
                driver,
                tracker,
                phase: ValueCell::new(DrawerPhase::Closed),
                mounted: ValueCell::new(false),
                on_close: Rc::new(on_close),
                transition,
                unmount_grace,
                unmount_timer: None,
                started: false,
            })),
        }
    }

    /// Override the transition used for open/close/snap animations.
    pub fn set_transition(&self, transition: TransitionSpec) {
        self.inner.borrow_mut().transition = transition;
    }

    /// Override how long the content stays mounted after a close begins.
    pub fn set_unmount_grace(&self, grace: Duration) {
        self.inner.borrow_mut().unmount_grace = grace;
    }

    /// Acquire the instance: position the drawer at the closed offset and
    /// begin accepting events. Idempotent.
    pub fn start(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.started {
            return;
        }
        inner.started = true;
        let offsets = inner.offsets();
        inner.tracker.set_current_translate_y(offsets.closed);
        inner.drawer.set_property(
            StyleProperty::Transform,
            StyleValue::TranslateY(offsets.closed),
        );
        log::debug!("drawer started at closed offset {}", offsets.closed);
    }

    /// Release the instance: cancel every outstanding timer and restore the
    /// page-wide flags. No surface is mutated afterwards.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.started {
            return;
        }
        inner.started = false;
        if let Some(timer) = inner.unmount_timer.take() {
            timer.cancel();
        }
        inner.driver.cancel_all();
        inner.tracker.shutdown();
        inner.page.set_scroll_locked(false);
        log::debug!("drawer stopped");
    }

    /// External open request.
    pub fn open(&self) {
        let mounted = {
            let mut inner = self.inner.borrow_mut();
            if !inner.started {
                return;
            }
            // A reopen during the unmount grace period keeps the content
            // mounted.
            if let Some(timer) = inner.unmount_timer.take() {
                timer.cancel();
            }
            inner.mounted.clone()
        };
        // Mount before measuring: content height is only meaningful once the
        // subtree exists.
        mounted.set(true);

        let (phase_cell, phase) = {
            let mut inner = self.inner.borrow_mut();
            let offsets = inner.offsets();
            let (target, phase) = match offsets.peek_open {
                Some(peek_open) => (peek_open, DrawerPhase::OpenPeek),
                None => (offsets.full_open, DrawerPhase::OpenFull),
            };
            inner.page.set_scroll_locked(true);
            inner.animate_open(target);
            inner.tracker.set_current_translate_y(target);
            log::debug!("drawer open -> {phase:?} at {target}");
            (inner.phase.clone(), phase)
        };
        phase_cell.set(phase);
    }

    /// External close request. Idempotent: a second close while already
    /// closed leaves no extra timers outstanding.
    pub fn close(&self) {
        let phase_cell = {
            let mut inner = self.inner.borrow_mut();
            if !inner.started || inner.phase.get() == DrawerPhase::Closed {
                return;
            }
            let offsets = inner.offsets();
            inner.animate_closed(offsets.closed);
            inner.tracker.set_current_translate_y(offsets.closed);
            inner.page.set_scroll_locked(false);

            let mounted = inner.mounted.clone();
            let grace = inner.unmount_grace;
            inner.unmount_timer = Some(inner.scheduler.schedule(grace, move || {
                mounted.set(false);
            }));
            log::debug!("drawer close, content detaches after {grace:?}");
            inner.phase.clone()
        };
        phase_cell.set(DrawerPhase::Closed);
    }

    /// Feed a pointer event that began on the drawer surface.
    pub fn handle_pointer(&self, event: &PointerEvent) {
        let outcome = {
            let mut inner = self.inner.borrow_mut();
            if !inner.started || !inner.mounted.get() {
                return;
            }
            let offsets = inner.offsets();
            let metrics = inner.metrics();
            let open_threshold = match inner.phase.get() {
                DrawerPhase::OpenPeek => offsets.peek_open.unwrap_or(offsets.full_open),
                _ => offsets.full_open,
            };
            let envelope = DragEnvelope {
                viewport_height: metrics.viewport_height,
                content_height: metrics.content_height,
                open_threshold,
            };
            inner.tracker.on_pointer_event(event, &envelope)
        };
        if let Some(outcome) = outcome {
            self.apply_outcome(outcome);
        }
    }

    /// Escape closes an open drawer.
    pub fn handle_key(&self, key: Key) {
        if key != Key::Escape {
            return;
        }
        if self.notify_close_allowed() {
            self.notify_and_close();
        }
    }

    /// A click observed on the overlay. `target_on_drawer` reports whether
    /// the click target was inside the drawer surface.
    ///
    /// The click synthesized from a drag-release mouse-up is ignored via the
    /// tracker's `started_on_drawer` flag, which clears one frame after the
    /// release.
    pub fn handle_overlay_click(&self, target_on_drawer: bool) {
        if target_on_drawer {
            return;
        }
        let drag_release_click = self.inner.borrow().tracker.started_on_drawer();
        if drag_release_click {
            return;
        }
        if self.notify_close_allowed() {
            self.notify_and_close();
        }
    }

    /// The viewport was resized; re-resolve offsets and re-settle.
    pub fn viewport_resized(&self) {
        self.resettle();
    }

    /// The drawer content changed height; re-resolve offsets and re-settle.
    pub fn content_resized(&self) {
        self.resettle();
    }

    pub fn phase(&self) -> DrawerPhase {
        self.inner.borrow().phase.get()
    }

    /// Observable phase cell for hosts that re-render on change.
    pub fn phase_cell(&self) -> ValueCell<DrawerPhase> {
        self.inner.borrow().phase.clone()
    }

    /// Whether the drawer subtree should currently be rendered.
    pub fn is_content_mounted(&self) -> bool {
        self.inner.borrow().mounted.get()
    }

    /// Observable mount cell for hosts that re-render on change.
    pub fn mounted_cell(&self) -> ValueCell<bool> {
        self.inner.borrow().mounted.clone()
    }

    /// Current drawer position (last drag write or last settled offset).
    pub fn translate_y(&self) -> f32 {
        self.inner.borrow().tracker.current_translate_y()
    }

    /// The canonical resting position the drawer currently sits at, if any.
    pub fn resting_phase(&self) -> Option<DrawerPhase> {
        let inner = self.inner.borrow();
        phase_at(&inner.offsets(), inner.tracker.current_translate_y())
    }

    fn apply_outcome(&self, outcome: DragOutcome) {
        let decision = {
            let inner = self.inner.borrow();
            resolve_snap(&outcome, &inner.offsets())
        };
        log::debug!("drag outcome {outcome:?} -> {decision:?}");
        match decision {
            SnapDecision::Close => self.notify_and_close(),
            SnapDecision::SettlePeek(target) => self.settle_open(target, DrawerPhase::OpenPeek),
            SnapDecision::SettleFull(target) => self.settle_open(target, DrawerPhase::OpenFull),
        }
    }

    fn settle_open(&self, target: f32, phase: DrawerPhase) {
        let (mounted_cell, phase_cell) = {
            let mut inner = self.inner.borrow_mut();
            // Catching and reopening a closing drawer cancels its pending
            // detachment.
            if let Some(timer) = inner.unmount_timer.take() {
                timer.cancel();
            }
            inner.animate_open(target);
            inner.tracker.set_current_translate_y(target);
            inner.page.set_scroll_locked(true);
            (inner.mounted.clone(), inner.phase.clone())
        };
        mounted_cell.set(true);
        phase_cell.set(phase);
    }

    fn notify_close_allowed(&self) -> bool {
        let inner = self.inner.borrow();
        inner.started && inner.phase.get() != DrawerPhase::Closed
    }

    /// Invoke the host's close callback, then animate to the closed offset.
    fn notify_and_close(&self) {
        let on_close = Rc::clone(&self.inner.borrow().on_close);
        on_close();
        self.close();
    }

    fn resettle(&self) {
        let settled = {
            let mut inner = self.inner.borrow_mut();
            if !inner.started {
                return;
            }
            let offsets = inner.offsets();
            match inner.phase.get() {
                DrawerPhase::Closed => {
                    // Keep the parked position in sync with the new
                    // geometry; no animation for an invisible drawer.
                    inner.tracker.set_current_translate_y(offsets.closed);
                    inner.drawer.set_property(
                        StyleProperty::Transform,
                        StyleValue::TranslateY(offsets.closed),
                    );
                    None
                }
                DrawerPhase::OpenPeek => Some((
                    offsets.peek_open.unwrap_or(offsets.full_open),
                    DrawerPhase::OpenPeek,
                )),
                DrawerPhase::OpenFull => Some((offsets.full_open, DrawerPhase::OpenFull)),
            }
        };
        if let Some((target, phase)) = settled {
            self.settle_open(target, phase);
        }
    }
}

impl std::fmt::Debug for DrawerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("DrawerController")
            .field("phase", &inner.phase.get())
            .field("mounted", &inner.mounted.get())
            .field("started", &inner.started)
            .finish_non_exhaustive()
    }
}

/// `stop()` semantics on drop: no timer outlives the controller.
impl Drop for DrawerController {
    fn drop(&mut self) {
        self.stop();
    }
}
