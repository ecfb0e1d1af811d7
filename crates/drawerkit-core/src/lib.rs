//! Core runtime services for drawerkit.
//!
//! This crate holds everything the higher layers share: the scheduler
//! abstraction (scoped cancellable timers and deferred-frame callbacks), the
//! host-facing surface and page traits, the drawer geometry model, and a
//! small observable value cell.
//!
//! drawerkit is headless: nothing in this workspace touches a window or a
//! DOM. The host implements [`Scheduler`], [`Surface`], [`GeometryHost`] and
//! [`PageEffects`] and the widget layers drive those.

pub mod geometry;
pub mod host;
pub mod scheduler;
pub mod state;
pub mod surface;

pub use geometry::{
    CanonicalOffsets, DrawerConfig, FullHeightMode, ViewportMetrics, FULL_OFFSET,
};
pub use host::{GeometryHost, PageEffects};
pub use scheduler::{LoopScheduler, Scheduler, SchedulerHandle, TimerId, TimerRegistration};
pub use state::ValueCell;
pub use surface::{StyleProperty, StyleValue, Surface, TransitionStyle};
