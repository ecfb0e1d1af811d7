//! The drawer widget layer: snap resolution and the controller that
//! coordinates drawer, overlay, and background.

pub mod drawer;
pub mod snap;

pub use drawer::{
    DrawerController, DrawerHandles, DrawerPhase, BACKGROUND_CHANNEL, DRAWER_CHANNEL,
    OVERLAY_CHANNEL,
};
pub use snap::{phase_at, resolve_snap, SnapDecision};
