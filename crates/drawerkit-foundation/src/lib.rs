//! Pointer input types, gesture constants, and the drag tracker for
//! drawerkit.

pub mod drag;
pub mod gesture_constants;
pub mod input;

pub use drag::{DragDirection, DragEnvelope, DragOutcome, DragTracker};
pub use gesture_constants::{DIRECTION_DEADBAND, SETTLE_EPSILON};
pub use input::{Key, PointerEvent, PointerEventKind, PointerId};
