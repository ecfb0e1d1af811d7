//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor; the fixed values here work
//! well for typical desktop/mobile displays.

/// Direction-classification deadband in logical pixels.
///
/// A drag only reports an up/down direction once the cumulative pointer
/// displacement from the press position exceeds this distance. Without the
/// deadband, the jitter of a near-stationary pointer flips the direction
/// back and forth, and a release near the press point snaps unpredictably.
pub const DIRECTION_DEADBAND: f32 = 15.0;

/// Tolerance when comparing the drawer position against a canonical offset.
///
/// Animated positions end within sub-pixel error of their target, so "is
/// the drawer at the peek offset" is answered within this epsilon rather
/// than by exact equality.
pub const SETTLE_EPSILON: f32 = 0.5;
