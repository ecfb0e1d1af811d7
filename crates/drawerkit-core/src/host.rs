//! Host traits beyond the surface seam: geometry measurement and page-wide
//! effect flags.

/// Passive source for the two lengths the position resolver needs.
pub trait GeometryHost {
    /// Current viewport height in logical pixels. Re-read after the host
    /// reports a resize.
    fn viewport_height(&self) -> f32;

    /// Rendered height of the drawer content, measured synchronously before
    /// paint. `0.0` when nothing is measurable yet.
    fn content_height(&self) -> f32;
}

/// Page-wide flags owned by the drawer while it is open or being dragged.
///
/// Both flags are single-owner: the widget layer sets them on open/drag
/// start and restores them exactly on close/drag end, so they never leak
/// into unrelated UI.
pub trait PageEffects {
    fn set_scroll_locked(&self, locked: bool);

    fn set_text_selection_suppressed(&self, suppressed: bool);
}
