//! Drawer geometry: configuration, viewport metrics, and the canonical
//! resting offsets.
//!
//! Offsets are vertical translations of the drawer's top edge, so a larger
//! offset means a more closed drawer. `full_open <= peek_open <= closed`
//! always holds; a peek height that would break the ordering is clamped at
//! resolve time rather than rejected.

/// Offset used for the full-open position when [`FullHeightMode::Full`] is
/// configured: the drawer top rests this many pixels below the viewport top
/// regardless of content height.
pub const FULL_OFFSET: f32 = 20.0;

/// How far the drawer extends when fully open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FullHeightMode {
    /// Open exactly as far as the content is tall.
    #[default]
    Auto,
    /// Open to a fixed near-viewport height ([`FULL_OFFSET`] from the top).
    Full,
}

/// Immutable per-instance drawer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawerConfig {
    /// Height of the partially-open resting position. `None` means the
    /// drawer has only the closed and full-open offsets.
    pub peek_height: Option<f32>,
    pub full_height: FullHeightMode,
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_peek_height(mut self, peek_height: f32) -> Self {
        self.peek_height = Some(peek_height);
        self
    }

    pub fn with_full_height(mut self, full_height: FullHeightMode) -> Self {
        self.full_height = full_height;
        self
    }
}

/// Current viewport and content measurements, clamped to be non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ViewportMetrics {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            viewport_height: viewport_height.max(0.0),
            content_height: content_height.max(0.0),
        }
    }
}

/// The drawer's canonical resting offsets for one config/metrics pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanonicalOffsets {
    /// Fully off-screen: the drawer top sits at the viewport bottom.
    pub closed: f32,
    /// Partially-open resting offset, present only when a peek height is
    /// configured.
    pub peek_open: Option<f32>,
    /// Fully-open resting offset.
    pub full_open: f32,
}

impl CanonicalOffsets {
    /// Pure position resolver. No side effects; callers re-run it whenever
    /// the config or the metrics change.
    pub fn resolve(config: &DrawerConfig, metrics: ViewportMetrics) -> Self {
        let closed = metrics.viewport_height;
        let full_open = match config.full_height {
            FullHeightMode::Full => FULL_OFFSET.min(closed),
            FullHeightMode::Auto => closed - metrics.content_height,
        };
        let peek_open = config.peek_height.map(|peek_height| {
            let raw = closed - peek_height;
            let clamped = raw.clamp(full_open.min(closed), closed);
            if clamped != raw {
                log::debug!(
                    "peek offset {raw} outside [{full_open}, {closed}], clamped to {clamped}"
                );
            }
            clamped
        });
        Self {
            closed,
            peek_open,
            full_open,
        }
    }

    /// The open offset (peek or full) numerically closest to `translate_y`.
    /// Falls back to the full offset when no peek is configured or both are
    /// equally far.
    pub fn nearest_open(&self, translate_y: f32) -> f32 {
        match self.peek_open {
            Some(peek_open)
                if (translate_y - peek_open).abs() < (translate_y - self.full_open).abs() =>
            {
                peek_open
            }
            _ => self.full_open,
        }
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
