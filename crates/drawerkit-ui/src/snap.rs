//! Snap resolution: where a released drawer settles.

use drawerkit_core::CanonicalOffsets;
use drawerkit_foundation::{DragDirection, DragOutcome, SETTLE_EPSILON};

use crate::drawer::DrawerPhase;

/// Where the controller takes the drawer after a drag ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapDecision {
    /// Invoke the close callback, then animate to the closed offset.
    Close,
    SettlePeek(f32),
    SettleFull(f32),
}

/// Decide the canonical offset for a finished drag.
///
/// A downward drag released above the peek offset settles at peek (partial
/// close); any other downward drag closes. An upward drag settles at full.
/// Without a clear direction (a tap or sub-deadband wiggle) the drawer
/// snaps to whichever open offset is numerically closer to the release
/// position.
pub fn resolve_snap(outcome: &DragOutcome, offsets: &CanonicalOffsets) -> SnapDecision {
    match outcome.direction {
        DragDirection::Down => match offsets.peek_open {
            Some(peek_open) if outcome.release_y < peek_open => SnapDecision::SettlePeek(peek_open),
            _ => SnapDecision::Close,
        },
        DragDirection::Up => SnapDecision::SettleFull(offsets.full_open),
        DragDirection::None => {
            let nearest = offsets.nearest_open(outcome.release_y);
            match offsets.peek_open {
                Some(peek_open) if nearest == peek_open => SnapDecision::SettlePeek(peek_open),
                _ => SnapDecision::SettleFull(offsets.full_open),
            }
        }
    }
}

/// Derive which resting position (if any) a drawer position corresponds to,
/// within [`SETTLE_EPSILON`].
pub fn phase_at(offsets: &CanonicalOffsets, translate_y: f32) -> Option<DrawerPhase> {
    if (translate_y - offsets.closed).abs() <= SETTLE_EPSILON {
        return Some(DrawerPhase::Closed);
    }
    if let Some(peek_open) = offsets.peek_open {
        if (translate_y - peek_open).abs() <= SETTLE_EPSILON {
            return Some(DrawerPhase::OpenPeek);
        }
    }
    if (translate_y - offsets.full_open).abs() <= SETTLE_EPSILON {
        return Some(DrawerPhase::OpenFull);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawerkit_core::{DrawerConfig, ViewportMetrics};

    fn offsets_with_peek() -> CanonicalOffsets {
        // closed 800, peek_open 650, full_open 200
        CanonicalOffsets::resolve(
            &DrawerConfig::new().with_peek_height(150.0),
            ViewportMetrics::new(800.0, 600.0),
        )
    }

    fn offsets_without_peek() -> CanonicalOffsets {
        // closed 800, full_open 500
        CanonicalOffsets::resolve(&DrawerConfig::new(), ViewportMetrics::new(800.0, 300.0))
    }

    #[test]
    fn downward_above_peek_settles_at_peek() {
        let outcome = DragOutcome {
            direction: DragDirection::Down,
            release_y: 400.0,
        };
        assert_eq!(
            resolve_snap(&outcome, &offsets_with_peek()),
            SnapDecision::SettlePeek(650.0)
        );
    }

    #[test]
    fn downward_at_or_below_peek_closes() {
        let outcome = DragOutcome {
            direction: DragDirection::Down,
            release_y: 700.0,
        };
        assert_eq!(resolve_snap(&outcome, &offsets_with_peek()), SnapDecision::Close);
    }

    #[test]
    fn downward_without_peek_closes() {
        let outcome = DragOutcome {
            direction: DragDirection::Down,
            release_y: 520.0,
        };
        assert_eq!(
            resolve_snap(&outcome, &offsets_without_peek()),
            SnapDecision::Close
        );
    }

    #[test]
    fn upward_settles_at_full() {
        let outcome = DragOutcome {
            direction: DragDirection::Up,
            release_y: 640.0,
        };
        assert_eq!(
            resolve_snap(&outcome, &offsets_with_peek()),
            SnapDecision::SettleFull(200.0)
        );
    }

    #[test]
    fn no_direction_snaps_to_nearest_open_offset() {
        let near_peek = DragOutcome {
            direction: DragDirection::None,
            release_y: 620.0,
        };
        assert_eq!(
            resolve_snap(&near_peek, &offsets_with_peek()),
            SnapDecision::SettlePeek(650.0)
        );

        let near_full = DragOutcome {
            direction: DragDirection::None,
            release_y: 260.0,
        };
        assert_eq!(
            resolve_snap(&near_full, &offsets_with_peek()),
            SnapDecision::SettleFull(200.0)
        );
    }

    #[test]
    fn no_direction_without_peek_snaps_to_full() {
        let outcome = DragOutcome {
            direction: DragDirection::None,
            release_y: 795.0,
        };
        assert_eq!(
            resolve_snap(&outcome, &offsets_without_peek()),
            SnapDecision::SettleFull(500.0)
        );
    }

    #[test]
    fn phase_at_recognizes_canonical_positions() {
        let offsets = offsets_with_peek();
        assert_eq!(phase_at(&offsets, 800.0), Some(DrawerPhase::Closed));
        assert_eq!(phase_at(&offsets, 650.3), Some(DrawerPhase::OpenPeek));
        assert_eq!(phase_at(&offsets, 200.0), Some(DrawerPhase::OpenFull));
        assert_eq!(phase_at(&offsets, 430.0), None);
    }
}
