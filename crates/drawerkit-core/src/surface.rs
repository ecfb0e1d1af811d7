//! The host surface seam.
//!
//! A [`Surface`] is a handle to one renderable element the widget layer
//! mutates directly: the drawer panel, the dimming overlay, or the scaled
//! page background. Styles are applied as plain property writes; whether a
//! write animates is controlled by the transition descriptor currently set
//! on the surface, exactly like inline `transition` styling.

use std::time::Duration;

use smallvec::SmallVec;

/// Visual properties the widget layer writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Vertical translation (drawer position) or scale+translate (background).
    Transform,
    Opacity,
    BorderRadius,
}

/// Value written for a [`StyleProperty`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    /// Plain vertical translation in logical pixels.
    TranslateY(f32),
    /// Uniform scale combined with a vertical translation, for the
    /// background inset effect.
    ScaleAndTranslateY { scale: f32, translate_y: f32 },
    /// Opacity in `[0, 1]`.
    Opacity(f32),
    /// Corner radius in logical pixels.
    Radius(f32),
}

/// Transition descriptor attached to a surface.
///
/// While set, property writes covered by `properties` are eased toward over
/// `duration`; once cleared, writes take effect immediately. `bezier` holds
/// the cubic bezier control points `[x1, y1, x2, y2]` of the easing curve.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionStyle {
    pub properties: SmallVec<[StyleProperty; 3]>,
    pub duration: Duration,
    pub bezier: [f32; 4],
}

/// Host-provided handle to a renderable element.
///
/// Implementations must treat writes to an unmounted element as silent
/// no-ops; the widget layer does not check mount state before every write.
pub trait Surface {
    fn is_mounted(&self) -> bool;

    fn set_property(&self, property: StyleProperty, value: StyleValue);

    fn set_transition(&self, transition: TransitionStyle);

    fn clear_transition(&self);
}
