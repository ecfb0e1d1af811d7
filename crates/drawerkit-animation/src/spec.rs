//! Transition specifications.

use std::time::Duration;

use drawerkit_core::{StyleProperty, TransitionStyle};
use smallvec::SmallVec;

use crate::easing::Easing;

/// Which properties animate, for how long, and along which curve.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSpec {
    pub properties: SmallVec<[StyleProperty; 3]>,
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionSpec {
    /// Tween over `duration` with the given easing.
    pub fn tween(
        properties: impl IntoIterator<Item = StyleProperty>,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            properties: properties.into_iter().collect(),
            duration,
            easing,
        }
    }

    /// Linear tween over `duration`.
    pub fn linear(
        properties: impl IntoIterator<Item = StyleProperty>,
        duration: Duration,
    ) -> Self {
        Self::tween(properties, duration, Easing::Linear)
    }

    /// The same spec applied to a different property set.
    pub fn for_properties(&self, properties: impl IntoIterator<Item = StyleProperty>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
            duration: self.duration,
            easing: self.easing,
        }
    }

    /// Surface-level transition descriptor for this spec.
    pub fn to_style(&self) -> TransitionStyle {
        TransitionStyle {
            properties: self.properties.clone(),
            duration: self.duration,
            bezier: self.easing.control_points(),
        }
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::tween(
            [StyleProperty::Transform, StyleProperty::Opacity],
            Duration::from_millis(300),
            Easing::FastOutSlowIn,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_300ms_material_tween() {
        let spec = TransitionSpec::default();
        assert_eq!(spec.duration, Duration::from_millis(300));
        assert_eq!(spec.easing, Easing::FastOutSlowIn);
        assert!(spec.properties.contains(&StyleProperty::Transform));
        assert!(spec.properties.contains(&StyleProperty::Opacity));
    }

    #[test]
    fn to_style_carries_the_control_points() {
        let spec = TransitionSpec::linear([StyleProperty::Opacity], Duration::from_millis(120));
        let style = spec.to_style();
        assert_eq!(style.bezier, Easing::Linear.control_points());
        assert_eq!(style.duration, Duration::from_millis(120));
        assert_eq!(style.properties.as_slice(), &[StyleProperty::Opacity]);
    }
}
