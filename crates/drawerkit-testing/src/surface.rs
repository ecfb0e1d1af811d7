//! Recording fakes for the host seams: surfaces, geometry, page effects.

use std::cell::RefCell;
use std::rc::Rc;

use drawerkit_core::{
    GeometryHost, PageEffects, StyleProperty, StyleValue, Surface, TransitionStyle,
};

#[derive(Default)]
struct SurfaceState {
    mounted: bool,
    properties: Vec<(StyleProperty, StyleValue)>,
    transition: Option<TransitionStyle>,
    write_count: u32,
}

/// [`Surface`] fake that records the last value written per property.
#[derive(Clone)]
pub struct TestSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl TestSurface {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                mounted: true,
                ..SurfaceState::default()
            })),
        }
    }

    pub fn set_mounted(&self, mounted: bool) {
        self.state.borrow_mut().mounted = mounted;
    }

    pub fn property(&self, property: StyleProperty) -> Option<StyleValue> {
        self.state
            .borrow()
            .properties
            .iter()
            .find(|(recorded, _)| *recorded == property)
            .map(|(_, value)| *value)
    }

    /// Current vertical translation, when the transform is a plain translate.
    pub fn translate_y(&self) -> Option<f32> {
        match self.property(StyleProperty::Transform) {
            Some(StyleValue::TranslateY(translate_y)) => Some(translate_y),
            Some(StyleValue::ScaleAndTranslateY { translate_y, .. }) => Some(translate_y),
            _ => None,
        }
    }

    pub fn scale(&self) -> Option<f32> {
        match self.property(StyleProperty::Transform) {
            Some(StyleValue::ScaleAndTranslateY { scale, .. }) => Some(scale),
            _ => None,
        }
    }

    pub fn opacity(&self) -> Option<f32> {
        match self.property(StyleProperty::Opacity) {
            Some(StyleValue::Opacity(opacity)) => Some(opacity),
            _ => None,
        }
    }

    pub fn radius(&self) -> Option<f32> {
        match self.property(StyleProperty::BorderRadius) {
            Some(StyleValue::Radius(radius)) => Some(radius),
            _ => None,
        }
    }

    pub fn transition(&self) -> Option<TransitionStyle> {
        self.state.borrow().transition.clone()
    }

    pub fn has_transition(&self) -> bool {
        self.state.borrow().transition.is_some()
    }

    /// Total number of property writes accepted so far.
    pub fn write_count(&self) -> u32 {
        self.state.borrow().write_count
    }
}

impl Default for TestSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TestSurface {
    fn is_mounted(&self) -> bool {
        self.state.borrow().mounted
    }

    fn set_property(&self, property: StyleProperty, value: StyleValue) {
        let mut state = self.state.borrow_mut();
        if !state.mounted {
            return;
        }
        state.write_count += 1;
        if let Some(slot) = state
            .properties
            .iter_mut()
            .find(|(recorded, _)| *recorded == property)
        {
            slot.1 = value;
        } else {
            state.properties.push((property, value));
        }
    }

    fn set_transition(&self, transition: TransitionStyle) {
        let mut state = self.state.borrow_mut();
        if !state.mounted {
            return;
        }
        state.transition = Some(transition);
    }

    fn clear_transition(&self) {
        self.state.borrow_mut().transition = None;
    }
}

impl std::fmt::Debug for TestSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("TestSurface")
            .field("mounted", &state.mounted)
            .field("properties", &state.properties)
            .field("transition", &state.transition)
            .finish()
    }
}

/// Settable [`GeometryHost`] fake.
#[derive(Clone, Debug, Default)]
pub struct TestGeometry {
    heights: Rc<RefCell<(f32, f32)>>,
}

impl TestGeometry {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            heights: Rc::new(RefCell::new((viewport_height, content_height))),
        }
    }

    pub fn set_viewport_height(&self, viewport_height: f32) {
        self.heights.borrow_mut().0 = viewport_height;
    }

    pub fn set_content_height(&self, content_height: f32) {
        self.heights.borrow_mut().1 = content_height;
    }
}

impl GeometryHost for TestGeometry {
    fn viewport_height(&self) -> f32 {
        self.heights.borrow().0
    }

    fn content_height(&self) -> f32 {
        self.heights.borrow().1
    }
}

/// [`PageEffects`] fake recording the page-wide flags.
#[derive(Clone, Debug, Default)]
pub struct TestPage {
    flags: Rc<RefCell<(bool, bool)>>,
}

impl TestPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_locked(&self) -> bool {
        self.flags.borrow().0
    }

    pub fn selection_suppressed(&self) -> bool {
        self.flags.borrow().1
    }
}

impl PageEffects for TestPage {
    fn set_scroll_locked(&self, locked: bool) {
        self.flags.borrow_mut().0 = locked;
    }

    fn set_text_selection_suppressed(&self, suppressed: bool) {
        self.flags.borrow_mut().1 = suppressed;
    }
}
