//! Easing curves and the animation driver for drawerkit.
//!
//! The driver does not interpolate values itself: it applies target styles,
//! attaches a transition descriptor so the host's renderer eases toward
//! them, and clears the descriptor once the duration has elapsed so later
//! direct writes (live drag updates) are not unintentionally animated.

pub mod driver;
pub mod easing;
pub mod spec;

pub use driver::{AnimationDriver, ChannelId};
pub use easing::Easing;
pub use spec::TransitionSpec;
