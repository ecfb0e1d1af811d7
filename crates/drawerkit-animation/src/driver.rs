//! The animation driver: apply styles with a transition, then mark the
//! surface static again.
//!
//! Each animated element is a channel with its own "clear transition" timer.
//! Re-animating a channel before its timer fires cancels and replaces the
//! timer (last-writer-wins), so a stale timer can never cut a newer
//! animation short.

use std::rc::Rc;

use ahash::AHashMap;
use drawerkit_core::{SchedulerHandle, StyleProperty, StyleValue, Surface, TimerRegistration};

use crate::spec::TransitionSpec;

/// Identifies one animated element (surface + property set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(pub &'static str);

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

struct Channel {
    surface: Rc<dyn Surface>,
    clear_timer: Option<TimerRegistration>,
}

/// Applies target styles to registered channels and manages their
/// transition lifetimes.
pub struct AnimationDriver {
    scheduler: SchedulerHandle,
    channels: AHashMap<ChannelId, Channel>,
}

impl AnimationDriver {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self {
            scheduler,
            channels: AHashMap::new(),
        }
    }

    pub fn register(&mut self, id: ChannelId, surface: Rc<dyn Surface>) {
        self.channels.insert(
            id,
            Channel {
                surface,
                clear_timer: None,
            },
        );
    }

    /// Animate `id` toward `styles` per `spec`.
    ///
    /// Styles are applied immediately; the surface's transition descriptor
    /// makes the renderer ease toward them, and a scoped timer clears the
    /// descriptor after the duration so subsequent direct writes are not
    /// animated. An unmounted surface (or unregistered channel) is a silent
    /// no-op.
    pub fn animate(
        &mut self,
        id: ChannelId,
        styles: &[(StyleProperty, StyleValue)],
        spec: &TransitionSpec,
    ) {
        let Some(channel) = self.channels.get_mut(&id) else {
            log::warn!("animate on unregistered channel {id}");
            return;
        };
        if !channel.surface.is_mounted() {
            return;
        }

        // Replace any in-flight clear timer before it can fire against the
        // new transition.
        if let Some(timer) = channel.clear_timer.take() {
            timer.cancel();
        }

        channel.surface.set_transition(spec.to_style());
        for (property, value) in styles {
            channel.surface.set_property(*property, *value);
        }

        let surface = Rc::clone(&channel.surface);
        channel.clear_timer = Some(self.scheduler.schedule(spec.duration, move || {
            if surface.is_mounted() {
                surface.clear_transition();
            }
        }));
    }

    /// Cancel every pending clear timer. Called on unmount so no timer can
    /// mutate a detached surface.
    pub fn cancel_all(&mut self) {
        for channel in self.channels.values_mut() {
            if let Some(timer) = channel.clear_timer.take() {
                timer.cancel();
            }
        }
    }
}

impl std::fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("channels", &self.channels.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
