//! Frame-driven animator
//!
//! Explicit scheduler seam around the field: the host loop calls [`tick`]
//! once per display refresh and schedules the next frame only while the
//! animator reports running. This keeps the update logic unit-testable by
//! driving ticks manually, with no real display loop behind them.
//!
//! [`tick`]: Animator::tick

use rand::rngs::SmallRng;
use rand::Rng;

use crate::field::ParticleField;
use crate::surface::DrawSurface;
use crate::viewport::Viewport;

/// Drives a particle field one frame at a time
///
/// Two states only: *running* (ticks mutate and draw) and *stopped* (ticks
/// are no-ops). Constructed running; `start` and `stop` are idempotent.
pub struct Animator<R = SmallRng> {
    field: ParticleField<R>,
    running: bool,
}

impl<R: Rng> Animator<R> {
    /// Wrap a field, starting in the running state
    pub fn new(field: ParticleField<R>) -> Self {
        Self {
            field,
            running: true,
        }
    }

    /// Resume ticking
    pub fn start(&mut self) {
        if !self.running {
            log::info!("Animator started");
        }
        self.running = true;
    }

    /// Stop ticking; pending state stays in memory but is neither mutated
    /// nor drawn
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Animator stopped");
        }
        self.running = false;
    }

    /// Whether a next frame should be scheduled
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame: clear, advance every particle, draw every particle
    ///
    /// Returns whether a frame was produced; a stopped animator touches
    /// neither the field nor the surface.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) -> bool {
        if !self.running {
            return false;
        }
        surface.clear();
        self.field.update();
        self.field.draw(surface);
        true
    }

    /// Rebuild the field at new viewport dimensions
    pub fn resize(&mut self, viewport: Viewport) {
        self.field.resize(viewport);
    }

    /// The animated field
    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    /// The animated field, mutably
    pub fn field_mut(&mut self) -> &mut ParticleField<R> {
        &mut self.field
    }
}
