//! Particle field container
//!
//! The field owns a fixed population of particles and the RNG their spawn
//! and reset draws from. The population size is set at construction and
//! never changes; resizing the viewport rebuilds the collection from
//! scratch at the new dimensions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::params::FieldParams;
use crate::particle::Particle;
use crate::surface::{DrawStyle, DrawSurface};
use crate::viewport::Viewport;

/// A fixed population of animated particles over one viewport
pub struct ParticleField<R = SmallRng> {
    viewport: Viewport,
    params: FieldParams,
    style: DrawStyle,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<SmallRng> {
    /// Create a field with an entropy-seeded RNG
    pub fn new(viewport: Viewport, params: FieldParams) -> Self {
        Self::with_rng(viewport, params, SmallRng::from_entropy())
    }

    /// Create a field with a deterministic seed
    pub fn from_seed(viewport: Viewport, params: FieldParams, seed: u64) -> Self {
        Self::with_rng(viewport, params, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    /// Create a field with an injected random source
    ///
    /// A degenerate viewport yields an empty field that updates and draws
    /// nothing until a valid resize arrives.
    pub fn with_rng(viewport: Viewport, params: FieldParams, mut rng: R) -> Self {
        let particles = Self::populate(viewport, &params, &mut rng);
        Self {
            viewport,
            params,
            style: DrawStyle::default(),
            particles,
            rng,
        }
    }

    /// Set the draw style
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    fn populate(viewport: Viewport, params: &FieldParams, rng: &mut R) -> Vec<Particle> {
        if !viewport.is_valid() {
            log::warn!(
                "Degenerate viewport {}x{}, field stays dormant",
                viewport.width,
                viewport.height
            );
            return Vec::new();
        }

        let mut particles = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            particles.push(Particle::spawn(&params.kind, viewport, rng));
        }
        log::debug!(
            "Spawned {} {} particles over {}x{}",
            particles.len(),
            params.mode(),
            viewport.width,
            viewport.height
        );
        particles
    }

    /// Advance every particle by one frame
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update(&self.params.kind, self.viewport, &mut self.rng);
        }
    }

    /// Draw every particle
    ///
    /// Does not clear; the animator owns the clear-then-draw sequencing.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        for particle in &self.particles {
            particle.draw(surface, &self.style);
        }
    }

    /// Rebuild the collection at new dimensions
    ///
    /// Existing particles are discarded rather than rescaled.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        log::info!(
            "Viewport {}x{} -> {}x{}, rebuilding field",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        self.particles = Self::populate(viewport, &self.params, &mut self.rng);
    }

    /// Current viewport
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Generation parameters
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Particles as a slice
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles as a mutable slice (used by tests to force positions)
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Population size
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field is dormant
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{Particle, TRACE_BOTTOM_MARGIN};
    use driftfield_math::Vec2;

    fn field(params: FieldParams) -> ParticleField {
        ParticleField::from_seed(Viewport::new(800.0, 600.0), params, 7)
    }

    #[test]
    fn test_population_matches_count() {
        let field = field(FieldParams::snow());
        assert_eq!(field.len(), 100);

        let field = self::field(FieldParams::circuit());
        assert_eq!(field.len(), 40);
    }

    #[test]
    fn test_population_invariant_over_updates() {
        let mut field = field(FieldParams::snow().with_count(25));
        for _ in 0..1000 {
            field.update();
            assert_eq!(field.len(), 25);
        }
    }

    #[test]
    fn test_initial_positions_inside_viewport() {
        let field = field(FieldParams::snow());
        for particle in field.particles() {
            assert!(field.viewport().contains(particle.position()));
        }
    }

    #[test]
    fn test_history_bounded_over_many_frames() {
        let mut field = field(FieldParams::circuit());
        for _ in 0..500 {
            field.update();
            for particle in field.particles() {
                if let Particle::Trace(t) = particle {
                    assert!(t.history.len() <= t.trail_len);
                }
            }
        }
    }

    #[test]
    fn test_particles_never_exceed_reset_bound() {
        let mut field = field(FieldParams::circuit().with_count(10));
        let limit = field.viewport().height + TRACE_BOTTOM_MARGIN;
        // Fastest trace falls 2.5/frame; after the frame that crosses the
        // bound the particle must have reset, so it can never sit more than
        // one step past the limit.
        for _ in 0..2000 {
            field.update();
            for particle in field.particles() {
                assert!(particle.position().y <= limit + 2.5);
            }
        }
    }

    #[test]
    fn test_degenerate_viewport_dormant() {
        let field = ParticleField::from_seed(Viewport::new(0.0, 600.0), FieldParams::snow(), 7);
        assert!(field.is_empty());

        let mut field = field;
        field.update(); // must not panic
        assert!(field.is_empty());
    }

    #[test]
    fn test_resize_rebuilds_in_new_bounds() {
        let mut field = field(FieldParams::snow().with_count(50));
        // Let particles drift for a while at the old size
        for _ in 0..100 {
            field.update();
        }

        let new_viewport = Viewport::new(200.0, 100.0);
        field.resize(new_viewport);

        assert_eq!(field.len(), 50);
        for particle in field.particles() {
            assert!(
                new_viewport.contains(particle.position()),
                "stale particle at {:?} after resize",
                particle.position()
            );
        }
    }

    #[test]
    fn test_resize_from_degenerate_revives() {
        let mut field =
            ParticleField::from_seed(Viewport::new(0.0, 0.0), FieldParams::snow().with_count(5), 7);
        assert!(field.is_empty());

        field.resize(Viewport::new(100.0, 100.0));
        assert_eq!(field.len(), 5);
    }

    #[test]
    fn test_resize_same_viewport_keeps_particles() {
        let mut field = field(FieldParams::snow().with_count(5));
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.position()).collect();

        field.resize(field.viewport());
        let after: Vec<Vec2> = field.particles().iter().map(|p| p.position()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_seeded_fields_reproduce_trajectories() {
        let mut a = field(FieldParams::snow().with_count(10));
        let mut b = field(FieldParams::snow().with_count(10));
        for _ in 0..50 {
            a.update();
            b.update();
        }
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position(), pb.position());
        }
    }

    #[test]
    fn test_end_to_end_forced_particle() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut field =
            ParticleField::from_seed(viewport, FieldParams::snow().with_count(1), 7);

        // Force a known starting state
        if let Particle::Point(p) = &mut field.particles_mut()[0] {
            p.position = Vec2::new(50.0, 99.0);
            p.speed = 2.0;
            p.wind = 0.0;
        }

        field.update();
        // 99 + 2 = 101 > 100: the particle must have reset above the surface
        let pos = field.particles()[0].position();
        assert!(pos.y < 0.0);
        assert!(pos.x >= 0.0 && pos.x < 100.0);

        // From here on, y never exceeds the viewport height between resets
        for _ in 0..500 {
            field.update();
            let y = field.particles()[0].position().y;
            assert!(y <= 100.0 + 1.5, "y = {} past the reset bound", y);
        }
    }
}
