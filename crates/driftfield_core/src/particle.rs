//! Particle variants
//!
//! Two flavors share one update/reset contract: point particles fall with a
//! constant wind drift and wrap horizontally; trace particles fall dragging
//! a bounded history of recent positions that is drawn as a polyline. Once a
//! particle leaves the bottom of the viewport (plus a margin for traces) it
//! is reassigned fresh random state above the visible area, so the field
//! appears to fall forever with a fixed population.

use rand::Rng;

use driftfield_math::Vec2;

use crate::params::{KindParams, PointParams, TraceParams};
use crate::surface::{DrawStyle, DrawSurface};
use crate::viewport::Viewport;

/// Extra travel allowed below the viewport before a trace resets, so the
/// tail finishes scrolling off screen first
pub const TRACE_BOTTOM_MARGIN: f32 = 100.0;

/// How far above the top edge a reset point particle respawns
pub const POINT_RESET_DEPTH: f32 = 5.0;

/// A falling dot
#[derive(Clone, Debug)]
pub struct PointParticle {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub wind: f32,
    pub opacity: f32,
}

impl PointParticle {
    /// Spawn with uniform random position inside the viewport and motion
    /// parameters drawn from the ranges
    pub fn spawn<R: Rng>(params: &PointParams, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..viewport.width),
                rng.gen_range(0.0..viewport.height),
            ),
            radius: rng.gen_range(params.radius.clone()),
            speed: rng.gen_range(params.speed.clone()),
            wind: rng.gen_range(params.wind.clone()),
            opacity: rng.gen_range(params.opacity.clone()),
        }
    }

    /// Advance one frame: fall by speed, drift by wind, wrap horizontally,
    /// reset once past the bottom edge
    pub fn update<R: Rng>(&mut self, params: &PointParams, viewport: Viewport, rng: &mut R) {
        self.position.y += self.speed;
        self.position.x += self.wind;

        if self.position.y > viewport.height {
            self.reset(params, viewport, rng);
        }

        // Wraparound: falls off the right edge, reappears on the left
        self.position.x = self.position.x.rem_euclid(viewport.width);
    }

    /// Fresh random state as at spawn, placed just above the visible area
    pub fn reset<R: Rng>(&mut self, params: &PointParams, viewport: Viewport, rng: &mut R) {
        *self = Self::spawn(params, viewport, rng);
        self.position.y = rng.gen_range(-POINT_RESET_DEPTH..0.0);
    }

    /// Draw as a filled circle at this particle's opacity
    pub fn draw(&self, surface: &mut dyn DrawSurface, style: &DrawStyle) {
        let [r, g, b] = style.point_color;
        surface.fill_circle(self.position, self.radius, [r, g, b, self.opacity]);
    }
}

/// A falling line tracer with bounded position history
#[derive(Clone, Debug)]
pub struct TraceParticle {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    /// History cap; samples past this are dropped oldest-first
    pub trail_len: usize,
    pub history: Vec<Vec2>,
}

impl TraceParticle {
    /// Spawn with uniform random position inside the viewport, empty history
    pub fn spawn<R: Rng>(params: &TraceParams, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..viewport.width),
                rng.gen_range(0.0..viewport.height),
            ),
            size: rng.gen_range(params.size.clone()),
            speed: rng.gen_range(params.speed.clone()),
            trail_len: rng.gen_range(params.trail_len.clone()),
            history: Vec::new(),
        }
    }

    /// Advance one frame: fall by speed, record the position, trim history,
    /// reset once past the bottom edge plus the trail margin
    pub fn update<R: Rng>(&mut self, params: &TraceParams, viewport: Viewport, rng: &mut R) {
        self.position.y += self.speed;
        self.history.push(self.position);
        if self.history.len() > self.trail_len {
            self.history.remove(0);
        }

        if self.position.y > viewport.height + TRACE_BOTTOM_MARGIN {
            self.reset(params, viewport, rng);
        }
    }

    /// Fresh random state as at spawn, placed within one viewport height
    /// above the visible area with a cleared history
    pub fn reset<R: Rng>(&mut self, params: &TraceParams, viewport: Viewport, rng: &mut R) {
        *self = Self::spawn(params, viewport, rng);
        self.position.y = rng.gen_range(-viewport.height..0.0);
    }

    /// Stroke opacity grows as the history fills, clamped to [0, 1]
    ///
    /// The unclamped formula exceeds 1.0 for long trails; clamping here keeps
    /// the contract independent of any backend clamp-on-draw.
    pub fn stroke_opacity(&self) -> f32 {
        (0.1 + self.history.len() as f32 / 200.0).clamp(0.0, 1.0)
    }

    /// Draw as a polyline through the history buffer
    pub fn draw(&self, surface: &mut dyn DrawSurface, style: &DrawStyle) {
        if self.history.len() < 2 {
            return;
        }
        let [r, g, b] = style.trace_color;
        surface.stroke_polyline(&self.history, style.line_width, [r, g, b, self.stroke_opacity()]);
    }
}

/// One independently-animated particle, tagged by flavor
#[derive(Clone, Debug)]
pub enum Particle {
    Point(PointParticle),
    Trace(TraceParticle),
}

impl Particle {
    /// Spawn a particle matching the parameter variant
    pub fn spawn<R: Rng>(kind: &KindParams, viewport: Viewport, rng: &mut R) -> Self {
        match kind {
            KindParams::Point(p) => Particle::Point(PointParticle::spawn(p, viewport, rng)),
            KindParams::Trace(p) => Particle::Trace(TraceParticle::spawn(p, viewport, rng)),
        }
    }

    /// Advance one frame
    ///
    /// The field constructs particles from its own parameter set, so the
    /// variants always match; a mismatch leaves the particle untouched.
    pub fn update<R: Rng>(&mut self, kind: &KindParams, viewport: Viewport, rng: &mut R) {
        match (self, kind) {
            (Particle::Point(pt), KindParams::Point(p)) => pt.update(p, viewport, rng),
            (Particle::Trace(tr), KindParams::Trace(p)) => tr.update(p, viewport, rng),
            _ => {}
        }
    }

    /// Draw through the surface abstraction
    pub fn draw(&self, surface: &mut dyn DrawSurface, style: &DrawStyle) {
        match self {
            Particle::Point(pt) => pt.draw(surface, style),
            Particle::Trace(tr) => tr.draw(surface, style),
        }
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        match self {
            Particle::Point(pt) => pt.position,
            Particle::Trace(tr) => tr.position,
        }
    }
}
