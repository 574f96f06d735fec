//! Core particle engine for driftfield
//!
//! This crate provides the animation engine behind the particle background:
//!
//! - [`Particle`] - Tagged point/trace particle sharing one update contract
//! - [`ParticleField`] - Fixed-population container with spawn/reset rules
//! - [`Animator`] - Running/stopped frame driver around a field
//! - [`FieldParams`] / [`FieldMode`] - Generation ranges and presets
//! - [`DrawSurface`] - Backend-agnostic drawing seam
//! - [`Viewport`] - Surface dimensions with degenerate-size handling

mod animator;
mod field;
mod params;
mod particle;
mod surface;
mod viewport;

pub use animator::Animator;
pub use field::ParticleField;
pub use params::{FieldMode, FieldParams, KindParams, PointParams, TraceParams};
pub use particle::{Particle, PointParticle, TraceParticle, POINT_RESET_DEPTH, TRACE_BOTTOM_MARGIN};
pub use surface::{Color, DrawStyle, DrawSurface};
pub use viewport::Viewport;

// Re-export the math type for convenience
pub use driftfield_math::Vec2;
