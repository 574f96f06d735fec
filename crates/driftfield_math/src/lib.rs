//! Minimal 2D math for the driftfield engine
//!
//! Provides [`Vec2`], the position/direction type shared by the particle
//! engine and the tessellator.

mod vec2;

pub use vec2::Vec2;
