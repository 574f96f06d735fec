//! WGPU backend for the driftfield particle engine
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`canvas::FieldCanvas`] - [`DrawSurface`] impl batching one frame of
//!   tessellated primitives
//! - [`pipeline::FieldPipeline`] - Alpha-blended 2D pipeline with the
//!   pixel-to-NDC screen uniform
//! - [`tessellate`] - Circle and polyline triangulation
//!
//! [`DrawSurface`]: driftfield_core::DrawSurface

pub mod canvas;
pub mod context;
pub mod pipeline;
pub mod tessellate;

pub use canvas::{FieldCanvas, DEFAULT_CIRCLE_SEGMENTS};
pub use context::{ContextError, RenderContext};
pub use pipeline::{FieldPipeline, ScreenUniform};
pub use tessellate::Vertex2D;

// Re-export core types for convenience
pub use driftfield_core::{Animator, DrawStyle, DrawSurface, FieldMode, FieldParams, ParticleField, Viewport};
pub use driftfield_math::Vec2;
