//! Drawing surface abstraction
//!
//! The particle engine draws through this trait so the update logic can be
//! exercised against a recording double in tests, while the application
//! supplies the wgpu-backed canvas from `driftfield_render`.

use driftfield_math::Vec2;

/// RGBA color with premultiplied-nothing straight alpha, components in [0, 1]
pub type Color = [f32; 4];

/// Colors and stroke settings a field draws with
#[derive(Clone, Debug)]
pub struct DrawStyle {
    /// Point particle fill, alpha replaced per-particle
    pub point_color: [f32; 3],
    /// Trace stroke, alpha computed from history fill
    pub trace_color: [f32; 3],
    /// Trace stroke width in pixels
    pub line_width: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            point_color: [1.0, 1.0, 1.0],
            // rgb(0, 243, 255)
            trace_color: [0.0, 243.0 / 255.0, 1.0],
            line_width: 1.0,
        }
    }
}

/// A 2D drawing surface the particle field renders into
///
/// One frame is always `clear` followed by a batch of primitive calls;
/// implementations may defer actual rasterization until the frame is
/// presented, as long as the clear-then-draw sequence stays atomic per tick.
pub trait DrawSurface {
    /// Clear the whole surface to the background
    fn clear(&mut self);

    /// Draw a filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw an open polyline through `points` with the given stroke width
    ///
    /// Fewer than two points draw nothing.
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color);
}
