//! The wgpu-backed drawing surface
//!
//! [`FieldCanvas`] implements the engine's [`DrawSurface`] by recording a
//! frame's primitives as a tessellated vertex batch; [`present`] turns the
//! batch into one render pass and submits it. An animator tick therefore
//! maps to exactly one atomic clear-and-draw on screen.
//!
//! [`present`]: FieldCanvas::present

use driftfield_core::{Color, DrawSurface};
use driftfield_math::Vec2;

use crate::context::RenderContext;
use crate::pipeline::FieldPipeline;
use crate::tessellate::{self, Vertex2D};

/// Segments per tessellated circle; plenty for 1-3 px radii
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 12;

/// Drawing surface that batches primitives for one GPU pass per frame
pub struct FieldCanvas {
    batch: Vec<Vertex2D>,
    background: wgpu::Color,
    circle_segments: u32,
}

impl FieldCanvas {
    /// Create a canvas clearing to the given background color
    pub fn new(background: [f32; 4]) -> Self {
        Self {
            batch: Vec::new(),
            background: wgpu::Color {
                r: background[0] as f64,
                g: background[1] as f64,
                b: background[2] as f64,
                a: background[3] as f64,
            },
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }

    /// Override the circle tessellation quality
    pub fn with_circle_segments(mut self, segments: u32) -> Self {
        self.circle_segments = segments.max(3);
        self
    }

    /// Vertices recorded since the last clear
    pub fn batch(&self) -> &[Vertex2D] {
        &self.batch
    }

    /// Submit the recorded frame to the surface
    ///
    /// `SurfaceError::Lost` and `Outdated` are recoverable by reconfiguring
    /// the surface; the caller decides how to react to the rest.
    pub fn present(
        &self,
        ctx: &RenderContext,
        pipeline: &mut FieldPipeline,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        pipeline.update_screen(&ctx.queue, ctx.config.width as f32, ctx.config.height as f32);
        pipeline.upload_vertices(&ctx.device, &ctx.queue, &self.batch);

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Field Encoder"),
            });
        pipeline.render(&mut encoder, &view, self.background);

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl DrawSurface for FieldCanvas {
    fn clear(&mut self) {
        self.batch.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        tessellate::fill_circle(&mut self.batch, center, radius, color, self.circle_segments);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        tessellate::stroke_polyline(&mut self.batch, points, width, color);
    }
}
