//! CPU-side tessellation of 2D primitives
//!
//! The canvas records circles and polylines as a flat triangle list in
//! pixel coordinates; the shader maps pixels to NDC. All output goes into a
//! caller-owned batch so one frame is a single vertex upload.

use bytemuck::{Pod, Zeroable};

use driftfield_core::Color;
use driftfield_math::Vec2;

/// A vertex in surface pixel coordinates with straight-alpha color
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex2D {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex2D {
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Append a filled circle as a triangle fan
///
/// Produces `segments` triangles (3 vertices each). Non-positive radii and
/// fewer than 3 segments produce nothing.
pub fn fill_circle(out: &mut Vec<Vertex2D>, center: Vec2, radius: f32, color: Color, segments: u32) {
    if radius <= 0.0 || segments < 3 {
        return;
    }

    let step = std::f32::consts::TAU / segments as f32;
    for i in 0..segments {
        let a0 = step * i as f32;
        let a1 = step * (i + 1) as f32;
        out.push(Vertex2D::new(center, color));
        out.push(Vertex2D::new(
            center + Vec2::new(a0.cos(), a0.sin()) * radius,
            color,
        ));
        out.push(Vertex2D::new(
            center + Vec2::new(a1.cos(), a1.sin()) * radius,
            color,
        ));
    }
}

/// Append an open polyline as one quad (two triangles) per segment
///
/// Segments shorter than an epsilon are skipped; no joins are generated,
/// which is invisible at the hairline widths the field draws with.
pub fn stroke_polyline(out: &mut Vec<Vertex2D>, points: &[Vec2], width: f32, color: Color) {
    if points.len() < 2 || width <= 0.0 {
        return;
    }

    let half = width * 0.5;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dir = b - a;
        if dir.length_squared() < 1e-12 {
            continue;
        }
        let offset = dir.normalized().perp() * half;

        let (a0, a1) = (a - offset, a + offset);
        let (b0, b1) = (b - offset, b + offset);

        out.push(Vertex2D::new(a0, color));
        out.push(Vertex2D::new(b0, color));
        out.push(Vertex2D::new(b1, color));

        out.push(Vertex2D::new(a0, color));
        out.push(Vertex2D::new(b1, color));
        out.push(Vertex2D::new(a1, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_vertex2d_layout() {
        // 2 floats position + 4 floats color = 24 bytes, f32 aligned
        assert_eq!(std::mem::size_of::<Vertex2D>(), 24);
        assert_eq!(std::mem::align_of::<Vertex2D>(), 4);
    }

    #[test]
    fn test_circle_vertex_count() {
        let mut out = Vec::new();
        fill_circle(&mut out, Vec2::new(10.0, 10.0), 2.0, WHITE, 12);
        assert_eq!(out.len(), 12 * 3);
    }

    #[test]
    fn test_circle_rim_on_radius() {
        let center = Vec2::new(5.0, 5.0);
        let mut out = Vec::new();
        fill_circle(&mut out, center, 3.0, WHITE, 8);

        for triangle in out.chunks(3) {
            // First vertex of each triangle is the center, the others sit
            // on the rim
            assert_eq!(triangle[0].position, center.to_array());
            for v in &triangle[1..] {
                let p = Vec2::new(v.position[0], v.position[1]);
                assert!(((p - center).length() - 3.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_circle_degenerate_inputs() {
        let mut out = Vec::new();
        fill_circle(&mut out, Vec2::ZERO, 0.0, WHITE, 12);
        fill_circle(&mut out, Vec2::ZERO, -1.0, WHITE, 12);
        fill_circle(&mut out, Vec2::ZERO, 1.0, WHITE, 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_polyline_vertex_count() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let mut out = Vec::new();
        stroke_polyline(&mut out, &points, 1.0, WHITE);
        // Two segments, one quad (6 vertices) each
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn test_polyline_quad_offset_by_half_width() {
        let points = [Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0)];
        let mut out = Vec::new();
        stroke_polyline(&mut out, &points, 2.0, WHITE);

        // Horizontal segment: corners offset vertically by half the width
        for v in &out {
            assert!((v.position[1] - 4.0).abs() < 1e-4 || (v.position[1] - 6.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_polyline_skips_zero_length_segments() {
        let points = [Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 1.0)];
        let mut out = Vec::new();
        stroke_polyline(&mut out, &points, 1.0, WHITE);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_polyline_degenerate_inputs() {
        let mut out = Vec::new();
        stroke_polyline(&mut out, &[Vec2::ZERO], 1.0, WHITE);
        stroke_polyline(&mut out, &[], 1.0, WHITE);
        stroke_polyline(&mut out, &[Vec2::ZERO, Vec2::X], 0.0, WHITE);
        assert!(out.is_empty());
    }

    #[test]
    fn test_color_carried_through() {
        let color = [0.0, 0.5, 1.0, 0.3];
        let mut out = Vec::new();
        fill_circle(&mut out, Vec2::ZERO, 1.0, color, 4);
        assert!(out.iter().all(|v| v.color == color));
    }
}
