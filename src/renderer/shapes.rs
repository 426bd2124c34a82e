//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segment count that keeps edges smooth without flooding small circles
pub fn segments_for_radius(radius: f32) -> u32 {
    (radius * 0.75).clamp(24.0, 64.0) as u32
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let inner_radius = inner_radius.max(0.0);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_stays_on_radius() {
        let center = Vec2::new(100.0, 50.0);
        let verts = circle(center, 20.0, [1.0; 4], 32);
        assert_eq!(verts.len(), 96);
        for v in &verts {
            let d = Vec2::from(v.position).distance(center);
            assert!(d < 20.0 + 1e-3);
        }
    }

    #[test]
    fn test_ring_band() {
        let center = Vec2::ZERO;
        let verts = ring(center, 13.0, 15.0, [1.0; 4], 24);
        assert_eq!(verts.len(), 24 * 6);
        for v in &verts {
            let d = Vec2::from(v.position).length();
            assert!(d > 13.0 - 1e-3 && d < 15.0 + 1e-3);
        }
    }

    #[test]
    fn test_segment_bounds() {
        assert_eq!(segments_for_radius(20.0), 24);
        assert_eq!(segments_for_radius(60.0), 45);
        assert_eq!(segments_for_radius(500.0), 64);
    }
}
