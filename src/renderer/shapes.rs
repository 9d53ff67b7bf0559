//! Shape generation for 3D primitives
//!
//! Triangle lists with per-face (box) or per-vertex (sphere) normals,
//! assembled on the CPU and uploaded once per frame.

use glam::Vec3;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned box centered at `center`
pub fn cuboid(center: Vec3, half_extents: Vec3, color: [f32; 4]) -> Vec<Vertex> {
    let h = half_extents;
    // One entry per face: (normal, four corners counter-clockwise seen from outside)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::X,
            [
                Vec3::new(h.x, -h.y, -h.z),
                Vec3::new(h.x, h.y, -h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(h.x, -h.y, h.z),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-h.x, -h.y, h.z),
                Vec3::new(-h.x, h.y, h.z),
                Vec3::new(-h.x, h.y, -h.z),
                Vec3::new(-h.x, -h.y, -h.z),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-h.x, h.y, -h.z),
                Vec3::new(-h.x, h.y, h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(h.x, h.y, -h.z),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-h.x, -h.y, h.z),
                Vec3::new(-h.x, -h.y, -h.z),
                Vec3::new(h.x, -h.y, -h.z),
                Vec3::new(h.x, -h.y, h.z),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(-h.x, -h.y, h.z),
                Vec3::new(h.x, -h.y, h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(-h.x, h.y, h.z),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(h.x, -h.y, -h.z),
                Vec3::new(-h.x, -h.y, -h.z),
                Vec3::new(-h.x, h.y, -h.z),
                Vec3::new(h.x, h.y, -h.z),
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (normal, [a, b, c, d]) in faces {
        vertices.push(Vertex::new(center + a, normal, color));
        vertices.push(Vertex::new(center + b, normal, color));
        vertices.push(Vertex::new(center + c, normal, color));

        vertices.push(Vertex::new(center + a, normal, color));
        vertices.push(Vertex::new(center + c, normal, color));
        vertices.push(Vertex::new(center + d, normal, color));
    }
    vertices
}

/// Generate vertices for a UV sphere centered at the origin
pub fn uv_sphere(radius: f32, color: [f32; 4], sectors: u32, stacks: u32) -> Vec<Vertex> {
    let point = |stack: u32, sector: u32| -> Vec3 {
        // Latitude from +Y pole to -Y pole
        let phi = PI * stack as f32 / stacks as f32;
        let theta = 2.0 * PI * sector as f32 / sectors as f32;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let mut vertices = Vec::with_capacity((sectors * stacks * 6) as usize);
    for stack in 0..stacks {
        for sector in 0..sectors {
            let p00 = point(stack, sector);
            let p01 = point(stack, sector + 1);
            let p10 = point(stack + 1, sector);
            let p11 = point(stack + 1, sector + 1);

            // Sphere normal is the normalized position
            let push = |vertices: &mut Vec<Vertex>, p: Vec3| {
                vertices.push(Vertex::new(p, p.normalize_or_zero(), color));
            };

            push(&mut vertices, p00);
            push(&mut vertices, p10);
            push(&mut vertices, p11);

            push(&mut vertices, p00);
            push(&mut vertices, p11);
            push(&mut vertices, p01);
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_triangle_count() {
        let verts = cuboid(Vec3::ZERO, Vec3::splat(1.0), [1.0; 4]);
        // 6 faces, 2 triangles each
        assert_eq!(verts.len(), 36);
    }

    #[test]
    fn test_cuboid_extents() {
        let center = Vec3::new(0.0, -0.5, 0.0);
        let half = Vec3::new(17.0, 0.05, 10.0);
        let verts = cuboid(center, half, [1.0; 4]);
        for v in &verts {
            assert!((v.position[0] - center.x).abs() <= half.x + 1e-6);
            assert!((v.position[1] - center.y).abs() <= half.y + 1e-6);
            assert!((v.position[2] - center.z).abs() <= half.z + 1e-6);
        }
    }

    #[test]
    fn test_sphere_points_on_radius() {
        let verts = uv_sphere(0.3, [1.0; 4], 16, 8);
        assert_eq!(verts.len(), 16 * 8 * 6);
        for v in &verts {
            let r = Vec3::from_array(v.position).length();
            assert!((r - 0.3).abs() < 1e-5);
        }
    }
}
