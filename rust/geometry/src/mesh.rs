// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle meshes for renderers without native box or sphere primitives
//!
//! [`tessellate`] expands a primitive descriptor into world-space triangles,
//! applying its rotation about Y and its translation.

use crate::assembler::SceneDescriptor;
use crate::primitive::{PrimitiveDescriptor, Shape, Vec3};
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

/// Triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Merge another mesh into this one
    pub fn merge(&mut self, other: &Mesh) {
        if other.is_empty() {
            return;
        }

        let vertex_offset = self.vertex_count() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|&i| i + vertex_offset));
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Calculate bounds (min, max)
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);

        self.positions.chunks_exact(3).for_each(|chunk| {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        });

        (min, max)
    }
}

/// World transform of a primitive: rotation about Y, then translation
fn placement(primitive: &PrimitiveDescriptor) -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::from(Vector3::from(primitive.position)),
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), primitive.rotation_y),
    )
}

/// Tessellate a primitive into a world-space mesh
pub fn tessellate(primitive: &PrimitiveDescriptor) -> Mesh {
    let iso = placement(primitive);
    match primitive.shape {
        Shape::Box { dimensions } => box_mesh(dimensions, &iso),
        Shape::Sphere { radius, segments } => sphere_mesh(radius, segments.max(3), &iso),
    }
}

/// Tessellate every primitive of a scene, in draw order
pub fn tessellate_scene(scene: &SceneDescriptor) -> Vec<Mesh> {
    scene.iter_all().map(tessellate).collect()
}

// Face normal plus the two in-plane axes, ordered so (u x v) == normal
const BOX_FACES: [([f64; 3], [f64; 3], [f64; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

fn box_mesh(dimensions: Vec3, iso: &Isometry3<f64>) -> Mesh {
    let half = Vector3::new(dimensions.x / 2.0, dimensions.y / 2.0, dimensions.z / 2.0);
    let mut mesh = Mesh::with_capacity(24, 36);

    for (normal, u, v) in BOX_FACES {
        let n = Vector3::from(normal);
        let u = Vector3::from(u);
        let v = Vector3::from(v);
        let base = mesh.vertex_count() as u32;

        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let local = n + u * su + v * sv;
            let corner = Point3::from(local.component_mul(&half));
            mesh.add_vertex(iso * corner, iso * n);
        }

        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    mesh
}

fn sphere_mesh(radius: f64, segments: u32, iso: &Isometry3<f64>) -> Mesh {
    let rings = segments;
    let columns = segments;
    let stride = columns + 1;
    let mut mesh = Mesh::with_capacity(((rings + 1) * stride) as usize, (rings * columns * 6) as usize);

    for ring in 0..=rings {
        let theta = std::f64::consts::PI * ring as f64 / rings as f64;
        for column in 0..=columns {
            let phi = std::f64::consts::TAU * column as f64 / columns as f64;
            let n = Vector3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            mesh.add_vertex(iso * Point3::from(n * radius), iso * n);
        }
    }

    for ring in 0..rings {
        for column in 0..columns {
            let a = ring * stride + column;
            let b = a + stride;
            // Poles collapse one triangle of each quad
            if ring != 0 {
                mesh.add_triangle(a, b, a + 1);
            }
            if ring != rings - 1 {
                mesh.add_triangle(a + 1, b, b + 1);
            }
        }
    }

    mesh
}
