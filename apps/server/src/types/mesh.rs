// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data types for serialization.

use deck_scene_geometry::{tessellate, PrimitiveDescriptor, PrimitiveRole, SceneDescriptor};
use serde::{Deserialize, Serialize};

/// One tessellated primitive with its material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshData {
    /// What the primitive represents.
    pub role: PrimitiveRole,
    /// Vertex positions (x, y, z triplets).
    pub positions: Vec<f32>,
    /// Vertex normals (x, y, z triplets).
    pub normals: Vec<f32>,
    /// Triangle indices.
    pub indices: Vec<u32>,
    /// RGBA color [r, g, b, a] in 0-1 range.
    pub color: [f32; 4],
    pub transparent: bool,
}

impl MeshData {
    pub fn from_primitive(primitive: &PrimitiveDescriptor) -> Self {
        let mesh = tessellate(primitive);
        Self {
            role: primitive.role,
            positions: mesh.positions,
            normals: mesh.normals,
            indices: mesh.indices,
            color: primitive.material.rgba(),
            transparent: primitive.material.transparent,
        }
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// All meshes of a scene, in draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshResponse {
    pub profile: String,
    pub meshes: Vec<MeshData>,
    pub total_vertices: usize,
    pub total_triangles: usize,
}

impl MeshResponse {
    pub fn from_scene(scene: &SceneDescriptor) -> Self {
        let meshes: Vec<MeshData> = scene.iter_all().map(MeshData::from_primitive).collect();
        Self {
            profile: scene.profile.name().to_string(),
            total_vertices: meshes.iter().map(MeshData::vertex_count).sum(),
            total_triangles: meshes.iter().map(MeshData::triangle_count).sum(),
            meshes,
        }
    }
}
