// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tessellated scene meshes for JavaScript renderers

use deck_scene_geometry::{tessellate, PrimitiveDescriptor, PrimitiveRole, SceneDescriptor};
use wasm_bindgen::prelude::*;

/// One tessellated primitive with its material
#[wasm_bindgen]
#[derive(Clone)]
pub struct MeshDataJs {
    role: &'static str,
    category: Option<&'static str>,
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
    color: [f32; 4], // RGBA
    transparent: bool,
}

#[wasm_bindgen]
impl MeshDataJs {
    /// "element", "building", "origin_marker" or "center_marker"
    #[wasm_bindgen(getter)]
    pub fn role(&self) -> String {
        self.role.to_string()
    }

    /// Style category key for elements, if the name matched one
    #[wasm_bindgen(getter)]
    pub fn category(&self) -> Option<String> {
        self.category.map(str::to_string)
    }

    /// Get positions as Float32Array (copy to JS)
    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.positions[..])
    }

    /// Get normals as Float32Array (copy to JS)
    #[wasm_bindgen(getter)]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    /// Get indices as Uint32Array (copy to JS)
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Get color as [r, g, b, a] array
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> Vec<f32> {
        self.color.to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn transparent(&self) -> bool {
        self.transparent
    }

    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[wasm_bindgen(getter, js_name = triangleCount)]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned extents [dx, dy, dz] in scene units
    #[wasm_bindgen(js_name = boundingBoxDimensions)]
    pub fn bounding_box_dimensions(&self) -> Vec<f32> {
        compute_bbox_dimensions(&self.positions)
    }
}

impl MeshDataJs {
    pub fn from_primitive(primitive: &PrimitiveDescriptor) -> Self {
        let mesh = tessellate(primitive);
        let (role, category) = match primitive.role {
            PrimitiveRole::Element { category, .. } => ("element", category.map(|c| c.key())),
            PrimitiveRole::Building => ("building", None),
            PrimitiveRole::OriginMarker => ("origin_marker", None),
            PrimitiveRole::CenterMarker => ("center_marker", None),
        };
        Self {
            role,
            category,
            positions: mesh.positions,
            normals: mesh.normals,
            indices: mesh.indices,
            color: primitive.material.rgba(),
            transparent: primitive.material.transparent,
        }
    }
}

/// All meshes of one scene, in draw order
#[wasm_bindgen]
pub struct MeshCollection {
    meshes: Vec<MeshDataJs>,
    profile: String,
}

#[wasm_bindgen]
impl MeshCollection {
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.meshes.len()
    }

    /// Get mesh at index
    #[wasm_bindgen]
    pub fn get(&self, index: usize) -> Option<MeshDataJs> {
        self.meshes.get(index).cloned()
    }

    /// "desktop" or "immersive"
    #[wasm_bindgen(getter)]
    pub fn profile(&self) -> String {
        self.profile.clone()
    }

    #[wasm_bindgen(getter, js_name = totalVertices)]
    pub fn total_vertices(&self) -> usize {
        self.meshes.iter().map(|m| m.positions.len() / 3).sum()
    }

    #[wasm_bindgen(getter, js_name = totalTriangles)]
    pub fn total_triangles(&self) -> usize {
        self.meshes.iter().map(|m| m.indices.len() / 3).sum()
    }
}

impl MeshCollection {
    pub fn from_scene(scene: &SceneDescriptor) -> Self {
        Self {
            meshes: scene.iter_all().map(MeshDataJs::from_primitive).collect(),
            profile: scene.profile.name().to_string(),
        }
    }
}

fn compute_bbox_dimensions(positions: &[f32]) -> Vec<f32> {
    if positions.len() < 3 {
        return vec![0.0, 0.0, 0.0];
    }
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for chunk in positions.chunks_exact(3) {
        for i in 0..3 {
            min[i] = min[i].min(chunk[i]);
            max[i] = max[i].max(chunk[i]);
        }
    }
    vec![max[0] - min[0], max[1] - min[1], max[2] - min[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_of_empty_positions() {
        assert_eq!(compute_bbox_dimensions(&[]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_bbox_extents() {
        let positions = [0.0, 0.0, 0.0, 2.0, -1.0, 4.0, 1.0, 3.0, 0.5];
        assert_eq!(compute_bbox_dimensions(&positions), vec![2.0, 4.0, 4.0]);
    }
}
