// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desktop perspective camera
//!
//! The camera sits [`CAMERA_DISTANCE`] millimetres above the suggested
//! viewpoint and looks at the scene origin. Immersive sessions own their
//! camera pose, so no camera exists there.

use deck_scene_core::CameraPosition;
use deck_scene_geometry::Vec3;
use nalgebra::{Isometry3, Matrix4, Perspective3, Vector3};
use serde::{Deserialize, Serialize};

/// Vertical field of view, degrees
pub const CAMERA_FOV_DEGREES: f64 = 75.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 10_000.0;
/// Offset added to the suggested viewpoint along Z, millimetres
pub const CAMERA_DISTANCE: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub aspect: f64,
}

impl Camera {
    /// Camera for a document's optional `kamera` entry
    pub fn for_viewpoint(kamera: Option<CameraPosition>, aspect: f64) -> Self {
        let base = kamera.unwrap_or_default();
        Self {
            position: Vec3::new(base.x, base.y, base.z + CAMERA_DISTANCE),
            target: Vec3::default(),
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            aspect,
        }
    }

    pub fn view(&self) -> Isometry3<f64> {
        Isometry3::look_at_rh(&self.position.to_point(), &self.target.to_point(), &Vector3::y())
    }

    pub fn projection(&self) -> Perspective3<f64> {
        Perspective3::new(self.aspect, self.fov_degrees.to_radians(), self.near, self.far)
    }

    /// Combined view-projection matrix (OpenGL clip conventions)
    pub fn view_projection(&self) -> Matrix4<f64> {
        self.projection().as_matrix() * self.view().to_homogeneous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;

    #[test]
    fn test_default_viewpoint() {
        let camera = Camera::for_viewpoint(None, 1.5);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 1000.0));
        assert_eq!(camera.fov_degrees, 75.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 10_000.0);
    }

    #[test]
    fn test_viewpoint_offset_along_z() {
        let kamera = CameraPosition { x: 1500.0, y: 4000.0, z: 5000.0 };
        let camera = Camera::for_viewpoint(Some(kamera), 1.0);
        assert_eq!(camera.position, Vec3::new(1500.0, 4000.0, 6000.0));
        assert_eq!(camera.target, Vec3::default());
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = Camera::for_viewpoint(None, 16.0 / 9.0);
        let clip = camera.view_projection() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-9);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-9);
        let depth = clip.z / clip.w;
        assert!(depth > -1.0 && depth < 1.0);
    }
}
