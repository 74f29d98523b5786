// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Renderer-agnostic primitive descriptors
//!
//! A descriptor is plain data: a renderer instantiates its own box or sphere
//! geometry and material from these fields.

use crate::category::ElementCategory;
use crate::style::StyleEntry;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Scene-space vector (Y up)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Apply `f` to every component
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Vec3 {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f64> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// Geometry of a primitive, centered on its position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned box before rotation: x = length, y = height, z = width
    Box { dimensions: Vec3 },
    /// UV sphere
    Sphere { radius: f64, segments: u32 },
}

/// What a primitive stands for in the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimitiveRole {
    /// A construction element; `category` is `None` for unrecognized names,
    /// `index` is the record's position in `elemente`
    Element {
        category: Option<ElementCategory>,
        index: usize,
    },
    Building,
    OriginMarker,
    CenterMarker,
}

/// One drawable shape: geometry, placement and material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDescriptor {
    pub role: PrimitiveRole,
    pub shape: Shape,
    /// World position of the shape's center
    pub position: Vec3,
    /// Rotation about the vertical axis in radians
    pub rotation_y: f64,
    pub material: StyleEntry,
}

impl PrimitiveDescriptor {
    /// Box dimensions, `None` for spheres
    pub fn box_dimensions(&self) -> Option<Vec3> {
        match self.shape {
            Shape::Box { dimensions } => Some(dimensions),
            Shape::Sphere { .. } => None,
        }
    }

    /// Element category, `None` for non-element primitives and unrecognized names
    pub fn category(&self) -> Option<ElementCategory> {
        match self.role {
            PrimitiveRole::Element { category, .. } => category,
            _ => None,
        }
    }

    /// Index of the source record, `None` for non-element primitives
    pub fn source_index(&self) -> Option<usize> {
        match self.role {
            PrimitiveRole::Element { index, .. } => Some(index),
            _ => None,
        }
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.role, PrimitiveRole::Element { .. })
    }

    /// Set the source record index of an element primitive
    pub fn with_source_index(mut self, source: usize) -> Self {
        if let PrimitiveRole::Element { index, .. } = &mut self.role {
            *index = source;
        }
        self
    }
}
