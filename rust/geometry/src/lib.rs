// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! deck-scene Geometry
//!
//! Maps validated scene documents onto renderer-agnostic primitive
//! descriptors, in millimetres for desktop viewers or metres for immersive
//! sessions, and tessellates them for renderers that need triangles.

pub mod assembler;
pub mod category;
pub mod config;
pub mod error;
pub mod mapper;
pub mod mesh;
pub mod primitive;
pub mod style;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use assembler::{
    build_scene, build_scene_with, AmbientLight, AssemblerState, DirectionalLight, SceneAssembler,
    SceneDescriptor, SceneStats,
};
pub use category::{classify, ElementCategory, NameMatch};
pub use config::{FallbackDimensions, PlacementPolicy, SceneConfig, VerticalBias};
pub use error::{Error, Result};
pub use mapper::{map_element, map_element_with};
pub use mesh::{tessellate, tessellate_scene, Mesh};
pub use primitive::{PrimitiveDescriptor, PrimitiveRole, Shape, Vec3};
pub use style::{lookup, StyleEntry, STYLE_TABLE};
pub use transform::{to_scene_space, Profile, RawPlacement, ScenePlacement};
