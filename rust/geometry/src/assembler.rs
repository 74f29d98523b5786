// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene assembly
//!
//! Turns a validated scene document into a [`SceneDescriptor`]: one box per
//! element, the building block, the markers and two fixed lights. Builds are
//! pure; [`SceneAssembler`] adds the empty/populated state a host needs to
//! keep the last good scene when a rebuild fails.

use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::mapper::map_element_with;
use crate::primitive::{PrimitiveDescriptor, PrimitiveRole, Shape, Vec3};
use crate::style::{BUILDING_STYLE, CENTER_MARKER_STYLE, MARKER_STYLE};
use crate::transform::{to_scene_space, to_scene_space_centered, Profile, RawPlacement};
use crate::ElementCategory;
use deck_scene_core::{parse_scene_data, Building, GroundPoint, Marker, SceneData};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;

/// Edge length of the origin marker cube, mm
pub const MARKER_SIZE: f64 = 100.0;

/// Radius of the base surface center sphere, mm
pub const CENTER_MARKER_RADIUS: f64 = 50.0;

/// Width and height segments of the center sphere
pub const CENTER_MARKER_SEGMENTS: u32 = 32;

/// Position of the directional light, mm
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(1000.0, 1000.0, 1000.0);

/// Non-directional fill light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: u32,
    pub intensity: f64,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            intensity: 0.5,
        }
    }
}

/// Directional light shining from `position` towards the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f64,
    pub position: Vec3,
}

impl DirectionalLight {
    /// The overhead-diagonal light in the given profile's unit
    pub fn overhead(profile: Profile) -> Self {
        Self {
            color: 0xffffff,
            intensity: 0.8,
            position: profile.scale_vec(DIRECTIONAL_LIGHT_POSITION),
        }
    }
}

/// Complete, immutable scene for one data load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    pub profile: Profile,
    /// One primitive per element, in document order
    pub primitives: Vec<PrimitiveDescriptor>,
    pub building: PrimitiveDescriptor,
    /// Origin marker, followed by the center marker in desktop profile
    pub markers: SmallVec<[PrimitiveDescriptor; 2]>,
    pub ambient_light: AmbientLight,
    pub directional_light: DirectionalLight,
}

impl SceneDescriptor {
    /// Elements, building and markers in draw order
    pub fn iter_all(&self) -> impl Iterator<Item = &PrimitiveDescriptor> {
        self.primitives
            .iter()
            .chain(std::iter::once(&self.building))
            .chain(self.markers.iter())
    }

    /// Number of drawable primitives, including building and markers
    pub fn primitive_count(&self) -> usize {
        self.primitives.len() + 1 + self.markers.len()
    }

    /// Element counts per category
    pub fn stats(&self) -> SceneStats {
        let mut by_category: FxHashMap<ElementCategory, usize> = FxHashMap::default();
        let mut uncategorized = 0;
        for primitive in &self.primitives {
            match primitive.category() {
                Some(category) => *by_category.entry(category).or_insert(0) += 1,
                None => uncategorized += 1,
            }
        }
        SceneStats {
            profile: self.profile,
            elements: self.primitives.len(),
            by_category,
            uncategorized,
            primitives: self.primitive_count(),
        }
    }
}

/// Summary of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStats {
    pub profile: Profile,
    pub elements: usize,
    pub by_category: FxHashMap<ElementCategory, usize>,
    pub uncategorized: usize,
    pub primitives: usize,
}

/// Build a scene with the default configuration
pub fn build_scene(data: &SceneData, profile: Profile) -> Result<SceneDescriptor> {
    build_scene_with(data, profile, &SceneConfig::default())
}

/// Build a scene
pub fn build_scene_with(data: &SceneData, profile: Profile, config: &SceneConfig) -> Result<SceneDescriptor> {
    let building = data
        .building()
        .ok_or(Error::CoreError(deck_scene_core::Error::EmptyList("gebaeude")))?;

    let primitives: Vec<PrimitiveDescriptor> = data
        .elemente
        .iter()
        .enumerate()
        .map(|(index, record)| map_element_with(record, profile, config).with_source_index(index))
        .collect();

    let mut markers = SmallVec::new();
    markers.push(origin_marker(&data.marker, profile));
    if !profile.is_immersive() {
        markers.push(center_marker(&data.basisflaechemittelpunkt, profile));
    }

    let scene = SceneDescriptor {
        profile,
        primitives,
        building: building_block(building, profile, config),
        markers,
        ambient_light: AmbientLight::default(),
        directional_light: DirectionalLight::overhead(profile),
    };

    tracing::debug!(
        profile = profile.name(),
        elements = scene.primitives.len(),
        primitives = scene.primitive_count(),
        "Built scene"
    );

    Ok(scene)
}

/// Building block: height is half the building's width, resting on the ground
fn building_block(building: &Building, profile: Profile, config: &SceneConfig) -> PrimitiveDescriptor {
    let height = building.breite / 2.0;
    let placement = to_scene_space(
        &RawPlacement {
            x: building.mittelpunkt.x,
            y: building.mittelpunkt.y,
            elevation: 0.0,
            height,
            rotation_deg: 0.0,
        },
        profile,
        &config.placement,
    );

    PrimitiveDescriptor {
        role: PrimitiveRole::Building,
        shape: Shape::Box {
            dimensions: profile.scale_vec(Vec3::new(building.laenge, height, building.breite)),
        },
        position: placement.position,
        rotation_y: placement.rotation_y,
        material: BUILDING_STYLE,
    }
}

/// Origin marker cube, centered on the marker's elevation
fn origin_marker(marker: &Marker, profile: Profile) -> PrimitiveDescriptor {
    let placement = to_scene_space_centered(
        &RawPlacement {
            x: marker.x,
            y: marker.y,
            elevation: marker.z,
            height: MARKER_SIZE,
            rotation_deg: marker.drehung,
        },
        profile,
    );

    PrimitiveDescriptor {
        role: PrimitiveRole::OriginMarker,
        shape: Shape::Box {
            dimensions: profile.scale_vec(Vec3::new(MARKER_SIZE, MARKER_SIZE, MARKER_SIZE)),
        },
        position: placement.position,
        rotation_y: placement.rotation_y,
        material: MARKER_STYLE,
    }
}

/// Sphere resting on the base surface center
fn center_marker(center: &GroundPoint, profile: Profile) -> PrimitiveDescriptor {
    let placement = to_scene_space_centered(
        &RawPlacement {
            x: center.x,
            y: center.y,
            elevation: CENTER_MARKER_RADIUS,
            height: 0.0,
            rotation_deg: 0.0,
        },
        profile,
    );

    PrimitiveDescriptor {
        role: PrimitiveRole::CenterMarker,
        shape: Shape::Sphere {
            radius: profile.scale_length(CENTER_MARKER_RADIUS),
            segments: CENTER_MARKER_SEGMENTS,
        },
        position: placement.position,
        rotation_y: placement.rotation_y,
        material: CENTER_MARKER_STYLE,
    }
}

/// Assembler state
#[derive(Debug, Clone, Default)]
pub enum AssemblerState {
    /// No data loaded yet
    #[default]
    Empty,
    /// A complete scene is available
    Populated(Arc<SceneDescriptor>),
}

/// Holds the last successfully built scene
///
/// A rebuild replaces the scene wholesale; a failed rebuild leaves the
/// previous scene in place.
#[derive(Debug, Clone, Default)]
pub struct SceneAssembler {
    config: SceneConfig,
    state: AssemblerState,
}

impl SceneAssembler {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            state: AssemblerState::Empty,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &AssemblerState {
        &self.state
    }

    pub fn is_populated(&self) -> bool {
        matches!(self.state, AssemblerState::Populated(_))
    }

    /// The current scene, if any
    pub fn scene(&self) -> Option<Arc<SceneDescriptor>> {
        match &self.state {
            AssemblerState::Empty => None,
            AssemblerState::Populated(scene) => Some(Arc::clone(scene)),
        }
    }

    /// Build a scene from validated data and publish it
    pub fn rebuild(&mut self, data: &SceneData, profile: Profile) -> Result<Arc<SceneDescriptor>> {
        let scene = Arc::new(build_scene_with(data, profile, &self.config)?);
        self.state = AssemblerState::Populated(Arc::clone(&scene));
        Ok(scene)
    }

    /// Parse, validate, build and publish in one step
    pub fn rebuild_from_json(&mut self, json: &str, profile: Profile) -> Result<Arc<SceneDescriptor>> {
        let data = parse_scene_data(json).map_err(|e| {
            tracing::warn!(error = %e, "Scene rebuild aborted, keeping previous scene");
            Error::from(e)
        })?;
        self.rebuild(&data, profile)
    }
}
