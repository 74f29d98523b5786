// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element-to-primitive mapping
//!
//! Every element record becomes exactly one box. Missing dimensions take
//! the configured fallbacks, the material comes from the element's category
//! unless the record carries its own color, and placement goes through the
//! profile transform. Out-of-range values are passed through untouched.

use crate::category::classify;
use crate::config::SceneConfig;
use crate::primitive::{PrimitiveDescriptor, PrimitiveRole, Shape, Vec3};
use crate::style;
use crate::transform::{to_scene_space, Profile, RawPlacement};
use deck_scene_core::ElementRecord;

/// Map one element with the default configuration
pub fn map_element(record: &ElementRecord, profile: Profile) -> PrimitiveDescriptor {
    map_element_with(record, profile, &SceneConfig::default())
}

/// Map one element
///
/// The primitive's source index is 0; [`crate::build_scene`] stamps the
/// record's position with [`PrimitiveDescriptor::with_source_index`].
pub fn map_element_with(record: &ElementRecord, profile: Profile, config: &SceneConfig) -> PrimitiveDescriptor {
    let fallback = &config.fallback;
    let length = record.laenge.unwrap_or(fallback.length);
    let width = record.breite.unwrap_or(fallback.width);
    let height = record.hoehe.unwrap_or(fallback.height);

    if record.laenge.is_none() || record.breite.is_none() || record.hoehe.is_none() {
        tracing::trace!(name = %record.name, length, width, height, "Applied fallback dimensions");
    }

    let category = classify(&record.name);
    let material = match record.farbe {
        Some(color) => style::resolve(category).with_color(color),
        None => style::resolve(category),
    };

    // Plan y is the depth axis, plan z the elevation
    let placement = to_scene_space(
        &RawPlacement {
            x: record.mittelpunkt.x,
            y: record.mittelpunkt.y,
            elevation: record.mittelpunkt.z,
            height,
            rotation_deg: record.drehung,
        },
        profile,
        &config.placement,
    );

    PrimitiveDescriptor {
        role: PrimitiveRole::Element { category, index: 0 },
        shape: Shape::Box {
            dimensions: profile.scale_vec(Vec3::new(length, height, width)),
        },
        position: placement.position,
        rotation_y: placement.rotation_y,
        material,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ElementCategory;
    use crate::config::VerticalBias;
    use approx::assert_relative_eq;
    use deck_scene_core::ElementCenter;

    fn record(name: &str) -> ElementRecord {
        ElementRecord::new(name, ElementCenter { x: 10.0, y: 20.0, z: 5.0 })
            .with_dimensions(Some(100.0), Some(40.0), None)
            .with_rotation(90.0)
    }

    #[test]
    fn test_explicit_color_wins() {
        for name in ["VARIO FIX I", "Konstruktionsbalken", "Gartenhaus"] {
            let prim = map_element(&record(name).with_color(0x123456), Profile::Desktop);
            assert_eq!(prim.material.color, 0x123456, "{}", name);
        }
        // Zero is a color too
        let prim = map_element(&record("VARIO FIX I").with_color(0), Profile::Desktop);
        assert_eq!(prim.material.color, 0x000000);
    }

    #[test]
    fn test_explicit_color_keeps_category_opacity() {
        let prim = map_element(&record("Befestigungsschraube").with_color(0xabcdef), Profile::Desktop);
        assert_eq!(prim.material.opacity, 0.8);
        assert_eq!(prim.category(), Some(ElementCategory::Befestigungsschraube));
    }

    #[test]
    fn test_category_color() {
        let prim = map_element(&record("VARIO FIX II (komplett)"), Profile::Desktop);
        assert_eq!(prim.material, style::lookup(ElementCategory::VarioFix));
    }

    #[test]
    fn test_unmatched_name_is_white() {
        let prim = map_element(&record("Randabschluss"), Profile::Desktop);
        assert_eq!(prim.material.color, 0xffffff);
        assert_eq!(prim.material.opacity, 0.7);
        assert!(prim.material.transparent);
        assert_eq!(prim.role, PrimitiveRole::Element { category: None, index: 0 });
    }

    #[test]
    fn test_all_dimensions_missing() {
        let bare = ElementRecord::new("Konstruktionsholz", ElementCenter { x: 0.0, y: 0.0, z: 0.0 });
        let prim = map_element(&bare, Profile::Desktop);
        assert_eq!(prim.box_dimensions(), Some(Vec3::new(30.0, 50.0, 30.0)));
        assert_eq!(prim.position.y, 25.0);

        let prim = map_element(&bare, Profile::immersive());
        let dims = prim.box_dimensions().unwrap();
        assert_relative_eq!(dims.x, 0.03);
        assert_relative_eq!(dims.y, 0.05);
        assert_relative_eq!(dims.z, 0.03);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let odd = ElementRecord::new("Barfußdiele", ElementCenter { x: -5.0, y: -6.0, z: -7.0 })
            .with_dimensions(Some(-100.0), Some(0.0), Some(-20.0));
        let prim = map_element(&odd, Profile::Desktop);
        assert_eq!(prim.box_dimensions(), Some(Vec3::new(-100.0, -20.0, 0.0)));
        assert_eq!(prim.position, Vec3::new(-5.0, -17.0, -6.0));
    }

    #[test]
    fn test_configured_bias() {
        let config = SceneConfig::default().with_bias(Profile::Desktop, VerticalBias::None);
        let prim = map_element_with(&record("Konstruktionsbalken"), Profile::Desktop, &config);
        assert_eq!(prim.position.y, 5.0);
    }
}
