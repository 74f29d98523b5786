// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scene builds from JSON documents.

use approx::assert_relative_eq;
use deck_scene_core::{parse_scene_data, ElementCenter, ElementRecord};
use deck_scene_geometry::{
    build_scene, build_scene_with, lookup, map_element, ElementCategory, Profile, SceneAssembler,
    SceneConfig, Shape, Vec3, VerticalBias,
};
use std::f64::consts::FRAC_PI_2;

const DOCUMENT: &str = r#"{
    "elemente": [
        { "name": "VARIO FIX I (komplett)", "artikelnummer": "MWVFUK100000SW-40", "drehung": 0,
          "mittelpunkt": { "x": 74, "y": 188, "z": 0 }, "laenge": 148, "breite": 295,
          "hoehe": null, "farbe": null, "position": 1, "anzahl": 1, "typ": "UK-Platte" },
        { "name": "Konstruktionsbalken", "laenge": 100, "breite": 40, "hoehe": null,
          "mittelpunkt": { "x": 10, "y": 20, "z": 5 }, "drehung": 90 },
        { "name": "Konstruktionsbälkchen", "laenge": null, "breite": null, "hoehe": 60,
          "mittelpunkt": { "x": 300, "y": 120, "z": 0 }, "drehung": 45 },
        { "name": "Befestigungsschraube 5x60", "mittelpunkt": { "x": 300, "y": 120, "z": 60 } },
        { "name": "Konstruktionsholz", "laenge": 3000, "breite": 60, "hoehe": 40,
          "mittelpunkt": { "x": 1500, "y": 600, "z": 0 }, "drehung": 0, "farbe": 9127187 },
        { "name": "Barfußdiele", "laenge": 3000, "breite": 145, "hoehe": 21,
          "mittelpunkt": { "x": 1500, "y": 600, "z": 40 }, "drehung": 0 },
        { "name": "Abschlussleiste", "laenge": 3000, "breite": 20, "hoehe": 70,
          "mittelpunkt": { "x": 1500, "y": 1300, "z": 0 }, "drehung": 0 }
    ],
    "gebaeude": [ { "laenge": 8000, "breite": 6000, "mittelpunkt": { "x": 1500, "y": -3000 } } ],
    "marker": { "x": 0, "y": 0, "z": 0, "drehung": 0 },
    "basisflaechemittelpunkt": { "x": 1500, "y": 650 },
    "kamera": { "x": 1500, "y": 4000, "z": 5000 }
}"#;

fn beam() -> ElementRecord {
    ElementRecord::new("Konstruktionsbalken", ElementCenter { x: 10.0, y: 20.0, z: 5.0 })
        .with_dimensions(Some(100.0), Some(40.0), None)
        .with_rotation(90.0)
}

#[test]
fn beam_on_desktop() {
    let prim = map_element(&beam(), Profile::Desktop);
    assert_eq!(prim.box_dimensions(), Some(Vec3::new(100.0, 50.0, 40.0)));
    assert_eq!(prim.material.color, 0x800080);
    assert_relative_eq!(prim.rotation_y, FRAC_PI_2);
    assert_eq!(prim.position, Vec3::new(10.0, 5.0 + 25.0, 20.0));
}

#[test]
fn beam_in_immersive_session() {
    let prim = map_element(&beam(), Profile::immersive());
    let dims = prim.box_dimensions().unwrap();
    assert_relative_eq!(dims.x, 0.1);
    assert_relative_eq!(dims.y, 0.05);
    assert_relative_eq!(dims.z, 0.04);
    assert_relative_eq!(prim.position.x, 0.01);
    assert_relative_eq!(prim.position.y, (5.0 + 50.0) / 1000.0);
    assert_relative_eq!(prim.position.z, 0.02);
    assert_relative_eq!(prim.rotation_y, FRAC_PI_2);
}

#[test]
fn explicit_color_always_wins() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    let scene = build_scene(&data, Profile::Desktop).unwrap();
    for (record, prim) in data.elemente.iter().zip(&scene.primitives) {
        if let Some(color) = record.farbe {
            assert_eq!(prim.material.color, color, "{}", record.name);
        }
    }
    assert_eq!(scene.primitives[4].material.color, 9127187);
}

#[test]
fn vario_fix_without_color_uses_table() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    let scene = build_scene(&data, Profile::Desktop).unwrap();
    for (record, prim) in data.elemente.iter().zip(&scene.primitives) {
        if record.name.contains("VARIO FIX") && record.farbe.is_none() {
            assert_eq!(prim.material.color, lookup(ElementCategory::VarioFix).color);
        }
    }
}

#[test]
fn missing_height_rests_on_elevation() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    let scene = build_scene(&data, Profile::Desktop).unwrap();
    for (record, prim) in data.elemente.iter().zip(&scene.primitives) {
        if record.hoehe.is_none() {
            assert_eq!(prim.box_dimensions().unwrap().y, 50.0);
            assert_eq!(prim.position.y, record.mittelpunkt.z + 25.0);
        }
    }
}

#[test]
fn null_placement_fields_use_defaults() {
    let json = DOCUMENT.replace(
        r#"{ "name": "Befestigungsschraube 5x60", "mittelpunkt": { "x": 300, "y": 120, "z": 60 } }"#,
        r#"{ "name": "Befestigungsschraube 5x60", "laenge": null, "breite": null, "hoehe": null,
             "mittelpunkt": { "x": 300, "y": 120, "z": null }, "drehung": null }"#,
    );
    let data = parse_scene_data(&json).unwrap();
    assert_eq!(data.elemente[3].mittelpunkt.z, 0.0);

    let scene = build_scene(&data, Profile::Desktop).unwrap();
    let prim = &scene.primitives[3];
    assert_eq!(prim.box_dimensions(), Some(Vec3::new(30.0, 50.0, 30.0)));
    assert_eq!(prim.rotation_y, 0.0);
    assert_eq!(prim.position, Vec3::new(300.0, 25.0, 120.0));
}

#[test]
fn ground_axes_are_preserved() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    for profile in [Profile::Desktop, Profile::immersive(), Profile::immersive_at(1.6)] {
        let scene = build_scene(&data, profile).unwrap();
        for (record, prim) in data.elemente.iter().zip(&scene.primitives) {
            assert_eq!(prim.position.x, profile.scale_length(record.mittelpunkt.x));
            assert_eq!(prim.position.z, profile.scale_length(record.mittelpunkt.y));
        }
    }
}

#[test]
fn every_element_yields_one_primitive_in_order() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    let scene = build_scene(&data, Profile::Desktop).unwrap();
    assert_eq!(scene.primitives.len(), data.elemente.len());
    for (i, prim) in scene.primitives.iter().enumerate() {
        assert_eq!(prim.source_index(), Some(i));
    }
    let categories: Vec<_> = scene.primitives.iter().map(|p| p.category()).collect();
    assert_eq!(
        categories,
        vec![
            Some(ElementCategory::VarioFix),
            Some(ElementCategory::Konstruktionsbalken),
            Some(ElementCategory::Konstruktionsbaelkchen),
            Some(ElementCategory::Befestigungsschraube),
            Some(ElementCategory::Konstruktionsholz),
            Some(ElementCategory::Barfussdiele),
            None,
        ]
    );
}

#[test]
fn immersive_is_desktop_in_metres_with_matching_bias() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    let config = SceneConfig::default().with_bias(Profile::immersive(), VerticalBias::HalfHeight);
    let desktop = build_scene_with(&data, Profile::Desktop, &config).unwrap();
    let immersive = build_scene_with(&data, Profile::immersive(), &config).unwrap();

    let to_metres = |v: Vec3| v.map(|c| c / 1000.0);
    let pairs = desktop
        .primitives
        .iter()
        .chain(std::iter::once(&desktop.building))
        .chain(desktop.markers.iter().take(1))
        .zip(
            immersive
                .primitives
                .iter()
                .chain(std::iter::once(&immersive.building))
                .chain(immersive.markers.iter().take(1)),
        );

    for (d, i) in pairs {
        assert_eq!(i.position, to_metres(d.position));
        assert_eq!(i.box_dimensions().unwrap(), to_metres(d.box_dimensions().unwrap()));
        assert_eq!(i.rotation_y, d.rotation_y);
        assert_eq!(i.material, d.material);
    }
    assert_eq!(
        immersive.directional_light.position,
        to_metres(desktop.directional_light.position)
    );
}

#[test]
fn default_policies_differ_only_vertically() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    let desktop = build_scene(&data, Profile::Desktop).unwrap();
    let immersive = build_scene(&data, Profile::immersive()).unwrap();
    for (d, i) in desktop.primitives.iter().zip(&immersive.primitives) {
        let height = d.box_dimensions().unwrap().y;
        // Full-height bias lifts immersive boxes by another half height
        assert_relative_eq!(i.position.y * 1000.0, d.position.y + height / 2.0, epsilon = 1e-9);
    }
}

#[test]
fn build_is_idempotent() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    for profile in [Profile::Desktop, Profile::immersive_at(0.25)] {
        assert_eq!(build_scene(&data, profile).unwrap(), build_scene(&data, profile).unwrap());
    }
}

#[test]
fn center_marker_only_on_desktop() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    let desktop = build_scene(&data, Profile::Desktop).unwrap();
    assert!(matches!(desktop.markers[1].shape, Shape::Sphere { .. }));
    assert_eq!(desktop.markers[1].position, Vec3::new(1500.0, 50.0, 650.0));

    let immersive = build_scene(&data, Profile::immersive()).unwrap();
    assert_eq!(immersive.markers.len(), 1);
}

#[test]
fn missing_building_keeps_previous_scene() {
    let mut assembler = SceneAssembler::default();
    let first = assembler.rebuild_from_json(DOCUMENT, Profile::Desktop).unwrap();

    let mut value: serde_json::Value = serde_json::from_str(DOCUMENT).unwrap();
    value.as_object_mut().unwrap().remove("gebaeude");
    let err = assembler
        .rebuild_from_json(&value.to_string(), Profile::Desktop)
        .unwrap_err();

    assert!(err.is_schema_violation());
    assert_eq!(assembler.scene().as_deref(), Some(&*first));
}

#[test]
fn descriptor_serializes_as_plain_data() {
    let data = parse_scene_data(DOCUMENT).unwrap();
    let scene = build_scene(&data, Profile::Desktop).unwrap();
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["profile"]["mode"], "desktop");
    assert_eq!(json["primitives"].as_array().unwrap().len(), 7);
    assert_eq!(json["primitives"][1]["shape"]["type"], "box");
    assert_eq!(json["primitives"][1]["role"]["category"], "KONSTRUKTIONSBALKEN");
    assert_eq!(json["primitives"][1]["role"]["index"], 1);
    assert_eq!(json["markers"][1]["shape"]["type"], "sphere");

    let back: deck_scene_geometry::SceneDescriptor = serde_json::from_value(json).unwrap();
    assert_eq!(back, scene);
}
