// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene document records
//!
//! Field names follow the German keys of the planning export
//! (`laenge` = length, `breite` = width, `hoehe` = height,
//! `mittelpunkt` = center, `drehung` = rotation, `farbe` = color).
//! All magnitudes are millimetres, all angles degrees.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Required top-level keys of a scene document, in validation order
pub const REQUIRED_KEYS: [&str; 4] = ["elemente", "gebaeude", "marker", "basisflaechemittelpunkt"];

/// Absent and `null` both decode to the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// RGB color from any integral JSON number (`16711680` or `16711680.0`)
fn lenient_color<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(v) if v.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&v) => Ok(Some(v as u32)),
        Some(v) => Err(D::Error::custom(format!("`farbe` must be an integral RGB value, got {}", v))),
    }
}

/// Center of an element: ground-plane position plus elevation offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementCenter {
    pub x: f64,
    pub y: f64,
    /// Elevation of the element's bottom face above the ground plane
    #[serde(default, deserialize_with = "null_as_default")]
    pub z: f64,
}

/// Point on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundPoint {
    pub x: f64,
    pub y: f64,
}

/// One construction element of the deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    /// Product name; the element category is derived from it
    pub name: String,
    #[serde(default)]
    pub laenge: Option<f64>,
    #[serde(default)]
    pub breite: Option<f64>,
    #[serde(default)]
    pub hoehe: Option<f64>,
    pub mittelpunkt: ElementCenter,
    /// Rotation about the vertical axis in degrees
    #[serde(default, deserialize_with = "null_as_default")]
    pub drehung: f64,
    /// Explicit RGB override
    #[serde(default, deserialize_with = "lenient_color")]
    pub farbe: Option<u32>,

    // Descriptive fields, carried through untouched whatever their JSON type
    #[serde(default)]
    pub artikelnummer: Option<Value>,
    #[serde(default)]
    pub ist_uk_platte: Option<Value>,
    #[serde(default)]
    pub ist_normaler_uk_balken: Option<Value>,
    #[serde(default)]
    pub ist_verbindungsschuh: Option<Value>,
    #[serde(default)]
    pub ist_balken_stueck: Option<Value>,
    #[serde(default)]
    pub ist_verschoben: Option<Value>,
    #[serde(default)]
    pub zusatzinfos: Option<Value>,
    #[serde(default)]
    pub formel: Option<Value>,
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub anzahl: Option<Value>,
    #[serde(default)]
    pub typ: Option<Value>,
}

impl ElementRecord {
    /// Create a record with only the fields geometry depends on
    pub fn new(name: impl Into<String>, mittelpunkt: ElementCenter) -> Self {
        Self {
            name: name.into(),
            laenge: None,
            breite: None,
            hoehe: None,
            mittelpunkt,
            drehung: 0.0,
            farbe: None,
            artikelnummer: None,
            ist_uk_platte: None,
            ist_normaler_uk_balken: None,
            ist_verbindungsschuh: None,
            ist_balken_stueck: None,
            ist_verschoben: None,
            zusatzinfos: None,
            formel: None,
            position: None,
            anzahl: None,
            typ: None,
        }
    }

    /// Set length, width and height (each may be absent)
    pub fn with_dimensions(mut self, laenge: Option<f64>, breite: Option<f64>, hoehe: Option<f64>) -> Self {
        self.laenge = laenge;
        self.breite = breite;
        self.hoehe = hoehe;
        self
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, drehung: f64) -> Self {
        self.drehung = drehung;
        self
    }

    /// Set the explicit color override
    pub fn with_color(mut self, farbe: u32) -> Self {
        self.farbe = Some(farbe);
        self
    }
}

/// Outline of the building the deck is attached to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub laenge: f64,
    pub breite: f64,
    pub mittelpunkt: GroundPoint,
}

/// Reference marker placed in the plan
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub z: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub drehung: f64,
}

/// Suggested viewpoint for desktop viewers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A validated scene document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub elemente: Vec<ElementRecord>,
    pub gebaeude: Vec<Building>,
    pub marker: Marker,
    pub basisflaechemittelpunkt: GroundPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kamera: Option<CameraPosition>,
}

impl SceneData {
    /// The building record used for the scene (the first `gebaeude` entry)
    pub fn building(&self) -> Option<&Building> {
        self.gebaeude.first()
    }

    /// Number of element records
    pub fn element_count(&self) -> usize {
        self.elemente.len()
    }
}
