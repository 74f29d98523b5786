// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene document parsing and schema validation
//!
//! Documents are decoded in two steps: first into a generic JSON tree so that
//! every required key can be checked by name, then key by key into the typed
//! records. A violation anywhere rejects the whole document.

use crate::error::{Error, Result};
use crate::schema::{Building, CameraPosition, ElementRecord, GroundPoint, Marker, SceneData, REQUIRED_KEYS};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parse and validate a scene document from a JSON string
pub fn parse_scene_data(json: &str) -> Result<SceneData> {
    let value: Value = serde_json::from_str(json)?;
    scene_data_from_value(value)
}

/// Parse and validate a scene document from raw bytes
pub fn parse_scene_data_slice(bytes: &[u8]) -> Result<SceneData> {
    let value: Value = serde_json::from_slice(bytes)?;
    scene_data_from_value(value)
}

/// Validate an already decoded JSON tree
pub fn scene_data_from_value(value: Value) -> Result<SceneData> {
    let mut root = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidRecord {
                key: "document",
                index: None,
                message: format!("expected a JSON object, got {}", json_kind(&other)),
            })
        }
    };

    // Check every required key before decoding any of them
    for key in REQUIRED_KEYS {
        if !has_value(&root, key) {
            tracing::warn!(key, "Scene document is missing a required key");
            return Err(Error::MissingKey(key));
        }
    }

    let elemente: Vec<ElementRecord> = decode_list(&mut root, "elemente")?;
    let gebaeude: Vec<Building> = decode_list(&mut root, "gebaeude")?;
    if gebaeude.is_empty() {
        return Err(Error::EmptyList("gebaeude"));
    }
    let marker: Marker = decode_record(&mut root, "marker")?;
    let basisflaechemittelpunkt: GroundPoint = decode_record(&mut root, "basisflaechemittelpunkt")?;

    // The viewpoint is optional and cosmetic: a malformed one is dropped
    let kamera = if has_value(&root, "kamera") {
        match decode_record::<CameraPosition>(&mut root, "kamera") {
            Ok(camera) => Some(camera),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed camera position");
                None
            }
        }
    } else {
        None
    };

    tracing::debug!(
        elements = elemente.len(),
        buildings = gebaeude.len(),
        has_camera = kamera.is_some(),
        "Parsed scene document"
    );

    Ok(SceneData {
        elemente,
        gebaeude,
        marker,
        basisflaechemittelpunkt,
        kamera,
    })
}

/// A key counts as present only when it holds a non-null value
fn has_value(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_some_and(|v| !v.is_null())
}

fn decode_record<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &'static str) -> Result<T> {
    let value = map.remove(key).ok_or(Error::MissingKey(key))?;
    serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
        key,
        index: None,
        message: e.to_string(),
    })
}

fn decode_list<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &'static str) -> Result<Vec<T>> {
    let items = match map.remove(key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(Error::InvalidRecord {
                key,
                index: None,
                message: format!("expected an array, got {}", json_kind(&other)),
            })
        }
        None => return Err(Error::MissingKey(key)),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| Error::InvalidRecord {
                key,
                index: Some(index),
                message: e.to_string(),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
