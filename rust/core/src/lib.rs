// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # deck-scene Core
//!
//! Data model and validation for deck construction scene documents.
//!
//! ## Overview
//!
//! A scene document is a single JSON export of a deck plan:
//!
//! - **`elemente`**: construction elements (substructure plates, beams,
//!   screws, timber, deck boards) with dimensions, center and rotation
//! - **`gebaeude`**: the outline of the adjoining building
//! - **`marker`**: a reference marker placed in the plan
//! - **`basisflaechemittelpunkt`**: the center of the base surface
//! - **`kamera`** (optional): a suggested viewpoint
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use deck_scene_core::parse_scene_data;
//!
//! let data = parse_scene_data(&std::fs::read_to_string("api.json")?)?;
//! for element in &data.elemente {
//!     println!("{} at ({}, {})", element.name, element.mittelpunkt.x, element.mittelpunkt.y);
//! }
//! ```
//!
//! Missing required keys are reported as schema violations and reject the
//! whole document; missing optional fields are left as `None` for the
//! geometry layer to default.

pub mod error;
pub mod parser;
pub mod schema;
pub mod units;

pub use error::{Error, Result};
pub use parser::{parse_scene_data, parse_scene_data_slice, scene_data_from_value};
pub use schema::{
    Building, CameraPosition, ElementCenter, ElementRecord, GroundPoint, Marker, SceneData,
    REQUIRED_KEYS,
};
pub use units::{degrees_to_radians, LengthUnit, MILLIMETRES_PER_METRE};
