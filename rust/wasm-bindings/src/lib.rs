// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! deck-scene WebAssembly Bindings
//!
//! JavaScript/TypeScript API for deck-scene built with wasm-bindgen.

use wasm_bindgen::prelude::*;

mod api;
mod mesh;
mod utils;

pub use api::DeckSceneAPI;
pub use mesh::{MeshCollection, MeshDataJs};
pub use utils::set_panic_hook as init_panic_hook;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
}

/// Get the version of deck-scene
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Style category key for an element name, or `undefined` when none matches
#[wasm_bindgen]
pub fn classify(name: &str) -> Option<String> {
    deck_scene_geometry::classify(name).map(|category| category.key().to_string())
}
