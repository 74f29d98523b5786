// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JavaScript API for deck-scene
//!
//! `DeckSceneAPI` wraps a scene host whose render backend forwards to
//! JavaScript callbacks, so a WebGL/three.js renderer only has to turn plain
//! descriptors into meshes:
//!
//! ```javascript
//! const api = new DeckSceneAPI();
//! api.setRenderer(
//!   (scene) => rebuildThreeScene(scene),
//!   (frame) => renderer.render(threeScene, cameraFrom(frame.camera)),
//! );
//! api.load(await (await fetch('api.json')).text());
//! renderer.setAnimationLoop(() => api.frame());
//! ```

use crate::mesh::MeshCollection;
use crate::utils::{console_warn, js_error, set_js_prop, set_panic_hook};
use deck_scene_engine::{
    Camera, FrameOutcome, FrameView, RenderBackend, RenderMode, SceneDecorations, SceneHost,
    SessionSnapshot,
};
use deck_scene_geometry::{build_scene_with, ElementCategory, Profile, SceneConfig, SceneDescriptor};
use js_sys::Function;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// Render backend that calls into JavaScript
#[derive(Default)]
struct JsRenderer {
    on_upload: Option<Function>,
    on_draw: Option<Function>,
}

/// Per-frame payload passed to the draw callback
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameInfo<'a> {
    index: u64,
    mode: &'static str,
    camera: Option<&'a Camera>,
    decorations: Option<&'a SceneDecorations>,
}

impl RenderBackend for JsRenderer {
    fn upload(&mut self, scene: &Arc<SceneDescriptor>) {
        let Some(callback) = &self.on_upload else {
            return;
        };
        match serde_wasm_bindgen::to_value(scene.as_ref()) {
            Ok(value) => {
                if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                    web_sys::console::warn_1(&e);
                }
            }
            Err(e) => console_warn(&format!("Scene serialization failed: {}", e)),
        }
    }

    fn draw(&mut self, _scene: &SceneDescriptor, view: &FrameView<'_>) {
        let Some(callback) = &self.on_draw else {
            return;
        };
        let info = FrameInfo {
            index: view.index,
            mode: mode_name(view.mode),
            camera: view.camera,
            decorations: view.decorations,
        };
        match serde_wasm_bindgen::to_value(&info) {
            Ok(value) => {
                if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                    web_sys::console::warn_1(&e);
                }
            }
            Err(e) => console_warn(&format!("Frame serialization failed: {}", e)),
        }
    }
}

fn mode_name(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Desktop => "desktop",
        RenderMode::Immersive => "immersive",
    }
}

/// Main deck-scene API
#[wasm_bindgen]
pub struct DeckSceneAPI {
    host: SceneHost<JsRenderer>,
}

#[wasm_bindgen]
impl DeckSceneAPI {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        set_panic_hook();
        Self {
            host: SceneHost::new(JsRenderer::default(), SceneConfig::default()),
        }
    }

    /// Register renderer callbacks; the current scene, if any, is uploaded
    /// right away
    #[wasm_bindgen(js_name = setRenderer)]
    pub fn set_renderer(&mut self, on_upload: Option<Function>, on_draw: Option<Function>) {
        let renderer = self.host.backend_mut();
        renderer.on_upload = on_upload;
        renderer.on_draw = on_draw;
        if let Some(scene) = self.host.scene() {
            self.host.backend_mut().upload(&scene);
        }
    }

    /// Load a scene document (JSON text) and return its element count
    ///
    /// A rejected document leaves the previous scene in place.
    pub fn load(&mut self, json: &str) -> Result<usize, JsValue> {
        self.host
            .load_str(json)
            .map_err(|e| js_error("Scene load failed", e))?;
        Ok(self.element_count())
    }

    /// Scene descriptor as a plain object
    ///
    /// `profile` is "desktop" (default) or "immersive"; `floorOffset` only
    /// applies to the immersive profile.
    pub fn scene(&self, profile: Option<String>, floor_offset: Option<f64>) -> Result<JsValue, JsValue> {
        let scene = self.scene_for(profile.as_deref(), floor_offset)?;
        serde_wasm_bindgen::to_value(scene.as_ref())
            .map_err(|e| js_error("Scene serialization failed", e))
    }

    /// Tessellated meshes for renderers without box/sphere primitives
    pub fn meshes(&self, profile: Option<String>, floor_offset: Option<f64>) -> Result<MeshCollection, JsValue> {
        let scene = self.scene_for(profile.as_deref(), floor_offset)?;
        Ok(MeshCollection::from_scene(&scene))
    }

    #[wasm_bindgen(getter, js_name = elementCount)]
    pub fn element_count(&self) -> usize {
        self.host.data().map_or(0, |data| data.element_count())
    }

    /// Element counts keyed by style category
    #[wasm_bindgen(js_name = categoryCounts)]
    pub fn category_counts(&self) -> JsValue {
        match self.host.desktop_scene() {
            Some(scene) => counts_to_js(&scene.stats().by_category),
            None => js_sys::Object::new().into(),
        }
    }

    /// Draw one frame; false while nothing is loaded
    pub fn frame(&mut self) -> bool {
        matches!(self.host.frame(), FrameOutcome::Drawn { .. })
    }

    /// Switch to immersive rendering once the XR session is running
    #[wasm_bindgen(js_name = beginSession)]
    pub fn begin_session(&mut self, floor_offset: Option<f64>) -> Result<(), JsValue> {
        let session = SessionSnapshot::active(floor_offset.unwrap_or(0.0));
        self.host
            .begin_session(&session)
            .map_err(|e| js_error("Immersive session failed", e))
    }

    /// Fall back to desktop rendering after the XR session ended
    #[wasm_bindgen(js_name = endSession)]
    pub fn end_session(&mut self) {
        self.host.end_session();
    }

    /// "desktop" or "immersive"
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        mode_name(self.host.mode()).to_string()
    }

    #[wasm_bindgen(getter, js_name = lastError)]
    pub fn last_error(&self) -> Option<String> {
        self.host.last_error().map(str::to_string)
    }

    #[wasm_bindgen(getter, js_name = sliderMax)]
    pub fn slider_max(&self) -> usize {
        self.host.slider().max()
    }

    #[wasm_bindgen(getter, js_name = sliderValue)]
    pub fn slider_value(&self) -> usize {
        self.host.slider().value()
    }

    /// Move the element slider; it does not change the scene
    #[wasm_bindgen(js_name = setSlider)]
    pub fn set_slider(&mut self, value: usize) -> usize {
        self.host.slider_mut().set(value)
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Default for DeckSceneAPI {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckSceneAPI {
    /// Published scene for `profile`, or a fresh build from the loaded data
    fn scene_for(&self, profile: Option<&str>, floor_offset: Option<f64>) -> Result<Arc<SceneDescriptor>, JsValue> {
        let profile = resolve_profile(profile, floor_offset).map_err(|e| js_error("Invalid profile", e))?;

        let published = if profile == Profile::Desktop {
            self.host.desktop_scene()
        } else if profile == self.host.profile() {
            self.host.scene()
        } else {
            None
        };
        if let Some(scene) = published {
            return Ok(scene);
        }

        let data = self
            .host
            .data()
            .ok_or_else(|| js_error("No scene loaded", "call load() first"))?;
        build_scene_with(data, profile, self.host.config())
            .map(Arc::new)
            .map_err(|e| js_error("Scene build failed", e))
    }
}

fn resolve_profile(name: Option<&str>, floor_offset: Option<f64>) -> deck_scene_geometry::Result<Profile> {
    let profile: Profile = name.unwrap_or("desktop").parse()?;
    Ok(if profile.is_immersive() {
        Profile::immersive_at(floor_offset.unwrap_or(0.0))
    } else {
        profile
    })
}

/// Convert category counts to a JavaScript object
fn counts_to_js(counts: &FxHashMap<ElementCategory, usize>) -> JsValue {
    let obj = js_sys::Object::new();

    for (category, count) in counts {
        set_js_prop(&obj, category.key(), &JsValue::from_f64(*count as f64));
    }

    obj.into()
}
