// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene host
//!
//! Owns the loaded document, the published scenes and the render loop state,
//! and drives a [`RenderBackend`] one frame at a time. Scenes are built when
//! data arrives or an immersive session starts, never inside [`SceneHost::frame`].
//!
//! ```text
//!            load / reload                 begin_session
//!   Empty ──────────────────► Desktop ──────────────────► Immersive
//!                               ▲                             │
//!                               └──────── end_session ────────┘
//!                                 (retained desktop scene)
//! ```

use crate::camera::Camera;
use crate::decorations::SceneDecorations;
use crate::error::{Error, Result};
use crate::session::ImmersiveSession;
use crate::slider::ElementSlider;
use crate::source::DataSource;
use deck_scene_core::{parse_scene_data, SceneData};
use deck_scene_geometry::{build_scene_with, Profile, SceneAssembler, SceneConfig, SceneDescriptor};
use std::sync::Arc;

/// Render loop currently driving frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Desktop,
    Immersive,
}

/// Per-frame context handed to the backend
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub index: u64,
    pub mode: RenderMode,
    /// Desktop camera; immersive frames use the device pose
    pub camera: Option<&'a Camera>,
    /// Background, grid and axes; desktop only
    pub decorations: Option<&'a SceneDecorations>,
}

/// External rendering engine
pub trait RenderBackend {
    /// A new scene became current for the active render loop.
    ///
    /// Called once per publish, outside the frame path; backends create
    /// their drawables here.
    fn upload(&mut self, scene: &Arc<SceneDescriptor>) {
        let _ = scene;
    }

    /// Draw one frame of the current scene
    fn draw(&mut self, scene: &SceneDescriptor, view: &FrameView<'_>);
}

/// What happened on a call to [`SceneHost::frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was handed to the backend
    Drawn { index: u64, mode: RenderMode },
    /// Nothing to draw yet
    Idle,
}

pub struct SceneHost<B> {
    backend: B,
    desktop: SceneAssembler,
    immersive: Option<Arc<SceneDescriptor>>,
    /// Floor offset of the running immersive session
    session: Option<f64>,
    data: Option<SceneData>,
    camera: Camera,
    decorations: SceneDecorations,
    slider: ElementSlider,
    last_error: Option<String>,
    frames: u64,
}

impl<B: RenderBackend> SceneHost<B> {
    pub fn new(backend: B, config: SceneConfig) -> Self {
        Self {
            backend,
            desktop: SceneAssembler::new(config),
            immersive: None,
            session: None,
            data: None,
            camera: Camera::for_viewpoint(None, 1.0),
            decorations: SceneDecorations::default(),
            slider: ElementSlider::default(),
            last_error: None,
            frames: 0,
        }
    }

    /// Set the viewport the desktop camera projects onto
    pub fn with_viewport(mut self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport { width, height });
        }
        self.camera.aspect = width as f64 / height as f64;
        Ok(self)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &SceneConfig {
        self.desktop.config()
    }

    pub fn mode(&self) -> RenderMode {
        if self.session.is_some() {
            RenderMode::Immersive
        } else {
            RenderMode::Desktop
        }
    }

    /// Profile the active render loop draws in
    pub fn profile(&self) -> Profile {
        match self.session {
            Some(floor_offset) => Profile::immersive_at(floor_offset),
            None => Profile::Desktop,
        }
    }

    /// The scene the next frame will draw
    pub fn scene(&self) -> Option<Arc<SceneDescriptor>> {
        match self.mode() {
            RenderMode::Desktop => self.desktop.scene(),
            RenderMode::Immersive => self.immersive.clone(),
        }
    }

    /// The retained desktop scene, regardless of mode
    pub fn desktop_scene(&self) -> Option<Arc<SceneDescriptor>> {
        self.desktop.scene()
    }

    pub fn data(&self) -> Option<&SceneData> {
        self.data.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn decorations(&self) -> &SceneDecorations {
        &self.decorations
    }

    pub fn slider(&self) -> &ElementSlider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut ElementSlider {
        &mut self.slider
    }

    /// Message of the most recent failed load, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    /// Fetch, validate and publish a document from `source`
    ///
    /// Returns the scene now current for the active render loop. On failure
    /// the error is recorded and returned; the current scene stays on screen.
    pub fn reload<S: DataSource + ?Sized>(&mut self, source: &mut S) -> Result<Arc<SceneDescriptor>> {
        let origin = source.describe();
        tracing::debug!(source = %origin, "Fetching scene document");
        let outcome = source
            .fetch()
            .and_then(|text| parse_scene_data(&text))
            .map_err(Error::from)
            .and_then(|data| self.publish(data));
        self.record(outcome, &origin)
    }

    /// Validate and publish a document given as JSON text
    pub fn load_str(&mut self, json: &str) -> Result<Arc<SceneDescriptor>> {
        let outcome = parse_scene_data(json)
            .map_err(Error::from)
            .and_then(|data| self.publish(data));
        self.record(outcome, "<inline>")
    }

    /// Publish an already validated document
    pub fn load_data(&mut self, data: SceneData) -> Result<Arc<SceneDescriptor>> {
        let outcome = self.publish(data);
        self.record(outcome, "<data>")
    }

    fn publish(&mut self, data: SceneData) -> Result<Arc<SceneDescriptor>> {
        // Build everything before touching published state
        let immersive = match self.session {
            Some(floor_offset) => Some(Arc::new(build_scene_with(
                &data,
                Profile::immersive_at(floor_offset),
                self.desktop.config(),
            )?)),
            None => None,
        };
        let desktop = self.desktop.rebuild(&data, Profile::Desktop)?;

        self.immersive = immersive;
        self.camera = Camera::for_viewpoint(data.kamera, self.camera.aspect);
        self.slider.reset(data.element_count());
        self.data = Some(data);

        let current = match &self.immersive {
            Some(scene) if self.session.is_some() => Arc::clone(scene),
            _ => desktop,
        };
        self.backend.upload(&current);

        tracing::info!(
            primitives = current.primitive_count(),
            profile = %current.profile,
            "Scene published"
        );
        Ok(current)
    }

    fn record<T>(&mut self, outcome: Result<T>, origin: &str) -> Result<T> {
        match &outcome {
            Ok(_) => self.last_error = None,
            Err(e) => {
                tracing::warn!(source = %origin, error = %e, "Scene load failed, keeping previous scene");
                self.last_error = Some(e.to_string());
            }
        }
        outcome
    }

    /// Switch to the immersive render loop
    ///
    /// Builds the immersive scene for the session's floor offset if a
    /// document is loaded.
    pub fn begin_session<S: ImmersiveSession + ?Sized>(&mut self, session: &S) -> Result<()> {
        if !session.is_active() {
            return Err(Error::SessionInactive);
        }
        let floor_offset = session.floor_offset();

        let scene = match &self.data {
            Some(data) => Some(Arc::new(build_scene_with(
                data,
                Profile::immersive_at(floor_offset),
                self.desktop.config(),
            )?)),
            None => None,
        };

        self.session = Some(floor_offset);
        self.immersive = scene;
        if let Some(scene) = &self.immersive {
            self.backend.upload(scene);
        }
        tracing::info!(floor_offset, "Immersive session started");
        Ok(())
    }

    /// Return to the desktop render loop with the retained desktop scene
    pub fn end_session(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        self.immersive = None;
        if let Some(scene) = self.desktop.scene() {
            self.backend.upload(&scene);
        }
        tracing::info!("Immersive session ended");
    }

    /// Follow the session's active flag, starting or ending as needed
    pub fn sync_session<S: ImmersiveSession + ?Sized>(&mut self, session: &S) -> Result<RenderMode> {
        match (session.is_active(), self.session.is_some()) {
            (true, false) => self.begin_session(session)?,
            (false, true) => self.end_session(),
            _ => {}
        }
        Ok(self.mode())
    }

    /// Draw one frame and hand control back to the caller
    pub fn frame(&mut self) -> FrameOutcome {
        let mode = self.mode();
        let scene = match mode {
            RenderMode::Desktop => self.desktop.scene(),
            RenderMode::Immersive => self.immersive.clone(),
        };
        let Some(scene) = scene else {
            return FrameOutcome::Idle;
        };

        let desktop = mode == RenderMode::Desktop;
        let view = FrameView {
            index: self.frames,
            mode,
            camera: desktop.then_some(&self.camera),
            decorations: desktop.then_some(&self.decorations),
        };
        self.backend.draw(&scene, &view);

        let index = self.frames;
        self.frames += 1;
        FrameOutcome::Drawn { index, mode }
    }
}
