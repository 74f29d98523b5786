// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! deck-scene Engine
//!
//! A backend-neutral scene host. It loads scene documents from a
//! [`DataSource`], publishes desktop and immersive scenes built by
//! `deck-scene-geometry`, and drives any [`RenderBackend`] one frame at a
//! time.
//!
//! ```rust,ignore
//! use deck_scene_engine::{FileSource, SceneHost, SessionSnapshot};
//!
//! let mut host = SceneHost::new(my_backend, Default::default()).with_viewport(1280, 720)?;
//! host.reload(&mut FileSource::new("api.json"))?;
//! loop {
//!     host.sync_session(&SessionSnapshot { active: xr_running, floor_offset })?;
//!     host.frame();
//! }
//! ```

pub mod camera;
pub mod decorations;
pub mod error;
pub mod host;
pub mod session;
pub mod slider;
pub mod source;

pub use camera::Camera;
pub use decorations::{AxesHelper, GridHelper, SceneDecorations};
pub use error::{Error, Result};
pub use host::{FrameOutcome, FrameView, RenderBackend, RenderMode, SceneHost};
pub use session::{ImmersiveSession, SessionSnapshot};
pub use slider::ElementSlider;
pub use source::{DataSource, FileSource, StaticSource};
