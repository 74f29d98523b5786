// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immersive session boundary

/// What the host needs to know about an immersive (XR) session
pub trait ImmersiveSession {
    /// Whether the session is currently presenting
    fn is_active(&self) -> bool;

    /// Height of the floor in the session's reference space, metres
    fn floor_offset(&self) -> f64;
}

/// A plain snapshot of session values, as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionSnapshot {
    pub active: bool,
    pub floor_offset: f64,
}

impl SessionSnapshot {
    pub fn active(floor_offset: f64) -> Self {
        Self {
            active: true,
            floor_offset,
        }
    }

    pub fn inactive() -> Self {
        Self::default()
    }
}

impl ImmersiveSession for SessionSnapshot {
    fn is_active(&self) -> bool {
        self.active
    }

    fn floor_offset(&self) -> f64 {
        self.floor_offset
    }
}

impl<S: ImmersiveSession + ?Sized> ImmersiveSession for &S {
    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn floor_offset(&self) -> f64 {
        (**self).floor_offset()
    }
}
