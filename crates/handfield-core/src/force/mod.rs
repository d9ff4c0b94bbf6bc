//! Central force field over a pooled set of physics bodies.

mod pool;
mod simulator;

pub use pool::{ForcePool, PoolEntry};
pub use simulator::{central_force_step, CentralForceSimulator};

use crate::constants::{
    DEFAULT_FORCE_DAMPING, DEFAULT_FORCE_ORBIT_SPEED, DEFAULT_FORCE_STRENGTH, MIN_FORCE_DAMPING,
};
use glam::DVec3;
use std::fmt::Debug;
use std::hash::Hash;

/// Access to bodies owned by an external physics engine.
///
/// Handles are cheap ids; a handle the engine no longer knows reads as
/// `None` and writes to it are dropped.
pub trait BodySet {
    type Handle: Copy + Eq + Hash + Debug;

    fn position(&self, handle: Self::Handle) -> Option<DVec3>;
    fn velocity(&self, handle: Self::Handle) -> Option<DVec3>;
    fn set_position(&mut self, handle: Self::Handle, position: DVec3);
    fn set_velocity(&mut self, handle: Self::Handle, velocity: DVec3);
    fn wake(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceParams {
    /// Scales the pull toward the origin. Non-negative.
    pub force_strength: f64,
    /// Time constant of the velocity blend. Strictly positive.
    pub force_damping: f64,
    /// Orbit rate about the vertical axis, radians per second.
    pub force_orbit_speed: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            force_strength: DEFAULT_FORCE_STRENGTH,
            force_damping: DEFAULT_FORCE_DAMPING,
            force_orbit_speed: DEFAULT_FORCE_ORBIT_SPEED,
        }
    }
}

/// Partial update for [`ForceParams`]; `None` fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForceParamsPatch {
    pub force_strength: Option<f64>,
    pub force_damping: Option<f64>,
    pub force_orbit_speed: Option<f64>,
}

impl ForceParams {
    pub fn merge(&mut self, patch: ForceParamsPatch) {
        if let Some(s) = patch.force_strength {
            self.force_strength = s.max(0.0);
        }
        if let Some(d) = patch.force_damping {
            self.force_damping = d.max(MIN_FORCE_DAMPING);
        }
        if let Some(o) = patch.force_orbit_speed {
            self.force_orbit_speed = o;
        }
    }
}

impl From<ForceParams> for ForceParamsPatch {
    fn from(p: ForceParams) -> Self {
        Self {
            force_strength: Some(p.force_strength),
            force_damping: Some(p.force_damping),
            force_orbit_speed: Some(p.force_orbit_speed),
        }
    }
}
