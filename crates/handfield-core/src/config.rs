//! User-facing scene tunables and their textual form.

use crate::constants::{
    DEFAULT_FORCE_DAMPING, DEFAULT_FORCE_ORBIT_SPEED, DEFAULT_FORCE_STRENGTH,
    DEFAULT_SPHERE_COUNT, FORCE_DAMPING_RANGE, FORCE_ORBIT_SPEED_RANGE, FORCE_STRENGTH_RANGE,
    SPHERE_COUNT_RANGE,
};
use crate::error::{CoreError, CoreResult};
use crate::force::{BodySet, ForceParamsPatch, ForcePool};
use std::str::FromStr;

pub const KEY_SPHERE_COUNT: &str = "sphereCount";
pub const KEY_FORCE_STRENGTH: &str = "forceStrength";
pub const KEY_FORCE_DAMPING: &str = "forceDamping";
pub const KEY_FORCE_ORBIT_SPEED: &str = "forceOrbitSpeed";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTunables {
    pub sphere_count: usize,
    pub force_strength: f64,
    pub force_damping: f64,
    pub force_orbit_speed: f64,
}

impl Default for SceneTunables {
    fn default() -> Self {
        Self {
            sphere_count: DEFAULT_SPHERE_COUNT,
            force_strength: DEFAULT_FORCE_STRENGTH,
            force_damping: DEFAULT_FORCE_DAMPING,
            force_orbit_speed: DEFAULT_FORCE_ORBIT_SPEED,
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> CoreResult<T> {
    value.trim().parse().map_err(|_| CoreError::InvalidTunable {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_finite(key: &str, value: &str) -> CoreResult<f64> {
    let v: f64 = parse_value(key, value)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::InvalidTunable {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

impl SceneTunables {
    /// Clamp every field into its slider range. Non-finite values fall
    /// back to their defaults.
    pub fn clamped(self) -> Self {
        let d = Self::default();
        let finite = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            sphere_count: self
                .sphere_count
                .clamp(SPHERE_COUNT_RANGE.0, SPHERE_COUNT_RANGE.1),
            force_strength: finite(self.force_strength, d.force_strength)
                .clamp(FORCE_STRENGTH_RANGE.0, FORCE_STRENGTH_RANGE.1),
            force_damping: finite(self.force_damping, d.force_damping)
                .clamp(FORCE_DAMPING_RANGE.0, FORCE_DAMPING_RANGE.1),
            force_orbit_speed: finite(self.force_orbit_speed, d.force_orbit_speed)
                .clamp(FORCE_ORBIT_SPEED_RANGE.0, FORCE_ORBIT_SPEED_RANGE.1),
        }
    }

    /// Overwrite one field from its textual form. Unknown keys are ignored
    /// and reported as `Ok(false)`.
    pub fn set(&mut self, key: &str, value: &str) -> CoreResult<bool> {
        match key {
            KEY_SPHERE_COUNT => self.sphere_count = parse_value(key, value)?,
            KEY_FORCE_STRENGTH => self.force_strength = parse_finite(key, value)?,
            KEY_FORCE_DAMPING => self.force_damping = parse_finite(key, value)?,
            KEY_FORCE_ORBIT_SPEED => self.force_orbit_speed = parse_finite(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Defaults overridden by `pairs`, then clamped. The first malformed
    /// value aborts.
    pub fn from_pairs<'a, I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut t = Self::default();
        for (key, value) in pairs {
            if !t.set(key, value)? {
                log::debug!("ignoring unknown tunable `{key}`");
            }
        }
        Ok(t.clamped())
    }

    /// Like [`SceneTunables::from_pairs`] but malformed values are logged
    /// and skipped.
    pub fn from_pairs_lenient<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut t = Self::default();
        for (key, value) in pairs {
            if let Err(e) = t.set(key, value) {
                log::warn!("{e}");
            }
        }
        t.clamped()
    }

    pub fn to_patch(&self) -> ForceParamsPatch {
        ForceParamsPatch {
            force_strength: Some(self.force_strength),
            force_damping: Some(self.force_damping),
            force_orbit_speed: Some(self.force_orbit_speed),
        }
    }

    /// Push these values into a pool: parameters first, then the active
    /// count. Returns the count actually applied.
    pub fn apply<B: BodySet + ?Sized>(&self, pool: &mut ForcePool<B::Handle>, bodies: &mut B) -> usize {
        pool.set_params(self.to_patch());
        pool.set_active_count(self.sphere_count, bodies)
    }
}
