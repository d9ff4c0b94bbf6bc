use super::{BodySet, ForceParams, ForcePool};
use glam::DVec3;
use std::fmt::Debug;
use std::hash::Hash;

/// One body's worth of the central force update.
///
/// Velocity approaches `-position * strength` through a first-order blend
/// `dt / (dt + damping)`; position is then rotated about +Y by
/// `orbit_speed * dt`. Returns `(position, velocity)`.
pub fn central_force_step(
    params: &ForceParams,
    dt: f64,
    position: DVec3,
    velocity: DVec3,
) -> (DVec3, DVec3) {
    if !dt.is_finite() || dt <= 0.0 {
        return (position, velocity);
    }
    let target = -position * params.force_strength;
    let denom = dt + params.force_damping;
    let blend = if denom > 0.0 { dt / denom } else { 1.0 };
    let velocity = velocity + (target - velocity) * blend;

    let (sin, cos) = (params.force_orbit_speed * dt).sin_cos();
    let position = DVec3::new(
        position.x * cos - position.z * sin,
        position.y,
        position.x * sin + position.z * cos,
    );
    (position, velocity)
}

/// Applies [`central_force_step`] to the active part of a [`ForcePool`].
///
/// Runs after the physics step of the same frame; the rotation is composed
/// on top of whatever integration the engine already did.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentralForceSimulator;

impl CentralForceSimulator {
    /// Returns how many bodies were advanced.
    pub fn step<H, B>(&self, pool: &ForcePool<H>, bodies: &mut B, dt: f64) -> usize
    where
        H: Copy + Eq + Hash + Debug,
        B: BodySet<Handle = H> + ?Sized,
    {
        let params = pool.params();
        let mut advanced = 0;
        for handle in pool.active_handles() {
            let (Some(pos), Some(vel)) = (bodies.position(handle), bodies.velocity(handle)) else {
                continue;
            };
            let (pos, vel) = central_force_step(&params, dt, pos, vel);
            bodies.set_velocity(handle, vel);
            bodies.set_position(handle, pos);
            advanced += 1;
        }
        advanced
    }
}
