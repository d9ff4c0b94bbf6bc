//! Minimal point-body store used by the front-ends in place of a full
//! physics engine: zero gravity, linear damping, no collisions.

use crate::constants::BODY_LINEAR_DAMPING;
use crate::force::BodySet;
use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct PointBody {
    pub position: DVec3,
    pub velocity: DVec3,
    pub awake: bool,
}

#[derive(Clone, Debug)]
pub struct PointBodies {
    bodies: Vec<PointBody>,
    pub linear_damping: f64,
}

impl Default for PointBodies {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            linear_damping: BODY_LINEAR_DAMPING,
        }
    }
}

impl PointBodies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `count` sleeping bodies at the origin.
    pub fn with_count(count: usize) -> Self {
        let mut set = Self::new();
        for _ in 0..count {
            set.spawn(DVec3::ZERO);
        }
        set
    }

    pub fn spawn(&mut self, position: DVec3) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(PointBody {
            position,
            velocity: DVec3::ZERO,
            awake: false,
        });
        id
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        (0..self.bodies.len() as u32).map(BodyId)
    }

    pub fn get(&self, id: BodyId) -> Option<&PointBody> {
        self.bodies.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Semi-implicit Euler with the damping model `v *= 1 / (1 + dt * c)`.
    /// Sleeping bodies do not move.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let damp = 1.0 / (1.0 + dt * self.linear_damping);
        for b in self.bodies.iter_mut().filter(|b| b.awake) {
            b.velocity *= damp;
            b.position += b.velocity * dt;
        }
    }
}

impl BodySet for PointBodies {
    type Handle = BodyId;

    fn position(&self, handle: BodyId) -> Option<DVec3> {
        self.get(handle).map(|b| b.position)
    }

    fn velocity(&self, handle: BodyId) -> Option<DVec3> {
        self.get(handle).map(|b| b.velocity)
    }

    fn set_position(&mut self, handle: BodyId, position: DVec3) {
        if let Some(b) = self.bodies.get_mut(handle.0 as usize) {
            b.position = position;
        }
    }

    fn set_velocity(&mut self, handle: BodyId, velocity: DVec3) {
        if let Some(b) = self.bodies.get_mut(handle.0 as usize) {
            b.velocity = velocity;
        }
    }

    fn wake(&mut self, handle: BodyId) {
        if let Some(b) = self.bodies.get_mut(handle.0 as usize) {
            b.awake = true;
        }
    }
}
