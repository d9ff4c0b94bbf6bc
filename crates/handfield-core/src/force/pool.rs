use super::{BodySet, ForceParams, ForceParamsPatch};
use crate::constants::{parked_position, MAX_COUNT, SPAWN_HALF_EXTENT};
use fnv::FnvHashSet;
use glam::DVec3;
use rand::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolEntry<H> {
    pub handle: H,
    pub active: bool,
}

/// Fixed-capacity registry of body handles plus the active count.
///
/// Registration order is significant: the first `active_count` entries are
/// the ones the simulator advances. Bodies are never destroyed here, only
/// parked.
#[derive(Debug)]
pub struct ForcePool<H> {
    entries: Vec<PoolEntry<H>>,
    members: FnvHashSet<H>,
    active_count: usize,
    params: ForceParams,
    rng: StdRng,
}

impl<H: Copy + Eq + Hash + Debug> Default for ForcePool<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + Eq + Hash + Debug> ForcePool<H> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            entries: Vec::with_capacity(MAX_COUNT),
            members: FnvHashSet::default(),
            active_count: 0,
            params: ForceParams::default(),
            rng,
        }
    }

    pub fn capacity(&self) -> usize {
        MAX_COUNT
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn params(&self) -> ForceParams {
        self.params
    }

    pub fn entries(&self) -> &[PoolEntry<H>] {
        &self.entries
    }

    pub fn contains(&self, handle: H) -> bool {
        self.members.contains(&handle)
    }

    /// Handles the simulator advances this frame, in registration order.
    /// Only entries inside the active prefix that have been woken count.
    pub fn active_handles(&self) -> impl Iterator<Item = H> + '_ {
        self.entries
            .iter()
            .take(self.active_count)
            .filter(|e| e.active)
            .map(|e| e.handle)
    }

    /// Add `handle` at the end of the pool. Duplicates are ignored, as are
    /// registrations past capacity. Returns whether the handle was added.
    pub fn register(&mut self, handle: H) -> bool {
        if self.members.contains(&handle) {
            return false;
        }
        if self.entries.len() >= MAX_COUNT {
            log::warn!("force pool full ({MAX_COUNT}), ignoring {handle:?}");
            return false;
        }
        self.members.insert(handle);
        self.entries.push(PoolEntry {
            handle,
            active: false,
        });
        true
    }

    /// Remove `handle` and re-sync the remaining bodies, since later
    /// entries shift into its slot. Missing handles are ignored.
    pub fn unregister<B>(&mut self, handle: H, bodies: &mut B) -> bool
    where
        B: BodySet<Handle = H> + ?Sized,
    {
        if !self.members.remove(&handle) {
            return false;
        }
        self.entries.retain(|e| e.handle != handle);
        self.sync(bodies);
        true
    }

    pub fn set_params(&mut self, patch: ForceParamsPatch) {
        self.params.merge(patch);
    }

    /// Set how many bodies take part, clamped to `[0, MAX_COUNT]`, and
    /// wake or park bodies to match. Returns the clamped count.
    pub fn set_active_count<B>(&mut self, n: usize, bodies: &mut B) -> usize
    where
        B: BodySet<Handle = H> + ?Sized,
    {
        let n = n.min(MAX_COUNT);
        if n != self.active_count {
            log::info!("force pool active count {} -> {n}", self.active_count);
        }
        self.active_count = n;
        self.sync(bodies);
        n
    }

    /// Bring every registered body in line with the active count: newly
    /// active ones are woken at a random spot with no velocity, the rest are
    /// parked.
    pub fn sync<B>(&mut self, bodies: &mut B)
    where
        B: BodySet<Handle = H> + ?Sized,
    {
        let parked = parked_position();
        let n = self.active_count;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            if i < n {
                if !entry.active {
                    let spawn = DVec3::new(
                        self.rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
                        self.rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
                        self.rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
                    );
                    bodies.wake(entry.handle);
                    bodies.set_position(entry.handle, spawn);
                    bodies.set_velocity(entry.handle, DVec3::ZERO);
                    entry.active = true;
                }
            } else {
                bodies.set_velocity(entry.handle, DVec3::ZERO);
                bodies.set_position(entry.handle, parked);
                entry.active = false;
            }
        }
    }
}
