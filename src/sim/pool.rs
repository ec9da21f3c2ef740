//! Fixed-size object pools and the set of objects currently falling
//!
//! Pools are filled once at construction. Acquisition walks a round-robin
//! cursor per kind and never allocates, so spawning stays O(1) however long
//! a session runs.

use super::state::{ObjectId, ObjectKind, PooledObject};

/// Pre-allocated hazards and pickups
#[derive(Debug, Clone)]
pub struct ObjectPool {
    hazards: Vec<PooledObject>,
    pickups: Vec<PooledObject>,
    hazard_cursor: usize,
    pickup_cursor: usize,
}

impl ObjectPool {
    /// Both sizes must be non-zero (enforced by `Tuning::validate`)
    pub fn new(hazard_count: usize, pickup_count: usize) -> Self {
        debug_assert!(hazard_count > 0 && pickup_count > 0, "empty object pool");
        Self {
            hazards: (0..hazard_count)
                .map(|slot| PooledObject::new(ObjectKind::Hazard, slot))
                .collect(),
            pickups: (0..pickup_count)
                .map(|slot| PooledObject::new(ObjectKind::Pickup, slot))
                .collect(),
            hazard_cursor: 0,
            pickup_cursor: 0,
        }
    }

    fn slots(&self, kind: ObjectKind) -> &[PooledObject] {
        match kind {
            ObjectKind::Hazard => &self.hazards,
            ObjectKind::Pickup => &self.pickups,
        }
    }

    /// Object at the cursor for `kind`; advances the cursor, wrapping to 0.
    ///
    /// Always succeeds. If the pool is smaller than the number of objects in
    /// flight the returned object may still be falling; the caller's spawn
    /// caps keep that from happening with sane tuning.
    pub fn acquire_next(&mut self, kind: ObjectKind) -> &mut PooledObject {
        let (slots, cursor) = match kind {
            ObjectKind::Hazard => (&mut self.hazards, &mut self.hazard_cursor),
            ObjectKind::Pickup => (&mut self.pickups, &mut self.pickup_cursor),
        };
        let index = *cursor;
        *cursor += 1;
        if *cursor == slots.len() {
            *cursor = 0;
        }
        &mut slots[index]
    }

    pub fn get(&self, id: ObjectId) -> Option<&PooledObject> {
        self.slots(id.kind).get(id.slot)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PooledObject> {
        match id.kind {
            ObjectKind::Hazard => self.hazards.get_mut(id.slot),
            ObjectKind::Pickup => self.pickups.get_mut(id.slot),
        }
    }

    /// Pool size for `kind`
    pub fn len(&self, kind: ObjectKind) -> usize {
        self.slots(kind).len()
    }

    /// Slot the next `acquire_next(kind)` returns
    pub fn cursor(&self, kind: ObjectKind) -> usize {
        match kind {
            ObjectKind::Hazard => self.hazard_cursor,
            ObjectKind::Pickup => self.pickup_cursor,
        }
    }

    /// Hide one object
    pub fn release(&mut self, id: ObjectId) {
        if let Some(object) = self.get_mut(id) {
            object.hide();
        }
    }

    /// Hide every object and rewind the cursors
    pub fn release_all(&mut self) {
        for object in self.hazards.iter_mut().chain(self.pickups.iter_mut()) {
            object.hide();
        }
        self.hazard_cursor = 0;
        self.pickup_cursor = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &PooledObject> {
        self.hazards.iter().chain(self.pickups.iter())
    }
}

/// Objects currently falling, bounded by a fixed cap
#[derive(Debug, Clone)]
pub struct ActiveObjectSet {
    ids: Vec<ObjectId>,
    cap: usize,
}

impl ActiveObjectSet {
    pub fn new(cap: usize) -> Self {
        Self {
            ids: Vec::with_capacity(cap),
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.cap
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }

    /// Track a newly launched object. Returns false if it was already
    /// tracked (a recycled object restarting its fall) or the set is full.
    pub fn insert(&mut self, id: ObjectId) -> bool {
        if self.contains(id) {
            return false;
        }
        debug_assert!(!self.is_full(), "active set overflow: cap {}", self.cap);
        if self.is_full() {
            log::warn!("Active set full ({}), dropping {:?}", self.cap, id);
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Stop tracking a landed object. Returns false if it was not tracked.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.ids.iter().position(|&active| active == id) {
            Some(index) => {
                self.ids.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Drain all tracked ids
    pub fn drain(&mut self) -> impl Iterator<Item = ObjectId> + '_ {
        self.ids.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.ids.iter()
    }
}
