//! Entity registry
//!
//! A slot map: entities live in a contiguous `Vec` of slots, freed slots are
//! recycled, and every insertion gets a fresh [`EntityId`] from a counter that
//! starts at 1 and never repeats. A handle carries both the slot index and the
//! id, so a stale handle to a recycled slot simply misses.

use std::num::NonZeroU32;

/// Stable handle to a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    slot: u32,
    id: NonZeroU32,
}

impl EntityId {
    /// Process-unique identifier (1, 2, 3, ...)
    pub fn get(self) -> u32 {
        self.id.get()
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    id: NonZeroU32,
    value: T,
}

#[derive(Debug, Clone)]
pub struct Registry<T> {
    slots: Vec<Option<Slot<T>>>,
    free: Vec<u32>,
    last_id: u32,
    len: usize,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            last_id: 0,
            len: 0,
        }
    }

    /// Store `value` under a freshly generated id
    pub fn insert(&mut self, value: T) -> EntityId {
        self.insert_with(|_| value)
    }

    /// Store a value that needs to know its own id
    pub fn insert_with(&mut self, make: impl FnOnce(EntityId) -> T) -> EntityId {
        self.last_id += 1;
        let id = NonZeroU32::new(self.last_id).unwrap_or(NonZeroU32::MIN);
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(None);
                (self.slots.len() - 1) as u32
            }
        };
        let handle = EntityId { slot, id };
        self.slots[slot as usize] = Some(Slot {
            id,
            value: make(handle),
        });
        self.len += 1;
        handle
    }

    /// Remove by id. Removing an absent id is a no-op.
    pub fn remove(&mut self, handle: EntityId) -> Option<T> {
        let entry = self.slots.get_mut(handle.slot as usize)?;
        if entry.as_ref().is_some_and(|s| s.id == handle.id) {
            self.free.push(handle.slot);
            self.len -= 1;
            entry.take().map(|s| s.value)
        } else {
            None
        }
    }

    pub fn get(&self, handle: EntityId) -> Option<&T> {
        match self.slots.get(handle.slot as usize)? {
            Some(s) if s.id == handle.id => Some(&s.value),
            _ => None,
        }
    }

    pub fn contains(&self, handle: EntityId) -> bool {
        self.get(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live entries in slot order (stable while the registry isn't modified)
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|s| {
                (
                    EntityId {
                        slot: i as u32,
                        id: s.id,
                    },
                    &s.value,
                )
            })
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten().map(|s| &s.value)
    }

    /// Drop every entry for which `keep` returns false, returning their ids
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> Vec<EntityId> {
        let mut removed = Vec::new();
        for (i, entry) in self.slots.iter_mut().enumerate() {
            if let Some(s) = entry {
                if !keep(&s.value) {
                    removed.push(EntityId {
                        slot: i as u32,
                        id: s.id,
                    });
                    *entry = None;
                    self.free.push(i as u32);
                    self.len -= 1;
                }
            }
        }
        removed
    }
}
