//! Per-kind entity storage
//!
//! Entities are stored contiguously and addressed by a stable [`EntityId`].
//! Removal only marks an entry dead; dead entries stay in place until
//! [`Arena::compact`] runs at the end of the frame, so iteration during
//! collision resolution never sees a shifted index.

use serde::{Deserialize, Serialize};

/// Stable handle, unique across every arena of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Slot<T> {
    id: EntityId,
    alive: bool,
    value: T,
}

/// Entities of one kind, kept sorted by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with a caller-allocated id.
    ///
    /// Ids must be allocated in increasing order so lookups can binary search.
    pub fn insert(&mut self, id: EntityId, value: T) {
        debug_assert!(
            self.slots.last().is_none_or(|s| s.id < id),
            "arena ids must be inserted in increasing order"
        );
        self.slots.push(Slot {
            id,
            alive: true,
            value,
        });
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.slots.binary_search_by_key(&id, |s| s.id).ok()
    }

    /// Mark an entity dead. Returns false if it was unknown or already dead.
    pub fn kill(&mut self, id: EntityId) -> bool {
        match self.index_of(id) {
            Some(i) if self.slots[i].alive => {
                self.slots[i].alive = false;
                true
            }
            _ => false,
        }
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.index_of(id).is_some_and(|i| self.slots[i].alive)
    }

    /// Live entity by id
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.index_of(id)
            .map(|i| &self.slots[i])
            .filter(|s| s.alive)
            .map(|s| &s.value)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        let i = self.index_of(id)?;
        let slot = &mut self.slots[i];
        if slot.alive { Some(&mut slot.value) } else { None }
    }

    /// Live entities in id order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots
            .iter()
            .filter(|s| s.alive)
            .map(|s| (s.id, &s.value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.slots
            .iter_mut()
            .filter(|s| s.alive)
            .map(|s| (s.id, &mut s.value))
    }

    /// Snapshot of live ids, safe to hold while killing entries
    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop dead entries
    pub fn compact(&mut self) {
        self.slots.retain(|s| s.alive);
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with(n: u32) -> Arena<u32> {
        let mut arena = Arena::new();
        for i in 1..=n {
            arena.insert(EntityId(i), i * 10);
        }
        arena
    }

    #[test]
    fn test_kill_hides_until_compact() {
        let mut arena = arena_with(3);
        assert!(arena.kill(EntityId(2)));
        assert!(!arena.kill(EntityId(2)));
        assert!(!arena.is_alive(EntityId(2)));
        assert_eq!(arena.get(EntityId(2)), None);
        assert_eq!(arena.len(), 2);

        // Dead slot still occupies storage until compaction
        assert_eq!(arena.slots.len(), 3);
        arena.compact();
        assert_eq!(arena.slots.len(), 2);
        assert_eq!(arena.get(EntityId(3)), Some(&30));
    }

    #[test]
    fn test_iteration_in_id_order() {
        let mut arena = arena_with(4);
        arena.kill(EntityId(1));
        let ids: Vec<_> = arena.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_get_mut_skips_dead() {
        let mut arena = arena_with(2);
        *arena.get_mut(EntityId(1)).unwrap() = 99;
        arena.kill(EntityId(2));
        assert!(arena.get_mut(EntityId(2)).is_none());
        assert_eq!(arena.get(EntityId(1)), Some(&99));
    }

    #[test]
    fn test_unknown_id() {
        let mut arena = arena_with(2);
        assert!(!arena.kill(EntityId(42)));
        assert!(arena.get(EntityId(42)).is_none());
    }
}
