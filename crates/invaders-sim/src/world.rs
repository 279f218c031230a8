//! Type-sorted entity storage.
//!
//! The world owns a single contiguous `Vec<Entity>` kept sorted
//! ascending by [`EntityKind`] after every public structural mutation.
//! The ordering is load-bearing: the player sits at index 0, an O(1)
//! look at index 1 answers "any aliens left", and `Dead` tombstones
//! collect in a contiguous suffix the culler strips in bulk.

use glam::Vec2;

use invaders_core::constants::WORLD_RESERVE;
use invaders_core::enums::EntityKind;
use invaders_core::types::Entity;

/// Ordered, contiguous entity collection, partitioned by kind.
#[derive(Debug, Clone, Default)]
pub struct EntityWorld {
    entities: Vec<Entity>,
}

impl EntityWorld {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(WORLD_RESERVE),
        }
    }

    /// Append `count` entities of `kind`, entity *i* positioned at
    /// `start + step * i`, all sharing `velocity`. A non-zero `step`
    /// spawns a whole row in one call. Restores the sort invariant
    /// before returning.
    ///
    /// The kind enumeration is closed, so there is no runtime failure
    /// path; inserting a `Dead` tombstone directly is a programming
    /// error (tombstones are produced by retyping live entities).
    pub fn insert(&mut self, kind: EntityKind, count: u32, start: Vec2, velocity: Vec2, step: Vec2) {
        debug_assert!(kind != EntityKind::Dead);

        let mut position = start;
        for _ in 0..count {
            self.entities.push(Entity::new(kind, position, velocity));
            position += step;
        }
        self.sort_by_kind();
    }

    /// Swap-with-last removal. Breaks the sort invariant until the
    /// caller re-sorts; indices are not stable across this call.
    pub fn remove_at(&mut self, index: usize) {
        self.entities.swap_remove(index);
    }

    /// Stable ascending sort on kind. Ties keep insertion order, which
    /// the random-fire indexing semantics depend on.
    pub fn sort_by_kind(&mut self) {
        self.entities.sort_by_key(|entity| entity.kind);
        debug_assert!(self.is_sorted_by_kind());
    }

    /// Invariant check: kinds non-decreasing across the storage.
    pub fn is_sorted_by_kind(&self) -> bool {
        self.entities
            .windows(2)
            .all(|pair| pair[0].kind <= pair[1].kind)
    }

    /// True while any alien is alive. O(1): the storage is sorted, so
    /// if an alien exists one sits at index 1, right after the player.
    pub fn aliens_remain(&self) -> bool {
        self.entities.len() > 1 && self.entities[1].kind.is_alien()
    }

    /// Number of live aliens (linear scan; tests and diagnostics only).
    pub fn alien_count(&self) -> usize {
        self.entities
            .iter()
            .filter(|entity| entity.kind.is_alien())
            .count()
    }

    /// The player entity. The caller guarantees the world was set up
    /// with a player at index 0 and has not been cleared.
    pub fn player(&self) -> &Entity {
        debug_assert_eq!(self.entities[0].kind, EntityKind::Player);
        &self.entities[0]
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        debug_assert_eq!(self.entities[0].kind, EntityKind::Player);
        &mut self.entities[0]
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Game-over teardown: drop every entity, player included.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}
