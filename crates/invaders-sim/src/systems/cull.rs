//! Culler: the sole authority that shrinks the storage.
//!
//! Removes tombstoned entities and anything that left the playfield,
//! then restores the kind-sort invariant.

use invaders_core::constants::CULL_MARGIN;
use invaders_core::enums::EntityKind;
use invaders_core::types::KindCounts;

use crate::world::EntityWorld;

/// Cull dead and out-of-bounds entities against a `width` x `height`
/// playfield. Returns per-kind removal counts; a non-zero alien count
/// means an alien left the field (reached the bottom), which the
/// caller treats as a loss condition distinct from being shot.
///
/// Comparisons against the tolerance band are strict, so an entity
/// sitting exactly on `width + CULL_MARGIN` survives.
pub fn run(world: &mut EntityWorld, width: f32, height: f32) -> KindCounts {
    let mut cull_counts = KindCounts::new();

    // Tombstones sort last; strip them off the tail in bulk.
    while world
        .entities()
        .last()
        .map_or(false, |entity| entity.kind == EntityKind::Dead)
    {
        world.remove_at(world.len() - 1);
        cull_counts[EntityKind::Dead] += 1;
    }

    // Sweep the survivors. Swap-remove pulls an unvisited entity into
    // the current slot, so the index only advances on a keeper. Index
    // 0 is the player, which is never culled.
    let mut removed = false;
    let mut index = 1;
    while index < world.len() {
        let entity = world.entities()[index];
        let pos = entity.position;
        let outside = pos.x < -CULL_MARGIN
            || pos.x > width + CULL_MARGIN
            || pos.y < -CULL_MARGIN
            || pos.y > height + CULL_MARGIN;

        if outside {
            cull_counts[entity.kind] += 1;
            world.remove_at(index);
            removed = true;
        } else {
            index += 1;
        }
    }

    if removed {
        world.sort_by_kind();
    }
    cull_counts
}
