//! Alien walk-cycle animation on a one-second cadence.

use invaders_core::constants::ALIEN_WALK_STEP;
use invaders_core::enums::EntityKind;

use crate::world::EntityWorld;

/// Flip every alien to the walk frame for this second: frame A on even
/// seconds, frame B on odd. When the frame actually changes, nudge the
/// alien horizontally by a fixed step signed by its travel direction,
/// so the walk stays synchronized with the formation's edge bounces.
///
/// All aliens land on the same kind, so the flip cannot disorder the
/// kind-sorted storage.
pub fn run(world: &mut EntityWorld, whole_secs: i32) {
    let frame = if whole_secs % 2 == 0 {
        EntityKind::AlienA
    } else {
        EntityKind::AlienB
    };

    for entity in world.entities_mut() {
        if entity.kind.is_alien() && entity.kind != frame {
            entity.kind = frame;
            entity.position.x += ALIEN_WALK_STEP * entity.velocity.x.signum();
        }
    }
}
