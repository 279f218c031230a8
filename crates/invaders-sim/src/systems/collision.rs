//! Collision resolver: discrete per-frame hit tests between
//! projectiles and their targets.
//!
//! Hits tombstone entities (retype to `Dead`) rather than removing
//! them mid-pass; the culler does the physical removal. The pass
//! re-sorts when anything was tombstoned so the exported ordering
//! guarantee (tombstones in a contiguous suffix) holds on return.
//!
//! The test is a single-corner point-in-rect check with strict
//! inequalities: the projectile's inner hit point (its sprite
//! top-left plus asymmetric insets) against the target's full sprite
//! rectangle. This is intentionally not a symmetric AABB-vs-AABB
//! overlap; the asymmetry matches the sprites' visible silhouettes,
//! and gameplay is tuned around this exact hit registration.
//!
//! Known limitation: the check is discrete, so a projectile fast
//! enough to cross a target between two frames tunnels through it.

use glam::Vec2;

use invaders_core::constants::{
    BOMB_HITBOX_INSET_X, BOMB_HITBOX_INSET_Y, ROCKET_HITBOX_INSET_X, ROCKET_HITBOX_INSET_Y,
    SPRITE_SIZE,
};
use invaders_core::enums::EntityKind;
use invaders_core::types::KindCounts;

use crate::world::EntityWorld;

/// Inner hit point of a projectile sprite at `position`.
fn hit_point(position: Vec2, inset_x: f32, inset_y: f32) -> Vec2 {
    Vec2::new(position.x + inset_x, position.y + inset_y)
}

/// Strict point-in-rect test against the full sprite rectangle whose
/// top-left corner is `target`.
fn point_in_sprite(point: Vec2, target: Vec2) -> bool {
    let left = target.x;
    let right = target.x + SPRITE_SIZE;
    let top = target.y;
    let bottom = target.y + SPRITE_SIZE;

    point.x > left && point.x < right && point.y < bottom && point.y > top
}

/// Test every rocket against every alien, and every bomb against the
/// player. Returns per-kind hit counts for the frame; the caller folds
/// alien counts into score and the player count into lives.
pub fn run(world: &mut EntityWorld) -> KindCounts {
    let mut hit_counts = KindCounts::new();
    let mut tombstoned = false;

    {
        let entities = world.entities_mut();

        // Rockets vs aliens. A rocket is spent on its first hit.
        for rocket_index in 0..entities.len() {
            if entities[rocket_index].kind != EntityKind::Rocket {
                continue;
            }
            let point = hit_point(
                entities[rocket_index].position,
                ROCKET_HITBOX_INSET_X,
                ROCKET_HITBOX_INSET_Y,
            );

            for target_index in 0..entities.len() {
                let target = entities[target_index];
                if !target.kind.is_alien() {
                    continue;
                }
                if point_in_sprite(point, target.position) {
                    hit_counts[target.kind] += 1;
                    entities[target_index].kind = EntityKind::Dead;
                    entities[rocket_index].kind = EntityKind::Dead;
                    tombstoned = true;
                    break;
                }
            }
        }

        // Bombs vs the player at index 0. The player is never
        // tombstoned; life loss is the caller's call via
        // hit_counts[Player].
        if !entities.is_empty() && entities[0].kind == EntityKind::Player {
            let player_position = entities[0].position;

            for entity in entities.iter_mut() {
                if entity.kind != EntityKind::Bomb {
                    continue;
                }
                let point =
                    hit_point(entity.position, BOMB_HITBOX_INSET_X, BOMB_HITBOX_INSET_Y);
                if point_in_sprite(point, player_position) {
                    hit_counts[EntityKind::Player] += 1;
                    entity.kind = EntityKind::Dead;
                    tombstoned = true;
                }
            }
        }
    }

    // Tombstones sort last; restoring the order here is what lets the
    // culler strip them from the tail without a scan.
    if tombstoned {
        world.sort_by_kind();
    }
    hit_counts
}
