//! Formation AI: group edge bounce, row descent, and random bombing.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::constants::{BOMB_SPEED, SPRITE_SIZE};
use invaders_core::enums::EntityKind;
use invaders_core::types::BoundingBox;

use crate::world::EntityWorld;

/// Bounding box spanning the combined sprite extents of every alien,
/// or `None` when no aliens exist. `position.y` is a sprite's bottom
/// edge, so the top extends one sprite height above it.
pub fn bounding_box(world: &EntityWorld) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for entity in world.entities() {
        if !entity.kind.is_alien() {
            continue;
        }
        let pos = entity.position;
        match &mut bbox {
            None => {
                bbox = Some(BoundingBox {
                    left: pos.x,
                    right: pos.x + SPRITE_SIZE,
                    top: pos.y - SPRITE_SIZE,
                    bottom: pos.y,
                });
            }
            Some(bbox) => {
                bbox.left = bbox.left.min(pos.x);
                bbox.right = bbox.right.max(pos.x + SPRITE_SIZE);
                bbox.top = bbox.top.min(pos.y - SPRITE_SIZE);
                bbox.bottom = bbox.bottom.max(pos.y);
            }
        }
    }
    bbox
}

/// Reverse the formation's horizontal direction and drop it one row.
/// Each alien's x is clamped into `[clamp_min_x, clamp_max_x]` so the
/// bounce does not leave stragglers outside the playfield to be culled.
pub fn reverse_and_descend(world: &mut EntityWorld, clamp_min_x: f32, clamp_max_x: f32) {
    for entity in world.entities_mut() {
        if !entity.kind.is_alien() {
            continue;
        }
        entity.velocity.x = -entity.velocity.x;
        entity.position.y += SPRITE_SIZE;
        entity.position.x = entity.position.x.clamp(clamp_min_x, clamp_max_x);
    }
}

/// Random bomb drop, at most once per whole-second boundary crossing.
///
/// The drawn index is uniform over the *entire* storage, not just the
/// aliens; the bomb is only spawned when the pick lands on an alien.
/// The resulting per-second fire probability is alien_count /
/// total_count — a deliberate difficulty throttle tied to how many
/// entities are in flight, so do not narrow the sample to aliens.
pub fn random_fire(
    world: &mut EntityWorld,
    rng: &mut ChaCha8Rng,
    prev_floor_secs: i32,
    curr_floor_secs: i32,
) {
    if prev_floor_secs == curr_floor_secs || world.is_empty() {
        return;
    }

    let index = rng.gen_range(0..world.len());
    let shooter = world.entities()[index];
    if shooter.kind.is_alien() {
        world.insert(
            EntityKind::Bomb,
            1,
            shooter.position + Vec2::new(0.0, SPRITE_SIZE),
            Vec2::new(0.0, BOMB_SPEED),
            Vec2::ZERO,
        );
    }
}
