//! Entity spawn factories: the player at world init, alien waves at
//! level start and whenever the formation is wiped out.

use glam::Vec2;

use invaders_core::constants::{
    ALIEN_COLUMN_GAP, ALIEN_LEFT_MARGIN, ALIEN_ROWS, ALIEN_ROW_DENSITY, ALIEN_ROW_GAP,
    ALIEN_SPEED, ALIEN_TOP_MARGIN, HUD_HEIGHT, SPRITE_SIZE,
};
use invaders_core::enums::EntityKind;

use crate::world::EntityWorld;

/// Spawn the player, centered just above the HUD strip. Created first
/// so it lands at index 0, where every other system expects it.
pub fn spawn_player(world: &mut EntityWorld, width: f32, height: f32) {
    world.insert(
        EntityKind::Player,
        1,
        Vec2::new(width / 2.0, height - HUD_HEIGHT),
        Vec2::ZERO,
        Vec2::ZERO,
    );
}

/// Spawn a fresh alien wave: `ALIEN_ROWS` rows, each with a count
/// derived from the screen width, drifting right in lockstep. One
/// insert call per row, using the per-entity step delta for columns.
pub fn spawn_wave(world: &mut EntityWorld, width: f32) {
    let per_row = (width / SPRITE_SIZE * ALIEN_ROW_DENSITY).floor() as u32;
    let velocity = Vec2::new(ALIEN_SPEED, 0.0);
    let column_step = Vec2::new(SPRITE_SIZE + ALIEN_COLUMN_GAP, 0.0);

    for row in 0..ALIEN_ROWS {
        let y = ALIEN_TOP_MARGIN + row as f32 * (SPRITE_SIZE + ALIEN_ROW_GAP);
        world.insert(
            EntityKind::AlienA,
            per_row,
            Vec2::new(ALIEN_LEFT_MARGIN, y),
            velocity,
            column_step,
        );
    }
}
