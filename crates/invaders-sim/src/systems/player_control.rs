//! Player input handling: horizontal movement with clamping, and
//! rocket fire with rate limiting.

use glam::Vec2;

use invaders_core::constants::{PLAYER_SPEED, ROCKET_FIRE_INTERVAL, ROCKET_SPEED, SPRITE_SIZE};
use invaders_core::enums::EntityKind;
use invaders_core::types::KeyState;

use crate::world::EntityWorld;

/// Fire-key bookkeeping carried across frames by the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireState {
    /// Whether the fire key was down last frame (edge detection).
    pub was_down: bool,
    /// Elapsed-clock time of the last rocket launch.
    pub time_of_last_fire: f32,
}

/// Apply one frame of input. Moves the player by `PLAYER_SPEED * dt`
/// in the held direction, clamped to `[0, width - SPRITE_SIZE]`. A
/// fresh fire press launches a rocket immediately; a held key repeats
/// every `ROCKET_FIRE_INTERVAL` seconds. Rockets spawn half a sprite
/// above the player and climb.
pub fn run(
    world: &mut EntityWorld,
    keys: KeyState,
    dt: f32,
    now_secs: f32,
    fire: &mut FireState,
    width: f32,
) {
    if world.is_empty() {
        return;
    }

    {
        let player = world.player_mut();
        let step = PLAYER_SPEED * dt;
        if keys.right {
            player.position.x += step;
        }
        if keys.left {
            player.position.x -= step;
        }
        player.position.x = player.position.x.clamp(0.0, width - SPRITE_SIZE);
    }

    if keys.fire
        && (!fire.was_down || now_secs - fire.time_of_last_fire > ROCKET_FIRE_INTERVAL)
    {
        let origin = world.player().position - Vec2::new(0.0, SPRITE_SIZE / 2.0);
        world.insert(
            EntityKind::Rocket,
            1,
            origin,
            Vec2::new(0.0, -ROCKET_SPEED),
            Vec2::ZERO,
        );
        fire.time_of_last_fire = now_secs;
    }
    fire.was_down = keys.fire;
}
