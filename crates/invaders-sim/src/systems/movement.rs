//! Euler motion integration: position += velocity * dt each frame.

use crate::world::EntityWorld;

/// Advance every entity except the player. Index 0 is exempt because
/// the player's position is driven only by input, not by velocity
/// integration. No clamping here; boundary handling belongs to the
/// culler and to the input system's player clamp.
pub fn run(world: &mut EntityWorld, dt: f32) {
    for entity in world.entities_mut().iter_mut().skip(1) {
        entity.position += entity.velocity * dt;
    }
}
