//! Draw pass: one sprite call per entity, in storage order.

use invaders_core::constants::SPRITE_SIZE;

use crate::port::PresentationPort;
use crate::world::EntityWorld;

/// Draw every entity through the port. `position.y` is the sprite's
/// bottom edge, so the top-left handed to the backend is one sprite
/// height above it. Draw order follows the kind-sort order; a shell
/// relying on z-order must account for that.
pub fn run(world: &EntityWorld, port: &mut dyn PresentationPort) {
    for entity in world.entities() {
        port.draw_sprite(
            entity.kind,
            entity.position.x as i32,
            (entity.position.y - SPRITE_SIZE) as i32,
        );
    }
}
