//! Presentation/input port — the seam between the headless simulation
//! and whatever windowing backend hosts it.

use invaders_core::enums::EntityKind;
use invaders_core::types::KeyState;

/// Services the simulation consumes from the shell. Sprites are opaque
/// handles on the far side of this trait; the simulation only ever
/// names them by entity kind.
pub trait PresentationPort {
    /// Monotonic clock, seconds since start.
    fn elapsed_seconds(&self) -> f32;

    /// Current keyboard state.
    fn poll_input(&mut self) -> KeyState;

    /// Draw the sprite for `kind` with its top-left corner at (x, y).
    /// Called once per live entity per frame, in storage order, so draw
    /// order follows the kind-sort order.
    fn draw_sprite(&mut self, kind: EntityKind, x: i32, y: i32);
}
