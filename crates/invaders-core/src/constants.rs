//! Simulation constants and tuning parameters.
//!
//! All distances are in pixels, all speeds in pixels per second, all
//! times in seconds.

// --- Sprites & playfield ---

/// Sprite edge length in pixels. Width = height for every sprite.
pub const SPRITE_SIZE: f32 = 32.0;

/// Height of the HUD strip at the bottom of the window. The playfield
/// ends at `window_height - HUD_HEIGHT`.
pub const HUD_HEIGHT: f32 = 32.0;

/// Tolerance band around the playfield. Entities are culled only once
/// they are strictly beyond this margin on any side.
pub const CULL_MARGIN: f32 = 1.0;

/// Initial storage reservation. A full wave plus projectiles stays
/// well under this.
pub const WORLD_RESERVE: usize = 512;

// --- Speeds ---

/// Player horizontal speed under held input.
pub const PLAYER_SPEED: f32 = 160.0;

/// Rocket climb speed (applied as negative y velocity).
pub const ROCKET_SPEED: f32 = 240.0;

/// Bomb fall speed.
pub const BOMB_SPEED: f32 = 120.0;

/// Alien formation drift speed.
pub const ALIEN_SPEED: f32 = 24.0;

// --- Firing ---

/// Minimum interval between rockets while the fire key is held.
/// A fresh key press always fires immediately.
pub const ROCKET_FIRE_INTERVAL: f32 = 0.5;

// --- Wave layout ---

/// Number of alien rows per wave.
pub const ALIEN_ROWS: u32 = 8;

/// Aliens per row = floor(screen_width / SPRITE_SIZE * density).
pub const ALIEN_ROW_DENSITY: f32 = 0.66;

/// Horizontal gap between aliens in a row (column pitch is
/// `SPRITE_SIZE + ALIEN_COLUMN_GAP`).
pub const ALIEN_COLUMN_GAP: f32 = 8.0;

/// Vertical gap between rows.
pub const ALIEN_ROW_GAP: f32 = 8.0;

/// Y position of the first row's sprite bottom.
pub const ALIEN_TOP_MARGIN: f32 = 64.0;

/// X position of the first column. Inset from the left edge so a fresh
/// wave does not start in contact with the screen boundary.
pub const ALIEN_LEFT_MARGIN: f32 = 32.0;

// --- Animation ---

/// Horizontal nudge applied when an alien's walk frame flips, signed by
/// its current travel direction.
pub const ALIEN_WALK_STEP: f32 = 2.0;

// --- Collision hit-boxes ---
//
// Projectile sprites are mostly transparent; hits are tested from a
// single inner point offset from the sprite's top-left corner to match
// the visible silhouette. Insets are asymmetric on purpose.

/// Horizontal inset of the rocket hit point.
pub const ROCKET_HITBOX_INSET_X: f32 = 12.0;

/// Vertical inset of the rocket hit point.
pub const ROCKET_HITBOX_INSET_Y: f32 = 4.0;

/// Horizontal inset of the bomb hit point.
pub const BOMB_HITBOX_INSET_X: f32 = 12.0;

/// Vertical inset of the bomb hit point.
pub const BOMB_HITBOX_INSET_Y: f32 = 4.0;
