//! Per-frame systems, invoked by the engine in a fixed order each frame.

pub mod animation;
pub mod collision;
pub mod cull;
pub mod formation;
pub mod movement;
pub mod player_control;
pub mod render;
pub mod spawner;
