//! Simulation engine for the invaders game.
//!
//! Owns the type-sorted entity world, runs the per-frame systems
//! (movement, formation AI, collision, culling, animation, spawning),
//! and reports hit/cull counts for the shell to fold into score and
//! lives. Completely headless: rendering and input arrive through the
//! [`port::PresentationPort`] trait, enabling deterministic testing.

pub mod engine;
pub mod port;
pub mod systems;
pub mod world;

pub use engine::{FrameReport, GameEngine, SimConfig};
pub use invaders_core as core;
