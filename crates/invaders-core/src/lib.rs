//! Core types and definitions for the invaders simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! the entity kind enumeration, the entity value type, count tables,
//! snapshots, and tuning constants. It has no dependency on any
//! windowing or rendering backend.

pub mod constants;
pub mod enums;
pub mod state;
pub mod types;
