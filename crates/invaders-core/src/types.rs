//! Fundamental value types for the simulation.

use std::ops::{Index, IndexMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// A positioned, typed, velocity-carrying game object.
///
/// Position is in pixels, top-left-relative screen space. By convention
/// `position.y` is the sprite's *bottom* edge; the renderer draws the
/// sprite top at `y - SPRITE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec2,
    /// Pixels per second.
    pub velocity: Vec2,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            kind,
            position,
            velocity,
        }
    }
}

/// Axis-aligned bounding box, four scalar edges.
///
/// Ephemeral: recomputed each frame from current entity positions,
/// never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Per-kind counter table, indexable by `EntityKind`.
///
/// Used for the collision resolver's hit counts and the culler's removal
/// counts; the caller folds these into score and lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts([u32; EntityKind::COUNT]);

impl KindCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every counter is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Sum across all kinds.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl Index<EntityKind> for KindCounts {
    type Output = u32;

    fn index(&self, kind: EntityKind) -> &u32 {
        &self.0[kind.index()]
    }
}

impl IndexMut<EntityKind> for KindCounts {
    fn index_mut(&mut self, kind: EntityKind) -> &mut u32 {
        &mut self.0[kind.index()]
    }
}

/// Input poll result from the presentation/input port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}
