//! World snapshot — the complete visible state of a frame.

use serde::{Deserialize, Serialize};

use crate::types::Entity;

/// Serializable view of the world after a frame step.
///
/// Entities appear in storage order (sorted by kind), which is also draw
/// order. Two engines stepped identically from the same seed produce
/// byte-identical snapshot encodings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Elapsed time at the end of the snapshotted frame.
    pub elapsed_secs: f32,
    pub entities: Vec<Entity>,
}
