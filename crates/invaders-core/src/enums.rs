//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Entity classification.
///
/// Declaration order is load-bearing: the world keeps its storage sorted
/// ascending by kind, so the player sorts first, aliens next, projectiles
/// after, and `Dead` tombstones collect at the tail where the culler can
/// strip them in bulk.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EntityKind {
    /// The player ship. Exactly one, always at storage index 0.
    Player,
    /// Alien, walk-cycle frame A (even seconds).
    AlienA,
    /// Alien, walk-cycle frame B (odd seconds).
    AlienB,
    /// Alien projectile, falls toward the player.
    Bomb,
    /// Player projectile, travels upward.
    Rocket,
    /// Tombstone: marked for removal, physically removed by the culler.
    Dead,
}

impl EntityKind {
    /// Number of kinds, for fixed-size per-kind tables.
    pub const COUNT: usize = 6;

    /// All kinds in sort order.
    pub const ALL: [EntityKind; Self::COUNT] = [
        EntityKind::Player,
        EntityKind::AlienA,
        EntityKind::AlienB,
        EntityKind::Bomb,
        EntityKind::Rocket,
        EntityKind::Dead,
    ];

    /// Whether this kind is one of the two alien walk frames.
    pub fn is_alien(self) -> bool {
        matches!(self, EntityKind::AlienA | EntityKind::AlienB)
    }

    /// Table index for per-kind count arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}
