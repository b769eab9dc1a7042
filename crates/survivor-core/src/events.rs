//! Events emitted by the simulation for sound and UI feedback.
//!
//! Events are collected during a tick and drained into the snapshot; the
//! core never depends on what consumers do with them.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, WeaponKind};

/// Feedback events for the embedding frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The wave counter advanced.
    WaveStarted { wave: u32 },
    /// An enemy died to a projectile.
    EnemySlain { kind: EnemyKind, score: u32 },
    /// An enemy landed a contact hit on the player.
    PlayerHit { damage: f32, health_remaining: f32 },
    /// The player crossed a level threshold.
    LevelUp { level: u32 },
    /// A new weapon joined the loadout.
    WeaponUnlocked { kind: WeaponKind },
    /// A wave-advance roll upgraded a weapon.
    WeaponUpgraded { kind: WeaponKind, level: u8 },
    /// Player health reached zero; the session is frozen.
    GameOver { score: u32 },
}
