//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level session state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Active,
    Paused,
    GameOver,
}

/// Enemy category. A closed set: stats come from a fixed per-kind table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline chaser.
    #[default]
    Normal,
    /// Low health, high speed. Appears from wave 3.
    Fast,
    /// High health, slow. Appears from wave 5.
    Tank,
    /// Rare heavy unit. Appears from wave 10.
    Boss,
}

/// Weapon identity. A closed set: behavior and stats come from a fixed
/// per-kind table, so an exhaustive match covers every firing pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Single homing bolt. The starting weapon.
    #[default]
    Bolt,
    /// Narrow three-dagger fan.
    Daggers,
    /// Slow homing projectile that punches through several enemies.
    Fireball,
    /// Wide four-shuriken fan.
    Shuriken,
    /// Five-projectile cone.
    Frostwave,
    /// Full-circle eight-projectile ring.
    Nova,
}

impl WeaponKind {
    /// All weapon kinds in unlock-check order.
    pub const ALL: [WeaponKind; 6] = [
        WeaponKind::Bolt,
        WeaponKind::Daggers,
        WeaponKind::Fireball,
        WeaponKind::Shuriken,
        WeaponKind::Frostwave,
        WeaponKind::Nova,
    ];
}

/// Projectile emission pattern for a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirePattern {
    /// One projectile aimed at the nearest enemy in range
    /// (fixed default direction when no enemy is in range).
    Homing,
    /// `projectile_count` projectiles fanned across `spread` radians,
    /// centered on the aim direction. A spread of TAU is a full ring.
    Fan,
}
