//! Entity data for the simulation.
//!
//! These are plain data structs with no behavior beyond construction and
//! pool-reset defaults. Game logic lives in the engine's systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::weapon_spec;
use crate::constants::*;
use crate::enums::{EnemyKind, WeaponKind};
use crate::types::Bounds;

/// Parking spot for inert pooled entities, well outside any world rectangle.
const OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

/// The player avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub radius: f32,
    /// Movement per axis per nominal tick.
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    pub experience: u32,
    pub level: u32,
}

impl Player {
    /// A fresh level-1 player at the center of `bounds`.
    pub fn new(bounds: &Bounds) -> Self {
        Self {
            position: bounds.center(),
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            experience: 0,
            level: 1,
        }
    }
}

/// One live (or pooled) enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub radius: f32,
    /// World units per nominal tick, with spawn jitter baked in.
    /// The session speed factor is applied during integration.
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    pub score_value: u32,
    /// Sim-clock timestamp of this enemy's last contact hit on the player.
    pub last_contact_ms: f64,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            id: 0,
            kind: EnemyKind::Normal,
            position: OFFSCREEN,
            radius: 0.0,
            speed: 0.0,
            health: 0.0,
            max_health: 0.0,
            score_value: 0,
            last_contact_ms: -CONTACT_COOLDOWN_MS,
        }
    }
}

/// One weapon in the player's loadout. Presence in the loadout *is* the
/// unlocked state; locked weapons exist only as table entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub level: u8,
    /// Sim-clock timestamp of the last successful fire.
    pub last_fired_ms: f64,
    /// Copied from the kind's table entry at unlock time.
    pub damage: f32,
    pub range: f32,
    pub cooldown_ms: f64,
}

impl Weapon {
    /// A fresh level-1 weapon of `kind`, ready to fire immediately.
    pub fn new(kind: WeaponKind) -> Self {
        let spec = weapon_spec(kind);
        Self {
            kind,
            level: 1,
            // Far enough in the past that any cooldown has elapsed at t=0.
            last_fired_ms: -1.0e9,
            damage: spec.base_damage,
            range: spec.range,
            cooldown_ms: spec.cooldown_ms,
        }
    }
}

/// One live (or pooled) projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub weapon: WeaponKind,
    pub position: Vec2,
    /// World units per nominal tick.
    pub velocity: Vec2,
    pub radius: f32,
    /// Snapshot of `weapon.damage * weapon.level` taken at fire time.
    pub damage: f32,
    /// Maximum travel distance before retirement.
    pub range: f32,
    pub traveled: f32,
    /// Remaining distinct-enemy hits before retirement.
    pub penetration_left: u32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            id: 0,
            weapon: WeaponKind::Bolt,
            position: OFFSCREEN,
            velocity: Vec2::ZERO,
            radius: 0.0,
            damage: 0.0,
            range: 0.0,
            traveled: 0.0,
            penetration_left: 0,
        }
    }
}

/// One live (or pooled) cosmetic particle. No gameplay invariant depends
/// on particles; only their pool lifecycle is contractual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining lifetime in nominal ticks.
    pub life: f32,
    pub max_life: f32,
    pub color: [u8; 3],
    pub size: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: OFFSCREEN,
            velocity: Vec2::ZERO,
            life: 0.0,
            max_life: 0.0,
            color: [255, 255, 255],
            size: 0.0,
        }
    }
}
