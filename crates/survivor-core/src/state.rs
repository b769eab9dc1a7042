//! World snapshot — the complete read-only view built after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, GamePhase, WeaponKind};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete world view handed to the rendering collaborator after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub wave: u32,
    /// Set at game over; the score may now be submitted.
    pub score_ready: bool,
    pub player: PlayerView,
    pub weapons: Vec<WeaponView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    /// Events that occurred during this tick, drained each snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub radius: f32,
    pub health: f32,
    pub max_health: f32,
    pub experience: u32,
    pub level: u32,
    /// Experience required to reach the next level.
    pub next_level_xp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub kind: WeaponKind,
    pub name: String,
    pub level: u8,
    /// Milliseconds until this weapon may fire again (0 when ready).
    pub ready_in_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub radius: f32,
    pub health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub weapon: WeaponKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec2,
    pub size: f32,
    pub color: [u8; 3],
    /// Remaining lifetime as a fraction of the maximum (1.0 = fresh).
    pub life_frac: f32,
}
