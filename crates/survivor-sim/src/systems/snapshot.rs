//! Snapshot system: builds the complete read-only view of the world.
//!
//! This system never modifies the world.

use survivor_core::config::weapon_spec;
use survivor_core::constants::XP_PER_LEVEL;
use survivor_core::enums::GamePhase;
use survivor_core::events::GameEvent;
use survivor_core::state::*;

use crate::world::World;

/// Build a complete `WorldSnapshot` from the current world state.
pub fn build(world: &World, phase: GamePhase, events: Vec<GameEvent>) -> WorldSnapshot {
    WorldSnapshot {
        time: world.time,
        phase,
        score: world.score,
        wave: world.wave,
        score_ready: world.score_ready,
        player: build_player(world),
        weapons: build_weapons(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        particles: build_particles(world),
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    let p = &world.player;
    PlayerView {
        position: p.position,
        radius: p.radius,
        health: p.health,
        max_health: p.max_health,
        experience: p.experience,
        level: p.level,
        next_level_xp: p.level * XP_PER_LEVEL,
    }
}

fn build_weapons(world: &World) -> Vec<WeaponView> {
    let now = world.now_ms();
    world
        .weapons
        .iter()
        .map(|w| WeaponView {
            kind: w.kind,
            name: weapon_spec(w.kind).name.to_string(),
            level: w.level,
            ready_in_ms: (w.cooldown_ms / world.speed_factor as f64 - (now - w.last_fired_ms))
                .max(0.0),
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut views: Vec<EnemyView> = world
        .enemies
        .iter()
        .map(|e| EnemyView {
            id: e.id,
            kind: e.kind,
            position: e.position,
            radius: e.radius,
            health: e.health,
            max_health: e.max_health,
        })
        .collect();
    views.sort_by_key(|e| e.id);
    views
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .projectiles
        .iter()
        .map(|p| ProjectileView {
            id: p.id,
            weapon: p.weapon,
            position: p.position,
            velocity: p.velocity,
            radius: p.radius,
        })
        .collect();
    views.sort_by_key(|p| p.id);
    views
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .particles
        .iter()
        .map(|p| ParticleView {
            position: p.position,
            size: p.size,
            color: p.color,
            life_frac: if p.max_life > 0.0 {
                (p.life / p.max_life).clamp(0.0, 1.0)
            } else {
                0.0
            },
        })
        .collect()
}
