//! Collision resolution.
//!
//! The four steps run in a fixed order every tick:
//! 1. each surviving projectile scans all live enemies and applies damage
//!    while its penetration budget lasts;
//! 2. enemies at zero health are removed, awarding score and experience;
//! 3. projectiles with an exhausted budget are retired;
//! 4. surviving enemies test contact against the player, rate-limited to
//!    one hit per enemy per contact cooldown.

use rand_chacha::ChaCha8Rng;

use survivor_core::config::enemy_stats;
use survivor_core::constants::{
    CONTACT_COOLDOWN_MS, CONTACT_DAMAGE, DEATH_BURST_COUNT, HIT_BURST_COUNT,
};
use survivor_core::events::GameEvent;

use crate::systems::particles;
use crate::world::World;

/// Run collision resolution for one tick.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    projectile_hits(world, rng);
    remove_dead_enemies(world, rng, events);
    retire_spent_projectiles(world);
    player_contact(world, events);
}

/// Step 1: projectile-vs-enemy overlap checks.
fn projectile_hits(world: &mut World, rng: &mut ChaCha8Rng) {
    let World {
        enemies,
        projectiles,
        particles,
        particle_pool,
        ..
    } = world;

    for projectile in projectiles.iter_mut() {
        for enemy in enemies.iter_mut() {
            if projectile.penetration_left == 0 {
                break;
            }
            // An enemy killed earlier in the scan no longer absorbs hits.
            if enemy.health <= 0.0 {
                continue;
            }
            let hit_range = enemy.radius + projectile.radius;
            if projectile.position.distance_squared(enemy.position) < hit_range * hit_range {
                enemy.health -= projectile.damage;
                projectile.penetration_left -= 1;
                particles::burst(
                    particles,
                    particle_pool,
                    rng,
                    enemy.position,
                    enemy_stats(enemy.kind).color,
                    HIT_BURST_COUNT,
                );
            }
        }
    }
}

/// Step 2: dead enemies award score (and half as experience), burst, and
/// return to the pool.
fn remove_dead_enemies(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    let mut i = 0;
    while i < world.enemies.len() {
        if world.enemies[i].health > 0.0 {
            i += 1;
            continue;
        }
        let slain = world.enemies.swap_remove(i);
        world.score += slain.score_value;
        world.player.experience += slain.score_value / 2;
        events.push(GameEvent::EnemySlain {
            kind: slain.kind,
            score: slain.score_value,
        });
        particles::burst(
            &mut world.particles,
            &mut world.particle_pool,
            rng,
            slain.position,
            enemy_stats(slain.kind).color,
            DEATH_BURST_COUNT,
        );
        world.enemy_pool.release(slain);
    }
}

/// Step 3: projectiles that spent their whole penetration budget retire.
fn retire_spent_projectiles(world: &mut World) {
    let mut i = 0;
    while i < world.projectiles.len() {
        if world.projectiles[i].penetration_left == 0 {
            let spent = world.projectiles.swap_remove(i);
            world.projectile_pool.release(spent);
        } else {
            i += 1;
        }
    }
}

/// Step 4: player-vs-enemy contact damage, rate-limited per enemy so a
/// lingering overlap deals at most one hit per cooldown window.
fn player_contact(world: &mut World, events: &mut Vec<GameEvent>) {
    let now = world.now_ms();
    let player = &mut world.player;

    for enemy in &mut world.enemies {
        let touch_range = enemy.radius + player.radius;
        if player.position.distance_squared(enemy.position) >= touch_range * touch_range {
            continue;
        }
        if now - enemy.last_contact_ms < CONTACT_COOLDOWN_MS {
            continue;
        }
        enemy.last_contact_ms = now;
        player.health = (player.health - CONTACT_DAMAGE).max(0.0);
        events.push(GameEvent::PlayerHit {
            damage: CONTACT_DAMAGE,
            health_remaining: player.health,
        });
    }
}
