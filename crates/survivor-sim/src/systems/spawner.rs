//! Spawn director: decides when and what kind of enemy enters the world.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survivor_core::config::enemy_stats;
use survivor_core::constants::*;
use survivor_core::enums::EnemyKind;

use crate::world::World;

/// Roll the per-tick spawn chance and, on success, check one enemy out of
/// the pool at a random point on the world edge.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng) {
    let chance = SPAWN_BASE_CHANCE + world.wave as f32 * SPAWN_CHANCE_PER_WAVE;
    if rng.gen_range(0.0..1.0f32) >= chance {
        return;
    }

    let kind = pick_kind(world.wave, rng.gen_range(0.0..1.0f32));
    let stats = enemy_stats(kind);

    let position = edge_position(world, rng);
    let health_mult = 1.0 + (world.wave / 5) as f32 * WAVE_HEALTH_STEP;
    let speed_jitter = 0.8 + rng.gen_range(0.0..1.0f32) * 0.4;

    let mut enemy = world.enemy_pool.acquire();
    enemy.id = world.next_enemy_id;
    world.next_enemy_id += 1;
    enemy.kind = kind;
    enemy.position = position;
    enemy.radius = stats.radius;
    enemy.speed = stats.speed * speed_jitter;
    enemy.max_health = stats.max_health * health_mult;
    enemy.health = enemy.max_health;
    enemy.score_value = stats.score;
    enemy.last_contact_ms = -CONTACT_COOLDOWN_MS;
    world.enemies.push(enemy);
}

/// Kind selection: an ordered cascade of increasingly specific wave-gated
/// tiers, falling through to Normal. Below every threshold the draw is
/// irrelevant and the result is always Normal.
fn pick_kind(wave: u32, roll: f32) -> EnemyKind {
    if wave >= BOSS_MIN_WAVE && roll < BOSS_ROLL {
        EnemyKind::Boss
    } else if wave >= TANK_MIN_WAVE && roll < TANK_ROLL {
        EnemyKind::Tank
    } else if wave >= FAST_MIN_WAVE && roll < FAST_ROLL {
        EnemyKind::Fast
    } else {
        EnemyKind::Normal
    }
}

/// Uniform point on one of the four boundary edges: pick the edge first,
/// then the position along it.
fn edge_position(world: &World, rng: &mut ChaCha8Rng) -> Vec2 {
    let w = world.bounds.width;
    let h = world.bounds.height;
    match rng.gen_range(0..4u32) {
        0 => Vec2::new(rng.gen_range(0.0..w), 0.0),
        1 => Vec2::new(rng.gen_range(0.0..w), h),
        2 => Vec2::new(0.0, rng.gen_range(0.0..h)),
        _ => Vec2::new(w, rng.gen_range(0.0..h)),
    }
}

#[cfg(test)]
mod tests {
    use super::pick_kind;
    use survivor_core::enums::EnemyKind;

    #[test]
    fn test_wave_one_always_normal() {
        for roll in [0.0, 0.01, 0.04, 0.1, 0.29, 0.5, 0.99] {
            assert_eq!(pick_kind(1, roll), EnemyKind::Normal);
        }
    }

    #[test]
    fn test_cascade_tiers() {
        // Wave 3 opens Fast, but not Tank or Boss.
        assert_eq!(pick_kind(3, 0.1), EnemyKind::Fast);
        assert_eq!(pick_kind(3, 0.01), EnemyKind::Fast);
        assert_eq!(pick_kind(3, 0.35), EnemyKind::Normal);

        // Wave 5: the more specific Tank tier shadows Fast for low rolls.
        assert_eq!(pick_kind(5, 0.1), EnemyKind::Tank);
        assert_eq!(pick_kind(5, 0.2), EnemyKind::Fast);

        // Wave 10: Boss only on the smallest rolls.
        assert_eq!(pick_kind(10, 0.04), EnemyKind::Boss);
        assert_eq!(pick_kind(10, 0.06), EnemyKind::Tank);
        assert_eq!(pick_kind(10, 0.2), EnemyKind::Fast);
        assert_eq!(pick_kind(10, 0.5), EnemyKind::Normal);
    }
}
