//! Weapon firing system: per-weapon cooldown gating and projectile
//! pattern emission.

use glam::Vec2;

use survivor_core::components::{Enemy, Projectile, Weapon};
use survivor_core::config::weapon_spec;
use survivor_core::enums::FirePattern;

use crate::world::World;

/// Aim direction used when no enemy is in range (or the aim vector would
/// be zero-length). Falls back here rather than propagating NaN.
const DEFAULT_AIM: Vec2 = Vec2::X;

/// Run the firing system: each weapon fires independently when its
/// speed-adjusted cooldown has elapsed.
pub fn run(world: &mut World) {
    let now = world.now_ms();
    let World {
        speed_factor,
        player,
        weapons,
        enemies,
        projectiles,
        projectile_pool,
        next_projectile_id,
        ..
    } = world;

    for weapon in weapons.iter_mut() {
        // Cooldown gate. A failed gate mutates nothing.
        if now - weapon.last_fired_ms < weapon.cooldown_ms / *speed_factor as f64 {
            continue;
        }

        let spec = weapon_spec(weapon.kind);
        let aim = aim_direction(player.position, enemies, weapon.range);

        // Damage is snapshotted at fire time; later weapon upgrades do not
        // retroactively change projectiles already in flight.
        let damage = weapon.damage * weapon.level as f32;

        match spec.pattern {
            FirePattern::Homing => emit(
                projectiles,
                projectile_pool,
                next_projectile_id,
                weapon,
                player.position,
                aim * spec.projectile_speed,
                damage,
                spec.projectile_radius,
                spec.penetration,
            ),
            FirePattern::Fan => {
                let base_angle = aim.y.atan2(aim.x);
                for k in 0..spec.projectile_count {
                    let angle = base_angle + fan_offset(spec.spread, spec.projectile_count, k);
                    emit(
                        projectiles,
                        projectile_pool,
                        next_projectile_id,
                        weapon,
                        player.position,
                        Vec2::from_angle(angle) * spec.projectile_speed,
                        damage,
                        spec.projectile_radius,
                        spec.penetration,
                    );
                }
            }
        }

        weapon.last_fired_ms = now;
    }
}

/// Angular offset of projectile `k` within a fan of `count` projectiles.
/// A full-circle spread spaces projectiles evenly without doubling up at
/// the seam; narrower fans are centered on the aim direction.
fn fan_offset(spread: f32, count: u32, k: u32) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    if spread >= std::f32::consts::TAU - 1e-3 {
        spread * k as f32 / count as f32
    } else {
        -spread * 0.5 + spread * k as f32 / (count - 1) as f32
    }
}

/// Unit aim vector toward the nearest enemy strictly within `range`.
///
/// Linear scan; on exact distance ties the first enemy encountered wins.
/// The scan order is the live `Vec` order, which is deterministic for a
/// fixed seed, so this stays reproducible.
fn aim_direction(from: Vec2, enemies: &[Enemy], range: f32) -> Vec2 {
    let mut best_d2 = range * range;
    let mut best: Option<Vec2> = None;
    for enemy in enemies {
        let d2 = from.distance_squared(enemy.position);
        if d2 < best_d2 {
            best_d2 = d2;
            best = Some(enemy.position);
        }
    }
    match best {
        Some(target) => {
            let dir = target - from;
            if dir.length_squared() > 0.0 {
                dir.normalize()
            } else {
                DEFAULT_AIM
            }
        }
        None => DEFAULT_AIM,
    }
}

/// Check a projectile out of the pool and launch it.
#[allow(clippy::too_many_arguments)]
fn emit(
    projectiles: &mut Vec<Projectile>,
    pool: &mut crate::pool::Pool<Projectile>,
    next_id: &mut u32,
    weapon: &Weapon,
    position: Vec2,
    velocity: Vec2,
    damage: f32,
    radius: f32,
    penetration: u32,
) {
    let mut projectile = pool.acquire();
    projectile.id = *next_id;
    *next_id += 1;
    projectile.weapon = weapon.kind;
    projectile.position = position;
    projectile.velocity = velocity;
    projectile.radius = radius;
    projectile.damage = damage;
    projectile.range = weapon.range;
    projectile.traveled = 0.0;
    projectile.penetration_left = penetration;
    projectiles.push(projectile);
}
