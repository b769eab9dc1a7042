//! Kinematic integration: player, enemies, projectiles.
//!
//! All magnitudes scale by `elapsed_ticks` (integrated time over the
//! nominal tick duration) so behavior is frame-rate independent.

use glam::Vec2;

use survivor_core::commands::InputState;
use survivor_core::constants::{ENEMY_CULL_MARGIN, PROJECTILE_CULL_MARGIN};

use crate::world::World;

/// Integrate held movement intents and clamp into the world bounds.
///
/// Axes add without normalizing: diagonal movement is √2 faster. That is
/// the original game's behavior and is preserved, not a bug to fix here.
pub fn move_player(world: &mut World, input: &InputState, elapsed_ticks: f32) {
    let mut dir = Vec2::ZERO;
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }

    let player = &mut world.player;
    player.position += dir * player.speed * elapsed_ticks;
    player.position = world.bounds.clamp_inside(player.position, player.radius);
}

/// Step every enemy toward the player's current position. Enemies that end
/// up far outside the bounds are culled back to the pool without scoring.
pub fn move_enemies(world: &mut World, elapsed_ticks: f32) {
    let target = world.player.position;
    let factor = world.speed_factor;

    for enemy in &mut world.enemies {
        let dir = (target - enemy.position).normalize_or_zero();
        enemy.position += dir * enemy.speed * factor * elapsed_ticks;
    }

    let bounds = world.bounds;
    let mut i = 0;
    while i < world.enemies.len() {
        if bounds.contains_with_margin(world.enemies[i].position, ENEMY_CULL_MARGIN) {
            i += 1;
        } else {
            let stray = world.enemies.swap_remove(i);
            world.enemy_pool.release(stray);
        }
    }
}

/// Integrate projectile velocities, accumulate distance traveled, and
/// retire projectiles that exceed their range or exit the bounds.
pub fn move_projectiles(world: &mut World, elapsed_ticks: f32) {
    for projectile in &mut world.projectiles {
        let step = projectile.velocity * elapsed_ticks;
        projectile.position += step;
        projectile.traveled += step.length();
    }

    let bounds = world.bounds;
    let mut i = 0;
    while i < world.projectiles.len() {
        let p = &world.projectiles[i];
        let expired = p.traveled > p.range
            || !bounds.contains_with_margin(p.position, PROJECTILE_CULL_MARGIN);
        if expired {
            let spent = world.projectiles.swap_remove(i);
            world.projectile_pool.release(spent);
        } else {
            i += 1;
        }
    }
}
