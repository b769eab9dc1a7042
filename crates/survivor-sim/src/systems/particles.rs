//! Cosmetic particle bursts and lifetime decay.
//!
//! Purely visual: no gameplay invariant reads particle state. Only the
//! pool checkout/return discipline is contractual.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survivor_core::components::Particle;
use survivor_core::constants::PARTICLE_LIFE_TICKS;

use crate::pool::Pool;
use crate::world::World;

/// Emit a burst of `count` particles at `position`.
pub fn burst(
    particles: &mut Vec<Particle>,
    pool: &mut Pool<Particle>,
    rng: &mut ChaCha8Rng,
    position: Vec2,
    color: [u8; 3],
    count: usize,
) {
    for _ in 0..count {
        let mut particle = pool.acquire();
        particle.position = position;
        particle.velocity = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        particle.life = PARTICLE_LIFE_TICKS;
        particle.max_life = PARTICLE_LIFE_TICKS;
        particle.color = color;
        particle.size = rng.gen_range(1.0..3.0);
        particles.push(particle);
    }
}

/// Drift particles and return expired ones to the pool.
pub fn run(world: &mut World, elapsed_ticks: f32) {
    for particle in &mut world.particles {
        particle.position += particle.velocity * elapsed_ticks;
        particle.life -= elapsed_ticks;
    }

    let mut i = 0;
    while i < world.particles.len() {
        if world.particles[i].life <= 0.0 {
            let dead = world.particles.swap_remove(i);
            world.particle_pool.release(dead);
        } else {
            i += 1;
        }
    }
}
