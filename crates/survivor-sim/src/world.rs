//! The session's world state.
//!
//! One explicit object owns every live collection and pool; each per-tick
//! system receives it by reference. Nothing about a session is ambient, so
//! multiple engines can run side by side in one process.

use survivor_core::components::{Enemy, Particle, Player, Projectile, Weapon};
use survivor_core::constants::*;
use survivor_core::enums::WeaponKind;
use survivor_core::types::{Bounds, SimTime};

use crate::pool::Pool;

/// All mutable session state threaded through the per-tick systems.
pub struct World {
    // --- Session configuration (fixed after construction) ---
    pub bounds: Bounds,
    /// Session-wide multiplier: scales enemy speed, divides weapon cooldowns.
    pub speed_factor: f32,

    // --- Counters ---
    pub time: SimTime,
    pub score: u32,
    pub wave: u32,
    /// Set at game over; cleared on restart.
    pub score_ready: bool,
    /// Sim-clock deadline for the next wave advance.
    pub next_wave_at_ms: f64,
    pub next_enemy_id: u32,
    pub next_projectile_id: u32,

    // --- Live entities (exclusively owned here) ---
    pub player: Player,
    pub weapons: Vec<Weapon>,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,

    // --- Pools (lifetime-scoped to the engine, thread-confined) ---
    pub enemy_pool: Pool<Enemy>,
    pub projectile_pool: Pool<Projectile>,
    pub particle_pool: Pool<Particle>,
}

impl World {
    /// Build a fresh session world with pre-warmed pools.
    pub fn new(bounds: Bounds, speed_factor: f32) -> Self {
        Self {
            bounds,
            speed_factor,
            time: SimTime::default(),
            score: 0,
            wave: 1,
            score_ready: false,
            next_wave_at_ms: WAVE_INTERVAL_MS,
            next_enemy_id: 0,
            next_projectile_id: 0,
            player: Player::new(&bounds),
            weapons: vec![Weapon::new(WeaponKind::Bolt)],
            enemies: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            enemy_pool: Pool::with_prewarm(ENEMY_POOL_PREWARM),
            projectile_pool: Pool::with_prewarm(PROJECTILE_POOL_PREWARM),
            particle_pool: Pool::with_prewarm(PARTICLE_POOL_PREWARM),
        }
    }

    /// Full session reset: every live entity returns to its pool, then the
    /// player, loadout, and counters reinitialize.
    pub fn reset(&mut self) {
        self.enemy_pool.release_all(&mut self.enemies);
        self.projectile_pool.release_all(&mut self.projectiles);
        self.particle_pool.release_all(&mut self.particles);

        self.time = SimTime::default();
        self.score = 0;
        self.wave = 1;
        self.score_ready = false;
        self.next_wave_at_ms = WAVE_INTERVAL_MS;
        self.next_enemy_id = 0;
        self.next_projectile_id = 0;
        self.player = Player::new(&self.bounds);
        self.weapons.clear();
        self.weapons.push(Weapon::new(WeaponKind::Bolt));
    }

    /// Current sim-clock reading, in milliseconds.
    /// Systems run before the clock advances, so this is the tick's "now".
    pub fn now_ms(&self) -> f64 {
        self.time.elapsed_ms
    }
}
