//! Simulation constants and tuning parameters.

// --- Tick timing ---

/// Nominal simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Nominal milliseconds per tick. The engine refuses to integrate
/// intervals shorter than this; sub-tick deltas accumulate instead.
pub const NOMINAL_TICK_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- World bounds ---

/// World rectangle width in world units (pixels in the reference renderer).
pub const WORLD_WIDTH: f32 = 800.0;

/// World rectangle height.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Enemies farther than this outside the bounds are culled without scoring.
pub const ENEMY_CULL_MARGIN: f32 = 100.0;

/// Projectiles farther than this outside the bounds are retired.
pub const PROJECTILE_CULL_MARGIN: f32 = 20.0;

// --- Player ---

pub const PLAYER_RADIUS: f32 = 12.0;

/// Player movement per axis per nominal tick. Diagonal movement adds the
/// axes without normalizing (a preserved quirk of the original game).
pub const PLAYER_SPEED: f32 = 3.0;

pub const PLAYER_MAX_HEALTH: f32 = 100.0;

// --- Contact damage ---

/// Damage dealt by an enemy touching the player.
pub const CONTACT_DAMAGE: f32 = 10.0;

/// Minimum simulated time between contact hits from the same enemy.
pub const CONTACT_COOLDOWN_MS: f64 = 1000.0;

// --- Spawn director ---

/// Base per-tick spawn probability at wave 0.
pub const SPAWN_BASE_CHANCE: f32 = 0.02;

/// Additional per-tick spawn probability per wave.
pub const SPAWN_CHANCE_PER_WAVE: f32 = 0.005;

/// Kind-cascade thresholds: minimum wave and roll ceiling per tier.
pub const BOSS_MIN_WAVE: u32 = 10;
pub const BOSS_ROLL: f32 = 0.05;
pub const TANK_MIN_WAVE: u32 = 5;
pub const TANK_ROLL: f32 = 0.15;
pub const FAST_MIN_WAVE: u32 = 3;
pub const FAST_ROLL: f32 = 0.30;

/// Enemy health multiplier step: 1 + (wave / 5) * this.
pub const WAVE_HEALTH_STEP: f32 = 0.5;

// --- Progression ---

/// Experience required to leave level N is N * this.
pub const XP_PER_LEVEL: u32 = 100;

/// Max-health increase per level-up.
pub const LEVEL_MAX_HEALTH_BONUS: f32 = 10.0;

/// Healing applied on level-up, capped at the new max health.
pub const LEVEL_HEAL_AMOUNT: f32 = 20.0;

/// Simulated time between wave advances (1800 ticks at the nominal rate).
pub const WAVE_INTERVAL_MS: f64 = 30_000.0;

/// Chance for each unlocked weapon to gain a level when a wave advances.
pub const WEAPON_UPGRADE_CHANCE: f64 = 0.5;

// --- Speed factor presets ---

pub const SPEED_FACTOR_MIN: f32 = 0.5;
pub const SPEED_FACTOR_MAX: f32 = 1.5;

// --- Object pools ---

pub const ENEMY_POOL_PREWARM: usize = 32;
pub const PROJECTILE_POOL_PREWARM: usize = 64;
pub const PARTICLE_POOL_PREWARM: usize = 128;

// --- Particles ---

/// Particles emitted when a projectile damages an enemy.
pub const HIT_BURST_COUNT: usize = 4;

/// Particles emitted when an enemy dies.
pub const DEATH_BURST_COUNT: usize = 10;

/// Particle lifetime in nominal ticks.
pub const PARTICLE_LIFE_TICKS: f32 = 24.0;
