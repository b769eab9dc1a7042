//! Fixed per-kind stat tables for enemies and weapons.
//!
//! Both sets are closed: adding a kind means adding a table entry here and
//! letting the exhaustive matches point at anything that was missed.

use crate::enums::{EnemyKind, FirePattern, WeaponKind};

/// Base stats for one enemy kind, before wave scaling.
#[derive(Debug, Clone, Copy)]
pub struct EnemyStats {
    pub max_health: f32,
    /// World units per nominal tick, before jitter and speed factor.
    pub speed: f32,
    pub radius: f32,
    /// Score awarded on kill; experience awarded is half of this.
    pub score: u32,
    /// Particle tint for hit/death bursts (RGB).
    pub color: [u8; 3],
}

/// Base stats for one enemy kind.
pub fn enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Normal => EnemyStats {
            max_health: 25.0,
            speed: 1.0,
            radius: 10.0,
            score: 10,
            color: [220, 60, 60],
        },
        EnemyKind::Fast => EnemyStats {
            max_health: 15.0,
            speed: 2.0,
            radius: 8.0,
            score: 16,
            color: [240, 170, 50],
        },
        EnemyKind::Tank => EnemyStats {
            max_health: 80.0,
            speed: 0.6,
            radius: 16.0,
            score: 30,
            color: [130, 90, 200],
        },
        EnemyKind::Boss => EnemyStats {
            max_health: 300.0,
            speed: 0.5,
            radius: 28.0,
            score: 100,
            color: [200, 30, 120],
        },
    }
}

/// Full specification for one weapon kind.
#[derive(Debug, Clone, Copy)]
pub struct WeaponSpec {
    pub name: &'static str,
    pub pattern: FirePattern,
    /// Damage per projectile at level 1; scales linearly with level.
    pub base_damage: f32,
    /// Both the homing search radius and the projectile travel limit.
    pub range: f32,
    /// Cooldown between shots; divided by the session speed factor at fire time.
    pub cooldown_ms: f64,
    pub max_level: u8,
    pub projectile_count: u32,
    /// Fan width in radians (unused by homing patterns).
    pub spread: f32,
    /// Projectile speed in world units per nominal tick.
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    /// Maximum distinct enemies one projectile may damage.
    pub penetration: u32,
    /// Player level at which this weapon joins the loadout.
    pub unlock_level: u32,
}

/// Fixed table entry for a weapon kind.
pub fn weapon_spec(kind: WeaponKind) -> WeaponSpec {
    match kind {
        WeaponKind::Bolt => WeaponSpec {
            name: "Bolt",
            pattern: FirePattern::Homing,
            base_damage: 25.0,
            range: 300.0,
            cooldown_ms: 400.0,
            max_level: 5,
            projectile_count: 1,
            spread: 0.0,
            projectile_speed: 8.0,
            projectile_radius: 4.0,
            penetration: 1,
            unlock_level: 1,
        },
        WeaponKind::Daggers => WeaponSpec {
            name: "Daggers",
            pattern: FirePattern::Fan,
            base_damage: 12.0,
            range: 250.0,
            cooldown_ms: 600.0,
            max_level: 5,
            projectile_count: 3,
            spread: 0.5,
            projectile_speed: 10.0,
            projectile_radius: 3.0,
            penetration: 1,
            unlock_level: 2,
        },
        WeaponKind::Fireball => WeaponSpec {
            name: "Fireball",
            pattern: FirePattern::Homing,
            base_damage: 40.0,
            range: 350.0,
            cooldown_ms: 900.0,
            max_level: 5,
            projectile_count: 1,
            spread: 0.0,
            projectile_speed: 6.0,
            projectile_radius: 7.0,
            penetration: 3,
            unlock_level: 4,
        },
        WeaponKind::Shuriken => WeaponSpec {
            name: "Shuriken",
            pattern: FirePattern::Fan,
            base_damage: 15.0,
            range: 280.0,
            cooldown_ms: 800.0,
            max_level: 5,
            projectile_count: 4,
            spread: 1.2,
            projectile_speed: 9.0,
            projectile_radius: 4.0,
            penetration: 2,
            unlock_level: 6,
        },
        WeaponKind::Frostwave => WeaponSpec {
            name: "Frostwave",
            pattern: FirePattern::Fan,
            base_damage: 18.0,
            range: 260.0,
            cooldown_ms: 1000.0,
            max_level: 5,
            projectile_count: 5,
            spread: 0.8,
            projectile_speed: 7.0,
            projectile_radius: 5.0,
            penetration: 1,
            unlock_level: 8,
        },
        WeaponKind::Nova => WeaponSpec {
            name: "Nova",
            pattern: FirePattern::Fan,
            base_damage: 20.0,
            range: 240.0,
            cooldown_ms: 1500.0,
            max_level: 5,
            projectile_count: 8,
            spread: std::f32::consts::TAU,
            projectile_speed: 6.5,
            projectile_radius: 5.0,
            penetration: 1,
            unlock_level: 10,
        },
    }
}
