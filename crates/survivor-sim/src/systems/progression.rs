//! Progression: experience, levels, weapon unlocks, and wave advancement.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survivor_core::components::Weapon;
use survivor_core::config::weapon_spec;
use survivor_core::constants::*;
use survivor_core::enums::WeaponKind;
use survivor_core::events::GameEvent;

use crate::world::World;

/// Consume experience past each `level * XP_PER_LEVEL` threshold. The
/// remainder carries over — nothing is floored away or fabricated. Weapon
/// unlocks are checked whenever at least one level-up happened.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    let mut leveled = false;

    loop {
        let threshold = world.player.level * XP_PER_LEVEL;
        if world.player.experience < threshold {
            break;
        }
        world.player.experience -= threshold;
        world.player.level += 1;
        world.player.max_health += LEVEL_MAX_HEALTH_BONUS;
        world.player.health =
            (world.player.health + LEVEL_HEAL_AMOUNT).min(world.player.max_health);
        leveled = true;
        events.push(GameEvent::LevelUp {
            level: world.player.level,
        });
    }

    if leveled {
        unlock_weapons(world, events);
    }
}

/// Append a fresh level-1 instance of every weapon whose unlock threshold
/// the player now meets and which is not yet in the loadout.
fn unlock_weapons(world: &mut World, events: &mut Vec<GameEvent>) {
    for kind in WeaponKind::ALL {
        if world.player.level < weapon_spec(kind).unlock_level {
            continue;
        }
        if world.weapons.iter().any(|w| w.kind == kind) {
            continue;
        }
        world.weapons.push(Weapon::new(kind));
        events.push(GameEvent::WeaponUnlocked { kind });
        log::debug!("weapon unlocked: {kind:?}");
    }
}

/// Time-gated wave advancement: every `WAVE_INTERVAL_MS` of simulated
/// time the wave counter increments and each weapon in the loadout
/// independently rolls for a one-level upgrade, capped at its max level.
pub fn advance_wave(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    if world.now_ms() < world.next_wave_at_ms {
        return;
    }
    world.next_wave_at_ms += WAVE_INTERVAL_MS;
    world.wave += 1;
    events.push(GameEvent::WaveStarted { wave: world.wave });
    log::debug!("wave {} started", world.wave);

    for weapon in &mut world.weapons {
        let max_level = weapon_spec(weapon.kind).max_level;
        if weapon.level < max_level && rng.gen_bool(WEAPON_UPGRADE_CHANCE) {
            weapon.level += 1;
            events.push(GameEvent::WeaponUpgraded {
                kind: weapon.kind,
                level: weapon.level,
            });
        }
    }
}
