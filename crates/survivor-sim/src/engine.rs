//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the world state and pools, processes queued
//! control commands, runs all systems in a fixed order, and produces
//! `WorldSnapshot`s. The external driver calls `tick` once per frame;
//! ticks are atomic from the driver's perspective and never re-entered.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use survivor_core::commands::{Command, InputState};
use survivor_core::constants::{NOMINAL_TICK_MS, SPEED_FACTOR_MAX, SPEED_FACTOR_MIN};
use survivor_core::enums::GamePhase;
use survivor_core::events::GameEvent;
use survivor_core::state::WorldSnapshot;
use survivor_core::submit::{ScoreSubmission, SubmitError};
use survivor_core::types::{Bounds, SimTime};

use crate::systems;
use crate::world::World;

/// Configuration for starting a new simulation, fixed for the session.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// World-speed multiplier, clamped to the preset range (0.5–1.5).
    /// Scales enemy movement and divides weapon cooldowns.
    pub speed_factor: f32,
    /// World rectangle.
    pub bounds: Bounds,
    /// Nominal tick duration in milliseconds.
    pub nominal_tick_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            speed_factor: 1.0,
            bounds: Bounds::default(),
            nominal_tick_ms: NOMINAL_TICK_MS,
        }
    }
}

/// The simulation engine. Owns the world and all session state.
pub struct SimulationEngine {
    world: World,
    phase: GamePhase,
    nominal_tick_ms: f64,
    /// Sub-tick time not yet integrated. The engine refuses to advance for
    /// intervals shorter than the nominal tick; deltas accumulate here.
    accumulator_ms: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<Command>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let speed_factor = config
            .speed_factor
            .clamp(SPEED_FACTOR_MIN, SPEED_FACTOR_MAX);
        Self {
            world: World::new(config.bounds, speed_factor),
            phase: GamePhase::default(),
            nominal_tick_ms: config.nominal_tick_ms,
            accumulator_ms: 0.0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a control command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation and return the resulting snapshot.
    ///
    /// `elapsed_ms` is the wall time since the previous call; movement
    /// integrates by `elapsed / nominal_tick` so behavior is frame-rate
    /// independent. While paused, over, or in the menu this mutates
    /// nothing beyond processing queued commands.
    pub fn tick(&mut self, input: &InputState, elapsed_ms: f64) -> WorldSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.accumulator_ms += elapsed_ms.max(0.0);
            if self.accumulator_ms >= self.nominal_tick_ms {
                let delta_ms = self.accumulator_ms;
                self.accumulator_ms = 0.0;
                let elapsed_ticks = (delta_ms / self.nominal_tick_ms) as f32;
                self.run_systems(input, elapsed_ticks, delta_ms);
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.world.time
    }

    /// Get the session speed factor.
    pub fn speed_factor(&self) -> f32 {
        self.world.speed_factor
    }

    /// Get a read-only reference to the world state.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Build the score-submission record for the external scoreboard.
    /// Only valid after game over; the core does not retry on the
    /// collaborator's behalf.
    pub fn score_submission(&self, player_name: &str) -> Result<ScoreSubmission, SubmitError> {
        if !self.world.score_ready {
            return Err(SubmitError::SessionActive);
        }
        ScoreSubmission::new(player_name, self.world.score)
    }

    /// Mutable world access for tests that stage exact scenarios.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single control command. Commands outside their valid
    /// phase are ignored.
    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Start => {
                if self.phase == GamePhase::Menu {
                    self.world.reset();
                    self.accumulator_ms = 0.0;
                    self.phase = GamePhase::Active;
                    log::info!(
                        "session started (speed factor {:.2})",
                        self.world.speed_factor
                    );
                }
            }
            Command::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            Command::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            Command::Restart => {
                if matches!(
                    self.phase,
                    GamePhase::Active | GamePhase::Paused | GamePhase::GameOver
                ) {
                    self.world.reset();
                    self.accumulator_ms = 0.0;
                    self.phase = GamePhase::Active;
                    log::info!("session restarted");
                }
            }
        }
    }

    /// Run all systems in order. Later phases read state mutated by the
    /// earlier ones within the same tick, so this order is contractual.
    fn run_systems(&mut self, input: &InputState, elapsed_ticks: f32, delta_ms: f64) {
        // 1. Player movement (diagonals intentionally unnormalized).
        systems::movement::move_player(&mut self.world, input, elapsed_ticks);
        // 2. Enemy movement toward the player + out-of-bounds cull.
        systems::movement::move_enemies(&mut self.world, elapsed_ticks);
        // 3. Projectile movement + range/bounds cull.
        systems::movement::move_projectiles(&mut self.world, elapsed_ticks);
        // 4. Weapon firing (cooldown-gated pattern emission).
        systems::weapons::run(&mut self.world);
        // 5. Collision resolution (hits, deaths, spent shots, contact damage).
        systems::collision::run(&mut self.world, &mut self.rng, &mut self.events);
        // 6. Particle decay.
        systems::particles::run(&mut self.world, elapsed_ticks);

        // 7. Game-over transition: freeze the session before any further
        // mutation this tick.
        if self.world.player.health <= 0.0 {
            self.phase = GamePhase::GameOver;
            self.world.score_ready = true;
            self.events.push(GameEvent::GameOver {
                score: self.world.score,
            });
            log::info!(
                "game over at wave {} with score {}",
                self.world.wave,
                self.world.score
            );
            self.world.time.advance(delta_ms);
            return;
        }

        // 8. Progression (level-ups, weapon unlocks) — score from this
        // tick's kills already counts toward experience.
        systems::progression::run(&mut self.world, &mut self.events);
        // 9. Spawn director.
        systems::spawner::run(&mut self.world, &mut self.rng);
        // 10. Wave advancement + weapon upgrade rolls.
        systems::progression::advance_wave(&mut self.world, &mut self.rng, &mut self.events);

        self.world.time.advance(delta_ms);
    }
}
