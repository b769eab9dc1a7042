//! Simulation engine for the survivor game.
//!
//! `SimulationEngine` owns all session state, recycles entities through
//! object pools, runs the per-tick systems in a fixed order, and produces
//! `WorldSnapshot`s. Completely headless (no renderer or input-device
//! dependency), enabling deterministic testing: the same seed and the same
//! tick cadence reproduce the same session.

pub mod engine;
pub mod pool;
pub mod systems;
pub mod world;

pub use engine::{SimConfig, SimulationEngine};
pub use survivor_core as core;
