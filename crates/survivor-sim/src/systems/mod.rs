//! Per-tick systems.
//!
//! Systems are free functions over the [`World`](crate::world::World);
//! they own no state. The engine calls them in a fixed order every tick —
//! later phases read state the earlier ones mutated, so the order is part
//! of the contract.

pub mod collision;
pub mod movement;
pub mod particles;
pub mod progression;
pub mod snapshot;
pub mod spawner;
pub mod weapons;
