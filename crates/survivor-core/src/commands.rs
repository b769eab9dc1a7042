//! Discrete control events and per-tick input sent by the driver.
//!
//! Commands are queued and processed at the next tick boundary, so a
//! key-press handler can toggle pause without racing an in-flight tick.

use serde::{Deserialize, Serialize};

/// All discrete control events the driver may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Begin a session from the menu.
    Start,
    /// Freeze all mutation, preserving state for resume.
    Pause,
    /// Resume a paused session.
    Resume,
    /// Full reset: all live entities return to their pools, then a fresh
    /// session begins immediately.
    Restart,
}

/// The set of movement intents currently held, sampled once per tick.
/// Diagonals are allowed and intentionally not speed-normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub const NONE: InputState = InputState {
        up: false,
        down: false,
        left: false,
        right: false,
    };
}
