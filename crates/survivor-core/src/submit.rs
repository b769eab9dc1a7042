//! Score submission record for the external persistence collaborator.
//!
//! The core only builds and validates the record; transport, retries, and
//! persistence belong to the embedder. A failed submission is reported to
//! the user as retryable, never fatal to the session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed game-type tag expected by the scoreboard service.
pub const GAME_TYPE: &str = "survivor";

/// One score submission, built after game over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub player_name: String,
    pub score: u32,
    pub game_type: String,
}

impl ScoreSubmission {
    /// Validate and build a submission record.
    pub fn new(player_name: &str, score: u32) -> Result<Self, SubmitError> {
        let name = player_name.trim();
        if name.is_empty() {
            return Err(SubmitError::EmptyName);
        }
        Ok(Self {
            player_name: name.to_string(),
            score,
            game_type: GAME_TYPE.to_string(),
        })
    }
}

/// Why a submission record could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The player name was empty or whitespace.
    EmptyName,
    /// The session has not ended; there is no final score yet.
    SessionActive,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::EmptyName => write!(f, "player name must not be empty"),
            SubmitError::SessionActive => {
                write!(f, "score can only be submitted after game over")
            }
        }
    }
}

impl std::error::Error for SubmitError {}
