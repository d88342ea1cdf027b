use crate::game::engine::{Game, GameOutcome};
use serde::{Deserialize, Serialize};

/// Serializable end-of-game record for reporting pipelines. This is an
/// export format only; games are never reconstructed from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub seed: Option<u64>,
    pub players: usize,
    pub turns: u32,
    pub score: u32,
    pub lives_left: u8,
    pub hints_left: u8,
    pub outcome: Option<GameOutcome>,
}

impl GameSummary {
    pub fn capture(game: &Game) -> Self {
        Self {
            seed: game.seed(),
            players: game.player_count(),
            turns: game.current_turn(),
            score: game.score(),
            lives_left: game.lives(),
            hints_left: game.hints(),
            outcome: game.outcome(),
        }
    }

    pub fn to_json(game: &Game) -> serde_json::Result<String> {
        let summary = Self::capture(game);
        serde_json::to_string_pretty(&summary)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
