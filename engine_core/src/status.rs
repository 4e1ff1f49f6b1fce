use serde::{Deserialize, Serialize};

/// Whether a game is still being played, and by whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active {
        whose_turn: Vec<usize>,
    },
    Finished {
        /// 1-based placings per player, ties sharing a placing.
        placings: Vec<usize>,
    },
}
