use serde::{Deserialize, Serialize};

/// A game log entry, either public or private to specific players.
///
/// Logs are append-only narration for the hosting server to relay; the
/// engine never reads them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub message: String,
    pub public: bool,
    pub to: Vec<usize>,
}

impl Log {
    /// A log entry visible to everyone at the table.
    pub fn public(message: String) -> Self {
        Self {
            message,
            public: true,
            to: vec![],
        }
    }

    /// A log entry visible only to the listed players.
    pub fn private(message: String, to: Vec<usize>) -> Self {
        Self {
            message,
            public: false,
            to,
        }
    }
}
