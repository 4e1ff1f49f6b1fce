use serde::{Deserialize, Serialize};

use super::resource::ResourceVec;

/// A noble bonus tile. Claimed at most once, by the first player whose
/// earned card bonuses alone meet the cost; held tokens never count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noble {
    pub cost: ResourceVec,
    pub prestige: i16,
}

impl Noble {
    pub fn new(cost: ResourceVec, prestige: i16) -> Self {
        Self { cost, prestige }
    }
}
