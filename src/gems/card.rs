use serde::{Deserialize, Serialize};

use super::resource::{Resource, ResourceVec};

/// Card strata. Cost and prestige rise with the tier; each tier has its own
/// deck and face-up display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    One,
    Two,
    Three,
}

pub const TIERS: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

impl Tier {
    pub fn index(self) -> usize {
        match self {
            Tier::One => 0,
            Tier::Two => 1,
            Tier::Three => 2,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// An acquirable development card.
///
/// Immutable: created once from the static tables, shuffled into its tier
/// deck at setup, then moved deck → display → (reserve →) owned. It never
/// returns to a deck. Costs name gems only, never gold or prestige.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub produces: Resource,
    pub prestige: i16,
    pub cost: ResourceVec,
}

impl Card {
    pub fn new(cost: ResourceVec, produces: Resource, prestige: i16) -> Self {
        Self {
            produces,
            prestige,
            cost,
        }
    }
}
