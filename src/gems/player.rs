use serde::{Deserialize, Serialize};

use super::card::Card;
use super::noble::Noble;
use super::resource::ResourceVec;

/// Cards a player may hold in reserve at once.
pub const RESERVE_LIMIT: usize = 3;

/// One player's side of the table.
///
/// Card ownership transfers here exactly once and never reverses; reserved
/// cards either convert to owned via a later purchase or stay reserved.
/// Tokens include gold, never prestige.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub cards: Vec<Card>,
    pub reserve: Vec<Card>,
    pub nobles: Vec<Noble>,
    pub tokens: ResourceVec,
}

impl PlayerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permanent production granted by owned cards, one per card, grouped
    /// by produced kind.
    pub fn bonuses(&self) -> ResourceVec {
        let mut bonuses = ResourceVec::empty();
        for card in &self.cards {
            bonuses.add_to(card.produces, 1);
        }
        bonuses
    }

    /// Full payment capacity: bonuses plus held tokens.
    pub fn buying_power(&self) -> ResourceVec {
        self.bonuses() + self.tokens.clone()
    }

    pub fn can_afford(&self, cost: &ResourceVec) -> bool {
        self.buying_power().can_afford(cost)
    }

    pub fn prestige(&self) -> i16 {
        let cards: i16 = self.cards.iter().map(|card| card.prestige).sum();
        let nobles: i16 = self.nobles.iter().map(|noble| noble.prestige).sum();
        cards + nobles
    }
}

#[cfg(test)]
mod tests {
    use super::super::resource::Resource;
    use super::*;

    fn owned(produces: Resource, prestige: i16) -> Card {
        Card::new(ResourceVec::empty(), produces, prestige)
    }

    #[test]
    fn bonuses_group_owned_cards_by_kind() {
        let mut pb = PlayerBoard::new();
        pb.cards.push(owned(Resource::Ruby, 0));
        pb.cards.push(owned(Resource::Ruby, 1));
        pb.cards.push(owned(Resource::Onyx, 0));

        let bonuses = pb.bonuses();
        assert_eq!(bonuses.get(Resource::Ruby), 2);
        assert_eq!(bonuses.get(Resource::Onyx), 1);
        assert_eq!(bonuses.get(Resource::Diamond), 0);
    }

    #[test]
    fn buying_power_adds_tokens_to_bonuses() {
        let mut pb = PlayerBoard::new();
        pb.cards.push(owned(Resource::Sapphire, 0));
        pb.tokens = ResourceVec::new(0, 1, 0, 0, 0, 2);

        let power = pb.buying_power();
        assert_eq!(power.get(Resource::Sapphire), 2);
        assert_eq!(power.get(Resource::Gold), 2);

        // A cost of three sapphire is reachable only through gold.
        let cost = ResourceVec::new(0, 3, 0, 0, 0, 0);
        assert!(pb.can_afford(&cost));
        let cost = ResourceVec::new(0, 5, 0, 0, 0, 0);
        assert!(!pb.can_afford(&cost));
    }

    #[test]
    fn prestige_counts_cards_and_nobles() {
        let mut pb = PlayerBoard::new();
        pb.cards.push(owned(Resource::Emerald, 2));
        pb.cards.push(owned(Resource::Emerald, 0));
        pb.nobles.push(Noble::new(ResourceVec::empty(), 3));
        assert_eq!(pb.prestige(), 5);
    }

    #[test]
    fn reserved_cards_grant_nothing() {
        let mut pb = PlayerBoard::new();
        pb.reserve.push(owned(Resource::Diamond, 4));
        assert_eq!(pb.bonuses().get(Resource::Diamond), 0);
        assert_eq!(pb.prestige(), 0);
    }
}
