//! The static card and noble tables, and the shuffled setup draw.

use rand::seq::SliceRandom;
use rand::RngCore;

use super::card::{Card, Tier};
use super::noble::Noble;
use super::resource::Resource::{Diamond, Emerald, Onyx, Ruby, Sapphire};
use super::resource::ResourceVec;

const NOBLE_PRESTIGE: i16 = 3;

fn cost(ruby: i16, emerald: i16, sapphire: i16, onyx: i16, diamond: i16) -> ResourceVec {
    ResourceVec::new(diamond, sapphire, emerald, ruby, onyx, 0)
}

/// Every card of one tier, in table order. Setup shuffles a copy.
pub fn tier_cards(tier: Tier) -> Vec<Card> {
    match tier {
        Tier::One => tier_one_cards(),
        Tier::Two => tier_two_cards(),
        Tier::Three => tier_three_cards(),
    }
}

/// One shuffled deck per tier, bottom first (`pop` draws the top).
pub fn shuffled_decks(rng: &mut dyn RngCore) -> [Vec<Card>; 3] {
    let mut decks = [tier_one_cards(), tier_two_cards(), tier_three_cards()];
    for deck in &mut decks {
        deck.shuffle(rng);
    }
    decks
}

/// Draw the active noble pool for this table size.
pub fn draw_nobles(rng: &mut dyn RngCore, quantity: usize) -> Vec<Noble> {
    nobles()
        .choose_multiple(rng, quantity)
        .cloned()
        .collect()
}

fn tier_one_cards() -> Vec<Card> {
    vec![
        Card::new(cost(0, 0, 2, 0, 2), Emerald, 0),
        Card::new(cost(1, 0, 1, 2, 1), Emerald, 0),
        Card::new(cost(1, 0, 1, 1, 1), Emerald, 0),
        Card::new(cost(0, 3, 0, 0, 0), Onyx, 0),
        Card::new(cost(0, 0, 4, 0, 0), Onyx, 1),
        Card::new(cost(1, 1, 2, 0, 1), Onyx, 0),
        Card::new(cost(1, 3, 1, 0, 0), Sapphire, 0),
        Card::new(cost(2, 1, 0, 1, 1), Sapphire, 0),
        Card::new(cost(0, 2, 0, 2, 0), Sapphire, 0),
        Card::new(cost(0, 0, 2, 2, 0), Diamond, 0),
        Card::new(cost(0, 0, 0, 0, 3), Ruby, 0),
        Card::new(cost(0, 0, 0, 4, 0), Emerald, 1),
        Card::new(cost(0, 1, 3, 0, 1), Emerald, 0),
        Card::new(cost(2, 0, 1, 2, 0), Emerald, 0),
        Card::new(cost(1, 0, 0, 3, 1), Ruby, 0),
        Card::new(cost(0, 0, 0, 0, 4), Ruby, 1),
        Card::new(cost(0, 0, 3, 0, 0), Diamond, 0),
        Card::new(cost(2, 2, 0, 0, 0), Onyx, 0),
        Card::new(cost(3, 1, 0, 1, 0), Onyx, 0),
        Card::new(cost(0, 2, 0, 0, 2), Onyx, 0),
        Card::new(cost(1, 1, 0, 1, 1), Sapphire, 0),
        Card::new(cost(4, 0, 0, 0, 0), Sapphire, 1),
        Card::new(cost(0, 1, 0, 2, 2), Ruby, 0),
        Card::new(cost(2, 0, 0, 0, 2), Ruby, 0),
        Card::new(cost(0, 1, 2, 0, 0), Ruby, 0),
        Card::new(cost(1, 0, 2, 0, 2), Onyx, 0),
        Card::new(cost(2, 2, 0, 0, 1), Sapphire, 0),
        Card::new(cost(0, 0, 0, 3, 0), Sapphire, 0),
        Card::new(cost(0, 0, 2, 1, 2), Diamond, 0),
        Card::new(cost(1, 1, 1, 1, 0), Diamond, 0),
        Card::new(cost(0, 0, 0, 2, 1), Sapphire, 0),
        Card::new(cost(1, 1, 1, 0, 1), Onyx, 0),
        Card::new(cost(2, 0, 2, 0, 0), Emerald, 0),
        Card::new(cost(3, 0, 0, 0, 0), Emerald, 0),
        Card::new(cost(1, 2, 1, 1, 0), Diamond, 0),
        Card::new(cost(2, 0, 0, 1, 0), Diamond, 0),
        Card::new(cost(0, 0, 1, 1, 3), Diamond, 0),
        Card::new(cost(0, 4, 0, 0, 0), Diamond, 1),
        Card::new(cost(0, 1, 1, 1, 2), Ruby, 0),
        Card::new(cost(0, 1, 1, 1, 1), Ruby, 0),
    ]
}

fn tier_two_cards() -> Vec<Card> {
    vec![
        Card::new(cost(0, 3, 0, 2, 3), Onyx, 1),
        Card::new(cost(3, 2, 0, 0, 3), Emerald, 1),
        Card::new(cost(2, 0, 3, 3, 0), Ruby, 1),
        Card::new(cost(0, 0, 6, 0, 0), Sapphire, 3),
        Card::new(cost(1, 0, 0, 4, 2), Sapphire, 2),
        Card::new(cost(3, 0, 3, 0, 2), Diamond, 1),
        Card::new(cost(0, 0, 2, 1, 4), Emerald, 2),
        Card::new(cost(0, 0, 5, 0, 0), Sapphire, 2),
        Card::new(cost(0, 0, 0, 0, 5), Onyx, 2),
        Card::new(cost(2, 0, 0, 3, 2), Ruby, 1),
        Card::new(cost(0, 0, 0, 0, 6), Diamond, 3),
        Card::new(cost(0, 2, 4, 0, 1), Ruby, 2),
        Card::new(cost(5, 0, 0, 0, 0), Diamond, 2),
        Card::new(cost(0, 6, 0, 0, 0), Emerald, 3),
        Card::new(cost(0, 5, 0, 0, 0), Emerald, 2),
        Card::new(cost(0, 0, 0, 5, 0), Ruby, 2),
        Card::new(cost(0, 2, 2, 0, 3), Onyx, 1),
        Card::new(cost(0, 0, 0, 6, 0), Onyx, 3),
        Card::new(cost(3, 5, 0, 0, 0), Onyx, 2),
        Card::new(cost(0, 3, 5, 0, 0), Emerald, 2),
        Card::new(cost(0, 3, 2, 3, 0), Sapphire, 1),
        Card::new(cost(2, 2, 2, 0, 0), Sapphire, 1),
        Card::new(cost(0, 0, 3, 0, 5), Sapphire, 2),
        Card::new(cost(0, 0, 3, 2, 2), Emerald, 1),
        Card::new(cost(5, 0, 0, 3, 0), Diamond, 2),
        Card::new(cost(4, 1, 0, 2, 0), Diamond, 2),
        Card::new(cost(2, 4, 0, 1, 0), Onyx, 2),
        Card::new(cost(2, 3, 0, 2, 0), Diamond, 1),
        Card::new(cost(6, 0, 0, 0, 0), Ruby, 3),
        Card::new(cost(0, 0, 0, 5, 3), Ruby, 2),
    ]
}

fn tier_three_cards() -> Vec<Card> {
    vec![
        Card::new(cost(3, 0, 3, 3, 5), Emerald, 3),
        Card::new(cost(3, 3, 0, 5, 3), Sapphire, 3),
        Card::new(cost(0, 3, 6, 0, 3), Emerald, 4),
        Card::new(cost(0, 0, 0, 7, 3), Diamond, 5),
        Card::new(cost(7, 0, 0, 0, 0), Onyx, 4),
        Card::new(cost(6, 3, 0, 3, 0), Onyx, 4),
        Card::new(cost(0, 0, 3, 3, 6), Sapphire, 4),
        Card::new(cost(0, 7, 0, 0, 0), Ruby, 4),
        Card::new(cost(0, 3, 5, 3, 3), Ruby, 3),
        Card::new(cost(3, 6, 3, 0, 0), Ruby, 4),
        Card::new(cost(3, 0, 0, 6, 3), Diamond, 4),
        Card::new(cost(3, 5, 3, 0, 3), Onyx, 3),
        Card::new(cost(0, 0, 3, 0, 7), Sapphire, 5),
        Card::new(cost(3, 7, 0, 0, 0), Ruby, 5),
        Card::new(cost(0, 3, 7, 0, 0), Emerald, 5),
        Card::new(cost(0, 0, 0, 7, 0), Diamond, 4),
        Card::new(cost(0, 0, 7, 0, 0), Emerald, 4),
        Card::new(cost(5, 3, 3, 3, 0), Diamond, 3),
        Card::new(cost(0, 0, 0, 0, 7), Sapphire, 4),
        Card::new(cost(7, 0, 0, 3, 0), Onyx, 5),
    ]
}

/// The full noble table; setup draws `players + 1` of these.
pub fn nobles() -> Vec<Noble> {
    vec![
        Noble::new(cost(0, 4, 4, 0, 0), NOBLE_PRESTIGE),
        Noble::new(cost(0, 0, 4, 0, 4), NOBLE_PRESTIGE),
        Noble::new(cost(4, 4, 0, 0, 0), NOBLE_PRESTIGE),
        Noble::new(cost(0, 0, 0, 4, 4), NOBLE_PRESTIGE),
        Noble::new(cost(3, 0, 0, 3, 3), NOBLE_PRESTIGE),
        Noble::new(cost(3, 3, 0, 3, 0), NOBLE_PRESTIGE),
        Noble::new(cost(3, 3, 3, 0, 0), NOBLE_PRESTIGE),
        Noble::new(cost(4, 0, 0, 4, 0), NOBLE_PRESTIGE),
        Noble::new(cost(0, 3, 3, 0, 3), NOBLE_PRESTIGE),
        Noble::new(cost(0, 0, 3, 3, 3), NOBLE_PRESTIGE),
    ]
}
