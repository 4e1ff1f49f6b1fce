//! The main-phase actions, the discard and visit resolutions, and their
//! legality predicates.

use std::fmt;

use engine_core::log::Log;

use super::card::Tier;
use super::command::{CardLoc, ReserveSource};
use super::game::{seat_name, Game, Phase};
use super::player::RESERVE_LIMIT;
use super::resource::{Resource, ResourceVec, GEMS};

/// Bank piles must hold this many before two of a kind may be taken.
pub const TAKE_TWO_MIN_PILE: i16 = 4;

/// Why a command was rejected. Surfaced verbatim to the acting player;
/// nothing was mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    OutOfTurn,
    TakeCount(usize),
    TakeTwoMustMatch,
    TakeTwoShortPile(Resource),
    TakeThreeMustDiffer,
    BankShort(Resource),
    NotTakeable(Resource),
    NoCard,
    EmptyDeck(Tier),
    ReserveLimit,
    CannotAfford,
    NothingToDiscard,
    MissingTokens,
    NoSuchNoble,
    NobleNotEligible,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::OutOfTurn => write!(f, "you can't do that at the moment"),
            ActionError::TakeCount(n) => {
                write!(f, "can only take two or three tokens, not {}", n)
            }
            ActionError::TakeTwoMustMatch => {
                write!(f, "must take two of the same kind when taking two")
            }
            ActionError::TakeTwoShortPile(kind) => write!(
                f,
                "can only take two {} when the bank has four or more",
                kind
            ),
            ActionError::TakeThreeMustDiffer => {
                write!(f, "must take three different kinds when taking three")
            }
            ActionError::BankShort(kind) => {
                write!(f, "the bank has no {} tokens left", kind)
            }
            ActionError::NotTakeable(kind) => write!(f, "{} tokens can't be taken", kind),
            ActionError::NoCard => write!(f, "that isn't a valid card"),
            ActionError::EmptyDeck(tier) => {
                write!(f, "the tier {} deck is empty", tier.number())
            }
            ActionError::ReserveLimit => write!(f, "you already have three reserved cards"),
            ActionError::CannotAfford => write!(f, "you can't afford that card"),
            ActionError::NothingToDiscard => {
                write!(f, "specify at least one token to discard")
            }
            ActionError::MissingTokens => write!(f, "you don't have those tokens to discard"),
            ActionError::NoSuchNoble => write!(f, "that isn't a valid noble"),
            ActionError::NobleNotEligible => {
                write!(f, "your bonuses don't meet that noble's requirements")
            }
        }
    }
}

impl std::error::Error for ActionError {}

fn comma_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

fn describe_card(card: &super::card::Card) -> String {
    if card.prestige > 0 {
        format!(
            "a card producing {} worth {} prestige",
            card.produces, card.prestige
        )
    } else {
        format!("a card producing {}", card.produces)
    }
}

impl Game {
    fn is_main_turn(&self, player: usize) -> bool {
        !self.is_ended() && self.current_player() == player && self.phase() == Phase::Main
    }

    pub fn can_take(&self, player: usize) -> bool {
        self.is_main_turn(player)
    }

    pub fn can_buy(&self, player: usize) -> bool {
        self.is_main_turn(player)
    }

    pub fn can_reserve(&self, player: usize) -> bool {
        self.is_main_turn(player) && self.player_board(player).reserve.len() < RESERVE_LIMIT
    }

    pub fn can_discard(&self, player: usize) -> bool {
        !self.is_ended() && self.current_player() == player && self.phase() == Phase::Discard
    }

    pub fn can_visit(&self, player: usize) -> bool {
        !self.is_ended() && self.current_player() == player && self.phase() == Phase::Visit
    }

    /// Take three distinct gem kinds, or two of one kind from a pile of
    /// four or more.
    pub fn take(&mut self, player: usize, tokens: &[Resource]) -> Result<Vec<Log>, ActionError> {
        if !self.can_take(player) {
            return Err(ActionError::OutOfTurn);
        }
        for &kind in tokens {
            if !GEMS.contains(&kind) {
                return Err(ActionError::NotTakeable(kind));
            }
        }
        let mut logs = vec![];
        match tokens {
            [a, b] => {
                if a != b {
                    return Err(ActionError::TakeTwoMustMatch);
                }
                if self.bank.get(*a) < TAKE_TWO_MIN_PILE {
                    return Err(ActionError::TakeTwoShortPile(*a));
                }
                logs.push(Log::public(format!(
                    "{} took 2 {}",
                    seat_name(player),
                    a
                )));
            }
            [a, b, c] => {
                if a == b || b == c || a == c {
                    return Err(ActionError::TakeThreeMustDiffer);
                }
                for &kind in tokens {
                    if self.bank.get(kind) < 1 {
                        return Err(ActionError::BankShort(kind));
                    }
                }
                logs.push(Log::public(format!(
                    "{} took {}",
                    seat_name(player),
                    comma_list(&[a.to_string(), b.to_string(), c.to_string()])
                )));
            }
            _ => return Err(ActionError::TakeCount(tokens.len())),
        }

        let amount = ResourceVec::tally(tokens);
        self.player_boards[player].tokens =
            self.player_boards[player].tokens.clone() + amount.clone();
        self.bank = self.bank.clone() - amount;

        logs.extend(self.finish_main_action());
        Ok(logs)
    }

    /// Buy a card from a display slot or from the player's own reserve.
    pub fn buy(&mut self, player: usize, loc: CardLoc) -> Result<Vec<Log>, ActionError> {
        if !self.can_buy(player) {
            return Err(ActionError::OutOfTurn);
        }
        let mut logs = vec![];
        match loc {
            CardLoc::Display { tier, index } => {
                let t = tier.index();
                let card = self
                    .displays[t]
                    .get(index)
                    .cloned()
                    .ok_or(ActionError::NoCard)?;
                self.pay(player, &card.cost)?;
                self.displays[t].remove(index);
                self.refill_display(t, index);
                logs.push(Log::public(format!(
                    "{} bought {} from the board",
                    seat_name(player),
                    describe_card(&card)
                )));
                self.player_boards[player].cards.push(card);
            }
            CardLoc::Reserve { index } => {
                let card = self.player_boards[player]
                    .reserve
                    .get(index)
                    .cloned()
                    .ok_or(ActionError::NoCard)?;
                self.pay(player, &card.cost)?;
                self.player_boards[player].reserve.remove(index);
                logs.push(Log::public(format!(
                    "{} bought {} from their reserve",
                    seat_name(player),
                    describe_card(&card)
                )));
                self.player_boards[player].cards.push(card);
            }
        }

        logs.extend(self.finish_main_action());
        Ok(logs)
    }

    /// Reserve a card face-up from a display or blind from a deck top,
    /// taking a gold from the bank if any remains.
    pub fn reserve(
        &mut self,
        player: usize,
        source: ReserveSource,
    ) -> Result<Vec<Log>, ActionError> {
        if !self.is_main_turn(player) {
            return Err(ActionError::OutOfTurn);
        }
        if self.player_board(player).reserve.len() >= RESERVE_LIMIT {
            return Err(ActionError::ReserveLimit);
        }
        let mut logs = vec![];
        match source {
            ReserveSource::Display { tier, index } => {
                let t = tier.index();
                let card = self
                    .displays[t]
                    .get(index)
                    .cloned()
                    .ok_or(ActionError::NoCard)?;
                self.displays[t].remove(index);
                self.refill_display(t, index);
                logs.push(Log::public(format!(
                    "{} reserved {} from the board{}",
                    seat_name(player),
                    describe_card(&card),
                    self.gold_grant_suffix()
                )));
                self.grant_reserve_gold(player);
                self.player_boards[player].reserve.push(card);
            }
            ReserveSource::Deck(tier) => {
                let t = tier.index();
                let card = self.decks[t].pop().ok_or(ActionError::EmptyDeck(tier))?;
                logs.push(Log::public(format!(
                    "{} reserved the top card of the tier {} deck{}",
                    seat_name(player),
                    tier.number(),
                    self.gold_grant_suffix()
                )));
                logs.push(Log::private(
                    format!("You reserved {}", describe_card(&card)),
                    vec![player],
                ));
                self.grant_reserve_gold(player);
                self.player_boards[player].reserve.push(card);
            }
        }

        logs.extend(self.finish_main_action());
        Ok(logs)
    }

    fn gold_grant_suffix(&self) -> &'static str {
        if self.bank.get(Resource::Gold) > 0 {
            " and took a gold"
        } else {
            ""
        }
    }

    fn grant_reserve_gold(&mut self, player: usize) {
        if self.bank.get(Resource::Gold) > 0 {
            self.bank.add_to(Resource::Gold, -1);
            self.player_boards[player].tokens.add_to(Resource::Gold, 1);
        }
    }

    /// Return tokens to the bank while over the table limit. The phase
    /// stays open until the player is back at or under it.
    pub fn discard(&mut self, player: usize, tokens: &[Resource]) -> Result<Vec<Log>, ActionError> {
        if !self.can_discard(player) {
            return Err(ActionError::OutOfTurn);
        }
        if tokens.is_empty() {
            return Err(ActionError::NothingToDiscard);
        }
        let amount = ResourceVec::tally(tokens);
        let remaining = self.player_boards[player].tokens.clone() - amount.clone();
        if !remaining.is_non_negative() {
            return Err(ActionError::MissingTokens);
        }
        self.player_boards[player].tokens = remaining;
        self.bank = self.bank.clone() + amount;

        let names: Vec<String> = tokens.iter().map(|kind| kind.to_string()).collect();
        let mut logs = vec![Log::public(format!(
            "{} discarded {}",
            seat_name(player),
            comma_list(&names)
        ))];
        logs.extend(self.auto_advance());
        Ok(logs)
    }

    /// Claim one of the nobles the player's bonuses qualify for. Only
    /// reachable when more than one qualifies; a single candidate resolves
    /// without a command.
    pub fn visit(&mut self, player: usize, noble: usize) -> Result<Vec<Log>, ActionError> {
        if !self.can_visit(player) {
            return Err(ActionError::OutOfTurn);
        }
        if noble >= self.nobles().len() {
            return Err(ActionError::NoSuchNoble);
        }
        if !self.player_board(player).bonuses().can_afford(&self.nobles()[noble].cost) {
            return Err(ActionError::NobleNotEligible);
        }
        let mut logs = self.claim_noble(player, noble);
        self.phase = Phase::Discard;
        logs.extend(self.auto_advance());
        Ok(logs)
    }

    fn refill_display(&mut self, tier: usize, index: usize) {
        if let Some(card) = self.decks[tier].pop() {
            self.displays[tier].insert(index, card);
        }
    }
}
