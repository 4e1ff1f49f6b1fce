use std::fmt;

use engine_core::error::SetupError;
use engine_core::log::Log;
use engine_core::placings::placings_from_metrics;
use engine_core::status::Status;
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

pub const STARTING_CHIPS: i16 = 11;
/// Cards actually dealt; the rest of the 3..=35 pool is removed unseen.
pub const DECK_SIZE: usize = 24;

const CARD_MIN: i16 = 3;
const CARD_MAX: i16 = 35;

/// Why a command was rejected. Surfaced verbatim to the acting player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    OutOfTurn,
    NoChips,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::OutOfTurn => write!(f, "you can't do that at the moment"),
            ActionError::NoChips => {
                write!(f, "you have no chips left, you must take the card")
            }
        }
    }
}

impl std::error::Error for ActionError {}

/// The whole table: hidden chip counts, public hands, the face-up card on
/// top of the deck and the pot accumulating on it. Plain serializable data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) players: usize,
    pub(crate) hands: Vec<Vec<i16>>,
    pub(crate) chips: Vec<i16>,
    pub(crate) pot: i16,
    /// Top of the deck is the last element.
    pub(crate) deck: Vec<i16>,
    pub(crate) current_player: usize,
}

fn seat_name(player: usize) -> String {
    format!("Player {}", player + 1)
}

impl Game {
    pub fn new(players: usize, rng: &mut dyn RngCore) -> Result<(Self, Vec<Log>), SetupError> {
        let allowed = 3..=5;
        if !allowed.contains(&players) {
            return Err(SetupError::InvalidPlayerCount {
                allowed,
                given: players,
            });
        }

        let mut deck: Vec<i16> = (CARD_MIN..=CARD_MAX).collect();
        deck.shuffle(rng);
        deck.truncate(DECK_SIZE);

        let current_player = rng.next_u32() as usize % players;
        log::debug!("new game: {} players, seat {} starts", players, current_player);

        let game = Self {
            players,
            hands: vec![vec![]; players],
            chips: vec![STARTING_CHIPS; players],
            pot: 0,
            deck,
            current_player,
        };
        Ok((game, vec![]))
    }

    pub fn player_count(&self) -> usize {
        self.players
    }

    pub fn is_finished(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn pot(&self) -> i16 {
        self.pot
    }

    /// The card currently up for grabs.
    pub fn top_card(&self) -> i16 {
        *self.deck.last().expect("no cards remaining")
    }

    fn pop_top_card(&mut self) -> i16 {
        self.deck.pop().expect("no cards remaining")
    }

    pub fn can_pass(&self, player: usize) -> bool {
        self.current_player == player && !self.is_finished() && self.chips[player] > 0
    }

    pub fn can_take(&self, player: usize) -> bool {
        self.current_player == player && !self.is_finished()
    }

    /// Pay one chip onto the card and hand the decision to the next seat.
    pub fn pass(&mut self, player: usize) -> Result<Vec<Log>, ActionError> {
        if self.current_player != player || self.is_finished() {
            return Err(ActionError::OutOfTurn);
        }
        if self.chips[player] <= 0 {
            return Err(ActionError::NoChips);
        }
        self.chips[player] -= 1;
        self.pot += 1;
        let logs = vec![Log::public(format!(
            "{} passed on the {}",
            seat_name(player),
            self.top_card()
        ))];
        self.current_player = (self.current_player + 1) % self.players;
        Ok(logs)
    }

    /// Take the card and the whole pot; the same seat faces the next card.
    pub fn take(&mut self, player: usize) -> Result<Vec<Log>, ActionError> {
        if !self.can_take(player) {
            return Err(ActionError::OutOfTurn);
        }
        let card = self.pop_top_card();
        let mut logs = vec![Log::public(format!(
            "{} took the {} and {} chips",
            seat_name(player),
            card,
            self.pot
        ))];
        self.hands[player].push(card);
        self.chips[player] += self.pot;
        self.pot = 0;
        if self.is_finished() {
            log::info!("deck exhausted, game over");
        } else {
            logs.push(Log::public(format!(
                "{} drew {} as the new card",
                seat_name(player),
                self.top_card()
            )));
        }
        Ok(logs)
    }

    /// The hand split into maximal runs of exactly consecutive values, in
    /// ascending order. No gap-bridging: 5 and 7 are separate runs.
    pub fn hand_grouped(&self, player: usize) -> Vec<Vec<i16>> {
        let mut sorted = self.hands[player].clone();
        sorted.sort_unstable();

        let mut groups: Vec<Vec<i16>> = vec![];
        for card in sorted {
            match groups.last_mut() {
                Some(group) if *group.last().expect("empty run") + 1 == card => {
                    group.push(card);
                }
                _ => groups.push(vec![card]),
            }
        }
        groups
    }

    /// Card penalty: each run counts only its lowest member.
    pub fn hand_score(&self, player: usize) -> i16 {
        self.hand_grouped(player)
            .iter()
            .map(|group| group[0])
            .sum()
    }

    /// Final score: card penalty minus remaining chips. Lower is better.
    pub fn final_score(&self, player: usize) -> i16 {
        self.hand_score(player) - self.chips[player]
    }

    pub fn points(&self) -> Vec<i32> {
        (0..self.players)
            .map(|p| {
                if self.is_finished() {
                    i32::from(self.final_score(p))
                } else {
                    i32::from(self.hand_score(p))
                }
            })
            .collect()
    }

    /// Placement metric: negated score, since lower scores place higher.
    pub fn placings(&self) -> Vec<usize> {
        let metrics = self.points().iter().map(|&p| vec![-p]).collect();
        placings_from_metrics(metrics)
    }

    pub fn status(&self) -> Status {
        if self.is_finished() {
            Status::Finished {
                placings: self.placings(),
            }
        } else {
            Status::Active {
                whose_turn: vec![self.current_player],
            }
        }
    }

    pub fn pub_view(&self) -> PubView {
        PubView {
            top_card: if self.is_finished() {
                None
            } else {
                Some(self.top_card())
            },
            cards_remaining: self.deck.len(),
            pot: self.pot,
            hands: (0..self.players).map(|p| self.hand_grouped(p)).collect(),
            current_player: self.current_player,
            finished: self.is_finished(),
        }
    }

    pub fn player_view(&self, player: usize) -> PlayerView {
        PlayerView {
            seat: player,
            chips: self.chips[player],
            shared: self.pub_view(),
        }
    }
}

/// Spectator view. Chip counts are hidden information and stay out of it;
/// hands are open and shown pre-grouped into runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubView {
    pub top_card: Option<i16>,
    pub cards_remaining: usize,
    pub pot: i16,
    pub hands: Vec<Vec<Vec<i16>>>,
    pub current_player: usize,
    pub finished: bool,
}

/// The public table plus the player's own chip count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: usize,
    pub chips: i16,
    pub shared: PubView,
}
