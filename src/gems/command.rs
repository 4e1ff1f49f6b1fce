//! The typed command boundary the hosting server's parser targets.

use std::ops::RangeInclusive;

use engine_core::error::SetupError;
use engine_core::gamer::Gamer;
use engine_core::log::Log;
use engine_core::status::Status;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::actions::ActionError;
use super::card::Tier;
use super::game::{Game, PlayerView, PubView};
use super::resource::Resource;

/// Where a purchased card comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardLoc {
    Display { tier: Tier, index: usize },
    Reserve { index: usize },
}

/// Where a reserved card comes from. Deck reservations are blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReserveSource {
    Display { tier: Tier, index: usize },
    Deck(Tier),
}

/// Every command this game accepts. The set is closed: resolution is an
/// exhaustive match, so an unhandled command cannot exist at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Take { tokens: Vec<Resource> },
    Buy(CardLoc),
    Reserve(ReserveSource),
    Discard { tokens: Vec<Resource> },
    Visit { noble: usize },
}

/// The command shapes a parser may offer a player right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Buy,
    Discard,
    Reserve,
    Take,
    Visit,
}

impl Game {
    /// Resolve one validated command for one player.
    pub fn dispatch(&mut self, player: usize, command: &Command) -> Result<Vec<Log>, ActionError> {
        match command {
            Command::Take { tokens } => self.take(player, tokens),
            Command::Buy(loc) => self.buy(player, *loc),
            Command::Reserve(source) => self.reserve(player, *source),
            Command::Discard { tokens } => self.discard(player, tokens),
            Command::Visit { noble } => self.visit(player, *noble),
        }
    }

    pub fn shapes_for(&self, player: usize) -> Vec<Shape> {
        let mut shapes = vec![];
        if self.can_buy(player) {
            shapes.push(Shape::Buy);
        }
        if self.can_discard(player) {
            shapes.push(Shape::Discard);
        }
        if self.can_reserve(player) {
            shapes.push(Shape::Reserve);
        }
        if self.can_take(player) {
            shapes.push(Shape::Take);
        }
        if self.can_visit(player) {
            shapes.push(Shape::Visit);
        }
        shapes
    }
}

impl Gamer for Game {
    type Command = Command;
    type Shape = Shape;
    type Error = ActionError;
    type PlayerView = PlayerView;
    type PubView = PubView;

    fn player_counts() -> RangeInclusive<usize> {
        2..=4
    }

    fn new(players: usize, rng: &mut dyn RngCore) -> Result<(Self, Vec<Log>), SetupError> {
        Game::new(players, rng)
    }

    fn command(&mut self, player: usize, command: &Command) -> Result<Vec<Log>, ActionError> {
        self.dispatch(player, command)
    }

    fn shapes(&self, player: usize) -> Vec<Shape> {
        self.shapes_for(player)
    }

    fn status(&self) -> Status {
        Game::status(self)
    }

    fn whose_turn(&self) -> Vec<usize> {
        if self.is_ended() {
            vec![]
        } else {
            vec![self.current_player()]
        }
    }

    fn points(&self) -> Vec<i32> {
        Game::points(self)
    }

    fn placings(&self) -> Vec<usize> {
        Game::placings(self)
    }

    fn player_view(&self, player: usize) -> PlayerView {
        Game::player_view(self, player)
    }

    fn pub_view(&self) -> PubView {
        Game::pub_view(self)
    }
}
