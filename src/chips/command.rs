//! The typed command boundary for the pass/take game.

use std::ops::RangeInclusive;

use engine_core::error::SetupError;
use engine_core::gamer::Gamer;
use engine_core::log::Log;
use engine_core::status::Status;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::game::{ActionError, Game, PlayerView, PubView};

/// Every command this game accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Pass,
    Take,
}

/// The command shapes a parser may offer a player right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Pass,
    Take,
}

impl Game {
    /// Resolve one validated command for one player.
    pub fn dispatch(&mut self, player: usize, command: &Command) -> Result<Vec<Log>, ActionError> {
        match command {
            Command::Pass => self.pass(player),
            Command::Take => self.take(player),
        }
    }

    pub fn shapes_for(&self, player: usize) -> Vec<Shape> {
        let mut shapes = vec![];
        if self.can_pass(player) {
            shapes.push(Shape::Pass);
        }
        if self.can_take(player) {
            shapes.push(Shape::Take);
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
        3..=5
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
        if self.is_finished() {
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
