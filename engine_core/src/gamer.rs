use std::error::Error;
use std::ops::RangeInclusive;

use rand::RngCore;
use serde::Serialize;

use crate::error::SetupError;
use crate::log::Log;
use crate::status::Status;

/// A playable game engine.
///
/// The hosting server owns the instance between commands, serializes
/// concurrent submissions against it, and handles networking, persistence
/// and player identity. The engine is synchronous and performs no I/O: one
/// command is fully resolved, including every phase that auto-advances,
/// before the call returns.
///
/// Commands arrive as typed values; turning raw player input into a
/// [`Gamer::Command`] is the external parser's job, and [`Gamer::shapes`]
/// advertises which command shapes that parser may currently offer a player.
pub trait Gamer: Sized {
    /// Typed command values, a closed set per game.
    type Command;
    /// The command shapes a parser can be built from.
    type Shape;
    /// Rejection reasons for illegal actions. Surfaced verbatim to the
    /// acting player; a rejected command never mutates state.
    type Error: Error;
    /// Read-only view scoped to one player's private information.
    type PlayerView: Serialize;
    /// Read-only spectator view.
    type PubView: Serialize;

    /// The player counts this game supports.
    fn player_counts() -> RangeInclusive<usize>;

    /// Set up a fresh game. The randomness capability is used here and only
    /// here; replay and tests inject a seeded generator.
    fn new(players: usize, rng: &mut dyn RngCore) -> Result<(Self, Vec<Log>), SetupError>;

    /// Resolve one command for one player, advancing through any phases
    /// that need no further input.
    fn command(&mut self, player: usize, command: &Self::Command)
        -> Result<Vec<Log>, Self::Error>;

    /// The command shapes currently legal for `player`. Empty when it is
    /// not their move.
    fn shapes(&self, player: usize) -> Vec<Self::Shape>;

    fn status(&self) -> Status;

    /// Players whose input is currently awaited.
    fn whose_turn(&self) -> Vec<usize>;

    /// Current score per player.
    fn points(&self) -> Vec<i32>;

    /// 1-based ranked placings, ties sharing a placing.
    fn placings(&self) -> Vec<usize>;

    fn player_view(&self, player: usize) -> Self::PlayerView;

    fn pub_view(&self) -> Self::PubView;

    fn is_finished(&self) -> bool {
        matches!(self.status(), Status::Finished { .. })
    }
}
