//! The multi-tier card-acquisition economy game.
//!
//! Players convert and spend typed tokens to buy cards from three tiered
//! displays. Each turn runs main action → noble visit → discard, with the
//! latter two resolving themselves unless a player choice is required, and
//! the end condition is evaluated exactly once per round.

pub mod actions;
pub mod card;
pub mod catalog;
pub mod command;
pub mod game;
pub mod noble;
pub mod pay;
pub mod player;
pub mod resource;
