//! Deterministic rule engines for turn-based tabletop games.
//!
//! Each game is a self-contained state machine behind the
//! [`engine_core::gamer::Gamer`] contract: a hosting server (which owns
//! networking, persistence and player identity) feeds it typed commands and
//! gets back player-attributed narration logs plus updated state. Every
//! game struct is plain serializable data, so the server can snapshot and
//! restore between commands; the only randomness is an injected generator
//! consumed at setup.
//!
//! ```
//! use engine_core::gamer::Gamer;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tabletop::gems::command::Command;
//! use tabletop::gems::game::Game;
//! use tabletop::gems::resource::Resource;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let (mut game, _) = Game::new(2, &mut rng).unwrap();
//! let logs = game
//!     .command(
//!         0,
//!         &Command::Take {
//!             tokens: vec![Resource::Diamond, Resource::Ruby, Resource::Onyx],
//!         },
//!     )
//!     .unwrap();
//! assert!(logs[0].message.contains("took"));
//! assert_eq!(game.current_player(), 1);
//! ```

pub mod chips;
pub mod gems;

pub use engine_core;

#[cfg(test)]
mod tests {
    use engine_core::gamer::Gamer;
    use engine_core::status::Status;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::{chips, gems};

    fn boot<G: Gamer>(players: usize, seed: u64) -> G {
        let mut rng = StdRng::seed_from_u64(seed);
        let (game, _) = G::new(players, &mut rng).expect("player count in range");
        game
    }

    // The same hosting code drives both engines.
    fn opening_turn<G: Gamer>(game: &G) -> usize {
        assert!(!game.is_finished());
        assert!(matches!(game.status(), Status::Active { .. }));
        let whose = game.whose_turn();
        assert_eq!(whose.len(), 1);
        assert!(game.points().iter().all(|&p| p == 0));
        whose[0]
    }

    #[test]
    fn both_engines_speak_the_same_contract() {
        let gems: gems::game::Game = boot(2, 1);
        let mover = opening_turn(&gems);
        assert_eq!(mover, 0);
        assert!(!gems.shapes(mover).is_empty());
        assert!(gems.shapes(1 - mover).is_empty());

        let chips: chips::game::Game = boot(3, 1);
        let mover = opening_turn(&chips);
        assert!(!chips.shapes(mover).is_empty());
        assert!(chips.shapes((mover + 1) % 3).is_empty());

        assert_eq!(gems::game::Game::player_counts(), 2..=4);
        assert_eq!(chips::game::Game::player_counts(), 3..=5);
    }
}
