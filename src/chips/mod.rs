//! The pass/take chip game.
//!
//! A single card is up for grabs each turn: pay a chip to pass it along, or
//! take it together with every chip paid onto it. Lowest score wins, and
//! runs of consecutive cards only count their lowest member.

pub mod command;
pub mod game;

#[cfg(test)]
pub(crate) mod testutil {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::game::Game;

    pub(crate) fn seeded_game(players: usize, seed: u64) -> Game {
        let mut rng = StdRng::seed_from_u64(seed);
        let (game, logs) = Game::new(players, &mut rng).expect("player count in range");
        assert!(logs.is_empty());
        game
    }
}
