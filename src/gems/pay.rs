//! The payment resolver: how a cost obligation becomes token movement.

use super::actions::ActionError;
use super::game::Game;
use super::resource::{Resource, ResourceVec, GEMS};

impl Game {
    /// Settle `cost` for `player`, moving tokens to the bank.
    ///
    /// Per gem kind in canonical order: the card bonus covers first, then
    /// the player's own tokens of that kind, then gold. Gold is one shared
    /// pool drawn down cumulatively, so the kinds must be settled in a
    /// fixed order.
    ///
    /// Fails with no mutation when buying power doesn't meet the cost.
    /// Never touches prestige or card ownership; those are the caller's.
    pub(crate) fn pay(&mut self, player: usize, cost: &ResourceVec) -> Result<(), ActionError> {
        if !self.player_boards[player].can_afford(cost) {
            return Err(ActionError::CannotAfford);
        }
        let offsets = self.player_boards[player].bonuses() - cost.clone();
        for kind in GEMS {
            let offset = offsets.get(kind);
            if offset >= 0 {
                continue;
            }
            // The shortfall left by bonuses comes from held tokens first.
            self.player_boards[player].tokens.add_to(kind, offset);
            self.bank.add_to(kind, -offset);
            let held = self.player_boards[player].tokens.get(kind);
            if held < 0 {
                // The tail of the shortfall is paid in gold; the bank never
                // actually received tokens of this kind for it.
                self.player_boards[player].tokens.add_to(Resource::Gold, held);
                self.bank.add_to(kind, held);
                self.bank.add_to(Resource::Gold, -held);
                self.player_boards[player].tokens.set(kind, 0);
            }
        }
        Ok(())
    }
}
