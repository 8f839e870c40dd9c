use crate::error::CommandError;
use crate::event::Side;
use crate::result::{Outcome, RoundSummary};

use super::{DEALER_STAND_TOTAL, DealerStep, Game, GamePhase};

impl Game {
    /// Dealer command: play one auto-play step.
    ///
    /// The dealer must draw below [`DEALER_STAND_TOTAL`] and stand at it or
    /// above (soft or hard). Each call performs at most one draw so the
    /// caller can pace the animation between steps; the engine never sleeps.
    /// Call repeatedly until [`DealerStep::Finished`] is returned, which
    /// resolves the outcome and enters [`GamePhase::Finished`].
    ///
    /// A dealer hand that is already at five cards stands regardless of its
    /// total, since there is no slot left to deal into.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn advance_dealer_turn(&mut self) -> Result<DealerStep, CommandError> {
        if self.phase != GamePhase::DealerTurn {
            return Err(CommandError::NotDealerTurn);
        }

        let total = self.dealer_hand.total();
        if total < DEALER_STAND_TOTAL && !self.dealer_hand.is_full() {
            // deal_to cannot fail here, the hand has a free slot.
            if let Some(rank) = self.deal_to(Side::Dealer, true) {
                log::debug!("dealer draws {rank:?} at {total}");
                return Ok(DealerStep::Drew(rank));
            }
        }

        let summary = self.resolve_outcome();
        self.finish(summary.outcome);
        Ok(DealerStep::Finished(summary))
    }

    /// Compares the final totals.
    ///
    /// The player busting is handled before the dealer's turn ever starts, so
    /// only the dealer can be over 21 here.
    fn resolve_outcome(&self) -> RoundSummary {
        let player_total = self.player_hand.total();
        let dealer_total = self.dealer_hand.total();

        let outcome = if player_total > 21 {
            Outcome::DealerWins
        } else if dealer_total > 21 {
            Outcome::PlayerWins
        } else if player_total > dealer_total {
            Outcome::PlayerWins
        } else if dealer_total > player_total {
            Outcome::DealerWins
        } else {
            Outcome::Push
        };

        RoundSummary {
            outcome,
            player_total,
            dealer_total,
        }
    }
}
