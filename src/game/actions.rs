use crate::card::Rank;
use crate::error::CommandError;
use crate::event::{EventKind, Side};
use crate::result::Outcome;

use super::{Game, GamePhase};

impl Game {
    /// Player command: hit (draw one card).
    ///
    /// Returns the drawn rank, or `Ok(None)` when the player already holds
    /// five cards and the deal is silently ignored. A total over 21 busts the
    /// player: the round jumps straight to [`GamePhase::Finished`] with
    /// [`Outcome::DealerWins`], skipping the dealer's turn entirely (the hole
    /// card stays hidden).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Option<Rank>, CommandError> {
        if self.phase != GamePhase::PlayerTurn {
            return Err(CommandError::NotPlayerTurn);
        }

        let Some(rank) = self.deal_to(Side::Player, true) else {
            return Ok(None);
        };

        if self.player_hand.is_bust() {
            log::info!("player busts at {}", self.player_hand.total());
            self.finish(Outcome::DealerWins);
        }

        Ok(Some(rank))
    }

    /// Player command: stand (end the player's turn).
    ///
    /// Enters [`GamePhase::DealerTurn`] and reveals the hole card: a
    /// [`HoleCardRevealed`](EventKind::HoleCardRevealed) event is emitted
    /// exactly once per round, followed by the dealer's first full-total
    /// score update. The caller then drives the dealer with
    /// [`advance_dealer_turn`](Self::advance_dealer_turn).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), CommandError> {
        if self.phase != GamePhase::PlayerTurn {
            return Err(CommandError::NotPlayerTurn);
        }

        self.phase = GamePhase::DealerTurn;
        log::debug!("player stands at {}", self.player_hand.total());

        self.dealer_hand.reveal_hole();
        if let Some(rank) = self.dealer_hand.hole_card() {
            self.emit(EventKind::HoleCardRevealed { rank });
        }
        self.emit_score(Side::Dealer);

        Ok(())
    }

    /// Ends the round with the given outcome and emits the final event.
    pub(super) fn finish(&mut self, outcome: Outcome) {
        let player_total = self.player_hand.total();
        let dealer_total = self.dealer_hand.total();

        self.phase = GamePhase::Finished;
        log::info!(
            "round {} finished: {outcome:?} (player {player_total}, dealer {dealer_total})",
            self.round
        );
        self.emit(EventKind::GameFinished {
            outcome,
            player_total,
            dealer_total,
        });
    }
}
