//! New-game reset and the opening deal sequence.

use crate::event::Side;

use super::{Game, GamePhase};

/// Number of cards in the opening deal.
pub(super) const OPENING_DEALS: u8 = 4;

impl Game {
    /// Starts a new round, superseding any round in progress.
    ///
    /// Clears both hands and every undrained event of the previous round (no
    /// event emitted after this call references the old round), enters
    /// [`GamePhase::PlayerTurn`], then deals the opening sequence in strict
    /// order: player face up, dealer face up (the up card), player face up,
    /// dealer face down (the hole card). Each deal queues a
    /// [`CardDealt`](crate::EventKind::CardDealt) followed by a
    /// [`ScoreUpdated`](crate::EventKind::ScoreUpdated) event.
    ///
    /// [`is_dealing`](Self::is_dealing) reports `true` until the front end
    /// has drained all four opening deal events.
    pub fn start_new_game(&mut self) {
        if self.phase != GamePhase::Idle {
            log::debug!("new game supersedes round {} in phase {:?}", self.round, self.phase);
        }

        self.clear_round_state();
        self.round += 1;
        self.phase = GamePhase::PlayerTurn;
        log::info!("round {} started", self.round);

        self.deal_to(Side::Player, true);
        self.deal_to(Side::Dealer, true);
        self.deal_to(Side::Player, true);
        self.deal_to(Side::Dealer, false);

        self.opening_deals_pending = OPENING_DEALS;
    }
}
