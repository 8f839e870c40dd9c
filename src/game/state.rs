//! Game phase types.

use crate::card::Rank;
use crate::result::RoundSummary;

/// Phase of the current round.
///
/// Transitions are one-directional within a round:
/// `Idle -> PlayerTurn -> DealerTurn -> Finished`. A player bust jumps
/// straight from `PlayerTurn` to `Finished`. Starting a new game is valid in
/// any phase and returns to `PlayerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No round has been started.
    Idle,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer plays out their hand, one step per
    /// [`advance_dealer_turn`](crate::Game::advance_dealer_turn) call.
    DealerTurn,
    /// The round has ended and the outcome is known.
    Finished,
}

/// Result of one dealer auto-play step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer's total was below 17 and a card was drawn; call again.
    Drew(Rank),
    /// The dealer stood and the round is over.
    Finished(RoundSummary),
}
