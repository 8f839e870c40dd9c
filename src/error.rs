//! Error types for game commands.

use thiserror::Error;

/// Errors returned when a command arrives in the wrong phase.
///
/// A rejected command never changes game state; the round stays valid and
/// playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Hit or stand was requested outside the player's turn.
    #[error("not the player's turn")]
    NotPlayerTurn,
    /// A dealer step was requested outside the dealer's turn.
    #[error("not the dealer's turn")]
    NotDealerTurn,
}
