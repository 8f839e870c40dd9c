//! Events emitted for the presentation layer.
//!
//! The engine never renders or sleeps. Every observable effect of a command
//! is queued as an [`Event`] which the front end drains in order and animates
//! at its own pace.

use crate::card::Rank;
use crate::result::Outcome;

/// The side of the table a card or score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player's side.
    Player,
    /// The dealer's side.
    Dealer,
}

/// What happened at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A card was dealt into a slot.
    CardDealt {
        /// The side the card went to.
        side: Side,
        /// The slot the card landed in (0..=4).
        slot: u8,
        /// The rank of the card.
        rank: Rank,
        /// Whether the card lands face up. Only the dealer's hole card is
        /// dealt face down.
        face_up: bool,
    },
    /// The dealer's hole card was turned face up.
    HoleCardRevealed {
        /// The rank that was hidden.
        rank: Rank,
    },
    /// A side's displayed score changed.
    ScoreUpdated {
        /// The side whose score changed.
        side: Side,
        /// The total to display.
        total: u8,
        /// Whether the total counts only the dealer's up card because the
        /// hole card is still hidden.
        total_is_partial: bool,
    },
    /// The round ended.
    GameFinished {
        /// Who won the round.
        outcome: Outcome,
        /// The player's final total.
        player_total: u8,
        /// The dealer's final total, hole card included.
        dealer_total: u8,
    },
}

/// An event with sequencing metadata for the animator.
///
/// `seq` increases monotonically across the lifetime of the engine; `round`
/// identifies the game the event belongs to, so a scheduler can drop stale
/// animation callbacks after a new game supersedes the one they were queued
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Monotonic sequence number.
    pub seq: u64,
    /// The round this event belongs to.
    pub round: u64,
    /// What happened.
    pub kind: EventKind,
}
