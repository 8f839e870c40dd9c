//! Hand evaluation and player/dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

/// Maximum number of cards a side can hold.
///
/// The table has five card slots per side; dealing into a full hand is a
/// silent no-op rather than an error.
pub const MAX_HAND_CARDS: usize = 5;

/// Computes the best blackjack total for a sequence of ranks.
///
/// Base values are summed with every ace counted as 11, then aces are demoted
/// to 1 one at a time while the total exceeds 21. Pure and order-insensitive.
///
/// # Example
///
/// ```
/// use bjtable::{Rank, hand_value};
///
/// assert_eq!(hand_value(&[Rank::Ace, Rank::King, Rank::Five]), 16);
/// assert_eq!(hand_value(&[Rank::Ace, Rank::Ace, Rank::Nine]), 21);
/// ```
#[must_use]
pub fn hand_value(ranks: &[Rank]) -> u8 {
    evaluate(ranks).0
}

/// Returns whether a sequence of ranks forms a soft hand.
///
/// A hand is soft while at least one ace still counts as 11.
#[must_use]
pub fn is_soft(ranks: &[Rank]) -> bool {
    evaluate(ranks).1
}

fn evaluate(ranks: &[Rank]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for rank in ranks {
        if rank.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(rank.value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let soft = aces > 0 && total <= 21;
    (total, soft)
}

/// An ordered, append-only hand of up to [`MAX_HAND_CARDS`] ranks.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Ranks in deal order.
    ranks: Vec<Rank>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { ranks: Vec::new() }
    }

    /// Appends a rank at the next free slot.
    ///
    /// Returns the slot index that was filled, or `None` if the hand already
    /// holds [`MAX_HAND_CARDS`] cards (the rank is discarded).
    pub fn push(&mut self, rank: Rank) -> Option<u8> {
        if self.ranks.len() >= MAX_HAND_CARDS {
            return None;
        }
        self.ranks.push(rank);
        Some((self.ranks.len() - 1) as u8)
    }

    /// Returns the ranks in deal order.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Returns the best blackjack total for the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        hand_value(&self.ranks)
    }

    /// Returns whether the hand is soft (an ace still counts as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.ranks)
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether every card slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ranks.len() >= MAX_HAND_CARDS
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.ranks.clear();
    }
}

/// The dealer's hand.
///
/// Identical to [`Hand`] except that the second card dealt is the hole card,
/// which stays face down until the player stands. Hiding is view-only: the
/// full total always includes every dealt card.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in deal order; index 0 is the up card, index 1 the hole card.
    hand: Hand,
    /// Whether the hole card has been revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Appends a rank at the next free slot.
    ///
    /// Returns the slot index that was filled, or `None` if the hand is full.
    pub fn push(&mut self, rank: Rank) -> Option<u8> {
        self.hand.push(rank)
    }

    /// Returns the ranks in deal order.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        self.hand.ranks()
    }

    /// Returns the up card (first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.hand.ranks().first().copied()
    }

    /// Returns the hole card (second card dealt).
    #[must_use]
    pub fn hole_card(&self) -> Option<Rank> {
        self.hand.ranks().get(1).copied()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the total a spectator would see.
    ///
    /// While the hole card is hidden this counts only the up card; once
    /// revealed it equals [`Self::total`].
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        if self.hole_revealed {
            self.total()
        } else {
            self.up_card().map_or(0, Rank::value)
        }
    }

    /// Returns the full total, hole card included.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.hand.total()
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether every card slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.hand.is_full()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand and hides the hole card for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}
