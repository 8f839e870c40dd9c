//! The infinite draw source.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A draw source over a fixed 52-card pool, sampled with replacement.
///
/// Every draw is an independent uniform choice from the full pool, so the
/// same rank can recur without bound and the pool never depletes. This is a
/// deliberate rule of the table, not a shortcut: the odds of every draw are
/// identical regardless of what was dealt before.
///
/// Upcoming draws can be scripted with [`Shoe::stack`], which is how tests
/// and replays force deterministic deals.
///
/// # Example
///
/// ```
/// use bjtable::Shoe;
///
/// let mut shoe = Shoe::new(42);
/// let card = shoe.draw();
/// let _ = card.rank;
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    /// The 52-card pool every random draw samples from.
    pool: Vec<Card>,
    /// Scripted draws, served before random ones.
    stacked: VecDeque<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a new shoe with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut pool = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                pool.push(Card::new(suit, rank));
            }
        }

        Self {
            pool,
            stacked: VecDeque::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws one card.
    ///
    /// Stacked cards are served first; otherwise the card is chosen uniformly
    /// at random from the pool, with replacement.
    pub fn draw(&mut self) -> Card {
        if let Some(card) = self.stacked.pop_front() {
            return card;
        }

        // The pool is always 52 cards, so choose cannot fail.
        self.pool
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Card::new(Suit::Spades, Rank::Ace))
    }

    /// Queues ranks to be served by the next draws, in order.
    ///
    /// Random drawing resumes once the stacked cards run out. The suit
    /// attached to stacked cards is arbitrary since scoring ignores it.
    pub fn stack<I: IntoIterator<Item = Rank>>(&mut self, ranks: I) {
        self.stacked
            .extend(ranks.into_iter().map(|rank| Card::new(Suit::Spades, rank)));
    }

    /// Returns the number of scripted draws still queued.
    #[must_use]
    pub fn stacked_len(&self) -> usize {
        self.stacked.len()
    }

    /// Discards any scripted draws.
    pub fn clear_stacked(&mut self) {
        self.stacked.clear();
    }
}
