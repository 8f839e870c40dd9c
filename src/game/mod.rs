//! Game engine and state management.

extern crate alloc;

use alloc::collections::VecDeque;

use crate::card::Rank;
use crate::event::{Event, EventKind, Side};
use crate::hand::{DealerHand, Hand};
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{DealerStep, GamePhase};

/// The dealer stands at this total or above and must draw below it.
pub const DEALER_STAND_TOTAL: u8 = 17;

/// A single-player blackjack table engine.
///
/// The engine owns the shoe, both hands, and the turn phase. It is driven by
/// four commands ([`start_new_game`](Self::start_new_game),
/// [`hit`](Self::hit), [`stand`](Self::stand),
/// [`advance_dealer_turn`](Self::advance_dealer_turn)) and reports everything
/// a front end needs to render through the [`Event`] queue, drained with
/// [`next_event`](Self::next_event). It never sleeps or blocks; pacing the
/// animation is the caller's job.
pub struct Game {
    /// The draw source.
    pub shoe: Shoe,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Current phase of the round.
    phase: GamePhase,
    /// Events not yet drained by the front end.
    events: VecDeque<Event>,
    /// Next event sequence number.
    next_seq: u64,
    /// Current round number, bumped by every new game.
    round: u64,
    /// Opening-deal `CardDealt` events not yet drained; input should stay
    /// gated while this is nonzero.
    opening_deals_pending: u8,
}

impl Game {
    /// Creates a new engine with the given shoe seed.
    ///
    /// The engine starts in [`GamePhase::Idle`]; call
    /// [`start_new_game`](Self::start_new_game) to deal the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GamePhase};
    ///
    /// let mut game = Game::new(42);
    /// assert_eq!(game.phase(), GamePhase::Idle);
    /// game.start_new_game();
    /// assert_eq!(game.phase(), GamePhase::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            shoe: Shoe::new(seed),
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            phase: GamePhase::Idle,
            events: VecDeque::new(),
            next_seq: 0,
            round: 0,
            opening_deals_pending: 0,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the current round number (0 before the first game).
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Returns whether opening-deal events are still queued.
    ///
    /// Front ends should keep hit/stand input disabled while this is true;
    /// the engine itself accepts commands as soon as the phase allows them.
    #[must_use]
    pub const fn is_dealing(&self) -> bool {
        self.opening_deals_pending > 0
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the player's current total.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        self.player_hand.total()
    }

    /// Returns the dealer's full total, hole card included.
    #[must_use]
    pub fn dealer_total(&self) -> u8 {
        self.dealer_hand.total()
    }

    /// Returns the dealer total a spectator would see (up card only while the
    /// hole card is hidden).
    #[must_use]
    pub fn dealer_visible_total(&self) -> u8 {
        self.dealer_hand.visible_total()
    }

    /// Pops the oldest undrained event, if any.
    pub fn next_event(&mut self) -> Option<Event> {
        let event = self.events.pop_front()?;
        if self.opening_deals_pending > 0
            && matches!(event.kind, EventKind::CardDealt { .. })
        {
            self.opening_deals_pending -= 1;
        }
        Some(event)
    }

    /// Returns the number of undrained events.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn emit(&mut self, kind: EventKind) {
        let event = Event {
            seq: self.next_seq,
            round: self.round,
            kind,
        };
        self.next_seq += 1;
        log::trace!("event {event:?}");
        self.events.push_back(event);
    }

    /// Draws a card into the given side's hand and emits the deal and score
    /// events. Returns the drawn rank, or `None` when the hand was full and
    /// nothing was dealt.
    pub(crate) fn deal_to(&mut self, side: Side, face_up: bool) -> Option<Rank> {
        // Check for a free slot before touching the shoe; a full hand wastes
        // no draw.
        let full = match side {
            Side::Player => self.player_hand.is_full(),
            Side::Dealer => self.dealer_hand.is_full(),
        };
        if full {
            log::debug!("{side:?} hand is full, deal ignored");
            return None;
        }

        let rank = self.shoe.draw().rank;
        let slot = match side {
            Side::Player => self.player_hand.push(rank),
            Side::Dealer => self.dealer_hand.push(rank),
        }?;

        log::debug!("dealt {rank:?} to {side:?} slot {slot}");
        self.emit(EventKind::CardDealt {
            side,
            slot,
            rank,
            face_up,
        });
        self.emit_score(side);

        Some(rank)
    }

    /// Emits the current displayed score for a side.
    pub(crate) fn emit_score(&mut self, side: Side) {
        let (total, total_is_partial) = match side {
            Side::Player => (self.player_hand.total(), false),
            Side::Dealer => (
                self.dealer_hand.visible_total(),
                !self.dealer_hand.is_hole_revealed(),
            ),
        };
        self.emit(EventKind::ScoreUpdated {
            side,
            total,
            total_is_partial,
        });
    }

    pub(crate) fn clear_round_state(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.events.clear();
        self.opening_deals_pending = 0;
    }
}
