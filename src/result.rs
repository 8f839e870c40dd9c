//! Round outcome types.

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// The dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Equal totals, nobody wins.
    Push,
}

/// Final totals and outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// Who won the round.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total, hole card included.
    pub dealer_total: u8,
}
