use cosmwasm_std::{Addr, Uint128};

/// Environment signals fed into winner selection.
///
/// None of these are secret: whoever controls all of them (for example a
/// block producer who is also the operator) can predict the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entropy {
    /// Block time in nanoseconds since the unix epoch
    pub timestamp_nanos: u64,
    /// Block height, a monotonically increasing execution counter
    pub height: u64,
    /// Position of the transaction inside its block, when the host knows it
    pub tx_index: Option<u32>,
}

/// Result of a successful payout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Id of the round that was just closed
    pub round: u64,
    pub winner: Addr,
    /// Slot of the winner in the participant list (entry order)
    pub winner_index: u32,
    /// The whole pot, transferred to the winner
    pub payout: Uint128,
    pub participant_count: u32,
    /// sha256 digest the winner index was reduced from
    pub selection_digest: [u8; 32],
}
