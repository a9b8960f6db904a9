use cosmwasm_std::{OverflowError, Uint128};
use thiserror::Error;

/// Failures of the lottery state machine. None of them leave the state
/// partially mutated.
#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("insufficient contribution: sent {sent}, minimum entry is {minimum}")]
    InsufficientContribution { sent: Uint128, minimum: Uint128 },

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("no participants in the current round")]
    NoParticipants,

    #[error("transfer of {amount} to {recipient} failed: {reason}")]
    TransferFailure {
        recipient: String,
        amount: Uint128,
        reason: String,
    },

    #[error("round is full: at most {limit} entries")]
    RoundFull { limit: u32 },

    #[error("{0}")]
    Overflow(#[from] OverflowError),
}
