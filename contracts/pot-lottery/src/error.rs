use cosmwasm_std::StdError;
use pot_lottery_common::LotteryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Lottery(#[from] LotteryError),

    #[error("must send exactly one coin ({denom})")]
    InvalidFunds { denom: String },

    #[error("must send {expected} to enter, got {denom}")]
    WrongDenom { expected: String, denom: String },

    #[error("this operation does not accept funds")]
    UnexpectedFunds,

    #[error("minimum entry must be greater than zero")]
    InvalidMinimumEntry,

    #[error("denom must not be empty")]
    InvalidDenom,

    #[error("cannot migrate: {reason}")]
    InvalidMigration { reason: String },
}
