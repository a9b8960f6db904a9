use cosmwasm_std::{Addr, Uint128};

use crate::error::LotteryError;
use crate::types::Entropy;

/// Capabilities the lottery needs from whatever executes it.
///
/// One `Host` value describes one call: who made it, what value came with
/// it, and how to move value out of the lottery's custody.
pub trait Host {
    /// Identity of the party invoking the current operation.
    fn caller(&self) -> &Addr;

    /// Value attached to the current call, in the lottery's unit.
    fn attached_value(&self) -> Uint128;

    /// Loosely unpredictable signals of the current execution.
    fn entropy(&self) -> Entropy;

    /// Move `amount` from the lottery's custody to `to`.
    ///
    /// Must either complete in full or return an error without effect.
    fn transfer(&mut self, to: &Addr, amount: Uint128) -> Result<(), LotteryError>;
}
