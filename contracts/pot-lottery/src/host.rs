use cosmwasm_std::{coins, Addr, BankMsg, Env, MessageInfo, QuerierWrapper, Uint128};
use pot_lottery_common::{Entropy, Host, LotteryError};

use crate::error::ContractError;

/// `Host` backed by the executing chain.
///
/// Transfers are not sent right away: they are queued as `BankMsg::Send` and
/// dispatched with the response, inside the same transaction. A failing send
/// reverts the whole call, including the round reset.
pub struct ContractHost<'a> {
    querier: QuerierWrapper<'a>,
    env: &'a Env,
    caller: Addr,
    attached: Uint128,
    denom: String,
    messages: Vec<BankMsg>,
}

impl<'a> ContractHost<'a> {
    pub fn new(
        querier: QuerierWrapper<'a>,
        env: &'a Env,
        info: &MessageInfo,
        denom: &str,
    ) -> Result<Self, ContractError> {
        Ok(ContractHost {
            querier,
            env,
            caller: info.sender.clone(),
            attached: attached_amount(info, denom)?,
            denom: denom.to_string(),
            messages: vec![],
        })
    }

    /// Bank messages queued by successful transfers.
    pub fn into_messages(self) -> Vec<BankMsg> {
        self.messages
    }
}

impl Host for ContractHost<'_> {
    fn caller(&self) -> &Addr {
        &self.caller
    }

    fn attached_value(&self) -> Uint128 {
        self.attached
    }

    fn entropy(&self) -> Entropy {
        Entropy {
            timestamp_nanos: self.env.block.time.nanos(),
            height: self.env.block.height,
            tx_index: self.env.transaction.as_ref().map(|tx| tx.index),
        }
    }

    fn transfer(&mut self, to: &Addr, amount: Uint128) -> Result<(), LotteryError> {
        let failure = |reason: String| LotteryError::TransferFailure {
            recipient: to.to_string(),
            amount,
            reason,
        };

        // The pot must be fully backed by the contract's bank balance
        let balance = self
            .querier
            .query_balance(&self.env.contract.address, &self.denom)
            .map_err(|e| failure(e.to_string()))?;
        if balance.amount < amount {
            return Err(failure(format!(
                "contract holds {}{}, pot needs {}{}",
                balance.amount, self.denom, amount, self.denom
            )));
        }

        self.messages.push(BankMsg::Send {
            to_address: to.to_string(),
            amount: coins(amount.u128(), &self.denom),
        });
        Ok(())
    }
}

/// Amount of `denom` attached to the call.
///
/// No funds counts as zero. Anything other than a single coin of `denom`
/// is rejected outright.
pub fn attached_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    match info.funds.as_slice() {
        [] => Ok(Uint128::zero()),
        [coin] if coin.denom == denom => Ok(coin.amount),
        [coin] => Err(ContractError::WrongDenom {
            expected: denom.to_string(),
            denom: coin.denom.clone(),
        }),
        _ => Err(ContractError::InvalidFunds {
            denom: denom.to_string(),
        }),
    }
}
