use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, StdResult};
use pot_lottery_common::Host;

use crate::error::ContractError;
use crate::host::ContractHost;
use crate::state::{RoundRecord, WinningsTally, DENOM, LOTTERY, ROUNDS, WINNINGS};

/// Enter the open round with the attached funds. Anyone can call.
///
/// The entry is rejected (and the funds bounce with the reverted
/// transaction) when the attached amount is below the minimum entry.
pub fn enter(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let denom = DENOM.load(deps.storage)?;
    let host = ContractHost::new(deps.querier, &env, &info, &denom)?;

    let mut lottery = LOTTERY.load(deps.storage)?;
    lottery.enter(&host)?;
    LOTTERY.save(deps.storage, &lottery)?;

    let amount = host.attached_value().to_string();

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("amount", amount.clone())
        .add_event(
            Event::new("lottery_entry")
                .add_attribute("round", lottery.round().to_string())
                .add_attribute("player", info.sender.to_string())
                .add_attribute("amount", amount)
                .add_attribute("denom", denom)
                .add_attribute("pot", lottery.pot().to_string())
                .add_attribute("participant_count", lottery.players().len().to_string()),
        ))
}

/// Close the open round. Operator only.
///
/// 1. Select a winner from the block signals and the participant list
/// 2. Queue a bank send of the whole pot to the winner
/// 3. Clear participants and pot, open the next round
/// 4. Record the round and the winner's tally
///
/// The send and the reset are committed together: if the send cannot be
/// backed (or fails on chain) nothing of the above is persisted.
pub fn pick_winner(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    let denom = DENOM.load(deps.storage)?;
    let mut host = ContractHost::new(deps.querier, &env, &info, &denom)?;

    let mut lottery = LOTTERY.load(deps.storage)?;
    let outcome = lottery.pick_winner(&mut host)?;
    LOTTERY.save(deps.storage, &lottery)?;

    let digest_hex = hex::encode(outcome.selection_digest);
    let record = RoundRecord {
        round: outcome.round,
        winner: outcome.winner.clone(),
        winner_index: outcome.winner_index,
        payout: outcome.payout,
        participant_count: outcome.participant_count,
        selection_digest: digest_hex.clone(),
        completed_at: env.block.time,
    };
    ROUNDS.save(deps.storage, outcome.round, &record)?;

    WINNINGS.update(
        deps.storage,
        &outcome.winner,
        |tally| -> StdResult<WinningsTally> {
            let mut tally = tally.unwrap_or_default();
            tally.rounds_won += 1;
            tally.total_won = tally.total_won.checked_add(outcome.payout)?;
            Ok(tally)
        },
    )?;

    Ok(Response::new()
        .add_messages(host.into_messages())
        .add_attribute("action", "pick_winner")
        .add_attribute("round", outcome.round.to_string())
        .add_attribute("winner", outcome.winner.to_string())
        .add_attribute("payout", outcome.payout.to_string())
        .add_event(
            Event::new("lottery_winner_picked")
                .add_attribute("round", outcome.round.to_string())
                .add_attribute("winner", outcome.winner.to_string())
                .add_attribute("winner_index", outcome.winner_index.to_string())
                .add_attribute("payout", outcome.payout.to_string())
                .add_attribute("denom", denom)
                .add_attribute("participant_count", outcome.participant_count.to_string())
                .add_attribute("selection_digest", digest_hex)
                .add_attribute("block_height", env.block.height.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}
