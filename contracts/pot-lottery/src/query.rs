use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{ConfigResponse, PotResponse, RoundHistoryResponse, WinningsResponse};
use crate::state::{DENOM, LOTTERY, ROUNDS, WINNINGS};

pub fn query_players(deps: Deps) -> StdResult<Binary> {
    let lottery = LOTTERY.load(deps.storage)?;
    to_json_binary(&lottery.players().to_vec())
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let lottery = LOTTERY.load(deps.storage)?;
    to_json_binary(&ConfigResponse {
        operator: lottery.operator().clone(),
        denom: DENOM.load(deps.storage)?,
        minimum_entry: lottery.minimum_entry(),
    })
}

pub fn query_pot(deps: Deps) -> StdResult<Binary> {
    let lottery = LOTTERY.load(deps.storage)?;
    to_json_binary(&PotResponse {
        round: lottery.round(),
        pot: lottery.pot(),
        participant_count: lottery
            .participant_count()
            .map_err(|e| StdError::generic_err(e.to_string()))?,
    })
}

pub fn query_round(deps: Deps, round: u64) -> StdResult<Binary> {
    let record = ROUNDS.may_load(deps.storage, round)?;
    to_json_binary(&record)
}

pub fn query_round_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let rounds: Vec<_> = ROUNDS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<_>>()?;

    to_json_binary(&RoundHistoryResponse { rounds })
}

pub fn query_winnings(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let tally = WINNINGS.may_load(deps.storage, &addr)?.unwrap_or_default();
    to_json_binary(&WinningsResponse {
        address,
        rounds_won: tally.rounds_won,
        total_won: tally.total_won,
    })
}
