#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};
use pot_lottery_common::{Lottery, DEFAULT_MINIMUM_ENTRY};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{DENOM, LOTTERY};

const CONTRACT_NAME: &str = "crates.io:pot-lottery";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Funds sent here would sit outside any pot
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    let operator = match msg.operator {
        Some(op) => deps.api.addr_validate(&op)?,
        None => info.sender.clone(),
    };

    let denom = msg.denom.trim().to_string();
    if denom.is_empty() {
        return Err(ContractError::InvalidDenom);
    }

    let minimum_entry = msg.minimum_entry.unwrap_or(DEFAULT_MINIMUM_ENTRY);
    if minimum_entry.is_zero() {
        return Err(ContractError::InvalidMinimumEntry);
    }

    LOTTERY.save(deps.storage, &Lottery::new(operator.clone(), minimum_entry))?;
    DENOM.save(deps.storage, &denom)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "pot-lottery")
        .add_attribute("operator", operator.to_string())
        .add_event(
            Event::new("lottery_instantiated")
                .add_attribute("operator", operator.to_string())
                .add_attribute("denom", denom)
                .add_attribute("minimum_entry", minimum_entry.to_string()),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::PickWinner {} => execute::pick_winner(deps, env, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Players {} => query::query_players(deps),
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Pot {} => query::query_pot(deps),
        QueryMsg::Round { round } => query::query_round(deps, round),
        QueryMsg::RoundHistory { start_after, limit } => {
            query::query_round_history(deps, start_after, limit)
        }
        QueryMsg::Winnings { address } => query::query_winnings(deps, address),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            reason: format!("stored contract is {}", stored.contract),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version.clone())
        .add_attribute("to_version", CONTRACT_VERSION)
        .add_event(
            Event::new("lottery_migrated")
                .add_attribute("from_version", stored.version)
                .add_attribute("to_version", CONTRACT_VERSION),
        ))
}
