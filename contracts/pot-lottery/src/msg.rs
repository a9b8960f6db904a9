use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::RoundRecord;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to pick winners. Defaults to the instantiator.
    pub operator: Option<String>,
    /// Native denom of entries and payouts
    pub denom: String,
    /// Smallest accepted entry. Defaults to 0.01 of an 18-decimal token.
    pub minimum_entry: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Enter the current round with the attached funds.
    Enter {},
    /// Pay the whole pot to a randomly selected participant (operator only).
    PickWinner {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current-round participants in entry order.
    #[returns(Vec<Addr>)]
    Players {},

    #[returns(ConfigResponse)]
    Config {},

    #[returns(PotResponse)]
    Pot {},

    #[returns(Option<RoundRecord>)]
    Round { round: u64 },

    #[returns(RoundHistoryResponse)]
    RoundHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(WinningsResponse)]
    Winnings { address: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub operator: Addr,
    pub denom: String,
    pub minimum_entry: Uint128,
}

#[cw_serde]
pub struct PotResponse {
    /// Id of the round currently accepting entries
    pub round: u64,
    pub pot: Uint128,
    pub participant_count: u32,
}

#[cw_serde]
pub struct RoundHistoryResponse {
    pub rounds: Vec<RoundRecord>,
}

#[cw_serde]
pub struct WinningsResponse {
    pub address: String,
    pub rounds_won: u32,
    pub total_won: Uint128,
}
