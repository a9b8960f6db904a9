use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use pot_lottery_common::Lottery;

/// The state machine record: operator, minimum entry, open round.
pub const LOTTERY: Item<Lottery> = Item::new("lottery");
/// Native denom entries are paid in and the pot is paid out in.
pub const DENOM: Item<String> = Item::new("denom");
/// Closed rounds by round id
pub const ROUNDS: Map<u64, RoundRecord> = Map::new("rounds");
pub const WINNINGS: Map<&Addr, WinningsTally> = Map::new("winnings");

#[cw_serde]
pub struct RoundRecord {
    pub round: u64,
    pub winner: Addr,
    /// Slot of the winner in entry order
    pub winner_index: u32,
    pub payout: Uint128,
    pub participant_count: u32,
    /// sha256 selection digest, hex-encoded
    pub selection_digest: String,
    pub completed_at: Timestamp,
}

#[cw_serde]
#[derive(Default)]
pub struct WinningsTally {
    pub rounds_won: u32,
    pub total_won: Uint128,
}
