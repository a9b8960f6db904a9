use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

use crate::error::LotteryError;
use crate::host::Host;
use crate::selection::select_winner;
use crate::types::RoundOutcome;

/// 0.01 of an 18-decimal token.
pub const DEFAULT_MINIMUM_ENTRY: Uint128 = Uint128::new(10_000_000_000_000_000);

/// The lottery state machine.
///
/// Invariants:
/// - `pot` is the sum of all contributions accepted since the last payout
/// - `participants` and `pot` are empty right after creation and after each payout
/// - `operator` and `minimum_entry` never change
///
/// Every operation either returns `Ok` with its full effect applied or
/// returns an error with `self` untouched.
#[cw_serde]
pub struct Lottery {
    operator: Addr,
    minimum_entry: Uint128,
    /// Entry order; the same address may hold several slots
    participants: Vec<Addr>,
    pot: Uint128,
    /// Id of the round currently accepting entries
    round: u64,
}

impl Lottery {
    pub fn new(operator: Addr, minimum_entry: Uint128) -> Self {
        Lottery {
            operator,
            minimum_entry,
            participants: vec![],
            pot: Uint128::zero(),
            round: 0,
        }
    }

    pub fn operator(&self) -> &Addr {
        &self.operator
    }

    pub fn minimum_entry(&self) -> Uint128 {
        self.minimum_entry
    }

    /// Current-round participants in entry order.
    pub fn players(&self) -> &[Addr] {
        &self.participants
    }

    pub fn pot(&self) -> Uint128 {
        self.pot
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    /// Number of slots in the current round.
    pub fn participant_count(&self) -> Result<u32, LotteryError> {
        slot_count(self.participants.len())
    }

    /// Record one entry for the caller, with the attached value as its stake.
    pub fn enter<H: Host + ?Sized>(&mut self, host: &H) -> Result<(), LotteryError> {
        let sent = host.attached_value();
        if sent < self.minimum_entry {
            return Err(LotteryError::InsufficientContribution {
                sent,
                minimum: self.minimum_entry,
            });
        }

        let pot = self.pot.checked_add(sent)?;
        slot_count(self.participants.len() + 1)?;
        self.participants.push(host.caller().clone());
        self.pot = pot;
        Ok(())
    }

    /// Close the round: pick a winner, pay out the whole pot, reset.
    ///
    /// Order matters: authorization, then emptiness, then selection, then the
    /// transfer. State is only cleared once the transfer reported success.
    pub fn pick_winner<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<RoundOutcome, LotteryError> {
        if host.caller() != &self.operator {
            return Err(LotteryError::Unauthorized {
                reason: "only the operator can pick a winner".to_string(),
            });
        }
        if self.participants.is_empty() {
            return Err(LotteryError::NoParticipants);
        }

        let selection = select_winner(&host.entropy(), &self.participants)?;
        let winner = self.participants[selection.index].clone();
        let winner_index = slot_count(selection.index)?;
        let participant_count = self.participant_count()?;
        let payout = self.pot;

        host.transfer(&winner, payout)?;

        let outcome = RoundOutcome {
            round: self.round,
            winner,
            winner_index,
            payout,
            participant_count,
            selection_digest: selection.digest,
        };

        self.participants.clear();
        self.pot = Uint128::zero();
        self.round += 1;

        Ok(outcome)
    }
}

/// Slot positions and counts are reported as `u32`; a round never grows past that.
fn slot_count(len: usize) -> Result<u32, LotteryError> {
    u32::try_from(len).map_err(|_| LotteryError::RoundFull { limit: u32::MAX })
}
