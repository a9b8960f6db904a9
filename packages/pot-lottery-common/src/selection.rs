use cosmwasm_std::Addr;
use sha2::{Digest, Sha256};

use crate::error::LotteryError;
use crate::types::Entropy;

/// Domain tag prefixed to every selection hash.
const SELECTION_DOMAIN: &[u8] = b"pot-lottery/winner-selection/v1";

/// A winner slot together with the digest it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub digest: [u8; 32],
}

/// Hash the environment signals and the ordered participant list.
///
/// `digest = sha256( domain || time_be || height_be || tx_flag [|| tx_index_be]
///                   || count_be || for each participant: len_be || bytes )`
///
/// Length prefixes keep distinct participant lists from hashing the same.
pub fn selection_digest(entropy: &Entropy, participants: &[Addr]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SELECTION_DOMAIN);
    hasher.update(entropy.timestamp_nanos.to_be_bytes());
    hasher.update(entropy.height.to_be_bytes());
    match entropy.tx_index {
        Some(index) => {
            hasher.update([0x01]);
            hasher.update(index.to_be_bytes());
        }
        None => hasher.update([0x00]),
    }
    hasher.update((participants.len() as u64).to_be_bytes());
    for participant in participants {
        let bytes = participant.as_str().as_bytes();
        hasher.update((bytes.len() as u32).to_be_bytes());
        hasher.update(bytes);
    }
    hasher.finalize().into()
}

/// Reduce a digest to a slot: `uint128(digest[0..16]) % participant_count`.
pub fn winner_index(digest: &[u8; 32], participant_count: usize) -> Result<usize, LotteryError> {
    if participant_count == 0 {
        return Err(LotteryError::NoParticipants);
    }
    let mut ticket_bytes = [0u8; 16];
    ticket_bytes.copy_from_slice(&digest[0..16]);
    let ticket = u128::from_be_bytes(ticket_bytes);
    Ok((ticket % participant_count as u128) as usize)
}

/// Pick a winner slot for the given participants.
///
/// Deterministic for fixed inputs. This is NOT a secure randomness source:
/// block time, height and transaction index are known to (and partly chosen
/// by) block producers, and the participant list is public. Acceptable for
/// low-stakes pools only.
///
/// Cost grows with the round: every participant is hashed here, and the
/// contract stores the list in a single item that each entry reads and
/// rewrites. Close rounds well before that exceeds the block gas limit, or
/// the pot can no longer be paid out.
pub fn select_winner(entropy: &Entropy, participants: &[Addr]) -> Result<Selection, LotteryError> {
    if participants.is_empty() {
        return Err(LotteryError::NoParticipants);
    }
    let digest = selection_digest(entropy, participants);
    let index = winner_index(&digest, participants.len())?;
    Ok(Selection { index, digest })
}
