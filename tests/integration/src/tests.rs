//! Integration tests for the pot lottery.
//!
//! These tests drive the contract entry points directly using
//! `cosmwasm_std::testing` mocks. The mock bank does not move attached
//! funds, so each test keeps a small ledger of what the contract holds and
//! applies the queued `BankMsg::Send` payouts itself.
//!
//! Run:
//! ```bash
//! cargo test -p pot-lottery-integration-tests
//! ```

use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi, MockQuerier};
use cosmwasm_std::{
    coins, from_json, Addr, BankMsg, CosmosMsg, MemoryStorage, OwnedDeps, Response, Uint128,
};
use pot_lottery::contract::{execute, instantiate, query};
use pot_lottery::msg::{
    ExecuteMsg, InstantiateMsg, PotResponse, QueryMsg, RoundHistoryResponse, WinningsResponse,
};
use pot_lottery::state::RoundRecord;
use pot_lottery::ContractError;
use pot_lottery_common::{select_winner, Entropy, LotteryError};

// ─── Constants ───

const DENOM: &str = "inj";
/// One whole 18-decimal token
const UNIT: u128 = 1_000_000_000_000_000_000;

type MockDeps = OwnedDeps<MemoryStorage, MockApi, MockQuerier>;

// ─── Harness ───

/// A lottery instance plus the bank balance the contract should hold.
struct Harness {
    deps: MockDeps,
    custody: u128,
}

impl Harness {
    fn new(operator: &str) -> Self {
        let mut deps = mock_dependencies();
        let operator = deps.api.addr_make(operator);
        let msg = InstantiateMsg {
            operator: None,
            denom: DENOM.to_string(),
            minimum_entry: Some(Uint128::new(UNIT / 100)),
        };
        instantiate(deps.as_mut(), mock_env(), message_info(&operator, &[]), msg).unwrap();
        Harness { deps, custody: 0 }
    }

    fn addr(&self, name: &str) -> Addr {
        self.deps.api.addr_make(name)
    }

    /// Enter as `player`; on success the attached funds stay with the contract.
    fn enter(&mut self, player: &str, amount: u128) -> Result<Response, ContractError> {
        let sender = self.addr(player);
        let funds = if amount == 0 {
            vec![]
        } else {
            coins(amount, DENOM)
        };
        let res = execute(
            self.deps.as_mut(),
            mock_env(),
            message_info(&sender, &funds),
            ExecuteMsg::Enter {},
        )?;
        self.custody += amount;
        self.sync_bank();
        Ok(res)
    }

    /// Pick a winner as `caller` and settle the payout against the custody ledger.
    fn pick_winner(&mut self, caller: &str) -> Result<(Addr, u128), ContractError> {
        let sender = self.addr(caller);
        let res = execute(
            self.deps.as_mut(),
            mock_env(),
            message_info(&sender, &[]),
            ExecuteMsg::PickWinner {},
        )?;
        assert_eq!(res.messages.len(), 1, "exactly one payout per round");
        match &res.messages[0].msg {
            CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
                assert_eq!(amount.len(), 1);
                assert_eq!(amount[0].denom, DENOM);
                let paid = amount[0].amount.u128();
                self.custody -= paid;
                self.sync_bank();
                Ok((Addr::unchecked(to_address.clone()), paid))
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    fn sync_bank(&mut self) {
        self.deps
            .querier
            .bank
            .update_balance(mock_env().contract.address, coins(self.custody, DENOM));
    }

    fn players(&self) -> Vec<Addr> {
        from_json(query(self.deps.as_ref(), mock_env(), QueryMsg::Players {}).unwrap()).unwrap()
    }

    fn pot(&self) -> PotResponse {
        from_json(query(self.deps.as_ref(), mock_env(), QueryMsg::Pot {}).unwrap()).unwrap()
    }

    fn winnings(&self, name: &str) -> WinningsResponse {
        let msg = QueryMsg::Winnings {
            address: self.addr(name).to_string(),
        };
        from_json(query(self.deps.as_ref(), mock_env(), msg).unwrap()).unwrap()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_full_round_scenario() {
    let mut lottery = Harness::new("alice");
    let bob = lottery.addr("bob");
    let carol = lottery.addr("carol");

    lottery.enter("bob", 2 * UNIT / 100).unwrap();
    assert_eq!(lottery.players(), vec![bob.clone()]);

    lottery.enter("carol", 2 * UNIT / 100).unwrap();
    assert_eq!(lottery.players(), vec![bob.clone(), carol.clone()]);

    // Non-operator cannot close the round
    let err = lottery.pick_winner("bob").unwrap_err();
    assert!(
        matches!(err, ContractError::Lottery(LotteryError::Unauthorized { .. })),
        "Expected unauthorized error, got: {:?}",
        err
    );
    assert_eq!(lottery.players(), vec![bob.clone(), carol.clone()]);

    let (winner, paid) = lottery.pick_winner("alice").unwrap();
    assert!(winner == bob || winner == carol);
    assert_eq!(paid, 4 * UNIT / 100);
    assert!(lottery.players().is_empty());
    assert_eq!(lottery.pot().pot, Uint128::zero());
    assert_eq!(lottery.custody, 0);
}

#[test]
fn test_zero_entry_rejected_on_fresh_lottery() {
    let mut lottery = Harness::new("alice");

    let err = lottery.enter("dave", 0).unwrap_err();
    assert!(
        matches!(
            err,
            ContractError::Lottery(LotteryError::InsufficientContribution { .. })
        ),
        "Expected insufficient contribution, got: {:?}",
        err
    );
    assert!(lottery.players().is_empty());
    assert_eq!(lottery.pot().pot, Uint128::zero());
}

#[test]
fn test_pot_tracks_accepted_entries_only() {
    let mut lottery = Harness::new("alice");
    let attempts: [(&str, u128); 7] = [
        ("bob", UNIT / 100),
        ("carol", UNIT / 100 - 1),
        ("dave", 5 * UNIT),
        ("bob", 0),
        ("erin", UNIT / 20),
        ("carol", UNIT / 100),
        ("bob", UNIT / 1000),
    ];

    let mut accepted_sum = 0u128;
    let mut accepted = vec![];
    for (player, amount) in attempts {
        match lottery.enter(player, amount) {
            Ok(_) => {
                accepted_sum += amount;
                accepted.push(lottery.addr(player));
            }
            Err(err) => assert!(matches!(
                err,
                ContractError::Lottery(LotteryError::InsufficientContribution { .. })
            )),
        }

        let pot = lottery.pot();
        assert_eq!(pot.pot, Uint128::new(accepted_sum));
        assert_eq!(pot.participant_count as usize, accepted.len());
    }

    assert_eq!(lottery.players(), accepted);
    assert_eq!(lottery.custody, accepted_sum);
}

#[test]
fn test_empty_pool_cannot_be_drawn() {
    let mut lottery = Harness::new("alice");

    let err = lottery.pick_winner("alice").unwrap_err();
    assert!(
        matches!(err, ContractError::Lottery(LotteryError::NoParticipants)),
        "Expected no participants, got: {:?}",
        err
    );

    // Closing a round leaves an empty pool behind, which is again undrawable
    lottery.enter("bob", UNIT).unwrap();
    lottery.pick_winner("alice").unwrap();
    let err = lottery.pick_winner("alice").unwrap_err();
    assert!(matches!(
        err,
        ContractError::Lottery(LotteryError::NoParticipants)
    ));
    assert_eq!(lottery.pot().round, 1);
}

#[test]
fn test_unbacked_payout_keeps_round_open() {
    let mut lottery = Harness::new("alice");
    lottery.enter("bob", UNIT).unwrap();
    lottery.enter("carol", UNIT).unwrap();

    // Simulate the contract losing custody of part of the pot
    lottery.custody = UNIT;
    lottery.sync_bank();

    let err = lottery.pick_winner("alice").unwrap_err();
    assert!(
        format!("{:?}", err).contains("TransferFailure"),
        "Expected transfer failure, got: {:?}",
        err
    );
    assert_eq!(lottery.players().len(), 2);
    assert_eq!(lottery.pot().pot, Uint128::new(2 * UNIT));
    assert_eq!(lottery.pot().round, 0);

    // Once custody is restored the same round can be closed
    lottery.custody = 2 * UNIT;
    lottery.sync_bank();
    let (_, paid) = lottery.pick_winner("alice").unwrap();
    assert_eq!(paid, 2 * UNIT);
    assert!(lottery.players().is_empty());
}

#[test]
fn test_winner_matches_common_selector() {
    let mut lottery = Harness::new("alice");
    for player in ["p0", "p1", "p2", "p3", "p4", "p5"] {
        lottery.enter(player, UNIT / 10).unwrap();
    }
    let participants = lottery.players();

    let env = mock_env();
    let entropy = Entropy {
        timestamp_nanos: env.block.time.nanos(),
        height: env.block.height,
        tx_index: env.transaction.as_ref().map(|tx| tx.index),
    };
    let expected = select_winner(&entropy, &participants).unwrap();

    let (winner, _) = lottery.pick_winner("alice").unwrap();
    assert_eq!(winner, participants[expected.index]);

    let record: Option<RoundRecord> = from_json(
        query(
            lottery.deps.as_ref(),
            mock_env(),
            QueryMsg::Round { round: 0 },
        )
        .unwrap(),
    )
    .unwrap();
    let record = record.unwrap();
    assert_eq!(record.winner_index as usize, expected.index);
    assert_eq!(record.selection_digest, hex::encode(expected.digest));
}

#[test]
fn test_repeated_rounds_keep_books_balanced() {
    let mut lottery = Harness::new("alice");
    let names = ["bob", "carol", "dave"];
    let mut total_paid = 0u128;

    for round in 0..5u64 {
        assert_eq!(lottery.pot().round, round);
        for (i, name) in names.iter().enumerate() {
            lottery.enter(name, (i as u128 + 1) * UNIT / 10).unwrap();
        }
        // bob enters twice: two slots
        lottery.enter("bob", UNIT / 10).unwrap();
        assert_eq!(lottery.players().len(), 4);

        let pot_before = lottery.pot().pot.u128();
        let (winner, paid) = lottery.pick_winner("alice").unwrap();
        assert_eq!(paid, pot_before);
        assert!(names.iter().any(|n| lottery.addr(n) == winner));
        total_paid += paid;

        assert!(lottery.players().is_empty());
        assert_eq!(lottery.custody, 0);
    }

    let tallied: u128 = names
        .iter()
        .map(|n| lottery.winnings(n).total_won.u128())
        .sum();
    let rounds_won: u32 = names.iter().map(|n| lottery.winnings(n).rounds_won).sum();
    assert_eq!(tallied, total_paid);
    assert_eq!(rounds_won, 5);

    let history: RoundHistoryResponse = from_json(
        query(
            lottery.deps.as_ref(),
            mock_env(),
            QueryMsg::RoundHistory {
                start_after: None,
                limit: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    let ids: Vec<u64> = history.rounds.iter().map(|r| r.round).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_instances_are_independent() {
    let mut first = Harness::new("alice");
    let mut second = Harness::new("zed");

    first.enter("bob", UNIT).unwrap();
    assert_eq!(first.players().len(), 1);
    assert!(second.players().is_empty());

    // alice operates only the first instance
    let err = second.pick_winner("alice").unwrap_err();
    assert!(matches!(
        err,
        ContractError::Lottery(LotteryError::Unauthorized { .. })
    ));

    second.enter("carol", UNIT).unwrap();
    second.pick_winner("zed").unwrap();
    assert_eq!(first.players().len(), 1);
    assert_eq!(first.pot().pot, Uint128::new(UNIT));
}

#[test]
fn test_wire_format() {
    let enter: ExecuteMsg = serde_json::from_str(r#"{"enter":{}}"#).unwrap();
    assert_eq!(enter, ExecuteMsg::Enter {});
    let pick: ExecuteMsg = serde_json::from_str(r#"{"pick_winner":{}}"#).unwrap();
    assert_eq!(pick, ExecuteMsg::PickWinner {});

    let players: QueryMsg = serde_json::from_str(r#"{"players":{}}"#).unwrap();
    assert_eq!(players, QueryMsg::Players {});

    let init: InstantiateMsg =
        serde_json::from_str(r#"{"operator":null,"denom":"inj","minimum_entry":"10000000000000000"}"#)
            .unwrap();
    assert_eq!(init.minimum_entry, Some(Uint128::new(UNIT / 100)));
}
