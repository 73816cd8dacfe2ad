//! Issue flow: owner lock into escrow, preimage unlock, owner fetch after timeout.

mod helpers;

use common::LockState;
use cosmwasm_std::{Binary, Uint128};
use helpers::*;
use qlc_token::hash::bytes32_to_hex;
use qlc_token::msg::ExecuteMsg;
use qlc_token::ContractError;

fn hex_of(r_hash: &Binary) -> String {
    let bytes: [u8; 32] = r_hash.as_slice().try_into().unwrap();
    bytes32_to_hex(&bytes)
}

fn issue_fetch(env: &mut TestEnv, r_hash: &Binary) -> anyhow::Result<cw_multi_test::AppResponse> {
    let owner = env.owner.clone();
    execute(
        env,
        &owner,
        &ExecuteMsg::IssueFetch {
            r_hash: r_hash.clone(),
        },
    )
}

#[test]
fn test_issue_lock_mints_into_escrow() {
    let mut env = setup();
    let (_, r_hash) = preimage(1);
    let lock_height = height(&env);

    let res = issue_lock(&mut env, &r_hash, 1_000_000).unwrap();

    assert_eq!(
        event_attr(&res, "wasm-locked_state", "state"),
        Some(LockState::IssueLocked.code().to_string())
    );
    assert_eq!(
        event_attr(&res, "wasm-locked_state", "r_hash"),
        Some(hex_of(&r_hash))
    );

    let contract = env.contract_addr.clone();
    assert_eq!(balance(&env, &contract), Uint128::new(1_000_000));
    assert_eq!(total_supply(&env), Uint128::new(1_000_000));

    let timer = hash_timer(&env, &r_hash);
    assert!(timer.is_issue);
    assert_eq!(timer.amount, Uint128::new(1_000_000));
    assert_eq!(timer.lock_height, lock_height);
    assert_eq!(timer.unlock_height, 0);
    assert_eq!(timer.account, None);
    assert_eq!(timer.state, Some(LockState::IssueLocked));
}

#[test]
fn test_issue_unlock_by_any_preimage_holder() {
    let mut env = setup();
    let (origin, r_hash) = preimage(1);
    issue_lock(&mut env, &r_hash, 1_000_000).unwrap();
    advance_blocks(&mut env, 3);

    let alice = env.alice.clone();
    let res = issue_unlock(&mut env, &alice, &r_hash, &origin).unwrap();
    assert_eq!(
        event_attr(&res, "wasm-locked_state", "state"),
        Some(LockState::IssueUnlocked.code().to_string())
    );

    let contract = env.contract_addr.clone();
    assert_eq!(balance(&env, &alice), Uint128::new(1_000_000));
    assert_eq!(balance(&env, &contract), Uint128::zero());
    assert_eq!(total_supply(&env), Uint128::new(1_000_000));

    let timer = hash_timer(&env, &r_hash);
    assert_eq!(timer.origin, origin);
    assert_eq!(timer.account, Some(alice.clone()));
    assert_eq!(timer.unlock_height, height(&env));
    assert_eq!(timer.state, Some(LockState::IssueUnlocked));

    // A second reveal, even by someone else, is rejected
    let unlock_height = height(&env);
    let bob = env.bob.clone();
    assert_error(
        issue_unlock(&mut env, &bob, &r_hash, &origin),
        ContractError::AlreadyUnlocked { unlock_height },
    );
    assert_eq!(balance(&env, &bob), Uint128::zero());
}

#[test]
fn test_issue_unlock_wrong_origin() {
    let mut env = setup();
    let (_, r_hash) = preimage(1);
    let (wrong_origin, _) = preimage(2);
    issue_lock(&mut env, &r_hash, 5_000).unwrap();

    let alice = env.alice.clone();
    assert_error(
        issue_unlock(&mut env, &alice, &r_hash, &wrong_origin),
        ContractError::Mismatch,
    );
    assert_eq!(
        hash_timer(&env, &r_hash).state,
        Some(LockState::IssueLocked)
    );
}

#[test]
fn test_issue_unlock_unknown_hash() {
    let mut env = setup();
    let (origin, r_hash) = preimage(9);
    let alice = env.alice.clone();

    assert_error(
        issue_unlock(&mut env, &alice, &r_hash, &origin),
        ContractError::NotFound {
            r_hash: hex_of(&r_hash),
        },
    );
}

#[test]
fn test_issue_lock_validation() {
    let mut env = setup();
    let (_, r_hash) = preimage(1);

    // Owner only
    let alice = env.alice.clone();
    assert_error(
        execute(
            &mut env,
            &alice,
            &ExecuteMsg::IssueLock {
                r_hash: r_hash.clone(),
                amount: Uint128::new(5_000),
            },
        ),
        ContractError::Unauthorized,
    );

    assert_error(
        issue_lock(&mut env, &Binary::from(vec![0u8; 32]), 5_000),
        ContractError::ZeroHash,
    );
    assert_error(
        issue_lock(&mut env, &Binary::from(vec![1u8; 20]), 5_000),
        ContractError::InvalidHashLength { got: 20 },
    );
    assert_error(issue_lock(&mut env, &r_hash, 0), ContractError::ZeroAmount);
    assert_error(
        issue_lock(&mut env, &r_hash, MIN_AMOUNT - 1),
        ContractError::AmountTooSmall {
            min_amount: Uint128::new(MIN_AMOUNT),
        },
    );

    // Exactly the minimum is accepted
    issue_lock(&mut env, &r_hash, MIN_AMOUNT).unwrap();
    assert_eq!(total_supply(&env), Uint128::new(MIN_AMOUNT));
}

#[test]
fn test_issue_lock_duplicate_hash() {
    let mut env = setup();
    let (_, r_hash) = preimage(1);
    issue_lock(&mut env, &r_hash, 5_000).unwrap();

    assert_error(
        issue_lock(&mut env, &r_hash, 7_000),
        ContractError::Duplicate {
            r_hash: hex_of(&r_hash),
        },
    );
    assert_eq!(total_supply(&env), Uint128::new(5_000));
}

#[test]
fn test_issue_lock_rejects_pending_destroy_hash() {
    let mut env = setup();
    let alice = env.alice.clone();
    fund(&mut env, &alice, 50_000, 1);

    let (_, r_hash) = preimage(2);
    destroy_lock(&mut env, &alice, &r_hash, 10_000).unwrap();

    assert_error(
        issue_lock(&mut env, &r_hash, 5_000),
        ContractError::Duplicate {
            r_hash: hex_of(&r_hash),
        },
    );
    assert_eq!(total_supply(&env), Uint128::new(50_000));
    let contract = env.contract_addr.clone();
    assert_eq!(balance(&env, &contract), Uint128::zero());
    assert_eq!(
        hash_timer(&env, &r_hash).state,
        Some(LockState::DestroyLocked)
    );
}

#[test]
fn test_issue_deadline_fixed_at_lock_time() {
    let mut env = setup();
    let (_, r_hash) = preimage(1);
    let lock_height = height(&env);
    issue_lock(&mut env, &r_hash, 5_000).unwrap();

    // Shortening the timeout does not let the owner fetch a pending lock early
    let owner = env.owner.clone();
    execute(
        &mut env,
        &owner,
        &ExecuteMsg::UpdateLockParams {
            issue_min_amount: None,
            destroy_min_amount: None,
            issue_timeout_blocks: Some(1),
            destroy_timeout_blocks: None,
        },
    )
    .unwrap();
    advance_blocks(&mut env, 1);
    assert_error(
        issue_fetch(&mut env, &r_hash),
        ContractError::NotTimedOut {
            fetchable_at: lock_height + ISSUE_TIMEOUT,
        },
    );

    advance_blocks(&mut env, ISSUE_TIMEOUT - 1);
    issue_fetch(&mut env, &r_hash).unwrap();
    assert_eq!(total_supply(&env), Uint128::zero());
}

#[test]
fn test_issue_fetch_timeout_boundary() {
    let mut env = setup();
    let (_, r_hash) = preimage(1);
    let lock_height = height(&env);
    issue_lock(&mut env, &r_hash, 1_000_000).unwrap();

    advance_blocks(&mut env, ISSUE_TIMEOUT - 1);
    assert_error(
        issue_fetch(&mut env, &r_hash),
        ContractError::NotTimedOut {
            fetchable_at: lock_height + ISSUE_TIMEOUT,
        },
    );

    advance_blocks(&mut env, 1);
    let res = issue_fetch(&mut env, &r_hash).unwrap();
    assert_eq!(
        event_attr(&res, "wasm-locked_state", "state"),
        Some(LockState::IssueFetched.code().to_string())
    );

    let contract = env.contract_addr.clone();
    assert_eq!(balance(&env, &contract), Uint128::zero());
    assert_eq!(total_supply(&env), Uint128::zero());

    let timer = hash_timer(&env, &r_hash);
    assert_eq!(timer.state, Some(LockState::IssueFetched));
    assert_eq!(timer.unlock_height, lock_height + ISSUE_TIMEOUT);
}

#[test]
fn test_issue_fetch_owner_only() {
    let mut env = setup();
    let (_, r_hash) = preimage(1);
    issue_lock(&mut env, &r_hash, 5_000).unwrap();
    advance_blocks(&mut env, ISSUE_TIMEOUT);

    let alice = env.alice.clone();
    assert_error(
        execute(
            &mut env,
            &alice,
            &ExecuteMsg::IssueFetch {
                r_hash: r_hash.clone(),
            },
        ),
        ContractError::Unauthorized,
    );
}

#[test]
fn test_issue_terminal_states_are_final() {
    let mut env = setup();

    // Unlocked, then fetch attempted
    let (origin, r_hash) = preimage(1);
    issue_lock(&mut env, &r_hash, 5_000).unwrap();
    let alice = env.alice.clone();
    issue_unlock(&mut env, &alice, &r_hash, &origin).unwrap();
    let unlock_height = height(&env);
    advance_blocks(&mut env, ISSUE_TIMEOUT);
    assert_error(
        issue_fetch(&mut env, &r_hash),
        ContractError::AlreadyUnlocked { unlock_height },
    );

    // Fetched, then unlock attempted
    let (origin, r_hash) = preimage(2);
    issue_lock(&mut env, &r_hash, 5_000).unwrap();
    advance_blocks(&mut env, ISSUE_TIMEOUT);
    issue_fetch(&mut env, &r_hash).unwrap();
    let fetch_height = height(&env);
    assert_error(
        issue_unlock(&mut env, &alice, &r_hash, &origin),
        ContractError::AlreadyUnlocked {
            unlock_height: fetch_height,
        },
    );

    // A consumed hash can never be locked again
    assert_error(
        issue_lock(&mut env, &r_hash, 5_000),
        ContractError::Duplicate {
            r_hash: hex_of(&r_hash),
        },
    );
    assert_eq!(balance(&env, &alice), Uint128::new(5_000));
    assert_eq!(total_supply(&env), Uint128::new(5_000));
}

#[test]
fn test_issue_operations_reject_destroy_hash() {
    let mut env = setup();
    let alice = env.alice.clone();
    fund(&mut env, &alice, 50_000, 1);

    let (origin, r_hash) = preimage(2);
    destroy_lock(&mut env, &alice, &r_hash, 10_000).unwrap();

    let wrong_direction = || ContractError::WrongDirection {
        actual: "destroy".to_string(),
    };
    assert_error(
        issue_unlock(&mut env, &alice, &r_hash, &origin),
        wrong_direction(),
    );
    advance_blocks(&mut env, DESTROY_TIMEOUT);
    assert_error(issue_fetch(&mut env, &r_hash), wrong_direction());
}
