//! Issue flow handlers (origin -> local).
//!
//! States per hash: absent -> IssueLocked -> IssueUnlocked | IssueFetched.
//! Supply grows once, at lock time, into the contract's own escrow balance;
//! unlock only moves escrow to the claimant, fetch burns it again.

use common::{LockDirection, LockState};
use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::bytes32_to_hex;
use crate::ledger;
use crate::lock_registry::{
    commit_transition, ensure_pending, ensure_timed_out, ensure_unused, load_timer, new_timer,
    parse_r_hash, verify_origin,
};
use crate::state::CONFIG;

// ============================================================================
// IssueLock - Owner
// ============================================================================

/// Owner locks an issue observed on the origin chain.
pub fn execute_issue_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    r_hash: Binary,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let r_hash = parse_r_hash(&r_hash)?;
    ensure_unused(deps.storage, &r_hash)?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if amount < config.issue_min_amount {
        return Err(ContractError::AmountTooSmall {
            min_amount: config.issue_min_amount,
        });
    }

    let total_supply = ledger::mint(deps.storage, &env.contract.address, amount)?;

    let timer = new_timer(
        &env,
        amount,
        None,
        LockDirection::Issue,
        config.issue_timeout_blocks,
    );
    let response = Response::new()
        .add_attribute("action", "issue_lock")
        .add_attribute("r_hash", bytes32_to_hex(&r_hash))
        .add_attribute("amount", amount)
        .add_attribute("lock_height", timer.lock_height.to_string())
        .add_attribute("fetchable_at", timer.fetchable_at().to_string())
        .add_attribute("total_supply", total_supply);

    commit_transition(deps.storage, &env, &r_hash, &timer, response)
}

// ============================================================================
// IssueUnlock - Anyone with the preimage
// ============================================================================

/// Claimant reveals the origin and receives the escrowed amount.
pub fn execute_issue_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    r_hash: Binary,
    origin: Binary,
) -> Result<Response, ContractError> {
    let r_hash = parse_r_hash(&r_hash)?;
    let mut timer = load_timer(deps.storage, &r_hash, LockDirection::Issue)?;
    ensure_pending(&timer)?;
    let origin = verify_origin(&r_hash, &origin)?;

    ledger::transfer(
        deps.storage,
        &env.contract.address,
        &info.sender,
        timer.amount,
    )?;

    timer.origin = origin;
    timer.unlock_height = env.block.height;
    timer.account = Some(info.sender.clone());
    timer.state = LockState::IssueUnlocked;

    let response = Response::new()
        .add_attribute("action", "issue_unlock")
        .add_attribute("r_hash", bytes32_to_hex(&r_hash))
        .add_attribute("recipient", info.sender)
        .add_attribute("amount", timer.amount);

    commit_transition(deps.storage, &env, &r_hash, &timer, response)
}

// ============================================================================
// IssueFetch - Owner (after timeout)
// ============================================================================

/// Owner reclaims an issue lock whose preimage was never revealed.
pub fn execute_issue_fetch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    r_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let r_hash = parse_r_hash(&r_hash)?;
    let mut timer = load_timer(deps.storage, &r_hash, LockDirection::Issue)?;
    ensure_pending(&timer)?;
    ensure_timed_out(&timer, env.block.height)?;

    let total_supply = ledger::burn(deps.storage, &env.contract.address, timer.amount)?;

    timer.unlock_height = env.block.height;
    timer.state = LockState::IssueFetched;

    let response = Response::new()
        .add_attribute("action", "issue_fetch")
        .add_attribute("r_hash", bytes32_to_hex(&r_hash))
        .add_attribute("amount", timer.amount)
        .add_attribute("total_supply", total_supply);

    commit_transition(deps.storage, &env, &r_hash, &timer, response)
}
