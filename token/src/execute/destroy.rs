//! Destroy flow handlers (local -> origin).
//!
//! States per hash: absent -> DestroyLocked -> DestroyUnlocked | DestroyFetched.
//! Locking reserves existing funds; supply only shrinks when the owner
//! confirms the burn with the revealed origin.

use common::{LockDirection, LockState};
use cosmwasm_std::{Addr, Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::bytes32_to_hex;
use crate::ledger;
use crate::lock_registry::{
    commit_transition, ensure_pending, ensure_timed_out, ensure_unused, load_timer, new_timer,
    parse_r_hash, verify_origin,
};
use crate::state::{Config, CONFIG};

/// Two-party check: the holder acts, the named executor must be the owner.
///
/// Compared as given, so a malformed executor is reported as `WrongExecutor`.
fn ensure_executor(config: &Config, executor: &str) -> Result<(), ContractError> {
    if executor != config.owner.as_str() {
        return Err(ContractError::WrongExecutor {
            executor: executor.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// DestroyLock - Holder (owner as executor)
// ============================================================================

/// Holder reserves funds to be burned against an origin-chain credit.
pub fn execute_destroy_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    r_hash: Binary,
    amount: Uint128,
    executor: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_executor(&config, &executor)?;

    let r_hash = parse_r_hash(&r_hash)?;
    ensure_unused(deps.storage, &r_hash)?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if amount < config.destroy_min_amount {
        return Err(ContractError::AmountTooSmall {
            min_amount: config.destroy_min_amount,
        });
    }

    ledger::lock(deps.storage, &info.sender, amount)?;

    let timer = new_timer(
        &env,
        amount,
        Some(info.sender.clone()),
        LockDirection::Destroy,
        config.destroy_timeout_blocks,
    );
    let response = Response::new()
        .add_attribute("action", "destory_lock")
        .add_attribute("r_hash", bytes32_to_hex(&r_hash))
        .add_attribute("account", info.sender)
        .add_attribute("executor", executor)
        .add_attribute("amount", amount)
        .add_attribute("lock_height", timer.lock_height.to_string())
        .add_attribute("fetchable_at", timer.fetchable_at().to_string());

    commit_transition(deps.storage, &env, &r_hash, &timer, response)
}

// ============================================================================
// DestroyUnlock - Owner
// ============================================================================

/// Owner confirms the burn by revealing the origin.
pub fn execute_destroy_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    r_hash: Binary,
    origin: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let r_hash = parse_r_hash(&r_hash)?;
    let mut timer = load_timer(deps.storage, &r_hash, LockDirection::Destroy)?;
    ensure_pending(&timer)?;
    let origin = verify_origin(&r_hash, &origin)?;

    let account = locked_account(&timer.account, &r_hash)?;
    let total_supply = ledger::burn_locked(deps.storage, &account, timer.amount)?;

    timer.origin = origin;
    timer.unlock_height = env.block.height;
    timer.state = LockState::DestroyUnlocked;

    let response = Response::new()
        .add_attribute("action", "destory_unlock")
        .add_attribute("r_hash", bytes32_to_hex(&r_hash))
        .add_attribute("account", account)
        .add_attribute("amount", timer.amount)
        .add_attribute("total_supply", total_supply);

    commit_transition(deps.storage, &env, &r_hash, &timer, response)
}

// ============================================================================
// DestroyFetch - Locked account (after timeout)
// ============================================================================

/// Holder takes back a reservation the owner never confirmed.
pub fn execute_destroy_fetch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    r_hash: Binary,
) -> Result<Response, ContractError> {
    let r_hash = parse_r_hash(&r_hash)?;
    let mut timer = load_timer(deps.storage, &r_hash, LockDirection::Destroy)?;
    let account = locked_account(&timer.account, &r_hash)?;
    if info.sender != account {
        return Err(ContractError::WrongCaller);
    }
    ensure_pending(&timer)?;
    ensure_timed_out(&timer, env.block.height)?;

    ledger::release(deps.storage, &account, timer.amount)?;

    timer.unlock_height = env.block.height;
    timer.state = LockState::DestroyFetched;

    let response = Response::new()
        .add_attribute("action", "destory_fetch")
        .add_attribute("r_hash", bytes32_to_hex(&r_hash))
        .add_attribute("account", account)
        .add_attribute("amount", timer.amount);

    commit_transition(deps.storage, &env, &r_hash, &timer, response)
}

fn locked_account(account: &Option<Addr>, r_hash: &[u8; 32]) -> Result<Addr, ContractError> {
    account.clone().ok_or_else(|| ContractError::NotFound {
        r_hash: bytes32_to_hex(r_hash),
    })
}
