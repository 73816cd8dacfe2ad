//! Lock registry: commitment-hash keyed timers shared by both flows.
//!
//! One namespace holds issue and destroy locks, so a hash locked in either
//! direction can never be locked again. Resolved timers are kept forever.

use common::{verify_commitment, LockDirection, LockState};
use cosmwasm_std::{Addr, Binary, Env, Event, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, parse_hash};
use crate::outbox;
use crate::state::{BridgeEvent, HashTimer, HASH_TIMERS};

/// Parse a commitment hash, rejecting the zero value.
pub fn parse_r_hash(input: &Binary) -> Result<[u8; 32], ContractError> {
    let r_hash = parse_hash(input)?;
    if r_hash == [0u8; 32] {
        return Err(ContractError::ZeroHash);
    }
    Ok(r_hash)
}

pub fn ensure_unused(storage: &dyn Storage, r_hash: &[u8; 32]) -> Result<(), ContractError> {
    if HASH_TIMERS.has(storage, r_hash) {
        return Err(ContractError::Duplicate {
            r_hash: bytes32_to_hex(r_hash),
        });
    }
    Ok(())
}

/// Load the timer for `r_hash`, requiring it to belong to `direction`.
pub fn load_timer(
    storage: &dyn Storage,
    r_hash: &[u8; 32],
    direction: LockDirection,
) -> Result<HashTimer, ContractError> {
    let timer = HASH_TIMERS
        .may_load(storage, r_hash)?
        .ok_or_else(|| ContractError::NotFound {
            r_hash: bytes32_to_hex(r_hash),
        })?;
    if timer.direction != direction {
        return Err(ContractError::WrongDirection {
            actual: direction_name(timer.direction).to_string(),
        });
    }
    Ok(timer)
}

pub fn ensure_pending(timer: &HashTimer) -> Result<(), ContractError> {
    if timer.is_resolved() {
        return Err(ContractError::AlreadyUnlocked {
            unlock_height: timer.unlock_height,
        });
    }
    Ok(())
}

/// Parse the revealed origin and check it hashes to `r_hash`.
pub fn verify_origin(r_hash: &[u8; 32], origin: &Binary) -> Result<[u8; 32], ContractError> {
    let origin = parse_hash(origin)?;
    if !verify_commitment(r_hash, &origin) {
        return Err(ContractError::Mismatch);
    }
    Ok(origin)
}

/// Fetch is allowed once the timer's own timeout has elapsed since the lock height.
pub fn ensure_timed_out(timer: &HashTimer, height: u64) -> Result<(), ContractError> {
    let fetchable_at = timer.fetchable_at();
    if height < fetchable_at {
        return Err(ContractError::NotTimedOut { fetchable_at });
    }
    Ok(())
}

/// Persist `timer`, record the transition in the outbox and emit the
/// `locked_state` event onto `response`.
pub fn commit_transition(
    storage: &mut dyn Storage,
    env: &Env,
    r_hash: &[u8; 32],
    timer: &HashTimer,
    response: Response,
) -> Result<Response, ContractError> {
    HASH_TIMERS.save(storage, r_hash, timer)?;
    let seq = outbox::append(
        storage,
        env,
        BridgeEvent::LockedState {
            r_hash: Binary::from(r_hash.to_vec()),
            state: timer.state,
        },
    )?;

    Ok(response.add_event(
        Event::new("locked_state")
            .add_attribute("r_hash", bytes32_to_hex(r_hash))
            .add_attribute("state", timer.state.to_string())
            .add_attribute("seq", seq.to_string()),
    ))
}

pub fn direction_name(direction: LockDirection) -> &'static str {
    match direction {
        LockDirection::Issue => "issue",
        LockDirection::Destroy => "destroy",
    }
}

/// A fresh, pending timer at the current height.
pub fn new_timer(
    env: &Env,
    amount: Uint128,
    account: Option<Addr>,
    direction: LockDirection,
    timeout_blocks: u64,
) -> HashTimer {
    let state = match direction {
        LockDirection::Issue => LockState::IssueLocked,
        LockDirection::Destroy => LockState::DestroyLocked,
    };
    HashTimer {
        origin: [0u8; 32],
        amount,
        account,
        lock_height: env.block.height,
        unlock_height: 0,
        timeout_blocks,
        direction,
        state,
    }
}
