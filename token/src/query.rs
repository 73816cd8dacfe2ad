//! Query handlers for the QLC token contract.

use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};

use crate::hash::{mint_digest, parse_hash};
use crate::ledger;
use crate::msg::{
    ConfigResponse, EventsResponse, ForeignHashUsedResponse, HashTimerResponse,
    LockedBalanceResponse, MintDigestResponse, OwnerResponse, TotalSupplyResponse,
};
use crate::outbox;
use crate::state::{CONFIG, HASH_TIMERS, MINTED_FOREIGN_HASHES, TOKEN_INFO};

fn parse_query_hash(input: &Binary) -> StdResult<[u8; 32]> {
    parse_hash(input).map_err(|e| StdError::generic_err(e.to_string()))
}

// ============================================================================
// Lock Registry
// ============================================================================

/// Absent hashes answer with a zeroed record (`lock_height == 0`).
pub fn query_hash_timer(deps: Deps, r_hash: Binary) -> StdResult<HashTimerResponse> {
    let key = parse_query_hash(&r_hash)?;
    let response = match HASH_TIMERS.may_load(deps.storage, &key)? {
        Some(timer) => HashTimerResponse {
            r_hash,
            origin: Binary::from(timer.origin.to_vec()),
            amount: timer.amount,
            fetchable_at: timer.fetchable_at(),
            is_issue: timer.is_issue(),
            account: timer.account,
            lock_height: timer.lock_height,
            unlock_height: timer.unlock_height,
            state: Some(timer.state),
        },
        None => HashTimerResponse {
            r_hash,
            origin: Binary::from(vec![0u8; 32]),
            amount: Uint128::zero(),
            account: None,
            lock_height: 0,
            unlock_height: 0,
            fetchable_at: 0,
            is_issue: false,
            state: None,
        },
    };
    Ok(response)
}

// ============================================================================
// Ledger
// ============================================================================

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(BalanceResponse {
        balance: ledger::balance_of(deps.storage, &address)?,
    })
}

pub fn query_locked_balance(deps: Deps, address: String) -> StdResult<LockedBalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(LockedBalanceResponse {
        locked: ledger::locked_balance_of(deps.storage, &address)?,
    })
}

pub fn query_total_supply(deps: Deps) -> StdResult<TotalSupplyResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TotalSupplyResponse {
        total_supply: info.total_supply,
    })
}

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    Ok(AllowanceResponse {
        allowance: ledger::allowance_of(deps.storage, &owner, &spender)?,
        expires: Expiration::Never {},
    })
}

// ============================================================================
// Configuration
// ============================================================================

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
        signer_pubkey: config.signer_pubkey,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        mint_enabled: config.mint_enabled,
        issue_min_amount: config.issue_min_amount,
        destroy_min_amount: config.destroy_min_amount,
        issue_timeout_blocks: config.issue_timeout_blocks,
        destroy_timeout_blocks: config.destroy_timeout_blocks,
    })
}

// ============================================================================
// Bridge
// ============================================================================

pub fn query_foreign_hash_used(
    deps: Deps,
    foreign_hash: Binary,
) -> StdResult<ForeignHashUsedResponse> {
    let key = parse_query_hash(&foreign_hash)?;
    let minted_at = MINTED_FOREIGN_HASHES.may_load(deps.storage, &key)?;
    Ok(ForeignHashUsedResponse {
        used: minted_at.is_some(),
        minted_at,
    })
}

pub fn query_events(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<EventsResponse> {
    Ok(EventsResponse {
        events: outbox::page(deps.storage, start_after, limit)?,
    })
}

pub fn query_mint_digest(
    deps: Deps,
    amount: Uint128,
    user: String,
    foreign_hash: Binary,
) -> StdResult<MintDigestResponse> {
    let user = deps.api.addr_validate(&user)?;
    let foreign_hash = parse_query_hash(&foreign_hash)?;
    Ok(MintDigestResponse {
        digest: Binary::from(mint_digest(amount, &foreign_hash, user.as_str()).to_vec()),
    })
}
