//! QLC Token Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `ledger`, `lock_registry`, `outbox` - State primitives shared by handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_approve, execute_burn, execute_circuit_breaker, execute_decrease_allowance,
    execute_destroy_fetch, execute_destroy_lock, execute_destroy_unlock,
    execute_increase_allowance, execute_issue_fetch, execute_issue_lock, execute_issue_unlock,
    execute_mint, execute_transfer, execute_transfer_from, execute_transfer_ownership,
    execute_update_lock_params, validate_lock_params, validate_signer_pubkey,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowance, query_balance, query_config, query_events, query_foreign_hash_used,
    query_hash_timer, query_locked_balance, query_mint_digest, query_owner, query_token_info,
    query_total_supply,
};
use crate::state::{
    Config, TokenInfo, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_DESTROY_TIMEOUT_BLOCKS,
    DEFAULT_ISSUE_TIMEOUT_BLOCKS, EVENT_SEQ, TOKEN_INFO,
};

/// Largest accepted `decimals`
const MAX_DECIMALS: u8 = 18;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_token_metadata(&msg)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    validate_signer_pubkey(&msg.signer_pubkey)?;

    let config = Config {
        owner,
        signer_pubkey: msg.signer_pubkey,
        mint_enabled: true,
        issue_min_amount: msg.issue_min_amount,
        destroy_min_amount: msg.destroy_min_amount,
        issue_timeout_blocks: msg
            .issue_timeout_blocks
            .unwrap_or(DEFAULT_ISSUE_TIMEOUT_BLOCKS),
        destroy_timeout_blocks: msg
            .destroy_timeout_blocks
            .unwrap_or(DEFAULT_DESTROY_TIMEOUT_BLOCKS),
    };
    validate_lock_params(&config)?;
    CONFIG.save(deps.storage, &config)?;

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
        },
    )?;

    EVENT_SEQ.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("decimals", msg.decimals.to_string())
        .add_attribute("issue_timeout_blocks", config.issue_timeout_blocks.to_string())
        .add_attribute(
            "destroy_timeout_blocks",
            config.destroy_timeout_blocks.to_string(),
        ))
}

fn validate_token_metadata(msg: &InstantiateMsg) -> Result<(), ContractError> {
    if !(3..=50).contains(&msg.name.len()) {
        return Err(ContractError::InvalidConfig {
            reason: "name must be 3-50 characters".to_string(),
        });
    }
    if !(3..=12).contains(&msg.symbol.len())
        || !msg
            .symbol
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '-')
    {
        return Err(ContractError::InvalidConfig {
            reason: "symbol must be 3-12 letters or '-'".to_string(),
        });
    }
    if msg.decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidConfig {
            reason: format!("decimals must not exceed {}", MAX_DECIMALS),
        });
    }
    Ok(())
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Ledger
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),

        // Issue flow
        ExecuteMsg::IssueLock { r_hash, amount } => {
            execute_issue_lock(deps, env, info, r_hash, amount)
        }
        ExecuteMsg::IssueUnlock { r_hash, origin } => {
            execute_issue_unlock(deps, env, info, r_hash, origin)
        }
        ExecuteMsg::IssueFetch { r_hash } => execute_issue_fetch(deps, env, info, r_hash),

        // Destroy flow
        ExecuteMsg::DestroyLock {
            r_hash,
            amount,
            executor,
        } => execute_destroy_lock(deps, env, info, r_hash, amount, executor),
        ExecuteMsg::DestroyUnlock { r_hash, origin } => {
            execute_destroy_unlock(deps, env, info, r_hash, origin)
        }
        ExecuteMsg::DestroyFetch { r_hash } => execute_destroy_fetch(deps, env, info, r_hash),

        // Direct bridge
        ExecuteMsg::Mint {
            amount,
            foreign_hash,
            signature,
        } => execute_mint(deps, env, info, amount, foreign_hash, signature),
        ExecuteMsg::Burn {
            foreign_address,
            amount,
        } => execute_burn(deps, env, info, foreign_address, amount),

        // Admin operations
        ExecuteMsg::CircuitBreaker {} => execute_circuit_breaker(deps, info),
        ExecuteMsg::TransferOwnership {
            new_owner,
            signer_pubkey,
        } => execute_transfer_ownership(deps, info, new_owner, signer_pubkey),
        ExecuteMsg::UpdateLockParams {
            issue_min_amount,
            destroy_min_amount,
            issue_timeout_blocks,
            destroy_timeout_blocks,
        } => execute_update_lock_params(
            deps,
            info,
            issue_min_amount,
            destroy_min_amount,
            issue_timeout_blocks,
            destroy_timeout_blocks,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::HashTimer { r_hash } => to_json_binary(&query_hash_timer(deps, r_hash)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::LockedBalance { address } => {
            to_json_binary(&query_locked_balance(deps, address)?)
        }
        QueryMsg::TotalSupply {} => to_json_binary(&query_total_supply(deps)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ForeignHashUsed { foreign_hash } => {
            to_json_binary(&query_foreign_hash_used(deps, foreign_hash)?)
        }
        QueryMsg::Events { start_after, limit } => {
            to_json_binary(&query_events(deps, start_after, limit)?)
        }
        QueryMsg::MintDigest {
            amount,
            user,
            foreign_hash,
        } => to_json_binary(&query_mint_digest(deps, amount, user, foreign_hash)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Initialize the event outbox if not set (for pre-outbox deployments)
    if EVENT_SEQ.may_load(deps.storage)?.is_none() {
        EVENT_SEQ.save(deps.storage, &0u64)?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
