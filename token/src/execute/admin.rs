//! Admin operations handlers.
//!
//! This module handles:
//! - Circuit breaker for the mint path
//! - Ownership (and mint-signing key) transfer
//! - Lock minimums and timeouts

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

// ============================================================================
// Validation
// ============================================================================

/// Accept SEC1 secp256k1 keys: 33-byte compressed or 65-byte uncompressed.
pub fn validate_signer_pubkey(pubkey: &Binary) -> Result<(), ContractError> {
    match (pubkey.len(), pubkey.first()) {
        (33, Some(0x02 | 0x03)) | (65, Some(0x04)) => Ok(()),
        (len, _) => Err(ContractError::InvalidPubkey {
            reason: format!("expected 33 or 65 byte SEC1 key, got {} bytes", len),
        }),
    }
}

/// Timeouts must be non-zero and destroy's strictly longer than issue's.
pub fn validate_lock_params(config: &Config) -> Result<(), ContractError> {
    if config.issue_timeout_blocks == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "issue timeout must be at least one block".to_string(),
        });
    }
    if config.destroy_timeout_blocks <= config.issue_timeout_blocks {
        return Err(ContractError::InvalidConfig {
            reason: format!(
                "destroy timeout ({}) must exceed issue timeout ({})",
                config.destroy_timeout_blocks, config.issue_timeout_blocks
            ),
        });
    }
    Ok(())
}

// ============================================================================
// Circuit Breaker
// ============================================================================

/// Flip mint availability.
pub fn execute_circuit_breaker(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.mint_enabled = !config.mint_enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "circuit_braker")
        .add_attribute("mint_enabled", config.mint_enabled.to_string()))
}

// ============================================================================
// Ownership
// ============================================================================

/// Replace the owner and the mint-signing key in one step.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
    signer_pubkey: Binary,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let new_owner = deps.api.addr_validate(&new_owner)?;
    validate_signer_pubkey(&signer_pubkey)?;

    let previous = std::mem::replace(&mut config.owner, new_owner.clone());
    config.signer_pubkey = signer_pubkey;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", previous)
        .add_attribute("new_owner", new_owner))
}

// ============================================================================
// Lock Parameters
// ============================================================================

pub fn execute_update_lock_params(
    deps: DepsMut,
    info: MessageInfo,
    issue_min_amount: Option<Uint128>,
    destroy_min_amount: Option<Uint128>,
    issue_timeout_blocks: Option<u64>,
    destroy_timeout_blocks: Option<u64>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if let Some(min) = issue_min_amount {
        config.issue_min_amount = min;
    }
    if let Some(min) = destroy_min_amount {
        config.destroy_min_amount = min;
    }
    if let Some(blocks) = issue_timeout_blocks {
        config.issue_timeout_blocks = blocks;
    }
    if let Some(blocks) = destroy_timeout_blocks {
        config.destroy_timeout_blocks = blocks;
    }
    validate_lock_params(&config)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_lock_params")
        .add_attribute("issue_min_amount", config.issue_min_amount)
        .add_attribute("destroy_min_amount", config.destroy_min_amount)
        .add_attribute("issue_timeout_blocks", config.issue_timeout_blocks.to_string())
        .add_attribute(
            "destroy_timeout_blocks",
            config.destroy_timeout_blocks.to_string(),
        ))
}
