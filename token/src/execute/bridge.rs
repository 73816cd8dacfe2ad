//! Direct bridge handlers: signature-authorized Mint and address-checked Burn.

use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::address_codec::QlcAddress;
use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, mint_digest, parse_hash};
use crate::ledger;
use crate::outbox;
use crate::state::{BridgeEvent, CONFIG, MINTED_FOREIGN_HASHES};

// ============================================================================
// Mint - Anyone with an owner signature
// ============================================================================

/// Mint `amount` to the caller against an owner-signed foreign transaction.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    foreign_hash: Binary,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.mint_enabled {
        return Err(ContractError::MintDisabled);
    }

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let foreign_hash = parse_hash(&foreign_hash)?;

    let digest = mint_digest(amount, &foreign_hash, info.sender.as_str());
    let verified = deps
        .api
        .secp256k1_verify(&digest, &signature, &config.signer_pubkey)
        .unwrap_or(false);
    if !verified {
        return Err(ContractError::InvalidSignature);
    }

    if MINTED_FOREIGN_HASHES.has(deps.storage, &foreign_hash) {
        return Err(ContractError::ForeignHashUsed {
            foreign_hash: bytes32_to_hex(&foreign_hash),
        });
    }
    MINTED_FOREIGN_HASHES.save(deps.storage, &foreign_hash, &env.block.height)?;

    let total_supply = ledger::mint(deps.storage, &info.sender, amount)?;

    let seq = outbox::append(
        deps.storage,
        &env,
        BridgeEvent::Mint {
            user: info.sender.clone(),
            foreign_hash: Binary::from(foreign_hash.to_vec()),
            amount,
        },
    )?;

    Ok(Response::new()
        .add_event(
            Event::new("mint")
                .add_attribute("user", info.sender.clone())
                .add_attribute("foreign_hash", bytes32_to_hex(&foreign_hash))
                .add_attribute("amount", amount)
                .add_attribute("seq", seq.to_string()),
        )
        .add_attribute("action", "mint")
        .add_attribute("user", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("total_supply", total_supply))
}

// ============================================================================
// Burn - Anyone
// ============================================================================

/// Burn the caller's spendable funds towards an origin-chain address.
pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    foreign_address: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let destination = QlcAddress::parse(&foreign_address)?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let total_supply = ledger::burn(deps.storage, &info.sender, amount)?;

    let seq = outbox::append(
        deps.storage,
        &env,
        BridgeEvent::Burn {
            user: info.sender.clone(),
            foreign_address: foreign_address.clone(),
            amount,
        },
    )?;

    Ok(Response::new()
        .add_event(
            Event::new("burn")
                .add_attribute("user", info.sender.clone())
                .add_attribute("foreign_address", foreign_address)
                .add_attribute(
                    "foreign_public_key",
                    bytes32_to_hex(destination.public_key()),
                )
                .add_attribute("amount", amount)
                .add_attribute("seq", seq.to_string()),
        )
        .add_attribute("action", "burn")
        .add_attribute("user", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("total_supply", total_supply))
}
