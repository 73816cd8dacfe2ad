//! Hash helpers: the mint authorization digest and 32-byte hash plumbing.
//!
//! # Mint digest layout
//! The owner authorizes a mint by signing (secp256k1, prehashed)
//! `keccak256(amount ‖ foreign_hash ‖ user)`:
//! - Bytes 0-31:  amount (uint256, big-endian, left-padded)
//! - Bytes 32-63: foreign transaction hash (32 bytes)
//! - Bytes 64-:   user address (UTF-8 bytes of the bech32 string)

use cosmwasm_std::{Binary, Uint128};
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Digest the owner signs to authorize `Mint { amount, foreign_hash }` for `user`.
pub fn mint_digest(amount: Uint128, foreign_hash: &[u8; 32], user: &str) -> [u8; 32] {
    let user_bytes = user.as_bytes();
    let mut data = vec![0u8; 64 + user_bytes.len()];

    // u128 (16 bytes) goes into bytes 16-31, bytes 0-15 remain zero
    data[16..32].copy_from_slice(&amount.u128().to_be_bytes());
    data[32..64].copy_from_slice(foreign_hash);
    data[64..].copy_from_slice(user_bytes);

    keccak256(&data)
}

/// Parse a 32-byte hash from Binary input.
pub fn parse_hash(input: &Binary) -> Result<[u8; 32], ContractError> {
    input
        .to_vec()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: input.len() })
}

/// Convert 32-byte hash to hex string (for attributes/errors)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
