//! Error types for the QLC token contract
//!
//! Every failure is a distinct variant so relayers can branch on the cause
//! (retry once the height advances on `NotTimedOut`, abandon on `Mismatch`).

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Wrong executor: {executor} is not the contract owner")]
    WrongExecutor { executor: String },

    #[error("Wrong caller: only the locked account can fetch this lock")]
    WrongCaller,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Commitment hash must not be zero")]
    ZeroHash,

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Amount too small: minimum is {min_amount}")]
    AmountTooSmall { min_amount: Uint128 },

    #[error("Invalid foreign address: {reason}")]
    InvalidForeignAddress { reason: String },

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    #[error("Invalid signer public key: {reason}")]
    InvalidPubkey { reason: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    // ========================================================================
    // Lock State Errors
    // ========================================================================

    #[error("Duplicate commitment hash: {r_hash}")]
    Duplicate { r_hash: String },

    #[error("No lock found for hash {r_hash}")]
    NotFound { r_hash: String },

    #[error("Lock already unlocked at height {unlock_height}")]
    AlreadyUnlocked { unlock_height: u64 },

    #[error("Origin does not match commitment hash")]
    Mismatch,

    #[error("Lock belongs to the {actual} flow")]
    WrongDirection { actual: String },

    #[error("Lock not timed out: fetchable from height {fetchable_at}")]
    NotTimedOut { fetchable_at: u64 },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds {
        available: Uint128,
        required: Uint128,
    },

    #[error("Insufficient available balance to lock: available {available}, required {required}")]
    InsufficientAvailable {
        available: Uint128,
        required: Uint128,
    },

    #[error("Insufficient allowance: allowed {allowance}, required {required}")]
    InsufficientAllowance {
        allowance: Uint128,
        required: Uint128,
    },

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Arithmetic underflow")]
    Underflow,

    // ========================================================================
    // Bridge Gate Errors
    // ========================================================================

    #[error("Minting is disabled by the circuit breaker")]
    MintDisabled,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Foreign hash already minted: {foreign_hash}")]
    ForeignHashUsed { foreign_hash: String },
}
