//! QLC Token Contract - Cross-Chain Bridging Token for CosmWasm
//!
//! A fungible-token ledger extended with hash-time-locked transfers that move
//! value between this chain and the QLC origin chain.
//!
//! # Issue Flow (origin -> local)
//! 1. Owner observes a lock on the origin chain and calls `IssueLock`,
//!    minting the amount into the contract's escrow
//! 2. The claimant reveals the origin preimage with `IssueUnlock` and
//!    receives the escrowed funds
//! 3. If nobody reveals in time, the owner burns the escrow with `IssueFetch`
//!
//! # Destroy Flow (local -> origin)
//! 1. Holder reserves funds with `DestroyLock` (owner named as executor)
//! 2. Owner confirms the origin-chain credit with `DestroyUnlock`, burning
//!    the reserved funds
//! 3. If the owner never confirms, the holder releases them with `DestroyFetch`
//!
//! # Security
//! - One commitment-hash namespace for both flows; hashes are never reusable
//! - Block-height timeouts, destroy longer than issue
//! - Signature-authorized direct minting behind an owner circuit breaker
//! - Locked funds are never spendable

pub mod address_codec;
pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod ledger;
pub mod lock_registry;
pub mod msg;
pub mod outbox;
mod query;
pub mod state;

pub use crate::address_codec::QlcAddress;
pub use crate::error::ContractError;
pub use crate::hash::{keccak256, mint_digest};
