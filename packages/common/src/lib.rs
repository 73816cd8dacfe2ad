//! Common - Shared Types for the QLC Token Contract and its Relayers
//!
//! Relayers watching this chain and the origin chain need the same view of
//! the lock state machine as the contract: the numeric state codes carried in
//! `locked_state` events, and the commitment hash that binds an `r_hash` to
//! its origin preimage.

pub mod commitment;
pub mod lock_state;

pub use commitment::{commitment_hash, verify_commitment, HASH_LEN};
pub use lock_state::{LockDirection, LockState};
