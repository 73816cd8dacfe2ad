//! Commitment hashing for hash-time-locked transfers.
//!
//! A lock is keyed by `r_hash = sha256(origin)`, where `origin` is the 32-byte
//! secret revealed at unlock time. Both chains of the bridge compute the same
//! digest, so the preimage revealed on one side unlocks the other.

use sha2::{Digest, Sha256};

/// Length of both the commitment hash and its origin preimage.
pub const HASH_LEN: usize = 32;

/// Compute the commitment hash of an origin preimage.
pub fn commitment_hash(origin: &[u8; HASH_LEN]) -> [u8; HASH_LEN] {
    let digest = Sha256::digest(origin);
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&digest);
    out
}

/// Returns true when `origin` is the preimage of `r_hash`.
pub fn verify_commitment(r_hash: &[u8; HASH_LEN], origin: &[u8; HASH_LEN]) -> bool {
    commitment_hash(origin) == *r_hash
}
