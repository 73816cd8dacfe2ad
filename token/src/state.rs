//! State definitions for the QLC token contract
//!
//! Storage is additive-only across contract versions: new items may be
//! introduced (and backfilled in `migrate`), existing keys never change shape.

use common::{LockDirection, LockState};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner: the relayer role allowed to lock issues and confirm destroys
    pub owner: Addr,
    /// SEC1 secp256k1 key whose signatures authorize `Mint`
    pub signer_pubkey: Binary,
    /// Circuit breaker state for the mint path
    pub mint_enabled: bool,
    /// Floor for `IssueLock` amounts
    pub issue_min_amount: Uint128,
    /// Floor for `DestroyLock` amounts
    pub destroy_min_amount: Uint128,
    /// Blocks after lock height before an issue lock can be fetched
    pub issue_timeout_blocks: u64,
    /// Blocks after lock height before a destroy lock can be fetched
    pub destroy_timeout_blocks: u64,
}

/// Token metadata and supply
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

// ============================================================================
// Lock Registry
// ============================================================================

/// Timer record for one commitment hash.
///
/// Created by a lock, resolved exactly once by an unlock or a fetch, and never
/// deleted: a resolved record still blocks reuse of its hash.
#[cw_serde]
pub struct HashTimer {
    /// Revealed preimage (all zero until unlocked; stays zero when fetched)
    pub origin: [u8; 32],
    /// Locked value
    pub amount: Uint128,
    /// Local counterparty: the claimant of an issue, the reserving account of a destroy
    pub account: Option<Addr>,
    /// Block height at creation
    pub lock_height: u64,
    /// Block height at unlock or fetch (0 while pending)
    pub unlock_height: u64,
    /// Fetch timeout in force when the lock was created
    pub timeout_blocks: u64,
    pub direction: LockDirection,
    pub state: LockState,
}

impl HashTimer {
    pub fn is_issue(&self) -> bool {
        self.direction == LockDirection::Issue
    }

    /// First height at which the lock can be fetched.
    pub fn fetchable_at(&self) -> u64 {
        self.lock_height.saturating_add(self.timeout_blocks)
    }

    pub fn is_resolved(&self) -> bool {
        self.unlock_height != 0 || self.state.is_terminal()
    }
}

// ============================================================================
// Event Outbox
// ============================================================================

/// Bridge event as recorded in the outbox.
#[cw_serde]
pub enum BridgeEvent {
    LockedState {
        r_hash: Binary,
        state: LockState,
    },
    Mint {
        user: Addr,
        foreign_hash: Binary,
        amount: Uint128,
    },
    Burn {
        user: Addr,
        foreign_address: String,
        amount: Uint128,
    },
}

/// Outbox entry, ordered by `seq`
#[cw_serde]
pub struct EventRecord {
    pub seq: u64,
    pub height: u64,
    pub event: BridgeEvent,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:qlc-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default issue fetch timeout in blocks
pub const DEFAULT_ISSUE_TIMEOUT_BLOCKS: u64 = 10;

/// Default destroy fetch timeout in blocks (must exceed the issue timeout)
pub const DEFAULT_DESTROY_TIMEOUT_BLOCKS: u64 = 20;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Key: account, Value: balance (includes the locked part)
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Key: account, Value: amount reserved by pending destroy locks
pub const LOCKED_BALANCES: Map<&Addr, Uint128> = Map::new("locked_balances");

/// Key: (owner, spender), Value: allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

/// Single namespace for issue and destroy locks.
/// Key: 32-byte commitment hash, Value: HashTimer
pub const HASH_TIMERS: Map<&[u8], HashTimer> = Map::new("hash_timers");

/// Foreign transaction hashes already minted.
/// Key: 32-byte foreign hash, Value: block height of the mint
pub const MINTED_FOREIGN_HASHES: Map<&[u8], u64> = Map::new("minted_foreign_hashes");

/// Next outbox sequence number
pub const EVENT_SEQ: Item<u64> = Item::new("event_seq");

/// Key: sequence number, Value: EventRecord
pub const EVENTS: Map<u64, EventRecord> = Map::new("events");
