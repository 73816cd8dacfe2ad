//! Message types for the QLC token contract
//!
//! Wire names of the destroy flow and the circuit breaker keep the spelling
//! relayers already send (`destory_*`, `circuit_braker`).

use common::LockState;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::EventRecord;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Token name (3-50 characters)
    pub name: String,
    /// Token symbol (3-12 letters or '-')
    pub symbol: String,
    /// 8 for the primary token, 0 for the gas-equivalent variant
    pub decimals: u8,
    /// Owner address (relayer role)
    pub owner: String,
    /// SEC1 secp256k1 public key (33 or 65 bytes) that signs mint authorizations
    pub signer_pubkey: Binary,
    /// Minimum issue lock amount
    pub issue_min_amount: Uint128,
    /// Minimum destroy lock amount
    pub destroy_min_amount: Uint128,
    /// Issue fetch timeout in blocks (default 10)
    pub issue_timeout_blocks: Option<u64>,
    /// Destroy fetch timeout in blocks (default 20, must exceed the issue timeout)
    pub destroy_timeout_blocks: Option<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Ledger
    // ========================================================================
    /// Move spendable funds to `recipient`
    Transfer { recipient: String, amount: Uint128 },

    /// Set (overwrite) the allowance of `spender` over the caller's funds
    Approve { spender: String, amount: Uint128 },

    /// Raise an allowance
    IncreaseAllowance { spender: String, amount: Uint128 },

    /// Lower an allowance (saturates at zero)
    DecreaseAllowance { spender: String, amount: Uint128 },

    /// Move `owner`'s spendable funds using the caller's allowance
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Issue Flow (origin -> local)
    // ========================================================================
    /// Lock an issue and mint `amount` into escrow
    ///
    /// Authorization: Owner only
    IssueLock { r_hash: Binary, amount: Uint128 },

    /// Reveal the origin preimage and claim the escrowed amount
    ///
    /// Authorization: Anyone holding the preimage
    IssueUnlock { r_hash: Binary, origin: Binary },

    /// Reclaim (burn) an expired issue lock
    ///
    /// Authorization: Owner only
    IssueFetch { r_hash: Binary },

    // ========================================================================
    // Destroy Flow (local -> origin)
    // ========================================================================
    /// Reserve `amount` of the caller's funds for burning
    ///
    /// Authorization: The funds' holder, with `executor` naming the owner
    #[serde(rename = "destory_lock")]
    DestroyLock {
        r_hash: Binary,
        amount: Uint128,
        executor: String,
    },

    /// Confirm the burn once the origin chain credit is observed
    ///
    /// Authorization: Owner only
    #[serde(rename = "destory_unlock")]
    DestroyUnlock { r_hash: Binary, origin: Binary },

    /// Release an expired reservation back to the holder
    ///
    /// Authorization: The locked account only
    #[serde(rename = "destory_fetch")]
    DestroyFetch { r_hash: Binary },

    // ========================================================================
    // Direct Bridge
    // ========================================================================
    /// Mint against an owner signature over (amount, foreign_hash, caller)
    Mint {
        amount: Uint128,
        foreign_hash: Binary,
        signature: Binary,
    },

    /// Burn funds towards an origin-chain address
    Burn {
        foreign_address: String,
        amount: Uint128,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Toggle mint availability
    ///
    /// Authorization: Owner only
    #[serde(rename = "circuit_braker")]
    CircuitBreaker {},

    /// Hand the owner role and the mint-signing key to a new holder
    ///
    /// Authorization: Owner only
    TransferOwnership {
        new_owner: String,
        signer_pubkey: Binary,
    },

    /// Update lock minimums and timeouts (unset fields keep their value)
    ///
    /// Authorization: Owner only
    UpdateLockParams {
        issue_min_amount: Option<Uint128>,
        destroy_min_amount: Option<Uint128>,
        issue_timeout_blocks: Option<u64>,
        destroy_timeout_blocks: Option<u64>,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Timer record for a commitment hash (`lock_height == 0` when absent)
    #[returns(HashTimerResponse)]
    HashTimer { r_hash: Binary },

    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(LockedBalanceResponse)]
    LockedBalance { address: String },

    #[returns(TotalSupplyResponse)]
    TotalSupply {},

    /// Name, symbol, decimals and supply
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(OwnerResponse)]
    Owner {},

    #[returns(ConfigResponse)]
    Config {},

    #[returns(ForeignHashUsedResponse)]
    ForeignHashUsed { foreign_hash: Binary },

    /// Outbox page, ordered by sequence number
    #[returns(EventsResponse)]
    Events {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Digest the owner must sign to authorize a mint for `user`
    #[returns(MintDigestResponse)]
    MintDigest {
        amount: Uint128,
        user: String,
        foreign_hash: Binary,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct HashTimerResponse {
    pub r_hash: Binary,
    pub origin: Binary,
    pub amount: Uint128,
    pub account: Option<Addr>,
    pub lock_height: u64,
    pub unlock_height: u64,
    /// First height at which the lock can be fetched (0 when absent)
    pub fetchable_at: u64,
    pub is_issue: bool,
    pub state: Option<LockState>,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub locked: Uint128,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
    pub signer_pubkey: Binary,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub mint_enabled: bool,
    pub issue_min_amount: Uint128,
    pub destroy_min_amount: Uint128,
    pub issue_timeout_blocks: u64,
    pub destroy_timeout_blocks: u64,
}

#[cw_serde]
pub struct ForeignHashUsedResponse {
    pub used: bool,
    /// Height of the mint that consumed the hash
    pub minted_at: Option<u64>,
}

#[cw_serde]
pub struct EventsResponse {
    pub events: Vec<EventRecord>,
}

#[cw_serde]
pub struct MintDigestResponse {
    pub digest: Binary,
}
