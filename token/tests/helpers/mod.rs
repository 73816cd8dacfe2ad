//! Shared cw-multi-test setup for the QLC token integration tests.

#![allow(dead_code)]

use common::commitment_hash;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::BalanceResponse;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};

use qlc_token::msg::{
    ExecuteMsg, HashTimerResponse, InstantiateMsg, LockedBalanceResponse, QueryMsg,
    TotalSupplyResponse,
};
use qlc_token::{mint_digest, ContractError};

pub const ISSUE_TIMEOUT: u64 = 10;
pub const DESTROY_TIMEOUT: u64 = 20;
pub const MIN_AMOUNT: u128 = 1_000;

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        qlc_token::contract::execute,
        qlc_token::contract::instantiate,
        qlc_token::contract::query,
    )
    .with_migrate(qlc_token::contract::migrate);
    Box::new(contract)
}

pub struct TestEnv {
    pub app: App,
    pub contract_addr: Addr,
    pub owner: Addr,
    pub alice: Addr,
    pub bob: Addr,
    pub signer: SigningKey,
}

pub fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_slice(&[seed; 32]).unwrap()
}

pub fn pubkey(key: &SigningKey) -> Binary {
    Binary::from(key.verifying_key().to_encoded_point(true).as_bytes().to_vec())
}

pub fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let alice = Addr::unchecked("terra1alice");
    let bob = Addr::unchecked("terra1bob");
    let signer = signing_key(7);

    let code_id = app.store_code(contract_token());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                name: "QLC Token".to_string(),
                symbol: "qlc".to_string(),
                decimals: 8,
                owner: owner.to_string(),
                signer_pubkey: pubkey(&signer),
                issue_min_amount: Uint128::new(MIN_AMOUNT),
                destroy_min_amount: Uint128::new(MIN_AMOUNT),
                issue_timeout_blocks: Some(ISSUE_TIMEOUT),
                destroy_timeout_blocks: Some(DESTROY_TIMEOUT),
            },
            &[],
            "qlc-token",
            Some(owner.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        contract_addr,
        owner,
        alice,
        bob,
        signer,
    }
}

/// Origin preimage derived from `seed` and its commitment hash.
pub fn preimage(seed: u8) -> (Binary, Binary) {
    let origin = [seed; 32];
    let r_hash = commitment_hash(&origin);
    (Binary::from(origin.to_vec()), Binary::from(r_hash.to_vec()))
}

pub fn sign_mint(key: &SigningKey, amount: u128, foreign_hash: &[u8; 32], user: &Addr) -> Binary {
    let digest = mint_digest(Uint128::new(amount), foreign_hash, user.as_str());
    let signature: Signature = key.sign_prehash(&digest).unwrap();
    Binary::from(signature.to_bytes().to_vec())
}

pub fn advance_blocks(env: &mut TestEnv, blocks: u64) {
    env.app.update_block(|block| {
        block.height += blocks;
    });
}

pub fn height(env: &TestEnv) -> u64 {
    env.app.block_info().height
}

pub fn execute(env: &mut TestEnv, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
    env.app
        .execute_contract(sender.clone(), env.contract_addr.clone(), msg, &[])
}

pub fn assert_error(res: anyhow::Result<AppResponse>, expected: ContractError) {
    let err = res.expect_err("expected the call to fail");
    assert_eq!(err.root_cause().to_string(), expected.to_string());
}

pub fn event_attr(res: &AppResponse, event_type: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == event_type)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

// ============================================================================
// Flow shortcuts
// ============================================================================

pub fn issue_lock(env: &mut TestEnv, r_hash: &Binary, amount: u128) -> anyhow::Result<AppResponse> {
    let owner = env.owner.clone();
    execute(
        env,
        &owner,
        &ExecuteMsg::IssueLock {
            r_hash: r_hash.clone(),
            amount: Uint128::new(amount),
        },
    )
}

pub fn issue_unlock(
    env: &mut TestEnv,
    sender: &Addr,
    r_hash: &Binary,
    origin: &Binary,
) -> anyhow::Result<AppResponse> {
    execute(
        env,
        sender,
        &ExecuteMsg::IssueUnlock {
            r_hash: r_hash.clone(),
            origin: origin.clone(),
        },
    )
}

pub fn destroy_lock(
    env: &mut TestEnv,
    sender: &Addr,
    r_hash: &Binary,
    amount: u128,
) -> anyhow::Result<AppResponse> {
    let executor = env.owner.to_string();
    execute(
        env,
        sender,
        &ExecuteMsg::DestroyLock {
            r_hash: r_hash.clone(),
            amount: Uint128::new(amount),
            executor,
        },
    )
}

/// Credit `account` through a full issue cycle (lock + unlock).
pub fn fund(env: &mut TestEnv, account: &Addr, amount: u128, seed: u8) {
    let (origin, r_hash) = preimage(seed);
    issue_lock(env, &r_hash, amount).unwrap();
    issue_unlock(env, account, &r_hash, &origin).unwrap();
}

// ============================================================================
// Queries
// ============================================================================

pub fn balance(env: &TestEnv, address: &Addr) -> Uint128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.contract_addr,
            &QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

pub fn locked(env: &TestEnv, address: &Addr) -> Uint128 {
    let res: LockedBalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.contract_addr,
            &QueryMsg::LockedBalance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.locked
}

pub fn total_supply(env: &TestEnv) -> Uint128 {
    let res: TotalSupplyResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.contract_addr, &QueryMsg::TotalSupply {})
        .unwrap();
    res.total_supply
}

pub fn hash_timer(env: &TestEnv, r_hash: &Binary) -> HashTimerResponse {
    env.app
        .wrap()
        .query_wasm_smart(
            &env.contract_addr,
            &QueryMsg::HashTimer {
                r_hash: r_hash.clone(),
            },
        )
        .unwrap()
}
