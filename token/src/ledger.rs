//! Balance ledger: balances, locked reservations, allowances and supply.
//!
//! `balance` always includes the locked part; only `balance - locked` is
//! spendable. Arithmetic never wraps: additions fail with `Overflow`,
//! subtractions with `Underflow`.

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{ALLOWANCES, BALANCES, LOCKED_BALANCES, TOKEN_INFO};

pub fn checked_add(a: Uint128, b: Uint128) -> Result<Uint128, ContractError> {
    a.checked_add(b).map_err(|_| ContractError::Overflow)
}

pub fn checked_sub(a: Uint128, b: Uint128) -> Result<Uint128, ContractError> {
    a.checked_sub(b).map_err(|_| ContractError::Underflow)
}

pub fn balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

pub fn locked_balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(LOCKED_BALANCES
        .may_load(storage, account)?
        .unwrap_or_default())
}

pub fn allowance_of(storage: &dyn Storage, owner: &Addr, spender: &Addr) -> StdResult<Uint128> {
    Ok(ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default())
}

/// Spendable part of an account's balance.
pub fn available_of(storage: &dyn Storage, account: &Addr) -> Result<Uint128, ContractError> {
    checked_sub(
        balance_of(storage, account)?,
        locked_balance_of(storage, account)?,
    )
}

fn save_balance(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        BALANCES.remove(storage, account);
    } else {
        BALANCES.save(storage, account, &amount)?;
    }
    Ok(())
}

fn save_locked(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        LOCKED_BALANCES.remove(storage, account);
    } else {
        LOCKED_BALANCES.save(storage, account, &amount)?;
    }
    Ok(())
}

fn credit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let balance = checked_add(balance_of(storage, account)?, amount)?;
    save_balance(storage, account, balance)
}

/// Debit from the spendable part only.
fn debit_available(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let available = available_of(storage, account)?;
    if amount > available {
        return Err(ContractError::InsufficientFunds {
            available,
            required: amount,
        });
    }
    let balance = checked_sub(balance_of(storage, account)?, amount)?;
    save_balance(storage, account, balance)
}

fn adjust_supply(
    storage: &mut dyn Storage,
    f: impl FnOnce(Uint128) -> Result<Uint128, ContractError>,
) -> Result<Uint128, ContractError> {
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = f(info.total_supply)?;
    TOKEN_INFO.save(storage, &info)?;
    Ok(info.total_supply)
}

// ============================================================================
// Transfers
// ============================================================================

pub fn transfer(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    debit_available(storage, from, amount)?;
    credit(storage, to, amount)
}

/// Overwrites (not increments) the allowance.
pub fn set_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
    } else {
        ALLOWANCES.save(storage, (owner, spender), &amount)?;
    }
    Ok(())
}

pub fn spend_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let allowance = allowance_of(storage, owner, spender)?;
    if amount > allowance {
        return Err(ContractError::InsufficientAllowance {
            allowance,
            required: amount,
        });
    }
    let remaining = allowance - amount;
    set_allowance(storage, owner, spender, remaining)?;
    Ok(remaining)
}

// ============================================================================
// Supply
// ============================================================================

/// Credit `to` and grow supply by `amount`. Returns the new supply.
pub fn mint(
    storage: &mut dyn Storage,
    to: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let supply = adjust_supply(storage, |supply| checked_add(supply, amount))?;
    credit(storage, to, amount)?;
    Ok(supply)
}

/// Debit the spendable balance of `from` and shrink supply. Returns the new supply.
pub fn burn(
    storage: &mut dyn Storage,
    from: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    debit_available(storage, from, amount)?;
    adjust_supply(storage, |supply| checked_sub(supply, amount))
}

// ============================================================================
// Reservations
// ============================================================================

/// Reserve `amount` of the spendable balance.
pub fn lock(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let available = available_of(storage, account)?;
    if amount > available {
        return Err(ContractError::InsufficientAvailable {
            available,
            required: amount,
        });
    }
    let locked = checked_add(locked_balance_of(storage, account)?, amount)?;
    save_locked(storage, account, locked)
}

/// Drop a reservation without touching balance or supply.
pub fn release(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let locked = checked_sub(locked_balance_of(storage, account)?, amount)?;
    save_locked(storage, account, locked)
}

/// Consume a reservation: balance, locked balance and supply all shrink.
pub fn burn_locked(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    release(storage, account, amount)?;
    let balance = checked_sub(balance_of(storage, account)?, amount)?;
    save_balance(storage, account, balance)?;
    adjust_supply(storage, |supply| checked_sub(supply, amount))
}
