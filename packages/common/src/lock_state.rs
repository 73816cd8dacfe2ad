//! Lock state codes shared between the contract and relayers.
//!
//! | state            | code |
//! |------------------|------|
//! | IssueLocked      | 0    |
//! | IssueUnlocked    | 1    |
//! | IssueFetched     | 2    |
//! | DestroyLocked    | 3    |
//! | DestroyUnlocked  | 4    |
//! | DestroyFetched   | 5    |

use std::fmt;

use cosmwasm_schema::cw_serde;

/// Which side of the bridge a lock moves value towards.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum LockDirection {
    /// Origin chain -> this chain (mint-by-lock).
    Issue,
    /// This chain -> origin chain (burn-by-lock).
    Destroy,
}

/// State transition reported in `locked_state` events.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum LockState {
    IssueLocked,
    IssueUnlocked,
    IssueFetched,
    DestroyLocked,
    DestroyUnlocked,
    DestroyFetched,
}

impl LockState {
    /// Numeric code carried on the wire.
    pub fn code(self) -> u8 {
        match self {
            LockState::IssueLocked => 0,
            LockState::IssueUnlocked => 1,
            LockState::IssueFetched => 2,
            LockState::DestroyLocked => 3,
            LockState::DestroyUnlocked => 4,
            LockState::DestroyFetched => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(LockState::IssueLocked),
            1 => Some(LockState::IssueUnlocked),
            2 => Some(LockState::IssueFetched),
            3 => Some(LockState::DestroyLocked),
            4 => Some(LockState::DestroyUnlocked),
            5 => Some(LockState::DestroyFetched),
            _ => None,
        }
    }

    pub fn direction(self) -> LockDirection {
        match self {
            LockState::IssueLocked | LockState::IssueUnlocked | LockState::IssueFetched => {
                LockDirection::Issue
            }
            _ => LockDirection::Destroy,
        }
    }

    /// Unlocked and fetched states are absorbing.
    pub fn is_terminal(self) -> bool {
        !matches!(self, LockState::IssueLocked | LockState::DestroyLocked)
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
