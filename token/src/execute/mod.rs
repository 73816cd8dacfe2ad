//! Execute handlers for the QLC token contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `token` - Transfer and allowance handlers
//! - `issue` - IssueLock, IssueUnlock, IssueFetch (origin -> local)
//! - `destroy` - DestroyLock, DestroyUnlock, DestroyFetch (local -> origin)
//! - `bridge` - Signature-authorized Mint and Burn
//! - `admin` - Circuit breaker, ownership transfer and lock parameters

mod admin;
mod bridge;
mod destroy;
mod issue;
mod token;

pub use admin::*;
pub use bridge::*;
pub use destroy::*;
pub use issue::*;
pub use token::*;
