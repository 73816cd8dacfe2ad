//! Append-only event outbox.
//!
//! Relayers cannot read contract memory from the origin chain, so every
//! state transition they act on is recorded under a monotonically increasing
//! sequence number and paged through with `QueryMsg::Events`.

use cosmwasm_std::{Env, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::state::{BridgeEvent, EventRecord, EVENTS, EVENT_SEQ};

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 50;

/// Record `event` at the current height. Returns its sequence number.
///
/// The counter is created by instantiate (or backfilled by migrate).
pub fn append(storage: &mut dyn Storage, env: &Env, event: BridgeEvent) -> StdResult<u64> {
    let seq = EVENT_SEQ.load(storage)?;
    EVENTS.save(
        storage,
        seq,
        &EventRecord {
            seq,
            height: env.block.height,
            event,
        },
    )?;
    EVENT_SEQ.save(storage, &(seq + 1))?;
    Ok(seq)
}

/// Records after `start_after` in sequence order.
pub fn page(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<EventRecord>> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    EVENTS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect()
}
