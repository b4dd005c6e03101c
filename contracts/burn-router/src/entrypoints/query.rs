use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::{Addr, Binary, Order, Storage};
use cw_storage_plus::Bound;

use crate::state::{BurnRequest, Config, BURN_REQUESTS, CONFIG, IS_USED_AS_BURN_PROOF};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

pub fn burn_request(storage: &dyn Storage, locker: Addr, index: u64) -> ContractResult<BurnRequest> {
    BURN_REQUESTS
        .may_load(storage, (&locker, index))?
        .ok_or_else(|| ContractError::State(format!("no burn request {index} for locker {locker}")))
}

pub fn list_burn_requests(
    storage: &dyn Storage,
    locker: Addr,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> ContractResult<Vec<BurnRequest>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    BURN_REQUESTS
        .prefix(&locker)
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, request)| request).map_err(ContractError::from))
        .collect()
}

pub fn is_used_as_burn_proof(storage: &dyn Storage, tx_id: Binary) -> ContractResult<bool> {
    Ok(IS_USED_AS_BURN_PROOF.may_load(storage, tx_id.as_slice())?.unwrap_or(false))
}

pub fn config(storage: &dyn Storage) -> ContractResult<Config> {
    Ok(CONFIG.load(storage)?)
}
