use bridge_common::bitcoin_script::ScriptType;
use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, Addr, Binary, QuerierWrapper, Reply, Response, Storage};
use cw_storage_plus::Item;

use crate::state::{BurnRequest, BURN_REQUESTS, BURN_REQUEST_COUNT, CONFIG, REENTRANCY_GUARD};

pub const CC_BURN_REPLY_ID: u64 = 1;

#[cw_serde]
pub struct PendingCcBurn {
    pub sender: Addr,
    pub user_script: Binary,
    pub script_type: ScriptType,
    pub locker_target: Addr,
    /// Pre-fee amount the caller surrendered; stored verbatim on the
    /// resulting `BurnRequest` (§4.3's `amount` field).
    pub amount: u64,
    pub remaining: u64,
}

pub const PENDING_CC_BURN: Item<PendingCcBurn> = Item::new("pending_cc_burn");

/// Finishes `ccBurn` once `LockerRegistry.burn`'s reply reports
/// `afterLockerFee`. §4.3 step 6: `burntAmount = afterLockerFee *
/// (remaining - bitcoinFee) / remaining`.
pub fn handle_cc_burn_reply(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    reply: Reply,
) -> ContractResult<Response> {
    let pending = PENDING_CC_BURN.load(storage)?;
    PENDING_CC_BURN.remove(storage);
    REENTRANCY_GUARD.save(storage, &false)?;

    let data = reply
        .result
        .into_result()
        .map_err(ContractError::External)?
        .data
        .ok_or_else(|| ContractError::External("locker-registry burn reply carried no data".into()))?;
    let after_locker_fee: u64 = from_json(data)?;

    let config = CONFIG.load(storage)?;
    let burnt_amount = bridge_common::math::mul_div_floor(
        after_locker_fee,
        pending.remaining - config.bitcoin_fee,
        pending.remaining,
    )?;

    let next_index = BURN_REQUEST_COUNT
        .may_load(storage, &pending.locker_target)?
        .unwrap_or(0);
    BURN_REQUEST_COUNT.save(storage, &pending.locker_target, &(next_index + 1))?;

    // §3/§4.3 step 7: the deadline is measured against Bitcoin block height,
    // not the target chain's, since it's later compared to relay-reported
    // heights in `burn_proof`/`dispute_burn`.
    let last_submitted_height = bridge_common::relay::query_last_submitted_height(querier, &config.relay_addr)?;
    let deadline = last_submitted_height + config.transfer_deadline;
    BURN_REQUESTS.save(
        storage,
        (&pending.locker_target, next_index),
        &BurnRequest {
            amount: pending.amount,
            burnt_amount,
            sender: pending.sender.clone(),
            user_script: pending.user_script,
            script_type: pending.script_type,
            deadline,
            is_transferred: false,
            request_id_of_locker: next_index,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "cc_burn")
        .add_attribute("sender", pending.sender)
        .add_attribute("locker", pending.locker_target)
        .add_attribute("request_id_of_locker", next_index.to_string())
        .add_attribute("burnt_amount", burnt_amount.to_string())
        .add_attribute("deadline", deadline.to_string()))
}
