use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::{Addr, Order, QuerierWrapper, Storage};
use cw_storage_plus::Bound;

use crate::model;
use cosmwasm_std::Binary;

use crate::state::{Config, Locker, APPROVED_LOCKERS, CONFIG, LOCKERS, LOCKER_TARGET_ADDRESS};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

pub fn locker(storage: &dyn Storage, target: Addr) -> ContractResult<Locker> {
    LOCKERS
        .may_load(storage, &target)?
        .ok_or_else(|| ContractError::State(format!("no locker registered at {target}")))
}

pub fn is_locker_approved(storage: &dyn Storage, target: Addr) -> ContractResult<bool> {
    Ok(APPROVED_LOCKERS.may_load(storage, &target)?.unwrap_or(false))
}

pub fn list_lockers(
    storage: &dyn Storage,
    start_after: Option<Addr>,
    limit: Option<u32>,
) -> ContractResult<Vec<Addr>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(|addr| Bound::exclusive(addr));

    let targets: Vec<Addr> = LOCKERS
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<Result<_, _>>()?;
    Ok(targets)
}

pub fn locker_health(storage: &dyn Storage, querier: &QuerierWrapper, target: Addr) -> ContractResult<u64> {
    let config = CONFIG.load(storage)?;
    let locker = locker(storage, target)?;
    let price = bridge_common::oracle::query_equivalent_output_amount(
        querier,
        &config.oracle_addr,
        10u128.pow(18),
        18,
        8,
        config.native_denom.clone(),
        "wbtc",
    )?;
    let collateral_value = model::collateral_value_btc(locker.native_token_locked_amount, price)?;
    let health = model::health_factor(collateral_value, locker.net_minted, config.liquidation_ratio_bps)
        .map(|hf| hf.min(u64::MAX as u128) as u64)
        .unwrap_or(u64::MAX);
    Ok(health)
}

pub fn capacity(storage: &dyn Storage, querier: &QuerierWrapper, target: Addr) -> ContractResult<u64> {
    let config = CONFIG.load(storage)?;
    let locker = locker(storage, target)?;
    let price = bridge_common::oracle::query_equivalent_output_amount(
        querier,
        &config.oracle_addr,
        10u128.pow(18),
        18,
        8,
        config.native_denom.clone(),
        "wbtc",
    )?;
    let collateral_value = model::collateral_value_btc(locker.native_token_locked_amount, price)?;
    model::capacity(collateral_value, locker.net_minted, config.collateral_ratio_bps)
}

pub fn config(storage: &dyn Storage) -> ContractResult<Config> {
    Ok(CONFIG.load(storage)?)
}

pub fn locker_target_for_script(storage: &dyn Storage, locking_script: Binary) -> ContractResult<Addr> {
    LOCKER_TARGET_ADDRESS
        .may_load(storage, locking_script.as_slice())?
        .ok_or_else(|| ContractError::State("locking script not registered".into()))
}
