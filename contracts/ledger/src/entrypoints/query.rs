use bridge_common::error::ContractResult;
use cosmwasm_std::{Addr, Storage};

use crate::state::{EpochState, BALANCES, BLACKLIST, BLACKLISTERS, BURNERS, EPOCH_STATE, MINTERS, TOTAL_SUPPLY};

pub fn balance(storage: &dyn Storage, address: Addr) -> ContractResult<u64> {
    Ok(BALANCES.may_load(storage, &address)?.unwrap_or(0))
}

pub fn total_supply(storage: &dyn Storage) -> ContractResult<u64> {
    Ok(TOTAL_SUPPLY.load(storage)?)
}

pub fn is_blacklisted(storage: &dyn Storage, address: Addr) -> ContractResult<bool> {
    Ok(BLACKLIST.may_load(storage, &address)?.unwrap_or(false))
}

pub fn is_minter(storage: &dyn Storage, address: Addr) -> ContractResult<bool> {
    Ok(MINTERS.may_load(storage, &address)?.unwrap_or(false))
}

pub fn is_burner(storage: &dyn Storage, address: Addr) -> ContractResult<bool> {
    Ok(BURNERS.may_load(storage, &address)?.unwrap_or(false))
}

pub fn is_blacklister(storage: &dyn Storage, address: Addr) -> ContractResult<bool> {
    Ok(BLACKLISTERS.may_load(storage, &address)?.unwrap_or(false))
}

pub fn epoch_state(storage: &dyn Storage) -> ContractResult<EpochState> {
    Ok(EPOCH_STATE.load(storage)?)
}
