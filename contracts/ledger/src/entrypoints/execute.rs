use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::{Addr, Env, MessageInfo, Response, Storage};

use crate::state::{
    Config, EpochState, BALANCES, BLACKLIST, BLACKLISTERS, BURNERS, CONFIG, EPOCH_STATE, MINTERS,
    TOTAL_SUPPLY,
};

fn is_blacklisted(storage: &dyn Storage, addr: &Addr) -> bool {
    BLACKLIST.may_load(storage, addr).unwrap_or(None).unwrap_or(false)
}

fn require_not_blacklisted(storage: &dyn Storage, addr: &Addr) -> ContractResult<()> {
    if is_blacklisted(storage, addr) {
        return Err(ContractError::State(format!("{addr} is blacklisted")));
    }
    Ok(())
}

fn require_role(storage: &dyn Storage, map: &cw_storage_plus::Map<&Addr, bool>, addr: &Addr) -> ContractResult<()> {
    let has_role = map.may_load(storage, addr)?.unwrap_or(false);
    if !has_role {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

fn require_owner(storage: &dyn Storage, info: &MessageInfo) -> ContractResult<()> {
    let config = CONFIG.load(storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

fn add_balance(storage: &mut dyn Storage, addr: &Addr, amount: u64) -> ContractResult<()> {
    let balance = BALANCES.may_load(storage, addr)?.unwrap_or(0);
    BALANCES.save(
        storage,
        addr,
        &balance
            .checked_add(amount)
            .ok_or_else(|| ContractError::Validation("balance overflow".into()))?,
    )?;
    Ok(())
}

fn sub_balance(storage: &mut dyn Storage, addr: &Addr, amount: u64) -> ContractResult<()> {
    let balance = BALANCES.may_load(storage, addr)?.unwrap_or(0);
    let new_balance = balance
        .checked_sub(amount)
        .ok_or_else(|| ContractError::Economic(format!("{addr} has insufficient balance")))?;
    BALANCES.save(storage, addr, &new_balance)?;
    Ok(())
}

/// Rolls the sliding per-epoch mint window forward and debits `amount`
/// against the remaining budget, erroring if the epoch's budget is
/// insufficient. §4.1: a roll-over discards unused budget, it is not
/// carried forward.
fn debit_epoch_budget(storage: &mut dyn Storage, env: &Env, amount: u64) -> ContractResult<()> {
    let mut epoch = EPOCH_STATE.load(storage)?;
    if amount > epoch.max_mint_limit {
        return Err(ContractError::Economic("amount exceeds max mint limit".into()));
    }

    let current_epoch = env.block.height / epoch.epoch_length;
    if current_epoch == epoch.last_epoch {
        epoch.last_mint_limit = epoch
            .last_mint_limit
            .checked_sub(amount)
            .ok_or_else(|| ContractError::Economic("over epoch mint limit".into()))?;
    } else {
        epoch.last_epoch = current_epoch;
        epoch.last_mint_limit = epoch.max_mint_limit - amount;
    }

    EPOCH_STATE.save(storage, &epoch)?;
    Ok(())
}

pub fn mint(
    storage: &mut dyn Storage,
    env: Env,
    info: MessageInfo,
    to: Addr,
    amount: u64,
) -> ContractResult<Response> {
    require_role(storage, &MINTERS, &info.sender)?;
    require_not_blacklisted(storage, &to)?;

    debit_epoch_budget(storage, &env, amount)?;
    add_balance(storage, &to, amount)?;

    let supply = TOTAL_SUPPLY.load(storage)?;
    TOTAL_SUPPLY.save(storage, &(supply + amount))?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string()))
}

pub fn burn(storage: &mut dyn Storage, info: MessageInfo, amount: u64) -> ContractResult<Response> {
    require_role(storage, &BURNERS, &info.sender)?;
    require_not_blacklisted(storage, &info.sender)?;

    sub_balance(storage, &info.sender, amount)?;
    let supply = TOTAL_SUPPLY.load(storage)?;
    TOTAL_SUPPLY.save(storage, &(supply - amount))?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount.to_string()))
}

/// Admin override: burns from an arbitrary account, bypassing the
/// blacklist gate for this call only (§4.1).
pub fn owner_burn(
    storage: &mut dyn Storage,
    info: MessageInfo,
    user: Addr,
    amount: u64,
) -> ContractResult<Response> {
    require_owner(storage, &info)?;

    sub_balance(storage, &user, amount)?;
    let supply = TOTAL_SUPPLY.load(storage)?;
    TOTAL_SUPPLY.save(storage, &(supply - amount))?;

    Ok(Response::new()
        .add_attribute("action", "owner_burn")
        .add_attribute("user", user)
        .add_attribute("amount", amount.to_string()))
}

pub fn transfer(
    storage: &mut dyn Storage,
    info: MessageInfo,
    recipient: Addr,
    amount: u64,
) -> ContractResult<Response> {
    move_balance(storage, &info.sender, &recipient, amount)?;
    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}

/// No allowance model: only burner-role callers (the burn router, acting on
/// behalf of a user mid-`ccBurn`) may pull funds from another account.
pub fn transfer_from(
    storage: &mut dyn Storage,
    info: MessageInfo,
    owner: Addr,
    recipient: Addr,
    amount: u64,
) -> ContractResult<Response> {
    require_role(storage, &BURNERS, &info.sender)?;
    move_balance(storage, &owner, &recipient, amount)?;
    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("owner", owner)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}

fn move_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: u64,
) -> ContractResult<()> {
    require_not_blacklisted(storage, from)?;
    require_not_blacklisted(storage, to)?;
    sub_balance(storage, from, amount)?;
    add_balance(storage, to, amount)?;
    Ok(())
}

fn set_role(
    storage: &mut dyn Storage,
    info: MessageInfo,
    map: cw_storage_plus::Map<&Addr, bool>,
    address: Addr,
    grant: bool,
) -> ContractResult<Response> {
    require_owner(storage, &info)?;
    let current = map.may_load(storage, &address)?.unwrap_or(false);
    if current == grant {
        return Err(ContractError::State(format!(
            "role already {}",
            if grant { "granted" } else { "revoked" }
        )));
    }
    map.save(storage, &address, &grant)?;
    Ok(Response::new()
        .add_attribute("action", if grant { "add_role" } else { "remove_role" })
        .add_attribute("address", address))
}

pub fn add_minter(storage: &mut dyn Storage, info: MessageInfo, address: Addr) -> ContractResult<Response> {
    set_role(storage, info, MINTERS, address, true)
}

pub fn remove_minter(storage: &mut dyn Storage, info: MessageInfo, address: Addr) -> ContractResult<Response> {
    set_role(storage, info, MINTERS, address, false)
}

pub fn add_burner(storage: &mut dyn Storage, info: MessageInfo, address: Addr) -> ContractResult<Response> {
    set_role(storage, info, BURNERS, address, true)
}

pub fn remove_burner(storage: &mut dyn Storage, info: MessageInfo, address: Addr) -> ContractResult<Response> {
    set_role(storage, info, BURNERS, address, false)
}

pub fn add_blacklister(storage: &mut dyn Storage, info: MessageInfo, address: Addr) -> ContractResult<Response> {
    set_role(storage, info, BLACKLISTERS, address, true)
}

pub fn remove_blacklister(storage: &mut dyn Storage, info: MessageInfo, address: Addr) -> ContractResult<Response> {
    set_role(storage, info, BLACKLISTERS, address, false)
}

pub fn blacklist(storage: &mut dyn Storage, info: MessageInfo, address: Addr) -> ContractResult<Response> {
    require_role(storage, &BLACKLISTERS, &info.sender)?;
    BLACKLIST.save(storage, &address, &true)?;
    Ok(Response::new()
        .add_attribute("action", "blacklist")
        .add_attribute("address", address))
}

pub fn un_blacklist(storage: &mut dyn Storage, info: MessageInfo, address: Addr) -> ContractResult<Response> {
    require_role(storage, &BLACKLISTERS, &info.sender)?;
    BLACKLIST.save(storage, &address, &false)?;
    Ok(Response::new()
        .add_attribute("action", "un_blacklist")
        .add_attribute("address", address))
}

pub fn update_epoch_config(
    storage: &mut dyn Storage,
    info: MessageInfo,
    max_mint_limit: u64,
    epoch_length: u64,
) -> ContractResult<Response> {
    require_owner(storage, &info)?;
    if epoch_length == 0 {
        return Err(ContractError::Validation("epoch_length must be > 0".into()));
    }
    EPOCH_STATE.update(storage, |mut epoch| -> ContractResult<EpochState> {
        epoch.max_mint_limit = max_mint_limit;
        epoch.epoch_length = epoch_length;
        Ok(epoch)
    })?;
    Ok(Response::new().add_attribute("action", "update_epoch_config"))
}

pub fn instantiate_state(
    storage: &mut dyn Storage,
    owner: Addr,
    max_mint_limit: u64,
    epoch_length: u64,
) -> ContractResult<()> {
    CONFIG.save(storage, &Config { owner })?;
    TOTAL_SUPPLY.save(storage, &0)?;
    EPOCH_STATE.save(
        storage,
        &EpochState {
            max_mint_limit,
            epoch_length,
            last_epoch: 0,
            last_mint_limit: max_mint_limit,
        },
    )?;
    Ok(())
}
