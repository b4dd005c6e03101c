#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use bridge_common::error::ContractError;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::entrypoints::*;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

const CONTRACT_NAME: &str = "crates.io:ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    instantiate_state(deps.storage, info.sender, msg.max_mint_limit, msg.epoch_length)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { to, amount } => mint(deps.storage, env, info, to, amount),
        ExecuteMsg::Burn { amount } => burn(deps.storage, info, amount),
        ExecuteMsg::OwnerBurn { user, amount } => owner_burn(deps.storage, info, user, amount),
        ExecuteMsg::Transfer { recipient, amount } => transfer(deps.storage, info, recipient, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => transfer_from(deps.storage, info, owner, recipient, amount),
        ExecuteMsg::AddMinter { address } => add_minter(deps.storage, info, address),
        ExecuteMsg::RemoveMinter { address } => remove_minter(deps.storage, info, address),
        ExecuteMsg::AddBurner { address } => add_burner(deps.storage, info, address),
        ExecuteMsg::RemoveBurner { address } => remove_burner(deps.storage, info, address),
        ExecuteMsg::AddBlacklister { address } => add_blacklister(deps.storage, info, address),
        ExecuteMsg::RemoveBlacklister { address } => remove_blacklister(deps.storage, info, address),
        ExecuteMsg::Blacklist { address } => blacklist(deps.storage, info, address),
        ExecuteMsg::UnBlacklist { address } => un_blacklist(deps.storage, info, address),
        ExecuteMsg::UpdateEpochConfig {
            max_mint_limit,
            epoch_length,
        } => update_epoch_config(deps.storage, info, max_mint_limit, epoch_length),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&balance(deps.storage, address)?),
        QueryMsg::TotalSupply {} => to_json_binary(&total_supply(deps.storage)?),
        QueryMsg::IsBlacklisted { address } => to_json_binary(&is_blacklisted(deps.storage, address)?),
        QueryMsg::IsMinter { address } => to_json_binary(&is_minter(deps.storage, address)?),
        QueryMsg::IsBurner { address } => to_json_binary(&is_burner(deps.storage, address)?),
        QueryMsg::IsBlacklister { address } => to_json_binary(&is_blacklister(deps.storage, address)?),
        QueryMsg::EpochState {} => to_json_binary(&epoch_state(deps.storage)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    match msg {}
}
