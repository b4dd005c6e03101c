#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use bridge_common::error::ContractError;
use cosmwasm_std::{to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::entrypoints::*;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::Config;

const CONTRACT_NAME: &str = "crates.io:locker-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    instantiate_state(
        deps.storage,
        info.sender,
        Config {
            owner: Addr::unchecked(""),
            ledger_addr: msg.ledger_addr,
            oracle_addr: msg.oracle_addr,
            burn_router_addr: msg.burn_router_addr,
            minter_addr: msg.minter_addr,
            native_denom: msg.native_denom,
            collateral_ratio_bps: msg.collateral_ratio_bps,
            liquidation_ratio_bps: msg.liquidation_ratio_bps,
            locker_percentage_fee_bps: msg.locker_percentage_fee_bps,
            price_with_discount_ratio_bps: msg.price_with_discount_ratio_bps,
            min_required_native_locked_amount: msg.min_required_native_locked_amount,
        },
    )?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let querier = deps.querier;
    match msg {
        ExecuteMsg::RequestToBecomeLocker {
            locker_locking_script,
            native_amount,
            rescue_type,
            rescue_script,
        } => request_to_become_locker(
            deps.storage,
            info,
            locker_locking_script,
            native_amount,
            rescue_type,
            rescue_script,
        ),
        ExecuteMsg::RevokeRequest {} => revoke_request(deps.storage, info),
        ExecuteMsg::AddLocker { target } => add_locker(deps.storage, info, target),
        ExecuteMsg::AddCollateral { target, amount } => add_collateral(deps.storage, info, target, amount),
        ExecuteMsg::RemoveCollateral { amount } => remove_collateral(deps.storage, &querier, env, info, amount),
        ExecuteMsg::RequestInactivation {} => request_inactivation(deps.storage, env, info),
        ExecuteMsg::RequestActivation {} => request_activation(deps.storage, info),
        ExecuteMsg::SelfRemoveLocker {} => self_remove_locker(deps.storage, env, info),
        ExecuteMsg::Mint {
            locker_locking_script,
            receiver,
            tx_id,
            amount,
        } => mint(deps.storage, info, locker_locking_script, receiver, tx_id, amount),
        ExecuteMsg::Burn {
            locker_locking_script,
            amount,
        } => burn(deps.storage, env.clone(), info, locker_locking_script, amount),
        ExecuteMsg::SlashIdleLocker {
            target,
            reward_amount_btc,
            reward_recipient,
            amount_btc,
            user_recipient,
        } => slash_idle_locker(
            deps.storage,
            &querier,
            info,
            target,
            reward_amount_btc,
            reward_recipient,
            amount_btc,
            user_recipient,
        ),
        ExecuteMsg::SlashThiefLocker {
            target,
            reward_amount_btc,
            reward_recipient,
            amount_btc,
        } => slash_thief_locker(deps.storage, &querier, info, target, reward_amount_btc, reward_recipient, amount_btc),
        ExecuteMsg::LiquidateLocker {
            target,
            collateral_amount,
        } => liquidate_locker(deps.storage, &querier, env.clone(), info, target, collateral_amount),
        ExecuteMsg::BuySlashedCollateralOfLocker {
            target,
            collateral_amount,
        } => buy_slashed_collateral_of_locker(deps.storage, &querier, info, target, collateral_amount),
        ExecuteMsg::UpdateConfig {
            collateral_ratio_bps,
            liquidation_ratio_bps,
            locker_percentage_fee_bps,
            price_with_discount_ratio_bps,
            min_required_native_locked_amount,
        } => update_config(
            deps.storage,
            info,
            collateral_ratio_bps,
            liquidation_ratio_bps,
            locker_percentage_fee_bps,
            price_with_discount_ratio_bps,
            min_required_native_locked_amount,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Locker { target } => to_json_binary(&locker(deps.storage, target)?),
        QueryMsg::IsLockerApproved { target } => to_json_binary(&is_locker_approved(deps.storage, target)?),
        QueryMsg::ListLockers { start_after, limit } => {
            to_json_binary(&list_lockers(deps.storage, start_after, limit)?)
        }
        QueryMsg::LockerHealth { target } => to_json_binary(&locker_health(deps.storage, &deps.querier, target)?),
        QueryMsg::Capacity { target } => to_json_binary(&capacity(deps.storage, &deps.querier, target)?),
        QueryMsg::Config {} => to_json_binary(&config(deps.storage)?),
        QueryMsg::LockerTargetForScript { locking_script } => {
            to_json_binary(&locker_target_for_script(deps.storage, locking_script)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    match msg {}
}
