#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use bridge_common::error::ContractError;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult};
use cw2::set_contract_version;

use crate::entrypoints::*;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::reply::{handle_cc_burn_reply, CC_BURN_REPLY_ID};
use crate::state::Config;

const CONTRACT_NAME: &str = "crates.io:burn-router";
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
        Config {
            owner: info.sender,
            relay_addr: msg.relay_addr,
            ledger_addr: msg.ledger_addr,
            locker_registry_addr: msg.locker_registry_addr,
            treasury: msg.treasury,
            bitcoin_fee_oracle: msg.bitcoin_fee_oracle,
            transfer_deadline: msg.transfer_deadline,
            protocol_percentage_fee_bps: msg.protocol_percentage_fee_bps,
            slasher_percentage_reward_bps: msg.slasher_percentage_reward_bps,
            bitcoin_fee: msg.bitcoin_fee,
            starting_block_number: msg.starting_block_number,
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
        ExecuteMsg::CcBurn {
            amount,
            user_script,
            script_type,
            locker_script,
        } => cc_burn(deps.storage, &querier, env, info, amount, user_script, script_type, locker_script),
        ExecuteMsg::BurnProof {
            tx,
            block_number,
            merkle_proof,
            tx_index,
            locker_script,
            burn_req_indexes,
            vout_indexes,
        } => burn_proof(
            deps.storage,
            &querier,
            tx,
            block_number,
            merkle_proof,
            tx_index,
            locker_script,
            burn_req_indexes,
            vout_indexes,
        ),
        ExecuteMsg::DisputeBurn { locker_script, indexes } => {
            dispute_burn(deps.storage, &querier, info, locker_script, indexes)
        }
        ExecuteMsg::DisputeLocker {
            locker_script,
            input_tx,
            output_tx,
            input_merkle_proof,
            input_index,
            input_tx_index,
            input_block_number,
        } => dispute_locker(
            deps.storage,
            &querier,
            info,
            locker_script,
            input_tx,
            output_tx,
            input_merkle_proof,
            input_index,
            input_tx_index,
            input_block_number,
        ),
        ExecuteMsg::SetBitcoinFee { bitcoin_fee } => set_bitcoin_fee(deps.storage, info, bitcoin_fee),
        ExecuteMsg::UpdateConfig {
            transfer_deadline,
            protocol_percentage_fee_bps,
            slasher_percentage_reward_bps,
            starting_block_number,
            treasury,
        } => update_config(
            deps.storage,
            &querier,
            info,
            transfer_deadline,
            protocol_percentage_fee_bps,
            slasher_percentage_reward_bps,
            starting_block_number,
            treasury,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::BurnRequest { locker, index } => to_json_binary(&burn_request(deps.storage, locker, index)?),
        QueryMsg::ListBurnRequests { locker, start_after, limit } => {
            to_json_binary(&list_burn_requests(deps.storage, locker, start_after, limit)?)
        }
        QueryMsg::IsUsedAsBurnProof { tx_id } => to_json_binary(&is_used_as_burn_proof(deps.storage, tx_id)?),
        QueryMsg::Config {} => to_json_binary(&config(deps.storage)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    match msg {}
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let querier = deps.querier;
    match msg.id {
        CC_BURN_REPLY_ID => handle_cc_burn_reply(deps.storage, &querier, msg),
        other => Err(ContractError::State(format!("unexpected reply id {other}"))),
    }
}
