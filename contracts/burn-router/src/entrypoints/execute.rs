use bitcoin::consensus::Encodable;
use bridge_common::bitcoin_script::ScriptType;
use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Env, MessageInfo, QuerierWrapper, Response, Storage,
    SubMsg, WasmMsg,
};

use crate::reply::{PendingCcBurn, CC_BURN_REPLY_ID, PENDING_CC_BURN};
use crate::state::{Config, BURN_REQUESTS, CONFIG, IS_USED_AS_BURN_PROOF, REENTRANCY_GUARD};

fn txid_bytes(txid: &bitcoin::Txid) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(32);
    txid.consensus_encode(&mut bytes).expect("Vec<u8> writer is infallible");
    bytes
}

fn acquire_reentrancy_guard(storage: &mut dyn Storage) -> ContractResult<()> {
    if REENTRANCY_GUARD.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::Reentrancy {});
    }
    REENTRANCY_GUARD.save(storage, &true)?;
    Ok(())
}

fn release_reentrancy_guard(storage: &mut dyn Storage) -> ContractResult<()> {
    REENTRANCY_GUARD.save(storage, &false)?;
    Ok(())
}

fn require_owner(storage: &dyn Storage, info: &MessageInfo) -> ContractResult<Config> {
    let config = CONFIG.load(storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(config)
}

fn locker_target_for_script(
    querier: &QuerierWrapper,
    config: &Config,
    locking_script: Binary,
) -> ContractResult<Addr> {
    querier
        .query_wasm_smart(
            config.locker_registry_addr.clone(),
            &locker_registry::msg::QueryMsg::LockerTargetForScript { locking_script },
        )
        .map_err(|e| ContractError::External(format!("locker-registry query failed: {e}")))
}

/// §4.3 step 1-5. Pulls `amount` from the caller, skims the protocol fee to
/// treasury, and hands the rest to `locker-registry::burn` via a
/// `reply_on_success` submessage — `afterLockerFee` comes back through
/// `reply::handle_cc_burn_reply`, which finishes building the `BurnRequest`.
pub fn cc_burn(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    env: Env,
    info: MessageInfo,
    amount: u64,
    user_script: Binary,
    script_type: ScriptType,
    locker_script: Binary,
) -> ContractResult<Response> {
    acquire_reentrancy_guard(storage)?;
    let config = CONFIG.load(storage)?;

    bridge_common::bitcoin_script::validate_script_length(script_type, user_script.as_slice())?;

    let locker_target = locker_target_for_script(querier, &config, locker_script.clone())?;

    let protocol_fee = bridge_common::math::apply_bps_floor(amount, config.protocol_percentage_fee_bps)?;
    let dust_floor = protocol_fee
        .checked_add(2 * config.bitcoin_fee)
        .ok_or_else(|| ContractError::Economic("dust floor overflow".into()))?;
    if amount <= dust_floor {
        return Err(ContractError::Economic("amount below dust floor".into()));
    }
    let remaining = amount - protocol_fee;

    PENDING_CC_BURN.save(
        storage,
        &PendingCcBurn {
            sender: info.sender.clone(),
            user_script,
            script_type,
            locker_target: locker_target.clone(),
            amount,
            remaining,
        },
    )?;

    let mut messages = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.ledger_addr.to_string(),
        msg: to_json_binary(&ledger::msg::ExecuteMsg::TransferFrom {
            owner: info.sender.clone(),
            recipient: env.contract.address.clone(),
            amount,
        })?,
        funds: vec![],
    })];
    if protocol_fee > 0 {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger_addr.to_string(),
            msg: to_json_binary(&ledger::msg::ExecuteMsg::Transfer {
                recipient: config.treasury.clone(),
                amount: protocol_fee,
            })?,
            funds: vec![],
        }));
    }

    let burn_submsg = SubMsg::reply_on_success(
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.locker_registry_addr.to_string(),
            msg: to_json_binary(&locker_registry::msg::ExecuteMsg::Burn {
                locker_locking_script: locker_script,
                amount: remaining,
            })?,
            funds: vec![],
        }),
        CC_BURN_REPLY_ID,
    );

    Ok(Response::new()
        .add_messages(messages)
        .add_submessage(burn_submsg)
        .add_attribute("action", "cc_burn")
        .add_attribute("sender", info.sender)
        .add_attribute("locker", locker_target)
        .add_attribute("amount", amount.to_string())
        .add_attribute("protocol_fee", protocol_fee.to_string()))
}

/// §4.3 `burnProof`. Anyone may submit; idempotent via `is_transferred`.
#[allow(clippy::too_many_arguments)]
pub fn burn_proof(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    tx: Binary,
    block_number: u64,
    merkle_proof: Binary,
    tx_index: u32,
    locker_script: Binary,
    burn_req_indexes: Vec<u64>,
    vout_indexes: Vec<u32>,
) -> ContractResult<Response> {
    acquire_reentrancy_guard(storage)?;
    let config = CONFIG.load(storage)?;

    if block_number < config.starting_block_number {
        return Err(ContractError::Proof("block_number precedes starting_block_number".into()));
    }
    if burn_req_indexes.len() != vout_indexes.len() {
        return Err(ContractError::Validation(
            "burn_req_indexes and vout_indexes must have equal length".into(),
        ));
    }
    if !vout_indexes.windows(2).all(|w| w[0] < w[1]) {
        return Err(ContractError::Validation("vout_indexes must be strictly increasing".into()));
    }

    let parsed_tx = bridge_common::bitcoin_script::extract_tx(tx.as_slice())?;
    if parsed_tx.lock_time != bitcoin::PackedLockTime(0) {
        return Err(ContractError::Proof("locktime must be zero".into()));
    }

    let txid = bridge_common::bitcoin_script::calculate_txid(&parsed_tx);
    let confirmed = bridge_common::relay::query_check_tx_proof(
        querier,
        &config.relay_addr,
        txid,
        block_number,
        merkle_proof,
        tx_index,
    )?;
    if !confirmed {
        return Err(ContractError::Proof("relay did not confirm the inclusion proof".into()));
    }

    let locker_target = locker_target_for_script(querier, &config, locker_script)?;

    let mut paid_output_counter: u64 = 0;
    for (req_idx, vout_idx) in burn_req_indexes.iter().zip(vout_indexes.iter()) {
        let mut request = BURN_REQUESTS.load(storage, (&locker_target, *req_idx))?;
        if request.is_transferred || request.deadline < block_number {
            continue;
        }

        let paid_value = bridge_common::bitcoin_script::parse_value_from_specific_output_having_script(
            &parsed_tx,
            *vout_idx as usize,
            request.user_script.as_slice(),
            request.script_type,
        )?;
        if paid_value == Some(request.burnt_amount) {
            request.is_transferred = true;
            BURN_REQUESTS.save(storage, (&locker_target, *req_idx), &request)?;
            paid_output_counter += 1;
        }
    }

    let num_outputs = parsed_tx.output.len() as u64;
    let txid_key = txid_bytes(&txid);
    if num_outputs > 0 && paid_output_counter + 1 >= num_outputs {
        IS_USED_AS_BURN_PROOF.save(storage, &txid_key, &true)?;
    }

    release_reentrancy_guard(storage)?;
    Ok(Response::new()
        .add_attribute("action", "burn_proof")
        .add_attribute("locker", locker_target)
        .add_attribute("tx_id", Binary::from(txid_key).to_base64())
        .add_attribute("paid_output_counter", paid_output_counter.to_string()))
}

/// §4.3 `disputeBurn`. Owner-gated; slashes a locker that missed its
/// deadline, crediting the request's original sender.
pub fn dispute_burn(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    info: MessageInfo,
    locker_script: Binary,
    indexes: Vec<u64>,
) -> ContractResult<Response> {
    acquire_reentrancy_guard(storage)?;
    let config = require_owner(storage, &info)?;

    let locker_target = locker_target_for_script(querier, &config, locker_script)?;
    let last_submitted_height = bridge_common::relay::query_last_submitted_height(querier, &config.relay_addr)?;

    let mut messages = vec![];
    for idx in indexes {
        let mut request = BURN_REQUESTS.load(storage, (&locker_target, idx))?;
        if request.deadline < config.starting_block_number {
            return Err(ContractError::Proof("burn request predates starting block".into()));
        }
        if request.is_transferred {
            return Err(ContractError::State("burn request already transferred".into()));
        }
        if request.deadline >= last_submitted_height {
            return Err(ContractError::Economic("deadline has not elapsed".into()));
        }

        let reward = bridge_common::math::apply_bps_floor(request.amount, config.slasher_percentage_reward_bps)?;
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.locker_registry_addr.to_string(),
            msg: to_json_binary(&locker_registry::msg::ExecuteMsg::SlashIdleLocker {
                target: locker_target.clone(),
                reward_amount_btc: reward,
                reward_recipient: info.sender.clone(),
                amount_btc: request.amount,
                user_recipient: request.sender.clone(),
            })?,
            funds: vec![],
        }));

        request.is_transferred = true;
        BURN_REQUESTS.save(storage, (&locker_target, idx), &request)?;
    }

    release_reentrancy_guard(storage)?;
    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "dispute_burn")
        .add_attribute("locker", locker_target))
}

/// §4.3 `disputeLocker`. Owner-gated; proves a locker spent a UTXO that
/// wasn't a burn payment and slashes it as a thief.
#[allow(clippy::too_many_arguments)]
pub fn dispute_locker(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    info: MessageInfo,
    locker_script: Binary,
    input_tx: Binary,
    output_tx: Binary,
    input_merkle_proof: Binary,
    input_index: u32,
    input_tx_index: u32,
    input_block_number: u64,
) -> ContractResult<Response> {
    acquire_reentrancy_guard(storage)?;
    let config = require_owner(storage, &info)?;

    if input_block_number < config.starting_block_number {
        return Err(ContractError::Proof("input_block_number precedes starting_block_number".into()));
    }

    let parsed_input_tx = bridge_common::bitcoin_script::extract_tx(input_tx.as_slice())?;
    let input_txid = bridge_common::bitcoin_script::calculate_txid(&parsed_input_tx);
    let input_txid_key = txid_bytes(&input_txid);
    if IS_USED_AS_BURN_PROOF.may_load(storage, &input_txid_key)?.unwrap_or(false) {
        return Err(ContractError::Proof("input tx was already used as a burn proof".into()));
    }

    let confirmed = bridge_common::relay::query_check_tx_proof(
        querier,
        &config.relay_addr,
        input_txid,
        input_block_number,
        input_merkle_proof,
        input_tx_index,
    )?;
    if !confirmed {
        return Err(ContractError::Proof("relay did not confirm the input tx's inclusion proof".into()));
    }

    let last_submitted_height = bridge_common::relay::query_last_submitted_height(querier, &config.relay_addr)?;
    if input_block_number + config.transfer_deadline >= last_submitted_height {
        return Err(ContractError::Proof("input tx is not yet stale enough to dispute".into()));
    }

    let outpoint = bridge_common::bitcoin_script::extract_outpoint(&parsed_input_tx, input_index as usize)?;

    let parsed_output_tx = bridge_common::bitcoin_script::extract_tx(output_tx.as_slice())?;
    let output_txid = bridge_common::bitcoin_script::calculate_txid(&parsed_output_tx);
    if outpoint.txid != output_txid {
        return Err(ContractError::Proof("outpoint txid does not match output_tx".into()));
    }

    let consumed_script = bridge_common::bitcoin_script::get_locking_script(&parsed_output_tx, outpoint.vout as usize)?;
    if consumed_script != locker_script.as_slice() {
        return Err(ContractError::Proof("consumed output does not belong to this locker".into()));
    }

    let total_value = bridge_common::bitcoin_script::parse_outputs_total_value(&parsed_input_tx);
    let locker_target = locker_target_for_script(querier, &config, locker_script)?;
    let reward = bridge_common::math::apply_bps_floor(total_value, config.slasher_percentage_reward_bps)?;

    release_reentrancy_guard(storage)?;
    Ok(Response::new()
        .add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.locker_registry_addr.to_string(),
            msg: to_json_binary(&locker_registry::msg::ExecuteMsg::SlashThiefLocker {
                target: locker_target.clone(),
                reward_amount_btc: reward,
                reward_recipient: info.sender.clone(),
                amount_btc: total_value,
            })?,
            funds: vec![],
        }))
        .add_attribute("action", "dispute_locker")
        .add_attribute("locker", locker_target)
        .add_attribute("input_tx_id", Binary::from(input_txid_key).to_base64()))
}

pub fn set_bitcoin_fee(storage: &mut dyn Storage, info: MessageInfo, bitcoin_fee: u64) -> ContractResult<Response> {
    let mut config = CONFIG.load(storage)?;
    if info.sender != config.bitcoin_fee_oracle {
        return Err(ContractError::Unauthorized {});
    }
    config.bitcoin_fee = bitcoin_fee;
    CONFIG.save(storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_bitcoin_fee")
        .add_attribute("bitcoin_fee", bitcoin_fee.to_string()))
}

/// §6 admin surface, §9 open question resolved: unlike the source this was
/// distilled from, `transfer_deadline` is owner-gated unconditionally here —
/// a caller-bypass keyed on `transfer_deadline < finalizationParameter` is a
/// bootstrapping quirk, not a feature worth preserving as an auth hole.
#[allow(clippy::too_many_arguments)]
pub fn update_config(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    info: MessageInfo,
    transfer_deadline: Option<u64>,
    protocol_percentage_fee_bps: Option<u64>,
    slasher_percentage_reward_bps: Option<u64>,
    starting_block_number: Option<u64>,
    treasury: Option<Addr>,
) -> ContractResult<Response> {
    let mut config = require_owner(storage, &info)?;

    if let Some(v) = transfer_deadline {
        let finalization_parameter =
            bridge_common::relay::query_finalization_parameter(querier, &config.relay_addr)?;
        if v <= finalization_parameter {
            return Err(ContractError::Validation(
                "transfer_deadline must exceed the relay's finalization parameter".into(),
            ));
        }
        config.transfer_deadline = v;
    }
    if let Some(v) = protocol_percentage_fee_bps {
        if v > crate::constants::MAX_PROTOCOL_FEE {
            return Err(ContractError::Validation("protocol_percentage_fee_bps out of range".into()));
        }
        config.protocol_percentage_fee_bps = v;
    }
    if let Some(v) = slasher_percentage_reward_bps {
        if v > crate::constants::MAX_SLASHER_REWARD {
            return Err(ContractError::Validation("slasher_percentage_reward_bps out of range".into()));
        }
        config.slasher_percentage_reward_bps = v;
    }
    if let Some(v) = starting_block_number {
        if v <= config.starting_block_number {
            return Err(ContractError::Validation("starting_block_number must strictly increase".into()));
        }
        config.starting_block_number = v;
    }
    if let Some(v) = treasury {
        config.treasury = v;
    }

    CONFIG.save(storage, &config)?;
    Ok(Response::new().add_attribute("action", "update_config"))
}

pub fn instantiate_state(storage: &mut dyn Storage, config: Config) -> ContractResult<()> {
    CONFIG.save(storage, &config)?;
    REENTRANCY_GUARD.save(storage, &false)?;
    Ok(())
}
