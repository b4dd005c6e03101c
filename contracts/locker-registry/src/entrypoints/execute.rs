use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Env, MessageInfo, QuerierWrapper,
    Response, Storage, WasmMsg,
};

use crate::constants::MAX_LOCKER_FEE;
use crate::model;
use crate::state::{Config, Locker, APPROVED_LOCKERS, CONFIG, LOCKERS, LOCKER_TARGET_ADDRESS};

fn require_owner(storage: &dyn Storage, info: &MessageInfo) -> ContractResult<Config> {
    let config = CONFIG.load(storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(config)
}

fn load_locker(storage: &dyn Storage, target: &Addr) -> ContractResult<Locker> {
    LOCKERS
        .may_load(storage, target)?
        .ok_or_else(|| ContractError::State(format!("no locker registered at {target}")))
}

fn oracle_price(querier: &QuerierWrapper, config: &Config) -> ContractResult<u128> {
    bridge_common::oracle::query_equivalent_output_amount(
        querier,
        &config.oracle_addr,
        10u128.pow(18),
        18,
        8,
        config.native_denom.clone(),
        "wbtc",
    )
}

/// Inverse of `model::collateral_value_btc`: `btc * 10^NATIVE_DECIMALS /
/// price`, widened through u128 throughout since `price` itself can exceed
/// `u64`.
fn btc_to_native(btc: u64, price: u128) -> ContractResult<u128> {
    if price == 0 {
        return Err(ContractError::Economic("oracle price is zero".into()));
    }
    let scale = 10u128.pow(crate::constants::NATIVE_DECIMALS);
    (btc as u128)
        .checked_mul(scale)
        .ok_or_else(|| ContractError::Economic("btc-to-native conversion overflow".into()))
        .map(|scaled| scaled / price)
}

pub fn request_to_become_locker(
    storage: &mut dyn Storage,
    info: MessageInfo,
    locker_locking_script: Binary,
    native_amount: u128,
    rescue_type: bridge_common::bitcoin_script::ScriptType,
    rescue_script: Binary,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;

    if LOCKER_TARGET_ADDRESS
        .may_load(storage, locker_locking_script.as_slice())?
        .is_some()
    {
        return Err(ContractError::State("locking script already registered".into()));
    }
    if LOCKERS.has(storage, &info.sender) {
        return Err(ContractError::State("caller already candidate or locker".into()));
    }
    if native_amount < config.min_required_native_locked_amount {
        return Err(ContractError::Economic("native amount below minimum".into()));
    }

    let sent = info
        .funds
        .iter()
        .find(|c| c.denom == config.native_denom)
        .map(|c| c.amount.u128())
        .unwrap_or(0);
    if sent != native_amount {
        return Err(ContractError::Validation("sent funds must equal native_amount".into()));
    }

    LOCKERS.save(
        storage,
        &info.sender,
        &Locker {
            locker_locking_script: locker_locking_script.clone(),
            locker_rescue_script: rescue_script,
            locker_rescue_type: rescue_type,
            native_token_locked_amount: native_amount,
            net_minted: 0,
            slashing_core_btc_amount: 0,
            is_candidate: true,
            is_locker: false,
            inactivation_timestamp: 0,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "request_add_locker")
        .add_attribute("target", info.sender))
}

pub fn revoke_request(storage: &mut dyn Storage, info: MessageInfo) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    let locker = load_locker(storage, &info.sender)?;
    if !locker.is_candidate {
        return Err(ContractError::State("caller is not a candidate".into()));
    }

    LOCKERS.remove(storage, &info.sender);

    Ok(Response::new()
        .add_attribute("action", "revoke_add_locker_request")
        .add_attribute("target", info.sender.clone())
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount: locker.native_token_locked_amount.into(),
            }],
        }))
}

pub fn add_locker(storage: &mut dyn Storage, info: MessageInfo, target: Addr) -> ContractResult<Response> {
    require_owner(storage, &info)?;
    let mut locker = load_locker(storage, &target)?;
    if !locker.is_candidate {
        return Err(ContractError::State("target is not a candidate".into()));
    }

    locker.is_candidate = false;
    locker.is_locker = true;
    LOCKER_TARGET_ADDRESS.save(storage, locker.locker_locking_script.as_slice(), &target)?;
    LOCKERS.save(storage, &target, &locker)?;
    APPROVED_LOCKERS.save(storage, &target, &true)?;

    Ok(Response::new()
        .add_attribute("action", "locker_added")
        .add_attribute("target", target))
}

pub fn add_collateral(
    storage: &mut dyn Storage,
    info: MessageInfo,
    target: Addr,
    amount: u128,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    let sent = info
        .funds
        .iter()
        .find(|c| c.denom == config.native_denom)
        .map(|c| c.amount.u128())
        .unwrap_or(0);
    if sent != amount {
        return Err(ContractError::Validation("sent funds must equal amount".into()));
    }

    let mut locker = load_locker(storage, &target)?;
    locker.native_token_locked_amount = locker
        .native_token_locked_amount
        .checked_add(amount)
        .ok_or_else(|| ContractError::Economic("collateral overflow".into()))?;
    LOCKERS.save(storage, &target, &locker)?;

    Ok(Response::new()
        .add_attribute("action", "collateral_added")
        .add_attribute("target", target)
        .add_attribute("payer", info.sender)
        .add_attribute("amount", amount.to_string()))
}

pub fn remove_collateral(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    env: Env,
    info: MessageInfo,
    amount: u128,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    let mut locker = load_locker(storage, &info.sender)?;
    if !locker.is_inactive(env.block.time.seconds()) {
        return Err(ContractError::State("locker must be inactive to withdraw".into()));
    }

    locker.native_token_locked_amount = locker
        .native_token_locked_amount
        .checked_sub(amount)
        .ok_or_else(|| ContractError::Economic("amount exceeds locked collateral".into()))?;

    let price = oracle_price(querier, &config)?;
    let collateral_value = model::collateral_value_btc(locker.native_token_locked_amount, price)?;
    let remaining_capacity = model::capacity(collateral_value, locker.net_minted, config.collateral_ratio_bps)?;
    if remaining_capacity == 0 && locker.net_minted > 0 {
        return Err(ContractError::Economic(
            "withdrawal would under-collateralize outstanding mint".into(),
        ));
    }

    LOCKERS.save(storage, &info.sender, &locker)?;

    Ok(Response::new()
        .add_attribute("action", "collateral_removed")
        .add_attribute("target", info.sender.clone())
        .add_attribute("amount", amount.to_string())
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount: amount.into(),
            }],
        }))
}

pub fn request_inactivation(storage: &mut dyn Storage, env: Env, info: MessageInfo) -> ContractResult<Response> {
    let mut locker = load_locker(storage, &info.sender)?;
    if !locker.is_locker {
        return Err(ContractError::State("caller is not an active locker".into()));
    }
    locker.inactivation_timestamp = env.block.time.seconds() + crate::constants::INACTIVATION_DELAY;
    LOCKERS.save(storage, &info.sender, &locker)?;

    Ok(Response::new()
        .add_attribute("action", "request_inactivate_locker")
        .add_attribute("target", info.sender))
}

pub fn request_activation(storage: &mut dyn Storage, info: MessageInfo) -> ContractResult<Response> {
    let mut locker = load_locker(storage, &info.sender)?;
    locker.inactivation_timestamp = 0;
    LOCKERS.save(storage, &info.sender, &locker)?;

    Ok(Response::new()
        .add_attribute("action", "activate_locker")
        .add_attribute("target", info.sender))
}

pub fn self_remove_locker(storage: &mut dyn Storage, env: Env, info: MessageInfo) -> ContractResult<Response> {
    let locker = load_locker(storage, &info.sender)?;
    if !locker.is_inactive(env.block.time.seconds()) {
        return Err(ContractError::State("locker must be inactive".into()));
    }
    if locker.net_minted != 0 || locker.slashing_core_btc_amount != 0 {
        return Err(ContractError::State("outstanding obligations remain".into()));
    }

    let config = CONFIG.load(storage)?;
    LOCKERS.remove(storage, &info.sender);
    LOCKER_TARGET_ADDRESS.remove(storage, locker.locker_locking_script.as_slice());
    APPROVED_LOCKERS.remove(storage, &info.sender);

    Ok(Response::new()
        .add_attribute("action", "locker_removed")
        .add_attribute("target", info.sender.clone())
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount: locker.native_token_locked_amount.into(),
            }],
        }))
}

pub fn mint(
    storage: &mut dyn Storage,
    info: MessageInfo,
    locker_locking_script: Binary,
    receiver: Addr,
    tx_id: Binary,
    amount: u64,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.minter_addr {
        return Err(ContractError::Unauthorized {});
    }

    let target = LOCKER_TARGET_ADDRESS
        .load(storage, locker_locking_script.as_slice())
        .map_err(|_| ContractError::State("locking script not registered".into()))?;
    let mut locker = load_locker(storage, &target)?;
    if !locker.is_locker {
        return Err(ContractError::State("locker is not active".into()));
    }

    locker.net_minted = locker
        .net_minted
        .checked_add(amount)
        .ok_or_else(|| ContractError::Economic("net minted overflow".into()))?;
    LOCKERS.save(storage, &target, &locker)?;

    let locker_fee = bridge_common::math::apply_bps_floor(amount, config.locker_percentage_fee_bps)?;
    let net_to_receiver = amount - locker_fee;

    let mut messages: Vec<CosmosMsg> = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.ledger_addr.to_string(),
        msg: to_json_binary(&ledger::msg::ExecuteMsg::Mint {
            to: receiver.clone(),
            amount: net_to_receiver,
        })?,
        funds: vec![],
    })];
    if locker_fee > 0 {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger_addr.to_string(),
            msg: to_json_binary(&ledger::msg::ExecuteMsg::Mint {
                to: target.clone(),
                amount: locker_fee,
            })?,
            funds: vec![],
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "mint")
        .add_attribute("locker", target)
        .add_attribute("receiver", receiver)
        .add_attribute("tx_id", tx_id.to_base64())
        .add_attribute("amount", amount.to_string()))
}

/// Burner-only (the burn router). Pulls `amount` from the caller's ledger
/// balance into this contract, burns `amount - lockerFee` from its own
/// balance, forwards `lockerFee` to the locker, and returns
/// `afterLockerFee` via the `after_locker_fee` attribute for the burn
/// router to read off the submessage reply and continue its own fee math
/// (§9: cross-contract return values travel through a submessage reply,
/// not a synchronous call result).
pub fn burn(
    storage: &mut dyn Storage,
    env: Env,
    info: MessageInfo,
    locker_locking_script: Binary,
    amount: u64,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.burn_router_addr {
        return Err(ContractError::Unauthorized {});
    }

    let target = LOCKER_TARGET_ADDRESS
        .load(storage, locker_locking_script.as_slice())
        .map_err(|_| ContractError::State("locking script not registered".into()))?;
    let mut locker = load_locker(storage, &target)?;

    let locker_fee = bridge_common::math::apply_bps_floor(amount, config.locker_percentage_fee_bps)?;
    let after_locker_fee = amount
        .checked_sub(locker_fee)
        .ok_or_else(|| ContractError::Economic("locker fee exceeds amount".into()))?;

    locker.net_minted = locker
        .net_minted
        .checked_sub(after_locker_fee)
        .ok_or_else(|| ContractError::Economic("net minted underflow".into()))?;
    LOCKERS.save(storage, &target, &locker)?;

    let mut messages = vec![
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger_addr.to_string(),
            msg: to_json_binary(&ledger::msg::ExecuteMsg::TransferFrom {
                owner: info.sender.clone(),
                recipient: env.contract.address.clone(),
                amount,
            })?,
            funds: vec![],
        }),
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger_addr.to_string(),
            msg: to_json_binary(&ledger::msg::ExecuteMsg::Burn { amount: after_locker_fee })?,
            funds: vec![],
        }),
    ];
    if locker_fee > 0 {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger_addr.to_string(),
            msg: to_json_binary(&ledger::msg::ExecuteMsg::Transfer {
                recipient: target.clone(),
                amount: locker_fee,
            })?,
            funds: vec![],
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "burn")
        .add_attribute("locker", target)
        .add_attribute("after_locker_fee", after_locker_fee.to_string())
        .set_data(to_json_binary(&after_locker_fee)?))
}

pub fn slash_idle_locker(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    info: MessageInfo,
    target: Addr,
    reward_amount_btc: u64,
    reward_recipient: Addr,
    amount_btc: u64,
    user_recipient: Addr,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.burn_router_addr {
        return Err(ContractError::Unauthorized {});
    }

    let mut locker = load_locker(storage, &target)?;
    let price = oracle_price(querier, &config)?;

    let total_btc = reward_amount_btc
        .checked_add(amount_btc)
        .ok_or_else(|| ContractError::Economic("slash amount overflow".into()))?;
    let native_equivalent = btc_to_native(total_btc, price)?;
    let payable = native_equivalent.min(locker.native_token_locked_amount);

    locker.native_token_locked_amount -= payable;
    locker.net_minted = locker.net_minted.saturating_sub(amount_btc);

    let reward_share = if total_btc > 0 {
        payable * reward_amount_btc as u128 / total_btc as u128
    } else {
        0
    };
    let user_share = payable - reward_share;

    LOCKERS.save(storage, &target, &locker)?;

    let mut messages = vec![];
    if reward_share > 0 {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: reward_recipient.to_string(),
            amount: vec![Coin {
                denom: config.native_denom.clone(),
                amount: reward_share.into(),
            }],
        }));
    }
    if user_share > 0 {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: user_recipient.to_string(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount: user_share.into(),
            }],
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "locker_slashed_idle")
        .add_attribute("target", target))
}

pub fn slash_thief_locker(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    info: MessageInfo,
    target: Addr,
    reward_amount_btc: u64,
    reward_recipient: Addr,
    amount_btc: u64,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.burn_router_addr {
        return Err(ContractError::Unauthorized {});
    }

    let mut locker = load_locker(storage, &target)?;
    let price = model::discounted_price(oracle_price(querier, &config)?, config.price_with_discount_ratio_bps);
    let reward_native = btc_to_native(reward_amount_btc, price)?;
    let payable = reward_native.min(locker.native_token_locked_amount);

    locker.native_token_locked_amount -= payable;
    locker.slashing_core_btc_amount = locker
        .slashing_core_btc_amount
        .checked_add(amount_btc)
        .ok_or_else(|| ContractError::Economic("slashing amount overflow".into()))?;
    LOCKERS.save(storage, &target, &locker)?;

    let mut response = Response::new()
        .add_attribute("action", "locker_slashed_thief")
        .add_attribute("target", target);
    if payable > 0 {
        response = response.add_message(BankMsg::Send {
            to_address: reward_recipient.to_string(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount: payable.into(),
            }],
        });
    }
    Ok(response)
}

pub fn liquidate_locker(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    env: Env,
    info: MessageInfo,
    target: Addr,
    collateral_amount: u128,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    let mut locker = load_locker(storage, &target)?;
    let price = oracle_price(querier, &config)?;
    let collateral_value = model::collateral_value_btc(locker.native_token_locked_amount, price)?;

    if !model::is_liquidatable(collateral_value, locker.net_minted, config.liquidation_ratio_bps) {
        return Err(ContractError::Economic("locker is healthy".into()));
    }
    if collateral_amount > locker.native_token_locked_amount {
        return Err(ContractError::Economic("collateral_amount exceeds locked amount".into()));
    }

    let discounted = model::discounted_price(price, config.price_with_discount_ratio_bps);
    let needed_wrapped_btc = bridge_common::math::mul_div_ceil(
        u64::try_from(collateral_amount).map_err(|_| ContractError::Economic("collateral amount overflow".into()))?,
        discounted as u64,
        10u64.pow(crate::constants::NATIVE_DECIMALS),
    )?;

    locker.native_token_locked_amount -= collateral_amount;
    locker.net_minted = locker.net_minted.saturating_sub(needed_wrapped_btc);
    LOCKERS.save(storage, &target, &locker)?;

    // §4.2: the buyer pays `neededWrappedBtc` to retire the supply being
    // released from collateral backing, same pull-then-burn sequence as
    // `burn`'s own locker-side settlement.
    let mut messages = vec![];
    if needed_wrapped_btc > 0 {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger_addr.to_string(),
            msg: to_json_binary(&ledger::msg::ExecuteMsg::TransferFrom {
                owner: info.sender.clone(),
                recipient: env.contract.address,
                amount: needed_wrapped_btc,
            })?,
            funds: vec![],
        }));
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger_addr.to_string(),
            msg: to_json_binary(&ledger::msg::ExecuteMsg::Burn { amount: needed_wrapped_btc })?,
            funds: vec![],
        }));
    }
    messages.push(CosmosMsg::Bank(BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![Coin {
            denom: config.native_denom,
            amount: collateral_amount.into(),
        }],
    }));

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "locker_liquidated")
        .add_attribute("target", target)
        .add_attribute("buyer", info.sender)
        .add_attribute("collateral_amount", collateral_amount.to_string())
        .add_attribute("needed_wrapped_btc", needed_wrapped_btc.to_string()))
}

pub fn buy_slashed_collateral_of_locker(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    info: MessageInfo,
    target: Addr,
    collateral_amount: u128,
) -> ContractResult<Response> {
    let config = CONFIG.load(storage)?;
    let mut locker = load_locker(storage, &target)?;
    if locker.slashing_core_btc_amount == 0 {
        return Err(ContractError::Economic("no slashed collateral for sale".into()));
    }

    let price = model::discounted_price(oracle_price(querier, &config)?, config.price_with_discount_ratio_bps);
    let wrapped_btc_cost = bridge_common::math::mul_div_ceil(
        u64::try_from(collateral_amount).map_err(|_| ContractError::Economic("collateral amount overflow".into()))?,
        price as u64,
        10u64.pow(crate::constants::NATIVE_DECIMALS),
    )?;

    locker.slashing_core_btc_amount = locker
        .slashing_core_btc_amount
        .checked_sub(wrapped_btc_cost)
        .ok_or_else(|| ContractError::Economic("exceeds outstanding slashed amount".into()))?;
    locker.native_token_locked_amount = locker
        .native_token_locked_amount
        .checked_sub(collateral_amount)
        .ok_or_else(|| ContractError::Economic("collateral_amount exceeds locked amount".into()))?;
    LOCKERS.save(storage, &target, &locker)?;

    Ok(Response::new()
        .add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger_addr.to_string(),
            msg: to_json_binary(&ledger::msg::ExecuteMsg::TransferFrom {
                owner: info.sender.clone(),
                recipient: target.clone(),
                amount: wrapped_btc_cost,
            })?,
            funds: vec![],
        }))
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount: collateral_amount.into(),
            }],
        })
        .add_attribute("action", "locker_slashed_collateral_sold")
        .add_attribute("target", target)
        .add_attribute("buyer", info.sender))
}

#[allow(clippy::too_many_arguments)]
pub fn update_config(
    storage: &mut dyn Storage,
    info: MessageInfo,
    collateral_ratio_bps: Option<u64>,
    liquidation_ratio_bps: Option<u64>,
    locker_percentage_fee_bps: Option<u64>,
    price_with_discount_ratio_bps: Option<u64>,
    min_required_native_locked_amount: Option<u128>,
) -> ContractResult<Response> {
    let mut config = require_owner(storage, &info)?;

    if let Some(v) = collateral_ratio_bps {
        config.collateral_ratio_bps = v;
    }
    if let Some(v) = liquidation_ratio_bps {
        config.liquidation_ratio_bps = v;
    }
    if config.collateral_ratio_bps <= config.liquidation_ratio_bps {
        return Err(ContractError::Validation("collateral_ratio must exceed liquidation_ratio".into()));
    }
    if let Some(v) = locker_percentage_fee_bps {
        if v > MAX_LOCKER_FEE {
            return Err(ContractError::Validation("locker_percentage_fee_bps out of range".into()));
        }
        config.locker_percentage_fee_bps = v;
    }
    if let Some(v) = price_with_discount_ratio_bps {
        if v > 10_000 {
            return Err(ContractError::Validation("price_with_discount_ratio_bps out of range".into()));
        }
        config.price_with_discount_ratio_bps = v;
    }
    if let Some(v) = min_required_native_locked_amount {
        if v == 0 {
            return Err(ContractError::Validation("min_required_native_locked_amount must be > 0".into()));
        }
        config.min_required_native_locked_amount = v;
    }

    CONFIG.save(storage, &config)?;
    Ok(Response::new().add_attribute("action", "update_config"))
}

#[allow(clippy::too_many_arguments)]
pub fn instantiate_state(storage: &mut dyn Storage, owner: Addr, config: Config) -> ContractResult<()> {
    if config.collateral_ratio_bps <= config.liquidation_ratio_bps {
        return Err(ContractError::Validation("collateral_ratio must exceed liquidation_ratio".into()));
    }
    CONFIG.save(storage, &Config { owner, ..config })?;
    Ok(())
}
