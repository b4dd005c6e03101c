use bridge_common::bitcoin_script::ScriptType;
use bridge_common::error::ContractError;
use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
use cosmwasm_std::{to_json_binary, Addr, Binary, ContractResult as CwContractResult, SystemResult, WasmQuery};

use crate::entrypoints::{cc_burn, instantiate_state};
use crate::state::Config;

fn base_config() -> Config {
    Config {
        owner: Addr::unchecked("owner"),
        relay_addr: Addr::unchecked("relay"),
        ledger_addr: Addr::unchecked("ledger"),
        locker_registry_addr: Addr::unchecked("locker_registry"),
        treasury: Addr::unchecked("treasury"),
        bitcoin_fee_oracle: Addr::unchecked("fee_oracle"),
        transfer_deadline: 200,
        protocol_percentage_fee_bps: 50, // 0.5%
        slasher_percentage_reward_bps: 100,
        bitcoin_fee: 1_000,
        starting_block_number: 100,
    }
}

fn mock_deps_with_locker_target(
    target: Addr,
) -> cosmwasm_std::OwnedDeps<
    cosmwasm_std::testing::MockStorage,
    cosmwasm_std::testing::MockApi,
    cosmwasm_std::testing::MockQuerier,
> {
    let mut deps = mock_dependencies();
    deps.querier.update_wasm(move |query| match query {
        WasmQuery::Smart { msg, .. } => {
            let parsed: locker_registry::msg::QueryMsg = cosmwasm_std::from_json(msg).unwrap();
            match parsed {
                locker_registry::msg::QueryMsg::LockerTargetForScript { .. } => {
                    SystemResult::Ok(CwContractResult::Ok(to_json_binary(&target).unwrap()))
                }
                _ => panic!("unexpected query in test"),
            }
        }
        _ => panic!("unexpected query kind in test"),
    });
    deps
}

#[test]
fn cc_burn_rejects_amount_below_dust_floor() {
    let mut deps = mock_deps_with_locker_target(Addr::unchecked("alice"));
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    // protocol_fee(2_000) = 10, dust floor = 10 + 2*1_000 = 2_010
    let err = cc_burn(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        mock_env(),
        mock_info("alice", &[]),
        2_000,
        Binary::from([7u8; 20]),
        ScriptType::P2wpkh,
        Binary::from(b"locker_script".as_slice()),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Economic(_)));
}

#[test]
fn cc_burn_rejects_wrong_user_script_length() {
    let mut deps = mock_deps_with_locker_target(Addr::unchecked("alice"));
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = cc_burn(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        mock_env(),
        mock_info("alice", &[]),
        100_000,
        Binary::from([7u8; 32]), // P2wpkh wants 20 bytes
        ScriptType::P2wpkh,
        Binary::from(b"locker_script".as_slice()),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Validation(_)));
}

#[test]
fn cc_burn_happy_path_queues_pull_fee_and_burn_submessage() {
    let mut deps = mock_deps_with_locker_target(Addr::unchecked("alice"));
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let res = cc_burn(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        mock_env(),
        mock_info("bob", &[]),
        100_000,
        Binary::from([7u8; 20]),
        ScriptType::P2wpkh,
        Binary::from(b"locker_script".as_slice()),
    )
    .unwrap();

    // pull + protocol-fee-transfer + burn submessage
    assert_eq!(res.messages.len(), 3);
    assert_eq!(res.messages[2].reply_on, cosmwasm_std::ReplyOn::Success);

    let pending = crate::reply::PENDING_CC_BURN.load(deps.as_ref().storage).unwrap();
    assert_eq!(pending.sender, Addr::unchecked("bob"));
    assert_eq!(pending.amount, 100_000);
    assert_eq!(pending.remaining, 100_000 - 500); // protocol fee = 0.5% of 100_000
}
