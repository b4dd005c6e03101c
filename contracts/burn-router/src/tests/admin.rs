use bridge_common::error::ContractError;
use cosmwasm_std::testing::{mock_dependencies, mock_info};
use cosmwasm_std::Addr;

use crate::entrypoints::{instantiate_state, set_bitcoin_fee, update_config};
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
        protocol_percentage_fee_bps: 50,
        slasher_percentage_reward_bps: 100,
        bitcoin_fee: 1_000,
        starting_block_number: 100,
    }
}

#[test]
fn set_bitcoin_fee_requires_the_fee_oracle() {
    let mut deps = mock_dependencies();
    crate::entrypoints::instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = set_bitcoin_fee(deps.as_mut().storage, mock_info("owner", &[]), 500).unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized {}));

    let res = set_bitcoin_fee(deps.as_mut().storage, mock_info("fee_oracle", &[]), 500).unwrap();
    assert_eq!(res.attributes.last().unwrap().value, "500");
}

#[test]
fn update_config_rejects_non_owner() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = update_config(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        mock_info("stranger", &[]),
        None,
        None,
        None,
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized {}));
}

#[test]
fn update_config_rejects_out_of_range_protocol_fee() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = update_config(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        mock_info("owner", &[]),
        None,
        Some(crate::constants::MAX_PROTOCOL_FEE + 1),
        None,
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Validation(_)));
}

#[test]
fn update_config_rejects_non_increasing_starting_block() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = update_config(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        mock_info("owner", &[]),
        None,
        None,
        None,
        Some(50),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Validation(_)));
}
