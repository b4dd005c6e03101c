use bridge_common::error::ContractError;
use cosmwasm_std::testing::{mock_dependencies, mock_info};
use cosmwasm_std::{Addr, Binary};

use crate::entrypoints::{burn_proof, dispute_burn, instantiate_state};
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
fn burn_proof_rejects_unsorted_vout_indexes() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = burn_proof(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        Binary::from(b"tx".as_slice()),
        150,
        Binary::from(b"proof".as_slice()),
        0,
        Binary::from(b"locker_script".as_slice()),
        vec![0, 1],
        vec![2, 2],
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Validation(_)));
}

#[test]
fn burn_proof_rejects_mismatched_index_lengths() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = burn_proof(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        Binary::from(b"tx".as_slice()),
        150,
        Binary::from(b"proof".as_slice()),
        0,
        Binary::from(b"locker_script".as_slice()),
        vec![0, 1],
        vec![1, 3, 5],
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Validation(_)));
}

#[test]
fn burn_proof_rejects_pre_starting_block() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = burn_proof(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        Binary::from(b"tx".as_slice()),
        50,
        Binary::from(b"proof".as_slice()),
        0,
        Binary::from(b"locker_script".as_slice()),
        vec![],
        vec![],
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Proof(_)));
}

#[test]
fn dispute_burn_requires_owner() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, base_config()).unwrap();

    let err = dispute_burn(
        deps.as_mut().storage,
        &deps.as_ref().querier,
        mock_info("stranger", &[]),
        Binary::from(b"locker_script".as_slice()),
        vec![0],
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized {}));
}
