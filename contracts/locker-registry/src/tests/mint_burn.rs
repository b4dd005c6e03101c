use bridge_common::bitcoin_script::ScriptType;
use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
use cosmwasm_std::{Addr, Binary, Coin};

use crate::entrypoints::{add_locker, burn, instantiate_state, locker, mint, request_to_become_locker};
use crate::state::Config;

fn base_config() -> Config {
    Config {
        owner: Addr::unchecked("owner"),
        ledger_addr: Addr::unchecked("ledger"),
        oracle_addr: Addr::unchecked("oracle"),
        burn_router_addr: Addr::unchecked("burn_router"),
        minter_addr: Addr::unchecked("minter"),
        native_denom: "native".to_string(),
        collateral_ratio_bps: 15_000,
        liquidation_ratio_bps: 12_000,
        locker_percentage_fee_bps: 100,
        price_with_discount_ratio_bps: 9_000,
        min_required_native_locked_amount: 1_000,
    }
}

fn setup_active_locker(deps: &mut cosmwasm_std::OwnedDeps<
    cosmwasm_std::testing::MockStorage,
    cosmwasm_std::testing::MockApi,
    cosmwasm_std::testing::MockQuerier,
>) {
    instantiate_state(deps.as_mut().storage, Addr::unchecked("owner"), base_config()).unwrap();
    request_to_become_locker(
        deps.as_mut().storage,
        mock_info("alice", &[Coin::new(1_000, "native")]),
        Binary::from(b"script".as_slice()),
        1_000,
        ScriptType::P2wpkh,
        Binary::from(b"rescue".as_slice()),
    )
    .unwrap();
    add_locker(deps.as_mut().storage, mock_info("owner", &[]), Addr::unchecked("alice")).unwrap();
}

#[test]
fn mint_rejects_non_minter() {
    let mut deps = mock_dependencies();
    setup_active_locker(&mut deps);

    let err = mint(
        deps.as_mut().storage,
        mock_info("stranger", &[]),
        Binary::from(b"script".as_slice()),
        Addr::unchecked("bob"),
        Binary::from(b"txid".as_slice()),
        1_000,
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized {}));
}

#[test]
fn mint_increments_net_minted_and_splits_locker_fee() -> ContractResult<()> {
    let mut deps = mock_dependencies();
    setup_active_locker(&mut deps);

    let res = mint(
        deps.as_mut().storage,
        mock_info("minter", &[]),
        Binary::from(b"script".as_slice()),
        Addr::unchecked("bob"),
        Binary::from(b"txid".as_slice()),
        100_000,
    )?;
    // locker_percentage_fee_bps = 100 (1%) -> fee = 1_000, two mint messages
    assert_eq!(res.messages.len(), 2);

    let loaded = locker(deps.as_ref().storage, Addr::unchecked("alice"))?;
    assert_eq!(loaded.net_minted, 100_000);
    Ok(())
}

#[test]
fn burn_requires_burn_router_caller() {
    let mut deps = mock_dependencies();
    setup_active_locker(&mut deps);

    let err = burn(
        deps.as_mut().storage,
        mock_env(),
        mock_info("stranger", &[]),
        Binary::from(b"script".as_slice()),
        1_000,
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized {}));
}

#[test]
fn burn_decrements_net_minted() -> ContractResult<()> {
    let mut deps = mock_dependencies();
    setup_active_locker(&mut deps);
    mint(
        deps.as_mut().storage,
        mock_info("minter", &[]),
        Binary::from(b"script".as_slice()),
        Addr::unchecked("bob"),
        Binary::from(b"txid".as_slice()),
        100_000,
    )?;

    burn(
        deps.as_mut().storage,
        mock_env(),
        mock_info("burn_router", &[]),
        Binary::from(b"script".as_slice()),
        50_000,
    )?;

    let loaded = locker(deps.as_ref().storage, Addr::unchecked("alice"))?;
    // after_locker_fee = 50_000 - 1% = 49_500
    assert_eq!(loaded.net_minted, 100_000 - 49_500);
    Ok(())
}
