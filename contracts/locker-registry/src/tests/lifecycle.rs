use bridge_common::bitcoin_script::ScriptType;
use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::testing::{mock_dependencies, mock_info};
use cosmwasm_std::{Addr, Binary, Coin};

use crate::entrypoints::{add_locker, instantiate_state, locker, request_to_become_locker, revoke_request};
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

#[test]
fn request_to_become_locker_requires_matching_funds() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, Addr::unchecked("owner"), base_config()).unwrap();

    let info = mock_info("alice", &[Coin::new(500, "native")]);
    let err = request_to_become_locker(
        deps.as_mut().storage,
        info,
        Binary::from(b"script".as_slice()),
        1_000,
        ScriptType::P2wpkh,
        Binary::from(b"rescue".as_slice()),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Validation(_)));
}

#[test]
fn candidate_lifecycle_add_then_revoke_fails() -> ContractResult<()> {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, Addr::unchecked("owner"), base_config())?;

    request_to_become_locker(
        deps.as_mut().storage,
        mock_info("alice", &[Coin::new(1_000, "native")]),
        Binary::from(b"script".as_slice()),
        1_000,
        ScriptType::P2wpkh,
        Binary::from(b"rescue".as_slice()),
    )?;

    add_locker(deps.as_mut().storage, mock_info("owner", &[]), Addr::unchecked("alice"))?;
    let loaded = locker(deps.as_ref().storage, Addr::unchecked("alice"))?;
    assert!(loaded.is_locker);
    assert!(!loaded.is_candidate);

    let err = revoke_request(deps.as_mut().storage, mock_info("alice", &[])).unwrap_err();
    assert!(matches!(err, ContractError::State(_)));
    Ok(())
}

#[test]
fn revoke_request_refunds_collateral() -> ContractResult<()> {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, Addr::unchecked("owner"), base_config())?;

    request_to_become_locker(
        deps.as_mut().storage,
        mock_info("alice", &[Coin::new(1_000, "native")]),
        Binary::from(b"script".as_slice()),
        1_000,
        ScriptType::P2wpkh,
        Binary::from(b"rescue".as_slice()),
    )?;

    let res = revoke_request(deps.as_mut().storage, mock_info("alice", &[]))?;
    assert_eq!(res.messages.len(), 1);
    assert!(locker(deps.as_ref().storage, Addr::unchecked("alice")).is_err());
    Ok(())
}
