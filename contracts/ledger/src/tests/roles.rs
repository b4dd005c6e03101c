use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::testing::{mock_dependencies, mock_info};
use cosmwasm_std::Addr;

use crate::entrypoints::{
    add_blacklister, blacklist, instantiate_state, is_blacklisted, transfer, un_blacklist,
};
use crate::state::BALANCES;

#[test]
fn blacklist_gate_blocks_transfer() -> ContractResult<()> {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, Addr::unchecked("owner"), 100, 10)?;
    BALANCES.save(deps.as_mut().storage, &Addr::unchecked("alice"), &100)?;

    add_blacklister(
        deps.as_mut().storage,
        mock_info("owner", &[]),
        Addr::unchecked("lister"),
    )?;
    blacklist(
        deps.as_mut().storage,
        mock_info("lister", &[]),
        Addr::unchecked("alice"),
    )?;
    assert!(is_blacklisted(deps.as_ref().storage, Addr::unchecked("alice"))?);

    let err = transfer(
        deps.as_mut().storage,
        mock_info("alice", &[]),
        Addr::unchecked("bob"),
        10,
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::State(_)));

    un_blacklist(
        deps.as_mut().storage,
        mock_info("lister", &[]),
        Addr::unchecked("alice"),
    )?;
    transfer(
        deps.as_mut().storage,
        mock_info("alice", &[]),
        Addr::unchecked("bob"),
        10,
    )?;
    assert_eq!(BALANCES.load(deps.as_ref().storage, &Addr::unchecked("bob"))?, 10);
    Ok(())
}

#[test]
fn add_blacklister_rejects_non_owner() {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, Addr::unchecked("owner"), 100, 10).unwrap();
    let err = add_blacklister(
        deps.as_mut().storage,
        mock_info("stranger", &[]),
        Addr::unchecked("lister"),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized {}));
}
