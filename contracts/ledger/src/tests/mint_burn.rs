use bridge_common::error::{ContractError, ContractResult};
use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
use cosmwasm_std::Addr;

use crate::entrypoints::{balance, burn, epoch_state, mint, total_supply};
use crate::entrypoints::instantiate_state;
use crate::state::MINTERS;

fn setup() -> cosmwasm_std::OwnedDeps<
    cosmwasm_std::testing::MockStorage,
    cosmwasm_std::testing::MockApi,
    cosmwasm_std::testing::MockQuerier,
> {
    let mut deps = mock_dependencies();
    instantiate_state(deps.as_mut().storage, Addr::unchecked("owner"), 100, 10).unwrap();
    MINTERS
        .save(deps.as_mut().storage, &Addr::unchecked("minter"), &true)
        .unwrap();
    deps
}

#[test]
fn mint_credits_balance_and_supply() -> ContractResult<()> {
    let mut deps = setup();
    let env = mock_env();
    let info = mock_info("minter", &[]);

    mint(deps.as_mut().storage, env, info, Addr::unchecked("alice"), 50)?;

    assert_eq!(balance(deps.as_ref().storage, Addr::unchecked("alice"))?, 50);
    assert_eq!(total_supply(deps.as_ref().storage)?, 50);
    Ok(())
}

#[test]
fn mint_rejects_non_minter() {
    let mut deps = setup();
    let env = mock_env();
    let info = mock_info("stranger", &[]);

    let err = mint(deps.as_mut().storage, env, info, Addr::unchecked("alice"), 10).unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized {}));
}

#[test]
fn epoch_cap_rolls_over_on_new_epoch() -> ContractResult<()> {
    let mut deps = setup();
    let mut env = mock_env();
    env.block.height = 5;
    let info = mock_info("minter", &[]);

    mint(deps.as_mut().storage, env.clone(), info.clone(), Addr::unchecked("alice"), 50)?;
    let err = mint(deps.as_mut().storage, env.clone(), info.clone(), Addr::unchecked("alice"), 60).unwrap_err();
    assert!(matches!(err, ContractError::Economic(_)));

    env.block.height = 10;
    mint(deps.as_mut().storage, env, info, Addr::unchecked("alice"), 100)?;

    let epoch = epoch_state(deps.as_ref().storage)?;
    assert_eq!(epoch.last_epoch, 1);
    Ok(())
}

#[test]
fn burn_requires_burner_role() {
    let mut deps = setup();
    let info = mock_info("stranger", &[]);
    let err = burn(deps.as_mut().storage, info, 1).unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized {}));
}
