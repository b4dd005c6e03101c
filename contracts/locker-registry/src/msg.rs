use bridge_common::bitcoin_script::ScriptType;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

#[cw_serde]
pub struct InstantiateMsg {
    pub ledger_addr: Addr,
    pub oracle_addr: Addr,
    pub burn_router_addr: Addr,
    pub minter_addr: Addr,
    pub native_denom: String,
    pub collateral_ratio_bps: u64,
    pub liquidation_ratio_bps: u64,
    pub locker_percentage_fee_bps: u64,
    pub price_with_discount_ratio_bps: u64,
    pub min_required_native_locked_amount: u128,
}

#[cw_serde]
pub enum ExecuteMsg {
    RequestToBecomeLocker {
        locker_locking_script: Binary,
        native_amount: u128,
        rescue_type: ScriptType,
        rescue_script: Binary,
    },
    RevokeRequest {},
    AddLocker {
        target: Addr,
    },
    AddCollateral {
        target: Addr,
        amount: u128,
    },
    RemoveCollateral {
        amount: u128,
    },
    RequestInactivation {},
    RequestActivation {},
    SelfRemoveLocker {},
    Mint {
        locker_locking_script: Binary,
        receiver: Addr,
        tx_id: Binary,
        amount: u64,
    },
    Burn {
        locker_locking_script: Binary,
        amount: u64,
    },
    SlashIdleLocker {
        target: Addr,
        reward_amount_btc: u64,
        reward_recipient: Addr,
        amount_btc: u64,
        user_recipient: Addr,
    },
    SlashThiefLocker {
        target: Addr,
        reward_amount_btc: u64,
        reward_recipient: Addr,
        amount_btc: u64,
    },
    LiquidateLocker {
        target: Addr,
        collateral_amount: u128,
    },
    BuySlashedCollateralOfLocker {
        target: Addr,
        collateral_amount: u128,
    },
    UpdateConfig {
        collateral_ratio_bps: Option<u64>,
        liquidation_ratio_bps: Option<u64>,
        locker_percentage_fee_bps: Option<u64>,
        price_with_discount_ratio_bps: Option<u64>,
        min_required_native_locked_amount: Option<u128>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Locker)]
    Locker { target: Addr },
    #[returns(bool)]
    IsLockerApproved { target: Addr },
    #[returns(Vec<Addr>)]
    ListLockers {
        start_after: Option<Addr>,
        limit: Option<u32>,
    },
    #[returns(u64)]
    LockerHealth { target: Addr },
    #[returns(u64)]
    Capacity { target: Addr },
    #[returns(crate::state::Config)]
    Config {},
    #[returns(Addr)]
    LockerTargetForScript { locking_script: Binary },
}

#[cw_serde]
pub enum MigrateMsg {}
