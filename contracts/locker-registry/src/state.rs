use bridge_common::bitcoin_script::ScriptType;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Wrapped-BTC ledger contract (`coreBTC`).
    pub ledger_addr: Addr,
    /// Price oracle contract.
    pub oracle_addr: Addr,
    /// BurnRouter contract; the only caller authorized to invoke `burn`,
    /// `slash_idle_locker`, `slash_thief_locker`.
    pub burn_router_addr: Addr,
    /// Transfer-in router contract; the only caller authorized to invoke
    /// `mint`. External to this spec (§1).
    pub minter_addr: Addr,
    /// Native-token denom collateral is posted and paid out in.
    pub native_denom: String,
    pub collateral_ratio_bps: u64,
    pub liquidation_ratio_bps: u64,
    pub locker_percentage_fee_bps: u64,
    pub price_with_discount_ratio_bps: u64,
    pub min_required_native_locked_amount: u128,
}

#[cw_serde]
pub struct Locker {
    pub locker_locking_script: Binary,
    pub locker_rescue_script: Binary,
    pub locker_rescue_type: ScriptType,
    pub native_token_locked_amount: u128,
    pub net_minted: u64,
    pub slashing_core_btc_amount: u64,
    pub is_candidate: bool,
    pub is_locker: bool,
    /// 0 = active; otherwise the timestamp (seconds) at which the locker
    /// becomes Inactive.
    pub inactivation_timestamp: u64,
}

impl Locker {
    pub fn is_active(&self, now: u64) -> bool {
        self.is_locker && (self.inactivation_timestamp == 0 || self.inactivation_timestamp > now)
    }

    pub fn is_inactive(&self, now: u64) -> bool {
        self.is_locker && self.inactivation_timestamp != 0 && self.inactivation_timestamp <= now
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Keyed by locker target (contract-chain) address.
pub const LOCKERS: Map<&Addr, Locker> = Map::new("lockers");

/// Inverse of `Locker::locker_locking_script`; `(script bytes) -> target`.
pub const LOCKER_TARGET_ADDRESS: Map<&[u8], Addr> = Map::new("locker_target_address");

pub const APPROVED_LOCKERS: Map<&Addr, bool> = Map::new("approved_lockers");
