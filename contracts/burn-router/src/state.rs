use bridge_common::bitcoin_script::ScriptType;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub relay_addr: Addr,
    pub ledger_addr: Addr,
    pub locker_registry_addr: Addr,
    pub treasury: Addr,
    /// Distinct from `owner`; sets `bitcoin_fee`.
    pub bitcoin_fee_oracle: Addr,
    /// Bitcoin blocks between request creation and its proof deadline. Must
    /// exceed the relay's finalization parameter.
    pub transfer_deadline: u64,
    pub protocol_percentage_fee_bps: u64,
    pub slasher_percentage_reward_bps: u64,
    /// Flat sat amount the locker is expected to spend on miner fees.
    pub bitcoin_fee: u64,
    /// Burn requests created before this Bitcoin block height are out of
    /// scope for proof/dispute.
    pub starting_block_number: u64,
}

#[cw_serde]
pub struct BurnRequest {
    pub amount: u64,
    pub burnt_amount: u64,
    pub sender: Addr,
    pub user_script: Binary,
    pub script_type: ScriptType,
    pub deadline: u64,
    pub is_transferred: bool,
    pub request_id_of_locker: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const REENTRANCY_GUARD: Item<bool> = Item::new("reentrancy_guard");

/// Keyed by `(locker target address, per-locker request index)`.
pub const BURN_REQUESTS: Map<(&Addr, u64), BurnRequest> = Map::new("burn_requests");
pub const BURN_REQUEST_COUNT: Map<&Addr, u64> = Map::new("burn_request_count");

/// `txId bytes -> true` once a burn-proof transaction has discharged all
/// but at most one of its outputs against outstanding requests (§I4).
pub const IS_USED_AS_BURN_PROOF: Map<&[u8], bool> = Map::new("is_used_as_burn_proof");
