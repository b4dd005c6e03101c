use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
}

/// Sliding per-epoch mint window. `last_epoch` is `block_height /
/// epoch_length` as of the last successful mint; `last_mint_limit` is the
/// budget remaining within that epoch.
#[cw_serde]
pub struct EpochState {
    pub max_mint_limit: u64,
    pub epoch_length: u64,
    pub last_epoch: u64,
    pub last_mint_limit: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const EPOCH_STATE: Item<EpochState> = Item::new("epoch_state");
pub const TOTAL_SUPPLY: Item<u64> = Item::new("total_supply");

pub const BALANCES: Map<&Addr, u64> = Map::new("balances");
pub const MINTERS: Map<&Addr, bool> = Map::new("minters");
pub const BURNERS: Map<&Addr, bool> = Map::new("burners");
pub const BLACKLISTERS: Map<&Addr, bool> = Map::new("blacklisters");
pub const BLACKLIST: Map<&Addr, bool> = Map::new("blacklist");
