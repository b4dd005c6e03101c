use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub max_mint_limit: u64,
    pub epoch_length: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Minter-only. Rejects if `amount` exceeds the epoch's remaining
    /// budget.
    Mint { to: Addr, amount: u64 },
    /// Burner-only, burns from the caller.
    Burn { amount: u64 },
    /// Owner override: burns from an arbitrary account, bypassing the
    /// blacklist gate for this call only.
    OwnerBurn { user: Addr, amount: u64 },
    Transfer { recipient: Addr, amount: u64 },
    TransferFrom {
        owner: Addr,
        recipient: Addr,
        amount: u64,
    },
    AddMinter { address: Addr },
    RemoveMinter { address: Addr },
    AddBurner { address: Addr },
    RemoveBurner { address: Addr },
    AddBlacklister { address: Addr },
    RemoveBlacklister { address: Addr },
    Blacklist { address: Addr },
    UnBlacklist { address: Addr },
    UpdateEpochConfig { max_mint_limit: u64, epoch_length: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(u64)]
    Balance { address: Addr },
    #[returns(u64)]
    TotalSupply {},
    #[returns(bool)]
    IsBlacklisted { address: Addr },
    #[returns(bool)]
    IsMinter { address: Addr },
    #[returns(bool)]
    IsBurner { address: Addr },
    #[returns(bool)]
    IsBlacklister { address: Addr },
    #[returns(crate::state::EpochState)]
    EpochState {},
}

#[cw_serde]
pub enum MigrateMsg {}
