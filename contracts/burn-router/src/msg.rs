use bridge_common::bitcoin_script::ScriptType;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

#[cw_serde]
pub struct InstantiateMsg {
    pub relay_addr: Addr,
    pub ledger_addr: Addr,
    pub locker_registry_addr: Addr,
    pub treasury: Addr,
    pub bitcoin_fee_oracle: Addr,
    pub transfer_deadline: u64,
    pub protocol_percentage_fee_bps: u64,
    pub slasher_percentage_reward_bps: u64,
    pub bitcoin_fee: u64,
    pub starting_block_number: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    CcBurn {
        amount: u64,
        user_script: Binary,
        script_type: ScriptType,
        locker_script: Binary,
    },
    BurnProof {
        tx: Binary,
        block_number: u64,
        merkle_proof: Binary,
        tx_index: u32,
        locker_script: Binary,
        burn_req_indexes: Vec<u64>,
        vout_indexes: Vec<u32>,
    },
    DisputeBurn {
        locker_script: Binary,
        indexes: Vec<u64>,
    },
    DisputeLocker {
        locker_script: Binary,
        input_tx: Binary,
        output_tx: Binary,
        input_merkle_proof: Binary,
        input_index: u32,
        input_tx_index: u32,
        input_block_number: u64,
    },
    SetBitcoinFee {
        bitcoin_fee: u64,
    },
    UpdateConfig {
        transfer_deadline: Option<u64>,
        protocol_percentage_fee_bps: Option<u64>,
        slasher_percentage_reward_bps: Option<u64>,
        starting_block_number: Option<u64>,
        treasury: Option<Addr>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::BurnRequest)]
    BurnRequest { locker: Addr, index: u64 },
    #[returns(Vec<crate::state::BurnRequest>)]
    ListBurnRequests {
        locker: Addr,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(bool)]
    IsUsedAsBurnProof { tx_id: Binary },
    #[returns(crate::state::Config)]
    Config {},
}

#[cw_serde]
pub enum MigrateMsg {}
