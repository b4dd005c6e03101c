//! Thin query client for the external Bitcoin light-client (relay)
//! contract. The relay itself is out of scope here; callers configure its
//! address at instantiation and this module only shapes the wire messages.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_binary, Addr, Binary, QuerierWrapper, QueryRequest, StdResult, WasmQuery};

use crate::adapter::Adapter;
use crate::error::{ContractError, ContractResult};

#[cw_serde]
pub enum RelayQueryMsg {
    LastSubmittedHeight {},
    FinalizationParameter {},
    CheckTxProof {
        tx_id: Adapter<bitcoin::Txid>,
        block_height: u64,
        intermediate_nodes: Binary,
        index: u32,
    },
}

#[cw_serde]
pub struct CheckTxProofResponse {
    pub confirmed: bool,
}

/// Queries the relay contract at `relay_addr` for the Bitcoin block height
/// of its most recently submitted, finalized header.
pub fn query_last_submitted_height(
    querier: &QuerierWrapper,
    relay_addr: &Addr,
) -> ContractResult<u64> {
    query_relay(querier, relay_addr, &RelayQueryMsg::LastSubmittedHeight {})
}

/// Queries the relay's configured finalization parameter (number of
/// confirmations required before a header is considered final).
pub fn query_finalization_parameter(
    querier: &QuerierWrapper,
    relay_addr: &Addr,
) -> ContractResult<u64> {
    query_relay(
        querier,
        relay_addr,
        &RelayQueryMsg::FinalizationParameter {},
    )
}

/// Asks the relay to verify a transaction's SPV merkle inclusion proof
/// against one of its finalized headers.
pub fn query_check_tx_proof(
    querier: &QuerierWrapper,
    relay_addr: &Addr,
    tx_id: bitcoin::Txid,
    block_height: u64,
    intermediate_nodes: Binary,
    index: u32,
) -> ContractResult<bool> {
    let msg = RelayQueryMsg::CheckTxProof {
        tx_id: tx_id.into(),
        block_height,
        intermediate_nodes,
        index,
    };
    let resp: CheckTxProofResponse = query_wasm(querier, relay_addr, &msg)?;
    Ok(resp.confirmed)
}

fn query_relay<T: serde::de::DeserializeOwned>(
    querier: &QuerierWrapper,
    relay_addr: &Addr,
    msg: &RelayQueryMsg,
) -> ContractResult<T> {
    query_wasm(querier, relay_addr, msg)
}

fn query_wasm<T: serde::de::DeserializeOwned>(
    querier: &QuerierWrapper,
    contract_addr: &Addr,
    msg: &RelayQueryMsg,
) -> ContractResult<T> {
    let query = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: contract_addr.to_string(),
        msg: to_binary(msg).map_err(ContractError::from)?,
    });
    let res: StdResult<T> = querier.query(&query);
    res.map_err(|e| ContractError::External(format!("relay query failed: {e}")))
}
