//! Thin query client for the external price oracle contract. Only the
//! price-equivalence query the burn router and locker registry need is
//! modeled; the oracle's own aggregation logic is out of scope.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, WasmQuery};

use crate::error::{ContractError, ContractResult};

#[cw_serde]
pub enum OracleQueryMsg {
    EquivalentOutputAmount {
        input_amount: u128,
        input_decimals: u8,
        output_decimals: u8,
        input_symbol: String,
        output_symbol: String,
    },
}

#[cw_serde]
pub struct EquivalentOutputAmountResponse {
    pub output_amount: u128,
}

/// Converts `input_amount` of `input_symbol` into the equivalent amount of
/// `output_symbol`, at the oracle's current price, scaled from
/// `input_decimals` to `output_decimals`.
#[allow(clippy::too_many_arguments)]
pub fn query_equivalent_output_amount(
    querier: &QuerierWrapper,
    oracle_addr: &Addr,
    input_amount: u128,
    input_decimals: u8,
    output_decimals: u8,
    input_symbol: impl Into<String>,
    output_symbol: impl Into<String>,
) -> ContractResult<u128> {
    let msg = OracleQueryMsg::EquivalentOutputAmount {
        input_amount,
        input_decimals,
        output_decimals,
        input_symbol: input_symbol.into(),
        output_symbol: output_symbol.into(),
    };

    let query = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: oracle_addr.to_string(),
        msg: to_binary(&msg).map_err(ContractError::from)?,
    });
    let res: StdResult<EquivalentOutputAmountResponse> = querier.query(&query);
    res.map(|r| r.output_amount)
        .map_err(|e| ContractError::External(format!("oracle query failed: {e}")))
}
