//! Integer fee and ratio math shared by the locker registry and burn
//! router. Everything here widens to u128 before multiplying and floors on
//! division, per the rounding rules in §3/§4.3: fees round in the
//! protocol's favor, payouts to a slashed locker's collateral buyer round
//! in the buyer's favor.

use crate::error::{ContractError, ContractResult};

pub const MAX_BPS: u64 = 10_000;

/// Floor(`amount` * `numerator` / `denominator`), widened through u128 to
/// avoid overflow on the intermediate product.
pub fn mul_div_floor(amount: u64, numerator: u64, denominator: u64) -> ContractResult<u64> {
    if denominator == 0 {
        return Err(ContractError::Validation("division by zero".into()));
    }
    let product = (amount as u128) * (numerator as u128);
    let result = product / (denominator as u128);
    u64::try_from(result).map_err(|_| ContractError::Validation("mul_div overflow".into()))
}

/// `amount * bps / 10_000`, floored. Used for lockerPercentageFee,
/// protocolPercentageFee, and similar basis-point cuts.
pub fn apply_bps_floor(amount: u64, bps: u64) -> ContractResult<u64> {
    mul_div_floor(amount, bps, MAX_BPS)
}

/// Ceil(`amount` * `numerator` / `denominator`). Used where rounding must
/// favor the protocol rather than the payer (e.g. the minimum fee charged
/// on a burn request).
pub fn mul_div_ceil(amount: u64, numerator: u64, denominator: u64) -> ContractResult<u64> {
    if denominator == 0 {
        return Err(ContractError::Validation("division by zero".into()));
    }
    let product = (amount as u128) * (numerator as u128);
    let denom = denominator as u128;
    let result = (product + denom - 1) / denom;
    u64::try_from(result).map_err(|_| ContractError::Validation("mul_div overflow".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floor_rounds_down() {
        assert_eq!(mul_div_floor(10, 1, 3).unwrap(), 3);
    }

    #[test]
    fn mul_div_ceil_rounds_up() {
        assert_eq!(mul_div_ceil(10, 1, 3).unwrap(), 4);
    }

    #[test]
    fn apply_bps_floor_matches_simple_cases() {
        assert_eq!(apply_bps_floor(1_000, 150).unwrap(), 15);
        assert_eq!(apply_bps_floor(1_000, 10_000).unwrap(), 1_000);
    }
}
