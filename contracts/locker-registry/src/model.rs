//! Collateral-ratio/health-factor numeric model (§4.2). `price` is always
//! the oracle's native-token → wrapped-BTC quote, expressed as wrapped-BTC
//! units per whole native token (pre-scaled by the caller to account for
//! `NATIVE_DECIMALS`).

use bridge_common::error::{ContractError, ContractResult};

use crate::constants::{HEALTH_FACTOR, NATIVE_DECIMALS, UPPER_HEALTH_FACTOR};

/// `nativeTokenLockedAmount * price / 10^NATIVE_DECIMALS`.
pub fn collateral_value_btc(native_locked: u128, price: u128) -> ContractResult<u64> {
    let scale = 10u128.pow(NATIVE_DECIMALS);
    let value = native_locked
        .checked_mul(price)
        .ok_or_else(|| ContractError::Economic("collateral value overflow".into()))?
        / scale;
    u64::try_from(value).map_err(|_| ContractError::Economic("collateral value overflow".into()))
}

/// `collateralValueBTC * 10_000 / collateralRatio - netMinted`, floored at
/// zero rather than going negative.
pub fn capacity(collateral_value_btc: u64, net_minted: u64, collateral_ratio_bps: u64) -> ContractResult<u64> {
    let max_mintable = bridge_common::math::mul_div_floor(collateral_value_btc, 10_000, collateral_ratio_bps)?;
    Ok(max_mintable.saturating_sub(net_minted))
}

/// `collateralValueBTC * 10_000 * UPPER_HEALTH_FACTOR / (netMinted *
/// liquidationRatio)`. `None` when `net_minted` is zero (an unminted
/// locker has no health factor, and is never liquidatable).
pub fn health_factor(collateral_value_btc: u64, net_minted: u64, liquidation_ratio_bps: u64) -> Option<u128> {
    if net_minted == 0 || liquidation_ratio_bps == 0 {
        return None;
    }
    let numerator = (collateral_value_btc as u128) * 10_000 * UPPER_HEALTH_FACTOR;
    let denominator = (net_minted as u128) * (liquidation_ratio_bps as u128);
    Some(numerator / denominator)
}

pub fn is_liquidatable(collateral_value_btc: u64, net_minted: u64, liquidation_ratio_bps: u64) -> bool {
    match health_factor(collateral_value_btc, net_minted, liquidation_ratio_bps) {
        Some(hf) => hf < HEALTH_FACTOR,
        None => false,
    }
}

/// `price * priceWithDiscountRatio / 10_000`.
pub fn discounted_price(price: u128, price_with_discount_ratio_bps: u64) -> u128 {
    price * price_with_discount_ratio_bps as u128 / 10_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collateral_value_scales_by_native_decimals() {
        let value = collateral_value_btc(10u128.pow(18), 5_000_000).unwrap();
        assert_eq!(value, 5_000_000);
    }

    #[test]
    fn capacity_floors_at_zero() {
        let cap = capacity(100, 1_000, 15_000).unwrap();
        assert_eq!(cap, 0);
    }

    #[test]
    fn health_factor_below_one_is_liquidatable() {
        assert!(is_liquidatable(100_000, 100_000, 20_000));
        assert!(!is_liquidatable(200_000, 100_000, 15_000));
    }
}
