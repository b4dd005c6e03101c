pub const MAX_LOCKER_FEE: u64 = 10_000;

pub const NATIVE_DECIMALS: u32 = 18;

/// Scaling applied to `healthFactor`; a locker is liquidatable below
/// `HEALTH_FACTOR` (1.0 in this fixed-point base).
pub const HEALTH_FACTOR: u128 = 10_000;
pub const UPPER_HEALTH_FACTOR: u128 = 10_000;

/// Wall-clock delay between `requestInactivation` and a locker actually
/// becoming Inactive.
pub const INACTIVATION_DELAY: u64 = 60 * 60 * 24 * 7; // 1 week, in seconds
