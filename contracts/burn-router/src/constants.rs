pub const MAX_PROTOCOL_FEE: u64 = 10_000;
pub const MAX_SLASHER_REWARD: u64 = 10_000;
