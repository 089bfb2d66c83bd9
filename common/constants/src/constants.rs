#![no_std]

pub const SECONDS_PER_YEAR: u64 = 31_556_926;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Scale of prices, account values and every protocol factor
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// A whole outstanding borrow can be repaid in one liquidation until an
/// admin lowers the cap
pub const DEFAULT_CLOSE_FACTOR: u128 = 1_000_000_000_000_000_000;

/// Liquidators receive 8% more collateral value than they repay
pub const DEFAULT_LIQUIDATION_INCENTIVE: u128 = 1_080_000_000_000_000_000;

/// Upper bound for the liquidation incentive (150%)
pub const MAX_LIQUIDATION_INCENTIVE: u128 = 1_500_000_000_000_000_000;

pub const DEFAULT_MAX_ENTERED_MARKETS: usize = 10;
