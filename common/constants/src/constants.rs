#![no_std]

pub const USD_TICKER: &[u8] = b"USD";

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// 1 USD, the unit every collateral and debt valuation is expressed in
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Interest rates are expressed per upkeep pass, scaled by 100_000 (1_500 = 1.5%)
pub const RATE_SCALE: u64 = 100_000;
pub const RATE_PRECISION: usize = 5;

/// Share of the collateral value that may be borrowed against (80%)
pub const DEFAULT_BORROW_LIMIT_BPS: u64 = 8_000;

/// Share of the collateral value counted by the health factor (85%)
pub const DEFAULT_LIQUIDATION_THRESHOLD_BPS: u64 = 8_500;

/// Share of the accrued interest kept by the protocol (10%)
pub const DEFAULT_RESERVE_FACTOR_BPS: u64 = 1_000;

// Default kinked curve, RATE_SCALE units
pub const DEFAULT_BASE_BORROW_RATE: u64 = 1_000;
pub const DEFAULT_SLOPE1: u64 = 2_000;
pub const DEFAULT_SLOPE2: u64 = 5_000;
pub const DEFAULT_SLOPE3: u64 = 20_000;
pub const DEFAULT_MID_UTILIZATION: u64 = 50_000;
pub const DEFAULT_OPTIMAL_UTILIZATION: u64 = 80_000;
pub const DEFAULT_MAX_BORROW_RATE: u64 = 50_000;

/// Keepers poll every 30 seconds on the reference deployment
pub const DEFAULT_UPKEEP_INTERVAL_SECONDS: u64 = 30;
