#![no_std]

use common_constants::{
    BPS_PRECISION, DEFAULT_BASE_BORROW_RATE, DEFAULT_BORROW_LIMIT_BPS,
    DEFAULT_LIQUIDATION_THRESHOLD_BPS, DEFAULT_MAX_BORROW_RATE, DEFAULT_MID_UTILIZATION,
    DEFAULT_OPTIMAL_UTILIZATION, DEFAULT_RESERVE_FACTOR_BPS, DEFAULT_SLOPE1, DEFAULT_SLOPE2,
    DEFAULT_SLOPE3, RATE_PRECISION,
};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Where the USD price of a listed asset comes from.
///
/// The ledger reads the latest `ticker/USD` round straight from the aggregator storage.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug, PartialEq, Eq)]
pub struct OracleProvider<M: ManagedTypeApi> {
    pub aggregator: ManagedAddress<M>,
    pub ticker: ManagedBuffer<M>,
    pub max_price_stale_seconds: u64,
}

/// Immutable per-asset record resolved once when the ledger is deployed.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug, PartialEq, Eq)]
pub struct MarketConfig<M: ManagedTypeApi> {
    pub asset_decimals: usize,
    pub oracle: OracleProvider<M>,
}

/// One entry of the deployment listing: the asset plus its oracle reference.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketListing<M: ManagedTypeApi> {
    pub token: EgldOrEsdtTokenIdentifier<M>,
    pub asset_decimals: usize,
    pub aggregator: ManagedAddress<M>,
    pub ticker: ManagedBuffer<M>,
    pub max_price_stale_seconds: u64,
}

impl<M: ManagedTypeApi> MarketListing<M> {
    pub fn into_config(self) -> (EgldOrEsdtTokenIdentifier<M>, MarketConfig<M>) {
        (
            self.token,
            MarketConfig {
                asset_decimals: self.asset_decimals,
                oracle: OracleProvider {
                    aggregator: self.aggregator,
                    ticker: self.ticker,
                    max_price_stale_seconds: self.max_price_stale_seconds,
                },
            },
        )
    }
}

/// Interest rate curve of a market.
///
/// Rates and utilization points use `RATE_PRECISION` (5 decimals, 1.0 = 100_000), rates are
/// applied once per upkeep pass. `reserve_factor` uses `BPS_PRECISION`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketParams<M: ManagedTypeApi> {
    pub base_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub slope1: ManagedDecimal<M, NumDecimals>,
    pub slope2: ManagedDecimal<M, NumDecimals>,
    pub slope3: ManagedDecimal<M, NumDecimals>,
    pub mid_utilization: ManagedDecimal<M, NumDecimals>,
    pub optimal_utilization: ManagedDecimal<M, NumDecimals>,
    pub max_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub reserve_factor: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> MarketParams<M> {
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        base_borrow_rate: u64,
        slope1: u64,
        slope2: u64,
        slope3: u64,
        mid_utilization: u64,
        optimal_utilization: u64,
        max_borrow_rate: u64,
        reserve_factor: u64,
    ) -> Self {
        let rate = |value: u64| ManagedDecimal::from_raw_units(BigUint::from(value), RATE_PRECISION);
        MarketParams {
            base_borrow_rate: rate(base_borrow_rate),
            slope1: rate(slope1),
            slope2: rate(slope2),
            slope3: rate(slope3),
            mid_utilization: rate(mid_utilization),
            optimal_utilization: rate(optimal_utilization),
            max_borrow_rate: rate(max_borrow_rate),
            reserve_factor: ManagedDecimal::from_raw_units(
                BigUint::from(reserve_factor),
                BPS_PRECISION,
            ),
        }
    }
}

impl<M: ManagedTypeApi> Default for MarketParams<M> {
    fn default() -> Self {
        MarketParams::from_raw(
            DEFAULT_BASE_BORROW_RATE,
            DEFAULT_SLOPE1,
            DEFAULT_SLOPE2,
            DEFAULT_SLOPE3,
            DEFAULT_MID_UTILIZATION,
            DEFAULT_OPTIMAL_UTILIZATION,
            DEFAULT_MAX_BORROW_RATE,
            DEFAULT_RESERVE_FACTOR_BPS,
        )
    }
}

/// Process-wide collateral fractions, both in BPS.
///
/// Borrowing stops at `borrow_limit`, liquidation starts once debt crosses
/// `liquidation_threshold`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RiskParams<M: ManagedTypeApi> {
    pub borrow_limit: ManagedDecimal<M, NumDecimals>,
    pub liquidation_threshold: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> RiskParams<M> {
    pub fn from_bps(borrow_limit: u64, liquidation_threshold: u64) -> Self {
        RiskParams {
            borrow_limit: ManagedDecimal::from_raw_units(BigUint::from(borrow_limit), BPS_PRECISION),
            liquidation_threshold: ManagedDecimal::from_raw_units(
                BigUint::from(liquidation_threshold),
                BPS_PRECISION,
            ),
        }
    }

    /// The threshold has to leave a margin above the borrow limit and cannot exceed 100%.
    pub fn is_valid(&self) -> bool {
        let one = ManagedDecimal::from_raw_units(BigUint::from(10_000u64), BPS_PRECISION);
        self.borrow_limit > ManagedDecimal::from_raw_units(BigUint::zero(), BPS_PRECISION)
            && self.liquidation_threshold > self.borrow_limit
            && self.liquidation_threshold <= one
    }
}

impl<M: ManagedTypeApi> Default for RiskParams<M> {
    fn default() -> Self {
        RiskParams::from_bps(DEFAULT_BORROW_LIMIT_BPS, DEFAULT_LIQUIDATION_THRESHOLD_BPS)
    }
}

/// Price of one whole unit of an asset, WAD based, together with the asset decimals.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PriceFeedShort<M: ManagedTypeApi> {
    pub asset_decimals: usize,
    pub price: ManagedDecimal<M, NumDecimals>,
}

/// Aggregated USD view of an account, all values WAD based.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountSnapshot<M: ManagedTypeApi> {
    pub collateral_usd: ManagedDecimal<M, NumDecimals>,
    pub weighted_collateral_usd: ManagedDecimal<M, NumDecimals>,
    pub borrow_capacity_usd: ManagedDecimal<M, NumDecimals>,
    pub debt_usd: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> AccountSnapshot<M> {
    pub fn has_debt(&self) -> bool {
        self.debt_usd.into_raw_units() > &BigUint::zero()
    }
}

/// What changed a position, carried by the `update_position` event.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionAction {
    Supply,
    Withdraw,
    Borrow,
    Repay,
    SupplyInterest,
    BorrowInterest,
    Liquidation,
}

/// The two position books every account can hold per asset.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionSide {
    Supply,
    Borrow,
}
