use common_constants::{BPS, RATE_SCALE};
use common_errors::{
    ERROR_ASSET_ALREADY_SUPPORTED, ERROR_INVALID_AGGREGATOR, ERROR_INVALID_BORROW_RATE_PARAMS,
    ERROR_INVALID_RESERVE_FACTOR, ERROR_INVALID_RISK_PARAMS, ERROR_INVALID_TICKER,
    ERROR_INVALID_UTILIZATION_RANGE, ERROR_KEEPER_ALREADY_REGISTERED, ERROR_KEEPER_NOT_REGISTERED,
};
use common_structs::{MarketListing, MarketParams, RiskParams};

use crate::{cache::MarketCache, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Lists an asset with zeroed totals and the default rate curve.
    /// Only reachable from `init`: the asset set never changes afterwards.
    fn list_market(&self, listing: MarketListing<Self::Api>) {
        require!(!listing.aggregator.is_zero(), ERROR_INVALID_AGGREGATOR);
        require!(!listing.ticker.is_empty(), ERROR_INVALID_TICKER);
        require!(
            self.allowed_tokens().insert(listing.token.clone()),
            ERROR_ASSET_ALREADY_SUPPORTED
        );

        self.create_market_event(
            &listing.token,
            listing.asset_decimals,
            &listing.aggregator,
            &listing.ticker,
            listing.max_price_stale_seconds,
        );

        let (token, config) = listing.into_config();
        let zero = self.to_decimal(BigUint::zero(), config.asset_decimals);

        self.market_config(&token).set(&config);
        self.supplied(&token).set(&zero);
        self.borrowed(&token).set(&zero);
        self.reserves(&token).set(&zero);
        self.revenue(&token).set(&zero);
        self.bad_debt(&token).set(&zero);
        self.last_borrow_rate(&token).set(self.rate_zero());
        self.last_accrual_timestamp(&token)
            .set(self.blockchain().get_block_timestamp());

        let params = MarketParams::default();
        self.emit_market_params(&token, &params);
        self.market_params(&token).set(params);
    }

    /// Replaces the rate curve of a listed asset. Rates and utilization points are raw
    /// values at 5 decimals, `reserve_factor` is in BPS.
    ///
    /// # Errors
    /// - `ERROR_INVALID_UTILIZATION_RANGE`: Not `0 < mid < optimal < 1`.
    /// - `ERROR_INVALID_BORROW_RATE_PARAMS`: `max_borrow_rate` below `base_borrow_rate`.
    /// - `ERROR_INVALID_RESERVE_FACTOR`: `reserve_factor` of 100% or more.
    #[allow(clippy::too_many_arguments)]
    #[only_owner]
    #[endpoint(setMarketParams)]
    fn set_market_params(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        base_borrow_rate: u64,
        slope1: u64,
        slope2: u64,
        slope3: u64,
        mid_utilization: u64,
        optimal_utilization: u64,
        max_borrow_rate: u64,
        reserve_factor: u64,
    ) {
        self.require_asset_supported(&asset);

        require!(
            mid_utilization > 0
                && mid_utilization < optimal_utilization
                && optimal_utilization < RATE_SCALE,
            ERROR_INVALID_UTILIZATION_RANGE
        );
        require!(
            max_borrow_rate >= base_borrow_rate,
            ERROR_INVALID_BORROW_RATE_PARAMS
        );
        require!(
            reserve_factor < BPS as u64,
            ERROR_INVALID_RESERVE_FACTOR
        );

        let params = MarketParams::from_raw(
            base_borrow_rate,
            slope1,
            slope2,
            slope3,
            mid_utilization,
            optimal_utilization,
            max_borrow_rate,
            reserve_factor,
        );

        self.emit_market_params(&asset, &params);
        self.market_params(&asset).set(params);
    }

    /// Replaces the borrow limit and liquidation threshold, both in BPS.
    #[only_owner]
    #[endpoint(setRiskParams)]
    fn set_risk_params(&self, borrow_limit: u64, liquidation_threshold: u64) {
        let params = RiskParams::from_bps(borrow_limit, liquidation_threshold);
        require!(params.is_valid(), ERROR_INVALID_RISK_PARAMS);

        self.risk_params_event(
            params.borrow_limit.into_raw_units(),
            params.liquidation_threshold.into_raw_units(),
        );
        self.risk_params().set(params);
    }

    #[only_owner]
    #[endpoint(addKeeper)]
    fn add_keeper(&self, keeper: ManagedAddress) {
        require!(
            self.keepers().insert(keeper.clone()),
            ERROR_KEEPER_ALREADY_REGISTERED
        );
        self.update_keeper_event(&keeper, true);
    }

    #[only_owner]
    #[endpoint(removeKeeper)]
    fn remove_keeper(&self, keeper: ManagedAddress) {
        require!(
            self.keepers().swap_remove(&keeper),
            ERROR_KEEPER_NOT_REGISTERED
        );
        self.update_keeper_event(&keeper, false);
    }

    /// Sends the protocol revenue of an asset to the owner, bounded by what the pool holds.
    ///
    /// # Returns
    /// - The payment sent, possibly zero.
    #[only_owner]
    #[endpoint(claimRevenue)]
    fn claim_revenue(&self, asset: EgldOrEsdtTokenIdentifier) -> EgldOrEsdtTokenPayment {
        self.require_asset_supported(&asset);

        let mut market = MarketCache::new(self, &asset);
        let amount = self.get_min(market.revenue.clone(), market.reserves.clone());

        market.revenue -= &amount;
        market.reserves -= &amount;

        self.claim_revenue_event(&asset, amount.into_raw_units(), market.revenue.into_raw_units());

        let owner = self.blockchain().get_caller();
        self.send_asset(&owner, &asset, &amount)
    }

    fn emit_market_params(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        params: &MarketParams<Self::Api>,
    ) {
        self.market_params_event(
            asset,
            params.base_borrow_rate.into_raw_units(),
            params.slope1.into_raw_units(),
            params.slope2.into_raw_units(),
            params.slope3.into_raw_units(),
            params.mid_utilization.into_raw_units(),
            params.optimal_utilization.into_raw_units(),
            params.max_borrow_rate.into_raw_units(),
            params.reserve_factor.into_raw_units(),
        );
    }
}
