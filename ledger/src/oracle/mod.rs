use common_constants::{USD_TICKER, WAD_PRECISION};
use common_errors::ERROR_ORACLE_UNAVAILABLE;
use common_structs::{OracleProvider, PriceFeedShort};

use crate::{cache::Cache, storage};

multiversx_sc::imports!();

/// USD prices of listed assets, read synchronously from the price aggregator storage.
#[multiversx_sc::module]
pub trait OracleModule: storage::Storage + common_math::SharedMathModule {
    /// Price of one whole unit of `token_id` in USD, WAD based.
    /// Each asset hits the aggregator at most once per call.
    ///
    /// # Arguments
    /// - `token_id`: A listed asset.
    /// - `cache`: Per-call cache holding configs and already resolved prices.
    ///
    /// # Errors
    /// - `ERROR_ORACLE_UNAVAILABLE`: Missing round, paused aggregator, zero or stale price.
    fn get_token_price(
        &self,
        token_id: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> PriceFeedShort<Self::Api> {
        if cache.prices_cache.contains(token_id) {
            return cache.prices_cache.get(token_id);
        }

        let config = cache.get_cached_market_config(token_id);
        let price = self.get_aggregator_price(&config.oracle, cache.timestamp);

        let feed = PriceFeedShort {
            asset_decimals: config.asset_decimals,
            price,
        };
        cache.prices_cache.put(token_id, &feed);

        feed
    }

    /// Latest `ticker/USD` round of the aggregator, rescaled to WAD.
    fn get_aggregator_price(
        &self,
        provider: &OracleProvider<Self::Api>,
        now: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(
            !self
                .price_aggregator_paused_state(provider.aggregator.clone())
                .get(),
            ERROR_ORACLE_UNAVAILABLE
        );

        let round_mapper = self.rounds(
            provider.aggregator.clone(),
            provider.ticker.clone(),
            ManagedBuffer::new_from_bytes(USD_TICKER),
        );
        require!(!round_mapper.is_empty(), ERROR_ORACLE_UNAVAILABLE);

        let round = round_mapper.get();
        require!(round.price > 0u64, ERROR_ORACLE_UNAVAILABLE);
        require!(
            now.saturating_sub(round.timestamp) <= provider.max_price_stale_seconds,
            ERROR_ORACLE_UNAVAILABLE
        );

        let price = self.to_decimal(round.price, round.decimals as usize);
        self.rescale_half_up(&price, WAD_PRECISION)
    }
}
