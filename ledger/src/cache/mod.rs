use common_structs::{MarketConfig, PriceFeedShort, RiskParams};

mod market;
pub use market::MarketCache;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-call memo of what does not change while an endpoint runs: market configs, the risk
/// parameters and every price already read from an aggregator.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,

    pub prices_cache:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, PriceFeedShort<C::Api>>,
    pub market_configs:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, MarketConfig<C::Api>>,
    pub risk_params: RiskParams<C::Api>,
    pub timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            sc_ref,
            prices_cache: ManagedMapEncoded::new(),
            market_configs: ManagedMapEncoded::new(),
            risk_params: sc_ref.risk_params().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
        }
    }

    /// Retrieves or caches the config of a listed asset.
    ///
    /// # Arguments
    /// - `token_id`: Asset identifier, must be listed.
    ///
    /// # Returns
    /// - `MarketConfig` for the asset.
    pub fn get_cached_market_config(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> MarketConfig<C::Api> {
        let existing = self.market_configs.contains(token_id);
        if existing {
            return self.market_configs.get(token_id);
        }

        let new = self.sc_ref.market_config(token_id).get();
        self.market_configs.put(token_id, &new);

        new
    }
}
