multiversx_sc::imports!();

use crate::{errors::*, structs::PriceFeed};

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    #[view(latestPriceFeed)]
    fn latest_price_feed(&self, from: ManagedBuffer, to: ManagedBuffer) -> PriceFeed<Self::Api> {
        require!(self.not_paused(), PAUSED_ERROR);

        let mapper = self.rounds(&from, &to);
        require!(!mapper.is_empty(), TOKEN_PAIR_NOT_FOUND_ERROR);

        let last = mapper.get();
        PriceFeed {
            from,
            to,
            price: last.price,
            decimals: last.decimals,
            timestamp: last.timestamp,
            round: last.round,
        }
    }
}
