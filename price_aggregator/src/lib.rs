#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod storage;
pub mod structs;
pub mod views;

use errors::*;
use structs::TimestampedPrice;

pub const MAX_PRICE_DECIMALS: u8 = 18;

/// Push based USD price feed. Whitelisted feeders publish the latest price of a pair and
/// consumers read the `rounds` storage directly from this address.
#[multiversx_sc::contract]
pub trait PriceAggregator:
    multiversx_sc_modules::pause::PauseModule
    + storage::StorageModule
    + events::EventsModule
    + views::ViewsModule
{
    #[init]
    fn init(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        self.add_feeders(feeders);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addFeeders)]
    fn add_feeders(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.feeders();
        for feeder in feeders {
            if mapper.insert(feeder.clone()) {
                self.feeder_event(&feeder, true);
            }
        }
    }

    #[only_owner]
    #[endpoint(removeFeeders)]
    fn remove_feeders(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.feeders();
        for feeder in feeders {
            if mapper.swap_remove(&feeder) {
                self.feeder_event(&feeder, false);
            }
        }
    }

    /// Publishes `price` for `from/to`, stamped with the current block timestamp.
    #[endpoint(pushPrice)]
    fn push_price(&self, from: ManagedBuffer, to: ManagedBuffer, price: BigUint, decimals: u8) {
        self.require_not_paused();
        self.require_feeder();

        self.store_round(&from, &to, price, decimals);
    }

    #[endpoint(pushPrices)]
    fn push_prices(
        &self,
        prices: MultiValueEncoded<MultiValue4<ManagedBuffer, ManagedBuffer, BigUint, u8>>,
    ) {
        self.require_not_paused();
        self.require_feeder();

        for entry in prices {
            let (from, to, price, decimals) = entry.into_tuple();
            self.store_round(&from, &to, price, decimals);
        }
    }

    fn require_feeder(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address() || self.feeders().contains(&caller),
            ONLY_FEEDERS_ALLOWED_ERROR
        );
    }

    fn store_round(&self, from: &ManagedBuffer, to: &ManagedBuffer, price: BigUint, decimals: u8) {
        require!(price > 0u64, INVALID_PRICE_ERROR);
        require!(decimals <= MAX_PRICE_DECIMALS, INVALID_DECIMALS_ERROR);

        let mapper = self.rounds(from, to);
        let round = if mapper.is_empty() {
            1
        } else {
            mapper.get().round + 1
        };

        let feed = TimestampedPrice {
            price,
            timestamp: self.blockchain().get_block_timestamp(),
            decimals,
            round,
        };
        mapper.set(&feed);

        self.price_update_event(from, to, round, &feed.price, feed.timestamp);
    }
}
