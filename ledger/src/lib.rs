#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod oracle;
pub mod positions;
pub mod risk;
pub mod storage;
pub mod upkeep;
pub mod utils;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Ledger:
    positions::account::PositionAccountModule
    + positions::supply::PositionSupplyModule
    + positions::withdraw::PositionWithdrawModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::liquidation::PositionLiquidationModule
    + upkeep::UpkeepModule
    + config::ConfigModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + risk::RiskModule
    + validation::ValidationModule
    + utils::LedgerUtilsModule
    + views::ViewsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Lists the markets and starts the upkeep clock.
    ///
    /// # Arguments
    /// - `upkeep_interval`: Minimum number of seconds between two upkeep passes.
    /// - `listings`: Every accepted asset with its decimals and price source.
    ///
    /// # Errors
    /// - `ERROR_INVALID_UPKEEP_INTERVAL`: Zero interval.
    /// - `ERROR_NO_MARKETS`: Empty listing.
    /// - `ERROR_ASSET_ALREADY_SUPPORTED`: An asset listed twice.
    /// - `ERROR_INVALID_AGGREGATOR`, `ERROR_INVALID_TICKER`: Unusable price source.
    #[init]
    fn init(&self, upkeep_interval: u64, listings: MultiValueEncoded<MarketListing<Self::Api>>) {
        require!(upkeep_interval > 0, ERROR_INVALID_UPKEEP_INTERVAL);
        require!(!listings.is_empty(), ERROR_NO_MARKETS);

        for listing in listings {
            self.list_market(listing);
        }

        let risk_params = RiskParams::default();
        self.risk_params_event(
            risk_params.borrow_limit.into_raw_units(),
            risk_params.liquidation_threshold.into_raw_units(),
        );
        self.risk_params().set(risk_params);

        self.upkeep_interval().set(upkeep_interval);
        self.last_upkeep_timestamp()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Deposits the attached payment as collateral.
    ///
    /// # Payment
    /// - Exactly one fungible transfer of a listed asset.
    #[payable]
    #[endpoint(supply)]
    fn supply(&self) {
        let payment = self.validate_single_payment();
        let caller = self.blockchain().get_caller();

        self.process_supply(&caller, &payment);
    }

    /// Withdraws `amount` of a supplied asset.
    ///
    /// # Arguments
    /// - `asset`: Asset to withdraw.
    /// - `amount`: Raw amount at the asset decimals.
    #[endpoint(withdraw)]
    fn withdraw(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();

        self.process_withdraw(&caller, &asset, &amount, &mut cache);
    }

    /// Borrows `amount` of an asset against the caller's collateral.
    ///
    /// # Arguments
    /// - `asset`: Asset to borrow.
    /// - `amount`: Raw amount at the asset decimals.
    #[endpoint(borrow)]
    fn borrow(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();

        self.process_borrow(&caller, &asset, &amount, &mut cache);
    }

    /// Repays debt with the attached payment.
    ///
    /// # Payment
    /// - Exactly one fungible transfer, no larger than the outstanding debt of that asset.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self) {
        let payment = self.validate_single_payment();
        let caller = self.blockchain().get_caller();

        self.process_repay(&caller, &payment);
    }
}
