use common_constants::WAD_PRECISION;
use common_structs::PositionSide;

use crate::{cache::Cache, oracle, risk, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + risk::RiskModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    #[view(getSuppliers)]
    fn get_suppliers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for supplier in self.participants(PositionSide::Supply).iter() {
            result.push(supplier);
        }
        result
    }

    #[view(getBorrowers)]
    fn get_borrowers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for borrower in self.participants(PositionSide::Borrow).iter() {
            result.push(borrower);
        }
        result
    }

    #[view(getUniqueSupplierTokens)]
    fn get_unique_supplier_tokens(
        &self,
        account: ManagedAddress,
    ) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut result = MultiValueEncoded::new();
        for token_id in self.positions(&account, PositionSide::Supply).keys() {
            result.push(token_id);
        }
        result
    }

    #[view(getUniqueBorrowerTokens)]
    fn get_unique_borrower_tokens(
        &self,
        account: ManagedAddress,
    ) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut result = MultiValueEncoded::new();
        for token_id in self.positions(&account, PositionSide::Borrow).keys() {
            result.push(token_id);
        }
        result
    }

    /// Supply balance of an account, zero at the asset decimals when it holds none.
    #[view(getSupplyBalance)]
    fn get_supply_balance(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        account: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_balance_or_zero(&asset, &account, PositionSide::Supply)
    }

    #[view(getBorrowedBalance)]
    fn get_borrowed_balance(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        account: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_balance_or_zero(&asset, &account, PositionSide::Borrow)
    }

    fn get_balance_or_zero(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        account: &ManagedAddress,
        side: PositionSide,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_supported(asset);

        match self.positions(account, side).get(asset) {
            Some(balance) => balance,
            None => self.to_decimal(
                BigUint::zero(),
                self.market_config(asset).get().asset_decimals,
            ),
        }
    }

    /// Borrowed over supplied, RAY based.
    #[view(getUtilization)]
    fn get_market_utilization(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_supported(&asset);
        self.get_utilization(&self.borrowed(&asset).get(), &self.supplied(&asset).get())
    }

    /// Rate the next upkeep pass would apply at the current utilization.
    #[view(getCurrentInterestRate)]
    fn get_current_interest_rate(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_supported(&asset);
        let utilization =
            self.get_utilization(&self.borrowed(&asset).get(), &self.supplied(&asset).get());
        self.calc_borrow_rate(&utilization, &self.market_params(&asset).get())
    }

    /// USD value of everything the account supplied, WAD precision.
    #[view(getUserTotalCollateral)]
    fn get_user_total_collateral(&self, account: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);
        self.get_side_usd_value(&account, PositionSide::Supply, &mut cache)
    }

    /// USD value of everything the account owes, WAD precision.
    #[view(getUserTotalBorrow)]
    fn get_user_total_borrow(&self, account: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);
        self.get_side_usd_value(&account, PositionSide::Borrow, &mut cache)
    }

    #[view(getHealthFactor)]
    fn get_health_factor(&self, account: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);
        let snapshot = self.get_account_snapshot(&account, &mut cache);
        self.compute_health_factor(&snapshot)
    }

    /// Amount of `asset` the account could still borrow right now: the unused borrow
    /// capacity converted at the current price, rounded down and bounded by pool liquidity.
    #[view(getMaxBorrow)]
    fn get_max_borrow(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_supported(&asset);

        let mut cache = Cache::new(self);
        let snapshot = self.get_account_snapshot(&account, &mut cache);
        let remaining_usd = self.get_remaining_capacity(&snapshot);

        let feed = self.get_token_price(&asset, &mut cache);
        let whole_unit = self.to_decimal(
            BigUint::from(10u64).pow(feed.asset_decimals as u32),
            feed.asset_decimals,
        );
        let max_amount = self.mul_div_floor(
            &whole_unit,
            &remaining_usd,
            &feed.price.rescale(WAD_PRECISION),
        );

        self.get_min(max_amount, self.reserves(&asset).get())
    }
}
