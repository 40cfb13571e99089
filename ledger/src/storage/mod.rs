use common_structs::{MarketConfig, MarketParams, PositionSide, RiskParams};
use price_aggregator::structs::TimestampedPrice;
multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Assets accepted by the ledger. Fixed at deployment.
    #[view(getAllowedTokens)]
    #[storage_mapper("allowed_tokens")]
    fn allowed_tokens(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Decimals and price source of a listed asset. Written once by `init`.
    #[view(getMarketConfig)]
    #[storage_mapper("market_config")]
    fn market_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketConfig<Self::Api>>;

    #[view(getMarketParams)]
    #[storage_mapper("market_params")]
    fn market_params(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketParams<Self::Api>>;

    #[view(getRiskParams)]
    #[storage_mapper("risk_params")]
    fn risk_params(&self) -> SingleValueMapper<RiskParams<Self::Api>>;

    /// Sum of every supply balance of the asset, at the asset decimals.
    #[view(getTotalSupply)]
    #[storage_mapper("supplied")]
    fn supplied(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Sum of every borrow balance of the asset, at the asset decimals.
    #[view(getTotalBorrow)]
    #[storage_mapper("borrowed")]
    fn borrowed(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Units of the asset held by the contract for this market.
    #[view(getAvailableLiquidity)]
    #[storage_mapper("reserves")]
    fn reserves(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getProtocolRevenue)]
    #[storage_mapper("revenue")]
    fn revenue(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Debt forgiven by liquidations and not yet covered by revenue.
    #[view(getBadDebt)]
    #[storage_mapper("bad_debt")]
    fn bad_debt(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Rate applied by the last upkeep pass, `RATE_PRECISION` based.
    #[view(getInterestRate)]
    #[storage_mapper("last_borrow_rate")]
    fn last_borrow_rate(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLastAccrualTimestamp)]
    #[storage_mapper("last_accrual_timestamp")]
    fn last_accrual_timestamp(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<u64>;

    /// Balances of an account on one side of the book, keyed by asset.
    /// The key set doubles as the account's list of supplied or borrowed assets.
    #[storage_mapper("positions")]
    fn positions(
        &self,
        account: &ManagedAddress,
        side: PositionSide,
    ) -> MapMapper<EgldOrEsdtTokenIdentifier, ManagedDecimal<Self::Api, NumDecimals>>;

    /// Accounts holding at least one non-zero balance on the given side.
    #[storage_mapper("participants")]
    fn participants(&self, side: PositionSide) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getInterval)]
    #[storage_mapper("upkeep_interval")]
    fn upkeep_interval(&self) -> SingleValueMapper<u64>;

    #[view(getLastUpkeepTimestamp)]
    #[storage_mapper("last_upkeep_timestamp")]
    fn last_upkeep_timestamp(&self) -> SingleValueMapper<u64>;

    /// Addresses allowed to liquidate besides the owner.
    #[view(getKeepers)]
    #[storage_mapper("keepers")]
    fn keepers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper_from_address("rounds")]
    fn rounds(
        &self,
        price_aggregator_address: ManagedAddress,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("pause_module:paused")]
    fn price_aggregator_paused_state(
        &self,
        price_aggregator_address: ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;
}
