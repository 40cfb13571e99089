use common_errors::{ERROR_HEALTH_FACTOR_NOT_LOW, ERROR_UNAUTHORIZED};
use common_structs::{AccountSnapshot, PositionAction, PositionSide};

use crate::{
    cache::{Cache, MarketCache},
    oracle, risk, storage, utils,
};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + oracle::OracleModule
    + risk::RiskModule
    + account::PositionAccountModule
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Liquidates a single account outside of the upkeep sweep.
    ///
    /// # Arguments
    /// - `account`: The account to liquidate.
    ///
    /// # Errors
    /// - `ERROR_UNAUTHORIZED`: Caller is neither the owner nor a keeper.
    /// - `ERROR_HEALTH_FACTOR_NOT_LOW`: The account is healthy.
    #[endpoint(liquidate)]
    fn liquidate(&self, account: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address() || self.keepers().contains(&caller),
            ERROR_UNAUTHORIZED
        );

        let mut cache = Cache::new(self);
        let snapshot = self.get_account_snapshot(&account, &mut cache);
        let health_factor = self.compute_health_factor(&snapshot);
        require!(
            self.is_liquidatable(&health_factor),
            ERROR_HEALTH_FACTOR_NOT_LOW
        );

        self.liquidate_account(&account, &snapshot, &health_factor);
    }

    /// Zeroes every position of the account.
    ///
    /// Forgiven debt moves from `borrowed` to `bad_debt`, seized collateral from
    /// `supplied` to `revenue`. Pool liquidity does not move.
    fn liquidate_account(
        &self,
        account: &ManagedAddress,
        snapshot: &AccountSnapshot<Self::Api>,
        health_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let forgiven = self.close_side(account, PositionSide::Borrow);
        for debt in &forgiven {
            let mut market = MarketCache::new(self, &debt.token_identifier);
            let amount = market.get_decimal_value(&debt.amount);

            market.borrowed -= &amount;
            market.bad_debt += &amount;

            self.emit_position_event(
                PositionAction::Liquidation,
                &debt.token_identifier,
                account,
                &amount,
                &market.zero,
                None,
            );
        }

        let seized = self.close_side(account, PositionSide::Supply);
        for collateral in &seized {
            let mut market = MarketCache::new(self, &collateral.token_identifier);
            let amount = market.get_decimal_value(&collateral.amount);

            market.supplied -= &amount;
            market.revenue += &amount;

            self.emit_position_event(
                PositionAction::Liquidation,
                &collateral.token_identifier,
                account,
                &amount,
                &market.zero,
                None,
            );
        }

        self.liquidation_event(
            account,
            health_factor.into_raw_units(),
            snapshot.collateral_usd.into_raw_units(),
            snapshot.debt_usd.into_raw_units(),
        );
    }
}
