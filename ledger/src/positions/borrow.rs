use common_errors::{ERROR_INSUFFICIENT_COLLATERAL, ERROR_INSUFFICIENT_LIQUIDITY};
use common_structs::{PositionAction, PositionSide};

use crate::{
    cache::{Cache, MarketCache},
    oracle, risk, storage, utils, validation,
};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + risk::RiskModule
    + account::PositionAccountModule
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Opens or grows a borrow position and sends the borrowed amount to the caller.
    ///
    /// The new debt, valued together with the existing one, may reach the borrow limit of
    /// the collateral but not exceed it.
    ///
    /// # Returns
    /// - The payment sent to the caller.
    fn process_borrow(
        &self,
        caller: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        self.require_amount_greater_than_zero(amount);
        self.require_asset_supported(token_id);

        let mut market = MarketCache::new(self, token_id);
        let amount = market.get_decimal_value(amount);

        let snapshot = self.get_account_snapshot(caller, cache);
        let feed = self.get_token_price(token_id, cache);
        let amount_usd = self.get_token_usd_value(&amount, &feed.price);
        require!(
            snapshot.debt_usd.clone() + amount_usd <= snapshot.borrow_capacity_usd,
            ERROR_INSUFFICIENT_COLLATERAL
        );

        require!(market.has_reserves(&amount), ERROR_INSUFFICIENT_LIQUIDITY);

        let balance = self.credit_position(caller, PositionSide::Borrow, token_id, &amount);

        market.borrowed += &amount;
        market.reserves -= &amount;

        self.emit_position_event(
            PositionAction::Borrow,
            token_id,
            caller,
            &amount,
            &balance,
            Some(caller),
        );

        self.send_asset(caller, token_id, &amount)
    }
}
