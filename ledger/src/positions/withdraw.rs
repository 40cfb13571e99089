use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INSUFFICIENT_SUPPLY_BALANCE, ERROR_NOT_SUPPLIED,
    ERROR_OUTSTANDING_LOAN_BLOCKS_WITHDRAWAL,
};
use common_constants::{RAY_PRECISION, WAD_PRECISION};
use common_structs::{PositionAction, PositionSide};

use crate::{
    cache::{Cache, MarketCache},
    oracle, risk, storage, utils, validation,
};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionWithdrawModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + risk::RiskModule
    + account::PositionAccountModule
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Withdraws part or all of a supply position back to its owner.
    ///
    /// Checks run in this order: amount, asset, open position, balance, remaining
    /// collateral against outstanding debt, pool liquidity.
    ///
    /// # Returns
    /// - The payment sent to the caller.
    fn process_withdraw(
        &self,
        caller: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        self.require_amount_greater_than_zero(amount);
        self.require_asset_supported(token_id);

        let balance = self
            .get_position_balance(caller, PositionSide::Supply, token_id)
            .unwrap_or_else(|| sc_panic!(ERROR_NOT_SUPPLIED));

        let mut market = MarketCache::new(self, token_id);
        let amount = market.get_decimal_value(amount);
        require!(amount <= balance, ERROR_INSUFFICIENT_SUPPLY_BALANCE);

        self.validate_withdraw_health(caller, token_id, &amount, cache);

        require!(market.has_reserves(&amount), ERROR_INSUFFICIENT_LIQUIDITY);

        let remaining =
            self.debit_position(caller, PositionSide::Supply, token_id, balance, &amount);

        market.supplied -= &amount;
        market.reserves -= &amount;

        self.emit_position_event(
            PositionAction::Withdraw,
            token_id,
            caller,
            &amount,
            &remaining,
            Some(caller),
        );

        self.send_asset(caller, token_id, &amount)
    }

    /// Rejects a withdrawal that would leave the debt above the borrow limit of what remains.
    /// Accounts without debt skip pricing entirely.
    fn validate_withdraw_health(
        &self,
        caller: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) {
        if self.positions(caller, PositionSide::Borrow).is_empty() {
            return;
        }

        let snapshot = self.get_account_snapshot(caller, cache);
        let feed = self.get_token_price(token_id, cache);
        let withdrawn_usd = self.get_token_usd_value(amount, &feed.price);

        let remaining_collateral = if withdrawn_usd >= snapshot.collateral_usd {
            self.wad_zero()
        } else {
            snapshot.collateral_usd.clone() - withdrawn_usd
        };
        let remaining_capacity = self
            .mul_half_up(
                &remaining_collateral,
                &cache.risk_params.borrow_limit,
                RAY_PRECISION,
            )
            .rescale(WAD_PRECISION);

        require!(
            remaining_capacity >= snapshot.debt_usd,
            ERROR_OUTSTANDING_LOAN_BLOCKS_WITHDRAWAL
        );
    }
}
