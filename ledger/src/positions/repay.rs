use common_errors::{ERROR_NO_OUTSTANDING_LOAN, ERROR_REPAY_EXCEEDS_DEBT};
use common_structs::{PositionAction, PositionSide};

use crate::{cache::MarketCache, storage, utils};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + account::PositionAccountModule
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Applies a received payment against the caller's debt. Overpayments are rejected,
    /// never capped.
    ///
    /// # Returns
    /// - Remaining borrow balance.
    fn process_repay(
        &self,
        caller: &ManagedAddress,
        payment: &EgldOrEsdtTokenPayment<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let token_id = &payment.token_identifier;
        let balance = self
            .get_position_balance(caller, PositionSide::Borrow, token_id)
            .unwrap_or_else(|| sc_panic!(ERROR_NO_OUTSTANDING_LOAN));

        let mut market = MarketCache::new(self, token_id);
        let amount = market.get_decimal_value(&payment.amount);
        require!(amount <= balance, ERROR_REPAY_EXCEEDS_DEBT);

        let remaining =
            self.debit_position(caller, PositionSide::Borrow, token_id, balance, &amount);

        market.borrowed -= &amount;
        market.reserves += &amount;

        self.emit_position_event(
            PositionAction::Repay,
            token_id,
            caller,
            &amount,
            &remaining,
            Some(caller),
        );

        remaining
    }
}
