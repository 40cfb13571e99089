use common_structs::{PositionAction, PositionSide};

use crate::{cache::MarketCache, storage, utils};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionSupplyModule:
    storage::Storage
    + account::PositionAccountModule
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Credits an already received payment to the supplier.
    ///
    /// # Arguments
    /// - `caller`: Supplier, owner of the position.
    /// - `payment`: Validated single fungible payment.
    ///
    /// # Returns
    /// - Supply balance after the deposit.
    fn process_supply(
        &self,
        caller: &ManagedAddress,
        payment: &EgldOrEsdtTokenPayment<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut market = MarketCache::new(self, &payment.token_identifier);
        let amount = market.get_decimal_value(&payment.amount);

        let balance = self.credit_position(
            caller,
            PositionSide::Supply,
            &payment.token_identifier,
            &amount,
        );

        market.supplied += &amount;
        market.reserves += &amount;

        self.emit_position_event(
            PositionAction::Supply,
            &payment.token_identifier,
            caller,
            &amount,
            &balance,
            Some(caller),
        );

        balance
    }
}
