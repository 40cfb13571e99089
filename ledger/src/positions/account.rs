use common_structs::PositionSide;

use crate::storage;

multiversx_sc::imports!();

/// Balance bookkeeping shared by every position change.
///
/// A position exists only while its balance is non-zero and an account is listed as a
/// participant of a side only while it holds at least one position there.
#[multiversx_sc::module]
pub trait PositionAccountModule: storage::Storage {
    fn get_position_balance(
        &self,
        account: &ManagedAddress,
        side: PositionSide,
        token_id: &EgldOrEsdtTokenIdentifier,
    ) -> Option<ManagedDecimal<Self::Api, NumDecimals>> {
        self.positions(account, side).get(token_id)
    }

    /// Adds `amount` to a position, opening it and registering the account if needed.
    ///
    /// # Returns
    /// - The balance after the credit.
    fn credit_position(
        &self,
        account: &ManagedAddress,
        side: PositionSide,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut positions = self.positions(account, side);
        let balance = match positions.get(token_id) {
            Some(existing) => existing + amount.clone(),
            None => amount.clone(),
        };
        positions.insert(token_id.clone(), balance.clone());

        self.participants(side).insert(account.clone());

        balance
    }

    /// Subtracts `amount` from an open position. Callers make sure it does not exceed the balance.
    /// A position reaching zero is closed and the account leaves the side once it has none left.
    ///
    /// # Returns
    /// - The balance after the debit.
    fn debit_position(
        &self,
        account: &ManagedAddress,
        side: PositionSide,
        token_id: &EgldOrEsdtTokenIdentifier,
        balance: ManagedDecimal<Self::Api, NumDecimals>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let remaining = balance - amount.clone();
        let mut positions = self.positions(account, side);

        if remaining.into_raw_units() == &BigUint::zero() {
            positions.remove(token_id);
            if positions.is_empty() {
                self.participants(side).swap_remove(account);
            }
        } else {
            positions.insert(token_id.clone(), remaining.clone());
        }

        remaining
    }

    /// Drops every position of the account on one side.
    ///
    /// # Returns
    /// - The closed positions with the balance each one held.
    fn close_side(
        &self,
        account: &ManagedAddress,
        side: PositionSide,
    ) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let mut positions = self.positions(account, side);
        let tokens = positions.keys().collect::<ManagedVec<_>>();

        let mut closed = ManagedVec::new();
        for token_id in &tokens {
            if let Some(balance) = positions.remove(&token_id) {
                closed.push(EgldOrEsdtTokenPayment::new(
                    token_id.clone_value(),
                    0,
                    balance.into_raw_units().clone(),
                ));
            }
        }

        self.participants(side).swap_remove(account);

        closed
    }
}
