multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSET_NOT_SUPPORTED, ERROR_INVALID_PAYMENT,
};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Extracts the single fungible payment attached to `supply` or `repay`.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: No payment or a zero amount.
    /// - `ERROR_INVALID_PAYMENT`: Several transfers or a non-fungible one.
    /// - `ERROR_ASSET_NOT_SUPPORTED`: The paid asset is not listed.
    fn validate_single_payment(&self) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payments = self.call_value().all_transfers();
        require!(!payments.is_empty(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(payments.len() == 1, ERROR_INVALID_PAYMENT);

        let payment = payments.get(0).clone();
        require!(payment.token_nonce == 0, ERROR_INVALID_PAYMENT);

        self.require_amount_greater_than_zero(&payment.amount);
        self.require_asset_supported(&payment.token_identifier);

        payment
    }

    /// Ensures an asset was listed at deployment.
    fn require_asset_supported(&self, asset: &EgldOrEsdtTokenIdentifier) {
        require!(
            self.allowed_tokens().contains(asset),
            ERROR_ASSET_NOT_SUPPORTED
        );
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }
}
