use common_structs::PositionAction;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait LedgerUtilsModule: common_events::EventsModule {
    /// Pushes `amount` of `asset_id` out of the contract.
    fn send_asset(
        &self,
        to: &ManagedAddress,
        asset_id: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment =
            EgldOrEsdtTokenPayment::new(asset_id.clone(), 0, amount.into_raw_units().clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    fn emit_position_event(
        &self,
        action: PositionAction,
        asset_id: &EgldOrEsdtTokenIdentifier,
        account: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        balance: &ManagedDecimal<Self::Api, NumDecimals>,
        caller: Option<&ManagedAddress>,
    ) {
        self.update_position_event(
            action,
            asset_id,
            account,
            amount.into_raw_units(),
            balance.into_raw_units(),
            caller,
        );
    }
}
