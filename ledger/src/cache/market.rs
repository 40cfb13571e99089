use common_structs::MarketParams;

multiversx_sc::imports!();

/// In-memory view of one market's totals.
///
/// Loaded from storage on creation and committed back when dropped, so every mutation done
/// through it during a call lands in storage at once.
///
/// All amounts use the asset decimals. The accounting identity
/// `reserves + borrowed + bad_debt == supplied + revenue` holds before and after every
/// operation that goes through this struct.
pub struct MarketCache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub asset_id: EgldOrEsdtTokenIdentifier<C::Api>,
    pub asset_decimals: usize,
    pub params: MarketParams<C::Api>,
    pub supplied: ManagedDecimal<C::Api, NumDecimals>,
    pub borrowed: ManagedDecimal<C::Api, NumDecimals>,
    pub reserves: ManagedDecimal<C::Api, NumDecimals>,
    pub revenue: ManagedDecimal<C::Api, NumDecimals>,
    pub bad_debt: ManagedDecimal<C::Api, NumDecimals>,
    pub last_borrow_rate: ManagedDecimal<C::Api, NumDecimals>,
    pub last_accrual_timestamp: u64,
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
}

impl<'a, C> MarketCache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C, asset_id: &EgldOrEsdtTokenIdentifier<C::Api>) -> Self {
        let asset_decimals = sc_ref.market_config(asset_id).get().asset_decimals;
        MarketCache {
            zero: sc_ref.to_decimal(BigUint::zero(), asset_decimals),
            asset_decimals,
            params: sc_ref.market_params(asset_id).get(),
            supplied: sc_ref.supplied(asset_id).get(),
            borrowed: sc_ref.borrowed(asset_id).get(),
            reserves: sc_ref.reserves(asset_id).get(),
            revenue: sc_ref.revenue(asset_id).get(),
            bad_debt: sc_ref.bad_debt(asset_id).get(),
            last_borrow_rate: sc_ref.last_borrow_rate(asset_id).get(),
            last_accrual_timestamp: sc_ref.last_accrual_timestamp(asset_id).get(),
            asset_id: asset_id.clone(),
            sc_ref,
        }
    }

    /// Raw transfer amount to a decimal at the asset precision.
    pub fn get_decimal_value(&self, value: &BigUint<C::Api>) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_decimal(value.clone(), self.asset_decimals)
    }

    pub fn has_reserves(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        self.reserves >= *amount
    }

    /// Offsets outstanding bad debt with accumulated revenue.
    pub fn absorb_bad_debt(&mut self) {
        let offset = self
            .sc_ref
            .get_min(self.revenue.clone(), self.bad_debt.clone());
        if offset == self.zero {
            return;
        }

        self.revenue -= &offset;
        self.bad_debt -= &offset;
    }
}

impl<C> Drop for MarketCache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.supplied(&self.asset_id).set(&self.supplied);
        self.sc_ref.borrowed(&self.asset_id).set(&self.borrowed);
        self.sc_ref.reserves(&self.asset_id).set(&self.reserves);
        self.sc_ref.revenue(&self.asset_id).set(&self.revenue);
        self.sc_ref.bad_debt(&self.asset_id).set(&self.bad_debt);
        self.sc_ref
            .last_borrow_rate(&self.asset_id)
            .set(&self.last_borrow_rate);
        self.sc_ref
            .last_accrual_timestamp(&self.asset_id)
            .set(self.last_accrual_timestamp);
    }
}
