use common_constants::{RAY_PRECISION, WAD_PRECISION};
use common_structs::{AccountSnapshot, PositionSide};

use crate::{cache::Cache, oracle, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait RiskModule:
    storage::Storage + oracle::OracleModule + common_math::SharedMathModule
{
    /// USD value of a token amount, WAD precision.
    fn get_token_usd_value(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        token_price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_half_up(amount, token_price, RAY_PRECISION)
            .rescale(WAD_PRECISION)
    }

    /// Sum of the USD values of every position of `account` on one side.
    fn get_side_usd_value(
        &self,
        account: &ManagedAddress,
        side: PositionSide,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut total = self.wad_zero();
        for (token_id, balance) in self.positions(account, side).iter() {
            let feed = self.get_token_price(&token_id, cache);
            total += self.get_token_usd_value(&balance, &feed.price);
        }
        total
    }

    /// Values every position of the account and applies both collateral fractions.
    ///
    /// # Arguments
    /// - `account`: The account to value.
    /// - `cache`: Per-call cache; every asset of the account gets priced.
    ///
    /// # Returns
    /// - `AccountSnapshot` with all values in WAD.
    fn get_account_snapshot(
        &self,
        account: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> AccountSnapshot<Self::Api> {
        let collateral_usd = self.get_side_usd_value(account, PositionSide::Supply, cache);
        let debt_usd = self.get_side_usd_value(account, PositionSide::Borrow, cache);

        let weighted_collateral_usd = self
            .mul_half_up(
                &collateral_usd,
                &cache.risk_params.liquidation_threshold,
                RAY_PRECISION,
            )
            .rescale(WAD_PRECISION);
        let borrow_capacity_usd = self
            .mul_half_up(&collateral_usd, &cache.risk_params.borrow_limit, RAY_PRECISION)
            .rescale(WAD_PRECISION);

        AccountSnapshot {
            collateral_usd,
            weighted_collateral_usd,
            borrow_capacity_usd,
            debt_usd,
        }
    }

    /// Calculates the health factor from weighted collateral and debt.
    ///
    /// # Returns
    /// - Health factor in WAD precision; `u128::MAX` if there is no debt.
    fn compute_health_factor(
        &self,
        snapshot: &AccountSnapshot<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if !snapshot.has_debt() {
            return self.to_decimal_wad(BigUint::from(u128::MAX));
        }

        let health_factor = self.div_half_up(
            &snapshot.weighted_collateral_usd,
            &snapshot.debt_usd,
            RAY_PRECISION,
        );

        health_factor.rescale(WAD_PRECISION)
    }

    fn is_liquidatable(&self, health_factor: &ManagedDecimal<Self::Api, NumDecimals>) -> bool {
        health_factor < &self.wad()
    }

    /// Borrow capacity left once the current debt is covered, in USD (WAD). Never negative.
    fn get_remaining_capacity(
        &self,
        snapshot: &AccountSnapshot<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if snapshot.borrow_capacity_usd <= snapshot.debt_usd {
            return self.wad_zero();
        }
        snapshot.borrow_capacity_usd.clone() - snapshot.debt_usd.clone()
    }
}
