#![no_std]
use common_constants::{RATE_PRECISION, RAY_PRECISION};
use common_structs::MarketParams;

multiversx_sc::imports!();

/// The InterestRates module turns a market's utilization into the rate applied on every
/// upkeep pass and splits the resulting interest between suppliers and the protocol.
///
/// **Scope**: Pure computations over market totals; nothing here reads or writes storage.
///
/// **Goal**: A deterministic, monotonic price of liquidity that gets expensive as the pool runs dry.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Calculates the per-pass borrow rate from the current utilization.
    ///
    /// **Formula** (piecewise linear, every term RAY-based while computing):
    /// - If `utilization < mid_utilization`: `base_borrow_rate + utilization * slope1 / mid_utilization`.
    /// - If `mid_utilization <= utilization < optimal_utilization`:
    ///   `base_borrow_rate + slope1 + (utilization - mid_utilization) * slope2 / (optimal_utilization - mid_utilization)`.
    /// - Otherwise: `base_borrow_rate + slope1 + slope2 + (utilization - optimal_utilization) * slope3 / (1 - optimal_utilization)`.
    /// - The result is capped at `max_borrow_rate`.
    ///
    /// # Arguments
    /// - `utilization`: Borrowed over supplied, any precision.
    /// - `params`: The market's rate curve.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The rate at `RATE_PRECISION` (100_000 = 100%).
    fn calc_borrow_rate(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &MarketParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let utilization = utilization.rescale(RAY_PRECISION);
        let base_rate = params.base_borrow_rate.rescale(RAY_PRECISION);
        let slope1 = params.slope1.rescale(RAY_PRECISION);
        let slope2 = params.slope2.rescale(RAY_PRECISION);
        let slope3 = params.slope3.rescale(RAY_PRECISION);
        let mid = params.mid_utilization.rescale(RAY_PRECISION);
        let optimal = params.optimal_utilization.rescale(RAY_PRECISION);

        let rate = if utilization < mid {
            // Region 1: cheap liquidity
            let contribution = self.div_half_up(
                &self.mul_half_up(&utilization, &slope1, RAY_PRECISION),
                &mid,
                RAY_PRECISION,
            );
            base_rate + contribution
        } else if utilization < optimal {
            // Region 2: approaching the kink
            let excess = utilization - mid.clone();
            let contribution = self.div_half_up(
                &self.mul_half_up(&excess, &slope2, RAY_PRECISION),
                &(optimal - mid),
                RAY_PRECISION,
            );
            base_rate + slope1 + contribution
        } else {
            // Region 3: scarcity pricing beyond the optimal point
            let excess = utilization - optimal.clone();
            let remaining = self.rate_one().rescale(RAY_PRECISION) - optimal;
            let contribution = self.div_half_up(
                &self.mul_half_up(&excess, &slope3, RAY_PRECISION),
                &remaining,
                RAY_PRECISION,
            );
            base_rate + slope1 + slope2 + contribution
        };

        let capped_rate = self.get_min(rate, params.max_borrow_rate.rescale(RAY_PRECISION));

        self.rescale_half_up(&capped_rate, RATE_PRECISION)
    }

    /// Ratio of borrowed to supplied, RAY-based; zero for an empty market.
    fn get_utilization(
        &self,
        borrowed: &ManagedDecimal<Self::Api, NumDecimals>,
        supplied: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if supplied.into_raw_units() == &BigUint::zero() {
            return self.to_decimal(BigUint::zero(), RAY_PRECISION);
        }
        self.div_half_up(borrowed, supplied, RAY_PRECISION)
    }

    /// Interest owed on `balance` for one pass at `rate`, kept at the balance precision.
    ///
    /// **Formula**: `balance * rate / 100_000`, rounded half-up.
    fn calc_accrued_interest(
        &self,
        balance: &ManagedDecimal<Self::Api, NumDecimals>,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let interest = self.mul_half_up(balance, rate, RAY_PRECISION);
        self.rescale_half_up(&interest, balance.scale())
    }

    /// Splits interest paid by borrowers into the suppliers' pool and the protocol fee.
    ///
    /// # Returns
    /// - `(supplier_rewards, protocol_fee)`: Both at the precision of `interest`, summing to it exactly.
    fn calc_interest_split(
        &self,
        interest: &ManagedDecimal<Self::Api, NumDecimals>,
        reserve_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let fee = self.mul_half_up(interest, reserve_factor, RAY_PRECISION);
        let protocol_fee = self.get_min(self.rescale_half_up(&fee, interest.scale()), interest.clone());
        let supplier_rewards = interest.clone() - protocol_fee.clone();

        (supplier_rewards, protocol_fee)
    }
}
