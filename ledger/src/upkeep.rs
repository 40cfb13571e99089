use common_errors::ERROR_UPKEEP_NOT_DUE;
use common_structs::{PositionAction, PositionSide};

use crate::{
    cache::{Cache, MarketCache},
    oracle, positions, risk, storage, utils,
};

multiversx_sc::imports!();

/// Time-gated maintenance: interest accrual on every market followed by the liquidation sweep.
///
/// A pass accrues exactly one period, however late it runs. A call made before the interval
/// elapsed fails and leaves everything untouched.
#[multiversx_sc::module]
pub trait UpkeepModule:
    storage::Storage
    + oracle::OracleModule
    + risk::RiskModule
    + positions::account::PositionAccountModule
    + positions::liquidation::PositionLiquidationModule
    + utils::LedgerUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// True once the interval elapsed since the last pass and someone holds a position.
    #[view(checkUpkeep)]
    fn check_upkeep(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        let elapsed = now.saturating_sub(self.last_upkeep_timestamp().get());
        let has_participants = !self.participants(PositionSide::Supply).is_empty()
            || !self.participants(PositionSide::Borrow).is_empty();

        elapsed >= self.upkeep_interval().get() && has_participants
    }

    /// Runs a maintenance pass. Callable by anyone once due.
    ///
    /// # Errors
    /// - `ERROR_UPKEEP_NOT_DUE`: Interval not elapsed or no participant.
    /// - `ERROR_ORACLE_UNAVAILABLE`: A price needed by the sweep could not be read.
    #[endpoint(performUpkeep)]
    fn perform_upkeep(&self) {
        require!(self.check_upkeep(), ERROR_UPKEEP_NOT_DUE);

        let mut cache = Cache::new(self);

        let borrowers = self
            .participants(PositionSide::Borrow)
            .iter()
            .collect::<ManagedVec<_>>();
        let suppliers = self
            .participants(PositionSide::Supply)
            .iter()
            .collect::<ManagedVec<_>>();

        for asset_id in self.allowed_tokens().iter() {
            self.accrue_market(&asset_id, &borrowers, &suppliers, cache.timestamp);
        }

        let liquidated_accounts = self.run_liquidation_sweep(&borrowers, &mut cache);

        let previous_upkeep = self.last_upkeep_timestamp().get();
        self.last_upkeep_timestamp().set(cache.timestamp);
        self.upkeep_event(cache.timestamp, previous_upkeep, liquidated_accounts);
    }

    /// Applies one period of interest to a market.
    ///
    /// **Process**:
    /// 1. Prices liquidity from the current utilization and stores the rate.
    /// 2. Charges `balance * rate` to every borrower of the asset.
    /// 3. Credits the suppliers' share pro rata to their balances, rounded down.
    /// 4. The reserve factor share and the rounding dust go to revenue, which then covers
    ///    outstanding bad debt.
    fn accrue_market(
        &self,
        asset_id: &EgldOrEsdtTokenIdentifier,
        borrowers: &ManagedVec<ManagedAddress>,
        suppliers: &ManagedVec<ManagedAddress>,
        timestamp: u64,
    ) {
        let mut market = MarketCache::new(self, asset_id);

        let utilization = self.get_utilization(&market.borrowed, &market.supplied);
        let rate = self.calc_borrow_rate(&utilization, &market.params);

        let mut borrow_interest = market.zero.clone();
        for borrower in borrowers {
            let mut positions = self.positions(&borrower, PositionSide::Borrow);
            let balance = match positions.get(asset_id) {
                Some(balance) => balance,
                None => continue,
            };

            let interest = self.calc_accrued_interest(&balance, &rate);
            if interest == market.zero {
                continue;
            }

            let new_balance = balance + interest.clone();
            positions.insert(asset_id.clone(), new_balance.clone());
            self.emit_position_event(
                PositionAction::BorrowInterest,
                asset_id,
                &borrower,
                &interest,
                &new_balance,
                None,
            );

            borrow_interest += &interest;
        }

        let (supplier_pool, _) =
            self.calc_interest_split(&borrow_interest, &market.params.reserve_factor);

        let mut supplier_rewards = market.zero.clone();
        if supplier_pool > market.zero && market.supplied > market.zero {
            for supplier in suppliers {
                let mut positions = self.positions(&supplier, PositionSide::Supply);
                let balance = match positions.get(asset_id) {
                    Some(balance) => balance,
                    None => continue,
                };

                let share = self.mul_div_floor(&supplier_pool, &balance, &market.supplied);
                if share == market.zero {
                    continue;
                }

                let new_balance = balance + share.clone();
                positions.insert(asset_id.clone(), new_balance.clone());
                self.emit_position_event(
                    PositionAction::SupplyInterest,
                    asset_id,
                    &supplier,
                    &share,
                    &new_balance,
                    None,
                );

                supplier_rewards += &share;
            }
        }

        market.borrowed += &borrow_interest;
        market.supplied += &supplier_rewards;
        market.revenue += borrow_interest.clone() - supplier_rewards.clone();
        market.absorb_bad_debt();

        market.last_borrow_rate = rate;
        market.last_accrual_timestamp = timestamp;

        self.update_market_state_event(
            asset_id,
            timestamp,
            market.last_borrow_rate.into_raw_units(),
            borrow_interest.into_raw_units(),
            supplier_rewards.into_raw_units(),
            market.supplied.into_raw_units(),
            market.borrowed.into_raw_units(),
            market.reserves.into_raw_units(),
            market.revenue.into_raw_units(),
            market.bad_debt.into_raw_units(),
        );
    }

    /// Liquidates every account of the snapshot whose health factor fell below one.
    ///
    /// # Returns
    /// - Number of liquidated accounts.
    fn run_liquidation_sweep(
        &self,
        borrowers: &ManagedVec<ManagedAddress>,
        cache: &mut Cache<Self>,
    ) -> usize {
        let mut liquidated_accounts = 0usize;
        for borrower in borrowers {
            let snapshot = self.get_account_snapshot(&borrower, cache);
            let health_factor = self.compute_health_factor(&snapshot);
            if !self.is_liquidatable(&health_factor) {
                continue;
            }

            self.liquidate_account(&borrower, &snapshot, &health_factor);
            liquidated_accounts += 1;
        }

        liquidated_accounts
    }
}
