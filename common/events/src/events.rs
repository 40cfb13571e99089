#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_market")]
    fn create_market_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] asset_decimals: usize,
        #[indexed] aggregator: &ManagedAddress,
        #[indexed] ticker: &ManagedBuffer,
        #[indexed] max_price_stale_seconds: u64,
    );

    #[event("update_market_params")]
    fn market_params_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] base_borrow_rate: &BigUint,
        #[indexed] slope1: &BigUint,
        #[indexed] slope2: &BigUint,
        #[indexed] slope3: &BigUint,
        #[indexed] mid_utilization: &BigUint,
        #[indexed] optimal_utilization: &BigUint,
        #[indexed] max_borrow_rate: &BigUint,
        #[indexed] reserve_factor: &BigUint,
    );

    #[event("update_risk_params")]
    fn risk_params_event(
        &self,
        #[indexed] borrow_limit: &BigUint,
        #[indexed] liquidation_threshold: &BigUint,
    );

    // Emitted once per market on every upkeep pass:
    // borrow_interest is what borrowers were charged, supplier_rewards what suppliers were
    // credited and the difference went to protocol revenue
    #[event("update_market_state")]
    fn update_market_state_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] timestamp: u64,
        #[indexed] borrow_rate: &BigUint,
        #[indexed] borrow_interest: &BigUint,
        #[indexed] supplier_rewards: &BigUint,
        #[indexed] supplied: &BigUint,
        #[indexed] borrowed: &BigUint,
        #[indexed] reserves: &BigUint,
        #[indexed] revenue: &BigUint,
        #[indexed] bad_debt: &BigUint,
    );

    // amount is the change, balance the position after it.
    // caller is None when the protocol itself moved the position (interest, liquidation sweep)
    #[event("update_position")]
    fn update_position_event(
        &self,
        #[indexed] action: PositionAction,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] balance: &BigUint,
        #[indexed] caller: Option<&ManagedAddress>,
    );

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] health_factor: &BigUint,
        #[indexed] collateral_usd: &BigUint,
        #[indexed] debt_usd: &BigUint,
    );

    #[event("upkeep")]
    fn upkeep_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] previous_upkeep: u64,
        #[indexed] liquidated_accounts: usize,
    );

    #[event("claim_revenue")]
    fn claim_revenue_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] remaining_revenue: &BigUint,
    );

    #[event("update_keeper")]
    fn update_keeper_event(&self, #[indexed] keeper: &ManagedAddress, #[indexed] active: bool);
}
