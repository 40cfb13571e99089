use crate::constants::*;

use common_proxies::{proxy_ledger, proxy_price_aggregator};
use common_structs::MarketListing;
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, ManagedBuffer,
    ManagedDecimal, MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(LEDGER_PATH, ledger::ContractBuilder);
    blockchain.register_contract(PRICE_AGGREGATOR_PATH, price_aggregator::ContractBuilder);

    blockchain
}

/// `value / 10^value_decimals` whole tokens expressed in raw units of the asset.
pub fn token_amount(value: u64, value_decimals: u32, asset_decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(value) * BigUint::from(10u64).pow(asset_decimals as u32)
        / BigUint::from(10u64).pow(value_decimals)
}

pub fn whole(value: u64, asset_decimals: usize) -> BigUint<StaticApi> {
    token_amount(value, 0, asset_decimals)
}

pub fn wad_price(dollars: u64) -> BigUint<StaticApi> {
    BigUint::from(dollars) * BigUint::from(WAD)
}

pub struct LedgerTestState {
    pub world: ScenarioWorld,
    pub ledger_sc: ManagedAddress<StaticApi>,
    pub price_aggregator_sc: ManagedAddress<StaticApi>,
}

impl LedgerTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_owner(&mut world);
        world.account(KEEPER_ADDRESS).nonce(1);
        world.current_block().block_timestamp(START_TIMESTAMP);

        let price_aggregator_sc = setup_price_aggregator(&mut world);
        let ledger_sc = setup_ledger(&mut world, &price_aggregator_sc);

        Self {
            world,
            ledger_sc,
            price_aggregator_sc,
        }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Price feed operations
    pub fn push_price(&mut self, ticker: &[u8], price: BigUint<StaticApi>) {
        push_price(&mut self.world, &self.price_aggregator_sc, ticker, price);
    }

    pub fn pause_aggregator(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_aggregator_sc.clone())
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .pause_endpoint()
            .run();
    }

    // Core lending operations
    pub fn supply_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .supply()
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn supply_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .supply()
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn empty_supply_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .supply()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .withdraw(to_egld_or_esdt(token_id), amount)
            .run();
    }

    pub fn withdraw_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .withdraw(to_egld_or_esdt(token_id), amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn borrow_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .borrow(to_egld_or_esdt(token_id), amount)
            .run();
    }

    pub fn borrow_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .borrow(to_egld_or_esdt(token_id), amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .repay()
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn repay_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .repay()
            .esdt(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Keeper operations
    pub fn check_upkeep(&mut self) -> bool {
        self.world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .check_upkeep()
            .returns(ReturnsResult)
            .run()
    }

    pub fn perform_upkeep(&mut self, from: &TestAddress) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .perform_upkeep()
            .run();
    }

    pub fn perform_upkeep_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .perform_upkeep()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn liquidate_account(&mut self, from: &TestAddress, account: &TestAddress) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .liquidate(account.to_managed_address())
            .run();
    }

    pub fn liquidate_account_error(
        &mut self,
        from: &TestAddress,
        account: &TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .liquidate(account.to_managed_address())
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Owner operations
    pub fn add_keeper(&mut self, keeper: &TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .add_keeper(keeper.to_managed_address())
            .run();
    }

    pub fn remove_keeper(&mut self, keeper: &TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .remove_keeper(keeper.to_managed_address())
            .run();
    }

    pub fn claim_revenue(&mut self, token_id: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .claim_revenue(to_egld_or_esdt(token_id))
            .run();
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_market_params(
        &mut self,
        token_id: TestTokenIdentifier,
        base_borrow_rate: u64,
        slope1: u64,
        slope2: u64,
        slope3: u64,
        mid_utilization: u64,
        optimal_utilization: u64,
        max_borrow_rate: u64,
        reserve_factor: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .set_market_params(
                to_egld_or_esdt(token_id),
                base_borrow_rate,
                slope1,
                slope2,
                slope3,
                mid_utilization,
                optimal_utilization,
                max_borrow_rate,
                reserve_factor,
            )
            .run();
    }

    pub fn set_risk_params_error(
        &mut self,
        borrow_limit: u64,
        liquidation_threshold: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .set_risk_params(borrow_limit, liquidation_threshold)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Views
    pub fn get_supply_balance(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let balance: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_supply_balance(to_egld_or_esdt(token_id), account.to_managed_address())
            .returns(ReturnsResult)
            .run();
        balance.into_raw_units().clone()
    }

    pub fn get_borrowed_balance(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let balance: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_borrowed_balance(to_egld_or_esdt(token_id), account.to_managed_address())
            .returns(ReturnsResult)
            .run();
        balance.into_raw_units().clone()
    }

    pub fn get_total_supply(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let total: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .supplied(to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        total.into_raw_units().clone()
    }

    pub fn get_total_borrow(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let total: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .borrowed(to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        total.into_raw_units().clone()
    }

    pub fn get_available_liquidity(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let reserves: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .reserves(to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        reserves.into_raw_units().clone()
    }

    pub fn get_protocol_revenue(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let revenue: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .revenue(to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        revenue.into_raw_units().clone()
    }

    pub fn get_bad_debt(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let bad_debt: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .bad_debt(to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        bad_debt.into_raw_units().clone()
    }

    pub fn get_interest_rate(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let rate: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .last_borrow_rate(to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        rate.into_raw_units().clone()
    }

    pub fn get_utilization(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let utilization: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_market_utilization(to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        utilization.into_raw_units().clone()
    }

    pub fn get_current_interest_rate(
        &mut self,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let rate: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_current_interest_rate(to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        rate.into_raw_units().clone()
    }

    pub fn get_health_factor(&mut self, account: &TestAddress) -> ManagedDecimal<StaticApi, usize> {
        self.world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_health_factor(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_user_total_collateral(
        &mut self,
        account: &TestAddress,
    ) -> ManagedDecimal<StaticApi, usize> {
        self.world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_user_total_collateral(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_user_total_borrow(&mut self, account: &TestAddress) -> ManagedDecimal<StaticApi, usize> {
        self.world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_user_total_borrow(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_max_borrow(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let amount: ManagedDecimal<StaticApi, usize> = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_max_borrow(account.to_managed_address(), to_egld_or_esdt(token_id))
            .returns(ReturnsResult)
            .run();
        amount.into_raw_units().clone()
    }

    pub fn get_suppliers(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        let suppliers = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_suppliers()
            .returns(ReturnsResult)
            .run();
        suppliers.into_iter().collect()
    }

    pub fn get_borrowers(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        let borrowers = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_borrowers()
            .returns(ReturnsResult)
            .run();
        borrowers.into_iter().collect()
    }

    pub fn get_supplier_tokens(
        &mut self,
        account: &TestAddress,
    ) -> Vec<EgldOrEsdtTokenIdentifier<StaticApi>> {
        let tokens = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_unique_supplier_tokens(account.to_managed_address())
            .returns(ReturnsResult)
            .run();
        tokens.into_iter().collect()
    }

    pub fn get_borrower_tokens(
        &mut self,
        account: &TestAddress,
    ) -> Vec<EgldOrEsdtTokenIdentifier<StaticApi>> {
        let tokens = self
            .world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .get_unique_borrower_tokens(account.to_managed_address())
            .returns(ReturnsResult)
            .run();
        tokens.into_iter().collect()
    }

    pub fn get_last_upkeep_timestamp(&mut self) -> u64 {
        self.world
            .query()
            .to(self.ledger_sc.clone())
            .typed(proxy_ledger::LedgerProxy)
            .last_upkeep_timestamp()
            .returns(ReturnsResult)
            .run()
    }

    /// Asserts the per-market accounting identity, that the totals match the positions
    /// of the given accounts and that the participant indices follow their balances.
    /// `accounts` must list every account that ever touched the ledger.
    pub fn assert_market_consistency(
        &mut self,
        token_id: TestTokenIdentifier,
        accounts: &[TestAddress],
    ) {
        let supplied = self.get_total_supply(token_id);
        let borrowed = self.get_total_borrow(token_id);
        let reserves = self.get_available_liquidity(token_id);
        let revenue = self.get_protocol_revenue(token_id);
        let bad_debt = self.get_bad_debt(token_id);

        assert_eq!(&reserves + &borrowed + &bad_debt, &supplied + &revenue);

        let mut sum_supplied = BigUint::zero();
        let mut sum_borrowed = BigUint::zero();
        for account in accounts {
            sum_supplied += self.get_supply_balance(account, token_id);
            sum_borrowed += self.get_borrowed_balance(account, token_id);
        }
        assert_eq!(sum_supplied, supplied);
        assert_eq!(sum_borrowed, borrowed);

        self.assert_participant_indices(accounts);
    }

    /// An account sits in the supplier (borrower) set iff it holds a non-zero supply
    /// (borrow) balance, its token sets list exactly those markets and nothing is indexed twice.
    pub fn assert_participant_indices(&mut self, accounts: &[TestAddress]) {
        let suppliers = self.get_suppliers();
        let borrowers = self.get_borrowers();
        assert_unique(&suppliers);
        assert_unique(&borrowers);

        let known: Vec<ManagedAddress<StaticApi>> = accounts
            .iter()
            .map(|account| account.to_managed_address())
            .collect();
        for participant in suppliers.iter().chain(borrowers.iter()) {
            assert!(known.contains(participant));
        }

        for account in accounts {
            let address = account.to_managed_address::<StaticApi>();

            let mut supplied_tokens = Vec::new();
            let mut borrowed_tokens = Vec::new();
            for token_id in LISTED_TOKENS {
                if self.get_supply_balance(account, token_id) > 0u64 {
                    supplied_tokens.push(to_egld_or_esdt(token_id));
                }
                if self.get_borrowed_balance(account, token_id) > 0u64 {
                    borrowed_tokens.push(to_egld_or_esdt(token_id));
                }
            }

            assert_eq!(suppliers.contains(&address), !supplied_tokens.is_empty());
            assert_eq!(borrowers.contains(&address), !borrowed_tokens.is_empty());
            assert_same_set(&self.get_supplier_tokens(account), &supplied_tokens);
            assert_same_set(&self.get_borrower_tokens(account), &borrowed_tokens);
        }
    }
}

fn assert_unique<T: PartialEq>(items: &[T]) {
    for (index, item) in items.iter().enumerate() {
        assert!(!items[index + 1..].contains(item));
    }
}

fn assert_same_set<T: PartialEq>(actual: &[T], expected: &[T]) {
    assert_unique(actual);
    assert_eq!(actual.len(), expected.len());
    for item in expected {
        assert!(actual.contains(item));
    }
}

pub fn to_egld_or_esdt(token_id: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token_id.to_token_identifier())
}

pub fn setup_owner(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
}

pub fn setup_account(state: &mut LedgerTestState, account: TestAddress) {
    state
        .world
        .account(account)
        .nonce(1)
        .esdt_balance(WETH_TOKEN, whole(INITIAL_BALANCE, WETH_DECIMALS))
        .esdt_balance(DAI_TOKEN, whole(INITIAL_BALANCE, DAI_DECIMALS))
        .esdt_balance(USDC_TOKEN, whole(INITIAL_BALANCE, USDC_DECIMALS))
        .esdt_balance(UNLISTED_TOKEN, whole(INITIAL_BALANCE, 18));
}

pub fn setup_accounts(state: &mut LedgerTestState, supplier: TestAddress, borrower: TestAddress) {
    setup_account(state, supplier);
    setup_account(state, borrower);
}

pub fn setup_price_aggregator(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world.account(FEEDER_ADDRESS).nonce(1);

    let mut feeders = MultiValueEncoded::new();
    feeders.push(FEEDER_ADDRESS.to_managed_address());

    let price_aggregator_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_aggregator::PriceAggregatorProxy)
        .init(feeders)
        .code(PRICE_AGGREGATOR_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    push_price(
        world,
        &price_aggregator_sc,
        WETH_TICKER,
        wad_price(WETH_PRICE_IN_DOLLARS),
    );
    push_price(
        world,
        &price_aggregator_sc,
        DAI_TICKER,
        wad_price(DAI_PRICE_IN_DOLLARS),
    );
    push_price(
        world,
        &price_aggregator_sc,
        USDC_TICKER,
        wad_price(USDC_PRICE_IN_DOLLARS),
    );

    price_aggregator_sc
}

/// Publishes `ticker/USD` at the current block timestamp.
pub fn push_price(
    world: &mut ScenarioWorld,
    price_aggregator_sc: &ManagedAddress<StaticApi>,
    ticker: &[u8],
    price: BigUint<StaticApi>,
) {
    world
        .tx()
        .from(FEEDER_ADDRESS)
        .to(price_aggregator_sc)
        .typed(proxy_price_aggregator::PriceAggregatorProxy)
        .push_price(
            ManagedBuffer::from(ticker),
            ManagedBuffer::from(DOLLAR_TICKER),
            price,
            PRICE_DECIMALS,
        )
        .run();
}

pub fn market_listing(
    token_id: TestTokenIdentifier,
    asset_decimals: usize,
    ticker: &[u8],
    aggregator: &ManagedAddress<StaticApi>,
) -> MarketListing<StaticApi> {
    MarketListing {
        token: to_egld_or_esdt(token_id),
        asset_decimals,
        aggregator: aggregator.clone(),
        ticker: ManagedBuffer::from(ticker),
        max_price_stale_seconds: MAX_PRICE_STALE_SECONDS,
    }
}

pub fn default_listings(
    price_aggregator_sc: &ManagedAddress<StaticApi>,
) -> MultiValueEncoded<StaticApi, MarketListing<StaticApi>> {
    let mut listings = MultiValueEncoded::new();
    listings.push(market_listing(
        WETH_TOKEN,
        WETH_DECIMALS,
        WETH_TICKER,
        price_aggregator_sc,
    ));
    listings.push(market_listing(
        DAI_TOKEN,
        DAI_DECIMALS,
        DAI_TICKER,
        price_aggregator_sc,
    ));
    listings.push(market_listing(
        USDC_TOKEN,
        USDC_DECIMALS,
        USDC_TICKER,
        price_aggregator_sc,
    ));
    listings
}

pub fn setup_ledger(
    world: &mut ScenarioWorld,
    price_aggregator_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_ledger::LedgerProxy)
        .init(UPKEEP_INTERVAL, default_listings(price_aggregator_sc))
        .code(LEDGER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_ledger_error(
    world: &mut ScenarioWorld,
    upkeep_interval: u64,
    listings: MultiValueEncoded<StaticApi, MarketListing<StaticApi>>,
    error_message: &[u8],
) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_ledger::LedgerProxy)
        .init(upkeep_interval, listings)
        .code(LEDGER_PATH)
        .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
        .run();
}
