use std::time::Duration;

use common_proxies::proxy_ledger;
use common_structs::MarketListing;
use multiversx_sc_snippets::imports::*;

use crate::{config::Config, state::State};

// Equivalents of the `bech32` helpers that multiversx-sc-snippets dropped after 0.54.
mod bech32 {
    use multiversx_sc_snippets::imports::{Address, Bech32Address};

    pub fn decode(bech32_address: &str) -> Address {
        Bech32Address::from_bech32_string(bech32_address.to_string()).to_address()
    }

    pub fn encode(address: &Address) -> String {
        Bech32Address::from(address).to_bech32_string()
    }
}

const GAS_LIMIT: u64 = 30_000_000;
// A pass walks every market and position
const UPKEEP_GAS_LIMIT: u64 = 600_000_000;

pub struct KeeperInteract {
    interactor: Interactor,
    wallet_address: Address,
    contract_code: BytesValue,
    config: Config,
    state: State,
}

impl KeeperInteract {
    pub async fn new() -> Self {
        let config = Config::new();
        let mut interactor = Interactor::new(config.gateway_uri())
            .await
            .use_chain_simulator(config.use_chain_simulator());
        interactor.set_current_dir_from_workspace("ledger/interactor");

        let wallet_address = interactor.register_wallet(test_wallets::alice()).await;

        let contract_code = BytesValue::interpret_from(
            "mxsc:../output/ledger.mxsc.json",
            &InterpreterContext::default(),
        );

        KeeperInteract {
            interactor,
            wallet_address,
            contract_code,
            config,
            state: State::load_state(),
        }
    }

    fn market_listings(&self) -> MultiValueEncoded<StaticApi, MarketListing<StaticApi>> {
        let aggregator = ManagedAddress::from(bech32::decode(&self.config.price_aggregator));

        let mut listings = MultiValueEncoded::new();
        for market in &self.config.markets {
            listings.push(MarketListing {
                token: EgldOrEsdtTokenIdentifier::esdt(TokenIdentifier::from(
                    market.token.as_str(),
                )),
                asset_decimals: market.decimals,
                aggregator: aggregator.clone(),
                ticker: ManagedBuffer::from(market.ticker.as_str()),
                max_price_stale_seconds: market.max_price_stale_seconds,
            });
        }
        listings
    }

    pub async fn deploy(&mut self) {
        let listings = self.market_listings();

        let new_address = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .gas(GAS_LIMIT * 4)
            .typed(proxy_ledger::LedgerProxy)
            .init(self.config.upkeep_interval, listings)
            .code(&self.contract_code)
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .returns(ReturnsNewAddress)
            .run()
            .await;
        let new_address_bech32 = bech32::encode(&new_address);
        self.state
            .set_ledger_address(Bech32Address::from_bech32_string(new_address_bech32.clone()));

        ::log::info!(
            "ledger deployed at {new_address_bech32} with {} markets",
            self.config.markets.len()
        );
        println!("new address: {new_address_bech32}");
    }

    pub async fn check_upkeep(&mut self) -> bool {
        self.interactor
            .query()
            .to(self.state.current_ledger_address())
            .typed(proxy_ledger::LedgerProxy)
            .check_upkeep()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await
    }

    async fn last_upkeep_timestamp(&mut self) -> u64 {
        self.interactor
            .query()
            .to(self.state.current_ledger_address())
            .typed(proxy_ledger::LedgerProxy)
            .last_upkeep_timestamp()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await
    }

    /// Sends `performUpkeep`. A revert is logged, not fatal: another keeper may have won the race.
    async fn try_perform_upkeep(&mut self) -> bool {
        let result = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_ledger_address())
            .gas(UPKEEP_GAS_LIMIT)
            .typed(proxy_ledger::LedgerProxy)
            .perform_upkeep()
            .returns(ReturnsHandledOrError::new())
            .run()
            .await;

        match result {
            Ok(()) => {
                let timestamp = self.last_upkeep_timestamp().await;
                self.state.set_last_performed_upkeep(timestamp);
                ::log::info!("upkeep performed, last upkeep timestamp {timestamp}");
                true
            },
            Err(status) => {
                ::log::warn!("performUpkeep reverted: {}", status.message);
                false
            },
        }
    }

    pub async fn perform_upkeep(&mut self) {
        if !self.check_upkeep().await {
            ::log::info!("upkeep not due");
            return;
        }
        self.try_perform_upkeep().await;
    }

    pub async fn run(&mut self, max_passes: Option<u64>) {
        let polling = Duration::from_secs(self.config.polling_seconds);
        let mut passes = 0u64;

        loop {
            if self.check_upkeep().await && self.try_perform_upkeep().await {
                passes += 1;
                if max_passes.is_some_and(|max| passes >= max) {
                    ::log::info!("stopping after {passes} passes");
                    return;
                }
            } else {
                ::log::debug!("upkeep not due, sleeping {}s", polling.as_secs());
            }

            tokio::time::sleep(polling).await;
        }
    }

    pub async fn liquidate(&mut self, account: &str) {
        let account = ManagedAddress::<StaticApi>::from(bech32::decode(account));

        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_ledger_address())
            .gas(UPKEEP_GAS_LIMIT / 4)
            .typed(proxy_ledger::LedgerProxy)
            .liquidate(account)
            .run()
            .await;

        ::log::info!("liquidation sent");
    }

    pub async fn add_keeper(&mut self, keeper: &str) {
        let keeper = ManagedAddress::<StaticApi>::from(bech32::decode(keeper));

        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_ledger_address())
            .gas(GAS_LIMIT)
            .typed(proxy_ledger::LedgerProxy)
            .add_keeper(keeper)
            .run()
            .await;
    }

    pub async fn remove_keeper(&mut self, keeper: &str) {
        let keeper = ManagedAddress::<StaticApi>::from(bech32::decode(keeper));

        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_ledger_address())
            .gas(GAS_LIMIT)
            .typed(proxy_ledger::LedgerProxy)
            .remove_keeper(keeper)
            .run()
            .await;
    }
}
