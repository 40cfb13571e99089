use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const KEEPER_ADDRESS: TestAddress = TestAddress::new("keeper");
pub const FEEDER_ADDRESS: TestAddress = TestAddress::new("feeder");

pub const LEDGER_PATH: MxscPath = MxscPath::new("output/ledger.mxsc.json");
pub const PRICE_AGGREGATOR_PATH: MxscPath =
    MxscPath::new("../price_aggregator/output/price_aggregator.mxsc.json");

pub const DOLLAR_TICKER: &[u8] = b"USD";
pub const PRICE_DECIMALS: u8 = 18;

pub const UPKEEP_INTERVAL: u64 = 30;
pub const MAX_PRICE_STALE_SECONDS: u64 = 3_600;
pub const START_TIMESTAMP: u64 = 1_000;

pub const WETH_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WETH-123456");
pub const WETH_TICKER: &[u8] = b"WETH";
pub const WETH_DECIMALS: usize = 18;
pub const WETH_PRICE_IN_DOLLARS: u64 = 2_000;

pub const DAI_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("DAI-123456");
pub const DAI_TICKER: &[u8] = b"DAI";
pub const DAI_DECIMALS: usize = 18;
pub const DAI_PRICE_IN_DOLLARS: u64 = 1;

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const USDC_TICKER: &[u8] = b"USDC";
pub const USDC_DECIMALS: usize = 6;
pub const USDC_PRICE_IN_DOLLARS: u64 = 1;

pub const LISTED_TOKENS: [TestTokenIdentifier; 3] = [WETH_TOKEN, DAI_TOKEN, USDC_TOKEN];

pub const UNLISTED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("FAKE-123456");
pub const NFT_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NFT-123456");

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;
pub const RAY_PRECISION: usize = 27;
pub const RATE_PRECISION: usize = 5;

// Balance handed to every test account, in whole tokens
pub const INITIAL_BALANCE: u64 = 1_000_000;
