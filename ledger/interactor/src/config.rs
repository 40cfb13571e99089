use serde::Deserialize;
use std::io::Read;

/// Config file
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Real,
    Simulator,
}

/// One asset handed to the ledger at deploy time.
#[derive(Debug, Deserialize)]
pub struct MarketEntry {
    pub token: String,
    pub decimals: usize,
    pub ticker: String,
    pub max_price_stale_seconds: u64,
}

/// Keeper configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    pub gateway_uri: String,
    pub chain_type: ChainType,
    pub polling_seconds: u64,
    pub upkeep_interval: u64,
    pub price_aggregator: String,
    #[serde(default)]
    pub markets: Vec<MarketEntry>,
}

impl Config {
    // Deserializes config from file
    pub fn new() -> Self {
        let mut file = std::fs::File::open(CONFIG_FILE).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        toml::from_str(&content).unwrap()
    }

    // Returns the gateway URI
    pub fn gateway_uri(&self) -> &str {
        &self.gateway_uri
    }

    // Returns if chain type is chain simulator
    pub fn use_chain_simulator(&self) -> bool {
        self.chain_type == ChainType::Simulator
    }
}
