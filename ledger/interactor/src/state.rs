use multiversx_sc_snippets::imports::*;
use serde::{Deserialize, Serialize};
use std::{
    io::{Read, Write},
    path::Path,
};

/// State file
const STATE_FILE: &str = "state.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct State {
    ledger_address: Option<Bech32Address>,
    #[serde(default)]
    last_performed_upkeep: Option<u64>,
}

impl State {
    // Deserializes state from file
    pub fn load_state() -> Self {
        if Path::new(STATE_FILE).exists() {
            let mut file = std::fs::File::open(STATE_FILE).unwrap();
            let mut content = String::new();
            file.read_to_string(&mut content).unwrap();
            toml::from_str(&content).unwrap()
        } else {
            Self::default()
        }
    }

    /// Sets the ledger address
    pub fn set_ledger_address(&mut self, address: Bech32Address) {
        self.ledger_address = Some(address);
    }

    /// Returns the ledger address
    pub fn current_ledger_address(&self) -> &Bech32Address {
        self.ledger_address
            .as_ref()
            .expect("no known ledger, deploy first")
    }

    pub fn set_last_performed_upkeep(&mut self, timestamp: u64) {
        self.last_performed_upkeep = Some(timestamp);
    }
}

impl Drop for State {
    // Serializes state to file
    fn drop(&mut self) {
        let mut file = std::fs::File::create(STATE_FILE).unwrap();
        file.write_all(toml::to_string(self).unwrap().as_bytes())
            .unwrap();
    }
}
