mod config;
mod keeper;
mod state;

use clap::{Parser, Subcommand};
use keeper::KeeperInteract;
use multiversx_sc_snippets::imports::*;

#[derive(Parser)]
#[command(name = "ledger-keeper", version, about = "Deploys the ledger and drives its upkeep")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Deploys the ledger with the markets listed in config.toml
    Deploy,
    /// Prints whether an upkeep pass is due
    Check,
    /// Runs one upkeep pass
    Perform,
    /// Polls checkUpkeep and performs every due pass
    Run {
        /// Stop after this many passes
        #[arg(long)]
        max_passes: Option<u64>,
    },
    /// Liquidates a single account, owner or keeper wallet only
    Liquidate { account: String },
    AddKeeper { keeper: String },
    RemoveKeeper { keeper: String },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut interact = KeeperInteract::new().await;
    match cli.command {
        Command::Deploy => interact.deploy().await,
        Command::Check => {
            let due = interact.check_upkeep().await;
            println!("upkeep due: {due}");
        },
        Command::Perform => interact.perform_upkeep().await,
        Command::Run { max_passes } => interact.run(max_passes).await,
        Command::Liquidate { account } => interact.liquidate(&account).await,
        Command::AddKeeper { keeper } => interact.add_keeper(&keeper).await,
        Command::RemoveKeeper { keeper } => interact.remove_keeper(&keeper).await,
    }
}
