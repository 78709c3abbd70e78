use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use wallet_cli::config::paths::WalletPaths;
use wallet_cli::shell;
use wallet_cli::storage::EntryStore;

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "wallet-cli is a single-user personal finance ledger. It records \
                  income and expense entries in a plain JSON file and is operated \
                  from an interactive numbered menu."
)]
struct Cli {
    /// Directory holding the ledger file (defaults to the platform config dir)
    #[arg(long, env = "WALLET_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => WalletPaths::with_base_dir(dir),
        None => WalletPaths::new()?,
    };
    paths.ensure_directories()?;

    let store = EntryStore::new(paths.ledger_file());
    shell::run(&store)?;

    Ok(())
}
