// crates/patch_home_support/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::env;

use patch_home_support::{patch_home_support, AppConfig};

fn main() -> Result<()> {
    let matches = Command::new("patch_home_support")
        .version("0.1.0")
        .about("Adds the impact pledge entry to the home page support channels")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = AppConfig::new(&current_dir, verbose);
    log::debug!("{:?}", config);

    let outcome = patch_home_support(&config)?;

    println!("--------------------------------------------------");
    println!("Patched {}", outcome.path.display());
    println!(
        "Inserted impact pledge entry at byte {} ({} -> {} bytes)",
        outcome.offset, outcome.bytes_before, outcome.bytes_after
    );
    if outcome.occurrences > 1 {
        println!(
            "Note: support channels tail appears {} times; only the first was patched.",
            outcome.occurrences
        );
    }
    println!("--------------------------------------------------");
    Ok(())
}
