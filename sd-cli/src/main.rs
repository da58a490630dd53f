//! sdfield: encode, decode and check custom column values.
//!
//! Usage:
//!   sdfield encode --kind mac_set '["aa:bb:cc:dd:ee:ff"]'
//!   sdfield decode --kind generic_object 42
//!   sdfield check --kind mac --required 00-1A-2b-3C-4d-5E

use anyhow::Result;
use clap::Parser;
use sd_cli::{Args, load_settings, run};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        settings.logging.level.parse().unwrap_or(Level::INFO)
    };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    debug!(command = ?args.command, "running");
    println!("{}", run(&args.command, &settings)?);
    Ok(())
}
