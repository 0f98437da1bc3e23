use anyhow::Result;
use clap::Parser;
use std::process::exit;

use gitfograph_lib::cli::{handle_command, CliArgs};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // RUST_LOG wins; otherwise -v raises the default level
    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::debug!("Parsed arguments: {:?}", args);

    match handle_command(args) {
        Ok(summary) => {
            println!(
                "Wrote {} rows across {} lanes ({} columns) to {}",
                summary.rows,
                summary.lanes,
                summary.columns,
                summary.output.display()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            exit(1);
        }
    }
}
