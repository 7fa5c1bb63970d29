mod cli;
mod commands;
mod config;
mod error;
mod input;
mod report;
mod runner;
mod walkthrough;

use clap::Parser;
use cli::Cli;
use commands::execute_command;
use log::LevelFilter;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    execute_command(cli.command, &cli.input)?;
    Ok(())
}

/// Warnings only, unless RUST_LOG asks for more.
fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.format_timestamp(None).init();
}
