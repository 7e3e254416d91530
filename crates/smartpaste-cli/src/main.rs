//! Smart Paste CLI - fill form fields from pasted text.

use clap::Parser;
use smartpaste_cli::commands;
use smartpaste_cli::{Cli, Command, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> smartpaste_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, config).await?,
        Command::Fields(args) => commands::execute_fields(args)?,
        Command::Config => commands::execute_config(&config)?,
    }

    Ok(())
}

// Logs go to stderr so stdout carries only JSON
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
