mod character;
mod cli;
mod commands;
mod config;
mod file_io;
mod file_utils;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Show(args) => {
            let config = Config::load(config_path)?;
            commands::show::handle(&args, &config)?;
        }

        Commands::All(args) => {
            let config = Config::load(config_path)?;
            commands::all::handle(&args, &config)?;
        }

        Commands::Scan { input, items } => {
            commands::scan::handle(&input, items)?;
        }

        Commands::Configure {
            dirs,
            output_dir,
            show,
        } => {
            commands::configure::handle(config_path, &dirs, output_dir, show)?;
        }
    }

    Ok(())
}

/// Log to stderr so JSON on stdout stays clean. RUST_LOG overrides -v.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
