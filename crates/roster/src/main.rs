// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Roster - employee and department CRUD service.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod seed;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roster_config::RosterConfig;
use roster_core::RosterError;

/// Roster - employee and department CRUD service.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server.
    Serve,
    /// Insert the default departments and generated employees.
    Seed {
        /// Number of employees to generate.
        #[arg(long, default_value_t = seed::DEFAULT_EMPLOYEES)]
        employees: usize,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn load_config(path: Option<&std::path::Path>) -> Result<RosterConfig, Vec<roster_config::ConfigError>> {
    match path {
        Some(path) => roster_config::load_and_validate_path(path),
        None => roster_config::load_and_validate(),
    }
}

fn print_config(config: &RosterConfig) -> Result<(), RosterError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| RosterError::Config(format!("failed to render configuration: {e}")))?;
    print!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            roster_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Seed { employees }) => seed::run_seed(config, employees).await,
        Some(Commands::Config) => print_config(&config),
        None => {
            println!("roster: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("roster: {e}");
        std::process::exit(1);
    }
}
