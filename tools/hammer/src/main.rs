//! Hammer - DevForge command-line toolbox
//!
//! One binary bundling the DevForge developer utilities: numeric/bit
//! conversions, text encodings, generators, time helpers and inspectors.
//! Every command prints human-readable output by default and structured
//! JSON with `--json`.

mod config;
mod convert;
mod encode;
mod error;
mod gen;
mod inspect;
mod output;
mod time;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::*;

use crate::config::HammerConfig;
use crate::error::HammerError;

#[derive(Parser)]
#[command(name = "hammer")]
#[command(about = "Hammer - DevForge command-line toolbox")]
#[command(long_about = "Hammer - DevForge command-line toolbox

Conversion:
  convert     Integer and IEEE-754 bit-level conversions

Encodings:
  encode      Base64, URL percent-encoding and case conversion

Generators:
  gen         UUIDs, passwords, cron expressions, placeholders, compose

Time:
  time        Timestamp parsing, format tables and calendar math

Inspectors:
  inspect     JWT, JSON tables, TOML/YAML viewers, regex testing

Examples:
  hammer convert int 0xFF --width 8 --unsigned
  hammer convert float 3.14 --width 32
  hammer encode base64 'hello world'
  hammer gen password --length 24 --symbols
  hammer gen cron '0 0 * * 1-5'
  hammer time parse 1709294400
  hammer inspect jwt decode <token> --secret <secret>

Use 'hammer <command> --help' for more information on a specific command.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file path (default: $HAMMER_CONFIG or ./hammer.yaml)
    #[arg(short = 'c', long = "config", global = true)]
    config_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Integer and IEEE-754 bit-level conversions
    Convert {
        #[command(subcommand)]
        command: convert::ConvertCommands,
    },

    /// Base64, URL percent-encoding and case conversion
    Encode {
        #[command(subcommand)]
        command: encode::EncodeCommands,
    },

    /// UUIDs, passwords, cron expressions, placeholders, compose files
    Gen {
        #[command(subcommand)]
        command: gen::GenCommands,
    },

    /// Timestamp parsing, format tables and calendar math
    Time {
        #[command(subcommand)]
        command: time::TimeCommands,
    },

    /// JWT, JSON tables, TOML/YAML viewers, regex testing
    Inspect {
        #[command(subcommand)]
        command: inspect::InspectCommands,
    },
}

/// Shared per-invocation state handed to every command handler
pub struct Context {
    pub json: bool,
    pub config: HammerConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging
    common::init_logging(cli.verbose);

    let config = match config::load(cli.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&e, cli.json),
    };

    tracing::debug!("configuration loaded");

    let ctx = Context {
        json: cli.json,
        config,
    };

    let result = match cli.command {
        Commands::Convert { command } => convert::handle_command(command, &ctx),
        Commands::Encode { command } => encode::handle_command(command, &ctx),
        Commands::Gen { command } => gen::handle_command(command, &ctx),
        Commands::Time { command } => time::handle_command(command, &ctx),
        Commands::Inspect { command } => inspect::handle_command(command, &ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e, cli.json),
    }
}

fn report_error(error: &HammerError, json: bool) -> ExitCode {
    if json {
        let info = error.error_info();
        // ErrorInfo is a plain struct of strings; serialization cannot fail
        if let Ok(payload) = serde_json::to_string_pretty(&info) {
            eprintln!("{}", payload);
        }
    } else {
        eprintln!("{} {}", "ERROR".red(), error);
    }
    let code = u8::try_from(error.exit_code()).unwrap_or(1);
    ExitCode::from(code)
}
