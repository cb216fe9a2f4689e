//! `hammer inspect` - viewers and testers

use std::path::PathBuf;

use clap::Subcommand;
use colored::*;
use serde_json::json;

use forge_inspect::json as json_view;
use forge_inspect::jwt;
use forge_inspect::markup;
use forge_inspect::regex as regex_tool;
use forge_inspect::{HsAlgorithm, JsonView, RegexFlags, Verification};

use crate::error::{HammerError, Result};
use crate::output;
use crate::Context;

#[derive(Subcommand)]
pub enum InspectCommands {
    /// Decode or sign JSON Web Tokens
    Jwt {
        #[command(subcommand)]
        command: JwtCommands,
    },

    /// View JSON: array-of-objects as a table, anything else as a tree
    Json {
        /// Inline JSON (omit when using --file)
        input: Option<String>,

        /// Read input from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Export a table view to CSV
        #[arg(long)]
        csv: bool,
    },

    /// Parse TOML and show it as a JSON tree
    Toml {
        /// Inline TOML (omit when using --file)
        input: Option<String>,

        /// Read input from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Parse YAML and show it as a JSON tree
    Yaml {
        /// Inline YAML (omit when using --file)
        input: Option<String>,

        /// Read input from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Test a regex against a string
    Regex {
        /// The pattern
        pattern: String,

        /// The test string
        text: String,

        /// Flag characters: g, i, m, s, x, U
        #[arg(short = 'f', long, default_value = "g")]
        flags: String,
    },
}

#[derive(Subcommand)]
pub enum JwtCommands {
    /// Decode a token's header and payload, optionally verifying it
    Decode {
        token: String,

        /// Shared secret for HS256/HS512 verification
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Sign a JSON claims object into a compact token
    Sign {
        /// Claims as inline JSON, e.g. '{"sub":"1234"}'
        claims: String,

        /// Shared secret
        #[arg(short, long)]
        secret: String,

        /// Algorithm: hs256 or hs512
        #[arg(long, default_value = "hs256")]
        alg: String,
    },
}

pub fn handle_command(command: InspectCommands, ctx: &Context) -> Result<()> {
    match command {
        InspectCommands::Jwt { command } => handle_jwt(command, ctx),
        InspectCommands::Json { input, file, csv } => {
            let text = read_input(input, file)?;
            let view = json_view::view(&text)?;
            if csv {
                let JsonView::Table { columns, rows } = &view else {
                    return Err(HammerError::invalid_input(
                        "--csv needs an array of objects",
                    ));
                };
                print!("{}", json_view::to_csv(columns, rows)?);
                return Ok(());
            }
            if ctx.json {
                return output::json(&view);
            }
            match view {
                JsonView::Table { columns, rows } => print_table(&columns, &rows),
                JsonView::Tree { pretty } => println!("{}", pretty),
            }
            Ok(())
        }
        InspectCommands::Toml { input, file } => {
            let value = markup::toml_to_json(&read_input(input, file)?)?;
            println!("{}", markup::pretty(&value)?);
            Ok(())
        }
        InspectCommands::Yaml { input, file } => {
            let value = markup::yaml_to_json(&read_input(input, file)?)?;
            println!("{}", markup::pretty(&value)?);
            Ok(())
        }
        InspectCommands::Regex {
            pattern,
            text,
            flags,
        } => {
            let flags = parse_flags(&flags)?;
            let matches = regex_tool::find_matches(&pattern, flags, &text)?;
            if ctx.json {
                return output::json(&matches);
            }
            if matches.is_empty() {
                println!("{} no matches", "INFO".bright_cyan());
                return Ok(());
            }
            for m in &matches {
                println!(
                    "{} [{}..{}] {}",
                    format!("#{}", m.index + 1).bright_white(),
                    m.start,
                    m.end,
                    m.text.green()
                );
                for (i, group) in m.groups.iter().enumerate() {
                    let label = group
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("group {}", i + 1));
                    let value = group.text.as_deref().unwrap_or("<no match>");
                    println!("    {}: {}", label.bright_cyan(), value);
                }
            }
            Ok(())
        }
    }
}

fn handle_jwt(command: JwtCommands, ctx: &Context) -> Result<()> {
    match command {
        JwtCommands::Decode { token, secret } => {
            let decoded = jwt::decode(&token)?;
            let verification = secret
                .map(|s| jwt::verify(&token, &s))
                .transpose()?;

            if ctx.json {
                return output::json(&json!({
                    "header": decoded.header,
                    "payload": decoded.payload,
                    "verification": verification,
                }));
            }

            output::heading("Header");
            println!("{}", serde_json::to_string_pretty(&decoded.header)?);
            output::heading("Payload");
            println!("{}", serde_json::to_string_pretty(&decoded.payload)?);
            if let Some(verification) = verification {
                println!();
                match verification {
                    Verification::Verified => {
                        println!("{} Signature verified", "OK".green());
                    }
                    Verification::Failed => {
                        println!("{} Signature verification failed", "FAIL".red());
                    }
                    Verification::Unsupported { algorithm } => {
                        println!(
                            "{} {} verification is not supported with a shared secret",
                            "WARNING".yellow(),
                            algorithm
                        );
                    }
                }
            }
            Ok(())
        }
        JwtCommands::Sign {
            claims,
            secret,
            alg,
        } => {
            let algorithm = match alg.to_ascii_lowercase().as_str() {
                "hs256" => HsAlgorithm::HS256,
                "hs512" => HsAlgorithm::HS512,
                other => {
                    return Err(HammerError::invalid_input(format!(
                        "unknown algorithm '{}' (expected hs256 or hs512)",
                        other
                    )))
                }
            };
            let claims: serde_json::Value = serde_json::from_str(&claims)?;
            let token = jwt::sign(&claims, &secret, algorithm)?;
            if ctx.json {
                return output::json(&json!({ "token": token }));
            }
            println!("{}", token);
            Ok(())
        }
    }
}

fn print_table(columns: &[String], rows: &[Vec<String>]) {
    // Column widths sized to the longest cell
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            rows.iter()
                .map(|r| r.get(i).map_or(0, String::len))
                .chain(std::iter::once(col.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(widths.iter().copied())
        .map(|(c, w)| format!("{:<width$}", c, width = w))
        .collect();
    println!("{}", header.join("  ").bright_cyan());

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(c, w)| format!("{:<width$}", c, width = w))
            .collect();
        println!("{}", cells.join("  "));
    }
}

fn parse_flags(flags: &str) -> Result<RegexFlags> {
    let mut parsed = RegexFlags::default();
    for ch in flags.chars() {
        match ch {
            'g' => parsed.global = true,
            'i' => parsed.ignore_case = true,
            'm' => parsed.multi_line = true,
            's' => parsed.dot_matches_new_line = true,
            'x' => parsed.ignore_whitespace = true,
            'U' => parsed.swap_greed = true,
            other => {
                return Err(HammerError::invalid_input(format!(
                    "unknown regex flag '{}' (expected g, i, m, s, x or U)",
                    other
                )))
            }
        }
    }
    Ok(parsed)
}

fn read_input(inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (inline, file) {
        (Some(_), Some(_)) => Err(HammerError::invalid_input(
            "provide inline input or --file, not both",
        )),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err(HammerError::invalid_input("provide input or --file")),
    }
}
