//! `hammer gen` - generators

use std::path::PathBuf;

use clap::Subcommand;
use colored::*;
use serde_json::json;

use forge_gen::{compose, cron, password, placeholder, uuid};
use forge_gen::{PasswordOptions, PlaceholderSpec};

use crate::error::{HammerError, Result};
use crate::output;
use crate::Context;

#[derive(Subcommand)]
pub enum GenCommands {
    /// Generate UUIDs (v4, or name-based v3/v5)
    Uuid {
        /// UUID version: v3, v4 or v5
        #[arg(long, default_value = "v4")]
        version: String,

        /// Namespace for v3/v5: dns, url, oid, x500 or a UUID
        #[arg(long, default_value = "dns")]
        namespace: String,

        /// Name input for v3/v5
        #[arg(long)]
        name: Option<String>,

        /// How many UUIDs to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        quantity: usize,
    },

    /// Generate passwords and report their strength
    Password {
        /// Password length (default from config)
        #[arg(short, long)]
        length: Option<usize>,

        /// Include symbols
        #[arg(short, long)]
        symbols: bool,

        /// Drop uppercase letters from the pool
        #[arg(long)]
        no_upper: bool,

        /// Drop lowercase letters from the pool
        #[arg(long)]
        no_lower: bool,

        /// Drop digits from the pool
        #[arg(long)]
        no_digits: bool,

        /// Keep ambiguous characters (Il1O0)
        #[arg(long)]
        allow_ambiguous: bool,

        /// How many passwords to generate (default from config)
        #[arg(short = 'n', long)]
        quantity: Option<usize>,
    },

    /// Explain a cron expression and preview its schedule
    Cron {
        /// The 5-field expression, quoted or as separate arguments
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,

        /// How many upcoming trigger times to show (default from config)
        #[arg(short, long)]
        upcoming: Option<usize>,
    },

    /// List the built-in cron presets
    CronPresets,

    /// Generate an SVG placeholder image
    Placeholder {
        #[arg(long, default_value_t = 600)]
        width: u32,

        #[arg(long, default_value_t = 400)]
        height: u32,

        /// Background color (#rgb or #rrggbb)
        #[arg(long, default_value = "#cccccc")]
        background: String,

        /// Text color (#rgb or #rrggbb)
        #[arg(long, default_value = "#333333")]
        foreground: String,

        /// Label text (defaults to the dimensions)
        #[arg(long)]
        text: Option<String>,

        /// Write the SVG to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a docker run command to docker-compose YAML
    Compose {
        /// The docker run command, quoted or as trailing arguments
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

pub fn handle_command(command: GenCommands, ctx: &Context) -> Result<()> {
    match command {
        GenCommands::Uuid {
            version,
            namespace,
            name,
            quantity,
        } => handle_uuid(&version, &namespace, name.as_deref(), quantity, ctx),
        GenCommands::Password {
            length,
            symbols,
            no_upper,
            no_lower,
            no_digits,
            allow_ambiguous,
            quantity,
        } => {
            let defaults = &ctx.config.password;
            let options = PasswordOptions {
                length: length.unwrap_or(defaults.length),
                include_upper: !no_upper,
                include_lower: !no_lower,
                include_digits: !no_digits,
                include_symbols: symbols || defaults.symbols,
                exclude_ambiguous: defaults.exclude_ambiguous && !allow_ambiguous,
            };
            handle_password(&options, quantity.unwrap_or(defaults.quantity), ctx)
        }
        GenCommands::Cron {
            expression,
            upcoming,
        } => {
            let expression = expression.join(" ");
            let count = upcoming.unwrap_or(ctx.config.cron.upcoming);
            let report = cron::report(&expression, count)?;
            if ctx.json {
                return output::json(&report);
            }
            output::kv("Expression", &report.expression);
            output::kv("Meaning", &report.description);
            output::heading("Upcoming");
            for instant in &report.upcoming {
                println!("  {}", instant.format("%Y-%m-%d %H:%M:%S UTC"));
            }
            Ok(())
        }
        GenCommands::CronPresets => {
            if ctx.json {
                let presets: Vec<_> = cron::PRESETS
                    .iter()
                    .map(|(label, expr)| json!({ "label": label, "expression": expr }))
                    .collect();
                return output::json(&presets);
            }
            for (label, expr) in cron::PRESETS {
                println!("{:16}  {}", expr.bright_white(), label);
            }
            Ok(())
        }
        GenCommands::Placeholder {
            width,
            height,
            background,
            foreground,
            text,
            output: output_path,
        } => {
            let spec = PlaceholderSpec {
                width,
                height,
                background,
                foreground,
                text,
            };
            let svg = placeholder::build_svg(&spec)?;
            match output_path {
                Some(path) => {
                    std::fs::write(&path, &svg)?;
                    if ctx.json {
                        output::json(&json!({ "written": path, "bytes": svg.len() }))
                    } else {
                        println!("{} SVG written to {}", "OK".green(), path.display());
                        Ok(())
                    }
                }
                None => {
                    println!("{}", svg);
                    Ok(())
                }
            }
        }
        GenCommands::Compose { command } => {
            let yaml = compose::to_yaml(&command.join(" "))?;
            println!("{}", yaml);
            Ok(())
        }
    }
}

fn handle_uuid(
    version: &str,
    namespace: &str,
    name: Option<&str>,
    quantity: usize,
    ctx: &Context,
) -> Result<()> {
    let uuids = match version.to_ascii_lowercase().as_str() {
        "v4" | "4" => uuid::generate_v4(quantity),
        "v3" | "3" => uuid::generate_named(
            uuid::NameVersion::V3,
            namespace,
            name.unwrap_or_default(),
            quantity,
        )?,
        "v5" | "5" => uuid::generate_named(
            uuid::NameVersion::V5,
            namespace,
            name.unwrap_or_default(),
            quantity,
        )?,
        other => {
            return Err(HammerError::invalid_input(format!(
                "unknown UUID version '{}' (expected v3, v4 or v5)",
                other
            )))
        }
    };

    if ctx.json {
        return output::json(&uuids);
    }
    for id in &uuids {
        println!("{}", id);
    }
    Ok(())
}

fn handle_password(options: &PasswordOptions, quantity: usize, ctx: &Context) -> Result<()> {
    let passwords = password::generate_batch(options, quantity)?;
    let pool = password::build_pool(options)?;
    let strength = password::estimate(options.length, pool.len());

    if ctx.json {
        return output::json(&json!({
            "passwords": passwords,
            "strength": strength,
        }));
    }

    for pw in &passwords {
        println!("{}", pw);
    }
    output::heading("Strength");
    output::kv("Entropy", &format!("{:.1} bits", strength.bits));
    output::kv("Rating", strength.classification);
    for crack in &strength.crack_times {
        output::kv(&crack.speed, &crack.display);
    }
    Ok(())
}
