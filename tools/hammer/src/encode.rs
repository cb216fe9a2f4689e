//! `hammer encode` - Base64, URL and case conversion

use std::path::PathBuf;

use clap::Subcommand;
use colored::*;
use serde_json::json;

use forge_encode::{base64, case, url};

use crate::error::{HammerError, Result};
use crate::output;
use crate::Context;

#[derive(Subcommand)]
pub enum EncodeCommands {
    /// Base64 encode/decode text or files
    Base64 {
        /// Text input (omit when using --file)
        text: Option<String>,

        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,

        /// Read input from a file instead of the argument
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Write decoded bytes to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// URL percent-encode or decode a string
    Url {
        text: String,

        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,
    },

    /// Show every case style of the input text
    Case { text: String },
}

pub fn handle_command(command: EncodeCommands, ctx: &Context) -> Result<()> {
    match command {
        EncodeCommands::Base64 {
            text,
            decode,
            file,
            output,
        } => handle_base64(text, decode, file, output, ctx),
        EncodeCommands::Url { text, decode } => {
            let result = if decode {
                url::decode(&text)?
            } else {
                url::encode(&text)
            };
            if ctx.json {
                output::json(&json!({ "input": text, "output": result }))
            } else {
                println!("{}", result);
                Ok(())
            }
        }
        EncodeCommands::Case { text } => {
            let renderings = case::convert_all(&text);
            if renderings.is_empty() {
                return Err(HammerError::invalid_input("no words found in input"));
            }
            if ctx.json {
                output::json(&renderings)
            } else {
                for rendering in &renderings {
                    output::kv(rendering.label, &rendering.value);
                }
                Ok(())
            }
        }
    }
}

fn handle_base64(
    text: Option<String>,
    decode: bool,
    file: Option<PathBuf>,
    output_path: Option<PathBuf>,
    ctx: &Context,
) -> Result<()> {
    let result = match (decode, &file) {
        (false, Some(path)) => base64::encode_bytes(&std::fs::read(path)?),
        (false, None) => base64::encode_text(&required(text)?),
        (true, Some(path)) => {
            let encoded = std::fs::read_to_string(path)?;
            return write_decoded(&encoded, output_path, ctx);
        }
        (true, None) => return write_decoded(&required(text)?, output_path, ctx),
    };

    if ctx.json {
        output::json(&json!({ "output": result }))
    } else {
        println!("{}", result);
        Ok(())
    }
}

/// Decode base64 to a file (raw bytes) or stdout (UTF-8 text)
fn write_decoded(encoded: &str, output_path: Option<PathBuf>, ctx: &Context) -> Result<()> {
    match output_path {
        Some(path) => {
            let bytes = base64::decode_bytes(encoded)?;
            std::fs::write(&path, &bytes)?;
            if ctx.json {
                output::json(&json!({ "written": path, "bytes": bytes.len() }))
            } else {
                println!(
                    "{} {} bytes written to {}",
                    "OK".green(),
                    bytes.len(),
                    path.display()
                );
                Ok(())
            }
        }
        None => {
            let text = base64::decode_text(encoded)?;
            if ctx.json {
                output::json(&json!({ "output": text }))
            } else {
                println!("{}", text);
                Ok(())
            }
        }
    }
}

fn required(text: Option<String>) -> Result<String> {
    text.ok_or_else(|| HammerError::invalid_input("provide text or --file"))
}
