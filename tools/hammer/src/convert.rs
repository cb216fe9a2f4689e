//! `hammer convert` - numeric/bit-level conversions

use clap::Subcommand;
use colored::*;

use common::{group_bits, group_hex};
use forge_numeric::{convert_float, convert_integer, ConversionResult};

use crate::error::Result;
use crate::output;
use crate::Context;

#[derive(Subcommand)]
pub enum ConvertCommands {
    /// Convert an integer literal (decimal, 0x, 0b or 0o)
    Int {
        /// The literal, e.g. 42, -1, 0xFF, 0b1010
        literal: String,

        /// Bit width: 8, 16, 32 or 64
        #[arg(short, long, default_value_t = 32)]
        width: u32,

        /// Interpret the pattern as unsigned instead of two's complement
        #[arg(short, long)]
        unsigned: bool,
    },

    /// Convert a float literal to its IEEE-754 representation
    Float {
        /// The literal, e.g. 3.14 or -2.5e3
        literal: String,

        /// Bit width: 32 or 64
        #[arg(short, long, default_value_t = 32)]
        width: u32,
    },
}

pub fn handle_command(command: ConvertCommands, ctx: &Context) -> Result<()> {
    let result = match &command {
        ConvertCommands::Int {
            literal,
            width,
            unsigned,
        } => convert_integer(literal, *width, !*unsigned)?,
        ConvertCommands::Float { literal, width } => convert_float(literal, *width)?,
    };

    if ctx.json {
        return output::json(&result);
    }

    match result {
        ConversionResult::Integer(bits) => {
            let mode = if bits.signed { "signed" } else { "unsigned" };
            println!(
                "{} {}-bit {}",
                "Integer".bright_yellow(),
                bits.width,
                mode
            );
            output::kv("Binary (BE)", &group_bits(&bits.binary_be));
            output::kv("Binary (LE)", &group_bits(&bits.binary_le));
            output::kv("Hex (BE)", &group_hex(&bits.hex_be));
            output::kv("Hex (LE)", &group_hex(&bits.hex_le));
            output::kv("Octal", &bits.octal);
            output::kv("Decimal", &bits.decimal);
        }
        ConversionResult::Float(bits) => {
            println!("{} IEEE-754 binary{}", "Float".bright_yellow(), bits.width);
            output::kv("Binary (BE)", &group_bits(&bits.binary_be));
            output::kv("Binary (LE)", &group_bits(&bits.binary_le));
            output::kv("Hex (BE)", &group_hex(&bits.hex_be));
            output::kv("Hex (LE)", &group_hex(&bits.hex_le));
            output::kv("Decimal", &bits.decimal);
            output::heading("Fields");
            output::kv("Sign", &bits.sign);
            output::kv(
                "Exponent",
                &format!("{} (value: {})", bits.exponent, bits.exponent_value),
            );
            output::kv("Mantissa", &bits.mantissa);
        }
    }
    Ok(())
}
