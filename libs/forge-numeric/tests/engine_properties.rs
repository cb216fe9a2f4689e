//! End-to-end properties of the conversion engine
//!
//! Exercises the public entry points the way a caller would, across every
//! supported width, rather than poking module internals.

use forge_numeric::{
    convert_float, convert_integer, encode_integer, ConversionResult, NumericError,
    FLOAT_WIDTHS, INTEGER_WIDTHS,
};

fn integer_bits(literal: &str, width: u32, signed: bool) -> forge_numeric::IntegerBits {
    match convert_integer(literal, width, signed).unwrap() {
        ConversionResult::Integer(bits) => bits,
        ConversionResult::Float(_) => panic!("integer conversion produced a float"),
    }
}

fn float_bits(literal: &str, width: u32) -> forge_numeric::FloatBits {
    match convert_float(literal, width).unwrap() {
        ConversionResult::Float(bits) => bits,
        ConversionResult::Integer(_) => panic!("float conversion produced an integer"),
    }
}

fn reverse_bytes_of_bit_string(bits: &str) -> String {
    let bytes: Vec<&str> = bits
        .as_bytes()
        .chunks(8)
        .map(|c| std::str::from_utf8(c).unwrap())
        .collect();
    bytes.into_iter().rev().collect()
}

#[test]
fn little_endian_is_byte_reversal_at_every_width() {
    let samples = ["0", "1", "-1", "42", "-12345", "0xDEADBEEF", "0b1011", "0o777"];
    for width in INTEGER_WIDTHS {
        for literal in samples {
            let bits = integer_bits(literal, width, true);
            assert_eq!(
                bits.binary_le,
                reverse_bytes_of_bit_string(&bits.binary_be),
                "literal {} at width {}",
                literal,
                width
            );
        }
    }
    for width in FLOAT_WIDTHS {
        for literal in ["0.0", "1.0", "-2.5", "3.14159", "1e-12"] {
            let bits = float_bits(literal, width);
            assert_eq!(
                bits.binary_le,
                reverse_bytes_of_bit_string(&bits.binary_be),
                "literal {} at width {}",
                literal,
                width
            );
        }
    }
}

#[test]
fn hex_be_reproduces_binary_be() {
    for width in INTEGER_WIDTHS {
        let bits = integer_bits("0x5A", width, false);
        let reparsed = u128::from_str_radix(&bits.hex_be, 16).unwrap();
        assert_eq!(format!("{:0width$b}", reparsed, width = width as usize), bits.binary_be);
    }
}

#[test]
fn bit_string_length_always_equals_width() {
    for width in INTEGER_WIDTHS {
        let bits = integer_bits("-1", width, true);
        assert_eq!(bits.binary_be.len() as u32, width);
        assert_eq!(bits.binary_le.len() as u32, width);
        assert_eq!(bits.hex_be.len() as u32, width / 4);
        assert_eq!(bits.hex_le.len() as u32, width / 4);
    }
}

#[test]
fn signed_and_unsigned_readings_disagree_only_on_top_bit() {
    for width in INTEGER_WIDTHS {
        // -1: all ones, so readings differ
        let signed = integer_bits("-1", width, true);
        let unsigned = integer_bits("-1", width, false);
        assert_eq!(signed.binary_be, unsigned.binary_be);
        assert_eq!(signed.decimal, "-1");
        assert_eq!(unsigned.decimal, ((1u128 << width) - 1).to_string());

        // 1: top bit clear, readings agree
        assert_eq!(
            integer_bits("1", width, true).decimal,
            integer_bits("1", width, false).decimal
        );
    }
}

#[test]
fn float_fields_partition_the_pattern() {
    for width in FLOAT_WIDTHS {
        let bits = float_bits("-0.5", width);
        let reassembled = format!("{}{}{}", bits.sign, bits.exponent, bits.mantissa);
        assert_eq!(reassembled, bits.binary_be);
    }
}

#[test]
fn known_float_patterns() {
    let one = float_bits("1.0", 32);
    assert_eq!(one.binary_be, "00111111100000000000000000000000");
    assert_eq!(one.exponent_value, 127);

    let minus_two = float_bits("-2.0", 64);
    assert_eq!(minus_two.sign, "1");
    assert_eq!(minus_two.exponent_value, 1024);
}

#[test]
fn config_errors_never_partial() {
    for bad_width in [0u32, 7, 12, 128] {
        assert!(matches!(
            convert_integer("1", bad_width, true),
            Err(NumericError::Config { .. })
        ));
    }
    for bad_width in [0u32, 16, 63] {
        assert!(matches!(
            convert_float("1.0", bad_width),
            Err(NumericError::Config { .. })
        ));
    }
}

#[test]
fn parse_errors_for_malformed_literals() {
    for bad in ["0xZZ", "abc", "", "--5", "0b2", "0o9", "1.5"] {
        assert!(
            matches!(convert_integer(bad, 32, true), Err(NumericError::Parse(_))),
            "{:?} should fail to parse as integer",
            bad
        );
    }
    for bad in ["NaN", "Infinity", "-Infinity", "abc", ""] {
        assert!(
            matches!(convert_float(bad, 64), Err(NumericError::Parse(_))),
            "{:?} should fail to parse as float",
            bad
        );
    }
}

#[test]
fn conversion_is_idempotent() {
    let a = convert_integer("0xCAFE", 16, false).unwrap();
    let b = convert_integer("0xCAFE", 16, false).unwrap();
    assert_eq!(a, b);

    let a = convert_float("6.02e23", 64).unwrap();
    let b = convert_float("6.02e23", 64).unwrap();
    assert_eq!(a, b);
}

#[test]
fn direct_encode_matches_parsed_literal() {
    let from_literal = integer_bits("255", 8, false);
    let direct = encode_integer(255, 8, false).unwrap();
    assert_eq!(from_literal, direct);
}
