//! Password generation and strength estimation
//!
//! Characters are drawn uniformly from the selected pool with an OS-backed
//! CSPRNG. Strength is reported as `length * log2(pool)` bits of entropy
//! together with average crack times at a few reference guessing speeds.

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>/?|~";
/// Characters that read alike and get dropped with `exclude_ambiguous`
const AMBIGUOUS: &str = "Il1O0";

/// Reference guessing speeds for crack-time estimates
pub const SPEEDS: [(&str, f64); 4] = [
    ("1k guesses/sec (slow online)", 1e3),
    ("1M guesses/sec (desktop GPU)", 1e6),
    ("1G guesses/sec (cluster)", 1e9),
    ("1T guesses/sec (massive botnet/specialized)", 1e12),
];

/// Pool selection for password generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: false,
            exclude_ambiguous: true,
        }
    }
}

/// Crack-time estimate at one guessing speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackTime {
    pub speed: String,
    pub seconds: f64,
    pub display: String,
}

/// Entropy estimate for a password shape
#[derive(Debug, Clone, Serialize)]
pub struct StrengthEstimate {
    pub bits: f64,
    pub classification: &'static str,
    pub crack_times: Vec<CrackTime>,
}

/// Build the character pool for the given options
pub fn build_pool(options: &PasswordOptions) -> Result<Vec<char>> {
    let mut pool = String::new();
    if options.include_upper {
        pool.push_str(UPPER);
    }
    if options.include_lower {
        pool.push_str(LOWER);
    }
    if options.include_digits {
        pool.push_str(DIGITS);
    }
    if options.include_symbols {
        pool.push_str(SYMBOLS);
    }

    let chars: Vec<char> = if options.exclude_ambiguous {
        pool.chars().filter(|c| !AMBIGUOUS.contains(*c)).collect()
    } else {
        pool.chars().collect()
    };

    if chars.is_empty() {
        return Err(GenError::invalid_input(
            "character pool is empty - enable at least one character class",
        ));
    }
    Ok(chars)
}

/// Generate one password
pub fn generate(options: &PasswordOptions) -> Result<String> {
    if options.length == 0 {
        return Err(GenError::invalid_input("password length must be at least 1"));
    }
    let pool = build_pool(options)?;
    let mut rng = OsRng;
    Ok((0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

/// Generate a batch of passwords with the same options
pub fn generate_batch(options: &PasswordOptions, quantity: usize) -> Result<Vec<String>> {
    (0..quantity).map(|_| generate(options)).collect()
}

/// Estimate strength for a password shape
pub fn estimate(length: usize, pool_size: usize) -> StrengthEstimate {
    let bits = (length as f64) * (pool_size as f64).log2();
    let crack_times = SPEEDS
        .iter()
        .map(|(label, speed)| {
            // Average attack succeeds after half the keyspace: 2^(bits-1)
            let seconds = (bits - 1.0).exp2() / speed;
            CrackTime {
                speed: (*label).to_string(),
                seconds,
                display: format_duration(seconds),
            }
        })
        .collect();

    StrengthEstimate {
        bits,
        classification: classify(bits),
        crack_times,
    }
}

/// Classify an entropy figure into the usual strength buckets
pub fn classify(bits: f64) -> &'static str {
    if bits < 28.0 {
        "Very weak"
    } else if bits < 36.0 {
        "Weak"
    } else if bits < 60.0 {
        "Moderate"
    } else if bits < 128.0 {
        "Strong"
    } else {
        "Very strong"
    }
}

/// Render a duration in the largest sensible unit
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds > 1e50 {
        return "centuries (very large)".to_string();
    }

    let units = [
        ("year", 60.0 * 60.0 * 24.0 * 365.0),
        ("day", 60.0 * 60.0 * 24.0),
        ("hour", 60.0 * 60.0),
        ("minute", 60.0),
        ("second", 1.0),
    ];
    for (unit, unit_seconds) in units {
        if seconds >= unit_seconds {
            let value = seconds / unit_seconds;
            let plural = if value >= 2.0 { "s" } else { "" };
            return format!("{} {}{}", trim_number(value), unit, plural);
        }
    }
    format!("{} seconds", trim_number(seconds))
}

/// Format with up to two decimals, dropping trailing zeros
fn trim_number(value: f64) -> String {
    let formatted = if value >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_pool() {
        let options = PasswordOptions::default();
        let password = generate(&options).unwrap();
        assert_eq!(password.chars().count(), 16);

        let pool = build_pool(&options).unwrap();
        assert!(password.chars().all(|c| pool.contains(&c)));
    }

    #[test]
    fn test_ambiguous_excluded_by_default() {
        let pool = build_pool(&PasswordOptions::default()).unwrap();
        for c in AMBIGUOUS.chars() {
            assert!(!pool.contains(&c), "pool should not contain {:?}", c);
        }
        // 26 + 26 + 10 minus the five ambiguous characters
        assert_eq!(pool.len(), 57);
    }

    #[test]
    fn test_digits_only_pool() {
        let options = PasswordOptions {
            include_upper: false,
            include_lower: false,
            include_symbols: false,
            exclude_ambiguous: false,
            ..Default::default()
        };
        let pool = build_pool(&options).unwrap();
        assert_eq!(pool.len(), 10);
        let password = generate(&options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let options = PasswordOptions {
            include_upper: false,
            include_lower: false,
            include_digits: false,
            include_symbols: false,
            ..Default::default()
        };
        assert!(matches!(
            generate(&options),
            Err(GenError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_length_rejected() {
        let options = PasswordOptions {
            length: 0,
            ..Default::default()
        };
        assert!(generate(&options).is_err());
    }

    #[test]
    fn test_batch() {
        let batch = generate_batch(&PasswordOptions::default(), 5).unwrap();
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn test_entropy_bits() {
        // 16 characters over a 64-symbol pool is exactly 96 bits
        let est = estimate(16, 64);
        assert!((est.bits - 96.0).abs() < 1e-9);
        assert_eq!(est.classification, "Strong");
        assert_eq!(est.crack_times.len(), 4);
    }

    #[test]
    fn test_classification_buckets() {
        assert_eq!(classify(10.0), "Very weak");
        assert_eq!(classify(30.0), "Weak");
        assert_eq!(classify(50.0), "Moderate");
        assert_eq!(classify(100.0), "Strong");
        assert_eq!(classify(200.0), "Very strong");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(1.0), "1 second");
        assert_eq!(format_duration(120.0), "2 minutes");
        assert_eq!(format_duration(3600.0), "1 hour");
        assert_eq!(format_duration(86400.0 * 365.0 * 3.0), "3 years");
        assert_eq!(format_duration(f64::INFINITY), "centuries (very large)");
        assert_eq!(format_duration(1e60), "centuries (very large)");
    }

    #[test]
    fn test_format_duration_trims_zeros() {
        assert_eq!(format_duration(90.0), "1.5 minutes");
        assert_eq!(format_duration(0.5), "0.5 seconds");
    }
}
