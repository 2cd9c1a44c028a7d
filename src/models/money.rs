//! Money type for representing currency amounts
//!
//! Amounts are decimal numbers. A value that failed to parse during CSV
//! import is kept as NaN rather than rejected; NaN is written to JSON as
//! `null` and `null` reads back as NaN.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A monetary amount in currency units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Amount that could not be parsed
    pub const fn nan() -> Self {
        Self(f64::NAN)
    }

    /// Get the raw decimal value
    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Round to the nearest whole unit, halves rounding up
    pub fn round(&self) -> Self {
        // Adding 0.5 first can itself round up, e.g. 0.49999999999999994
        let whole = self.0.floor();
        if self.0 - whole >= 0.5 {
            Self(whole + 1.0)
        } else {
            Self(whole)
        }
    }

    /// Parse a user-entered amount
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "1,250.00". Rejects anything that
    /// is not a finite number.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

        let value: f64 = rest
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Parse the way a browser's `parseFloat` does
    ///
    /// Leading whitespace is skipped and the longest numeric prefix is used;
    /// trailing garbage is ignored. Text with no numeric prefix yields NaN.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;

        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end = 1;
        }
        if s[end..].starts_with("Infinity") {
            let inf = if bytes.first() == Some(&b'-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            return Self(inf);
        }

        let int_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digits = end - int_start;

        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            digits += frac_end - frac_start;
            if digits > 0 {
                end = frac_end;
            }
        }

        if digits == 0 {
            return Self::nan();
        }

        // Exponent only counts when followed by at least one digit
        if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }

        s[..end].parse().map(Self).unwrap_or_else(|_| Self::nan())
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if !self.0.is_finite() {
            return format!("{}{}", symbol, self.0);
        }

        let cents = (self.0.abs() * 100.0).round() as u64;
        let whole = group_thousands(cents / 100);
        let sign = if self.0 < 0.0 && cents > 0 { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, whole, cents % 100)
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Option<f64> = Option::deserialize(deserializer)?;
        Ok(Self(value.unwrap_or(f64::NAN)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::new(10.5).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::new(-10.5).to_string(), "-$10.50");
        assert_eq!(Money::new(1234567.891).to_string(), "$1,234,567.89");
        assert_eq!(Money::nan().to_string(), "$NaN");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(2500.0).format_with_symbol("€"), "€2,500.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000.0);
        let b = Money::new(250.0);
        assert_eq!((a + b).value(), 1250.0);
        assert_eq!((b - a).value(), -750.0);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.value(), 1500.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(Money::new(110.000_000_000_000_01).round().value(), 110.0);
        assert_eq!(Money::new(2.5).round().value(), 3.0);
        assert_eq!(Money::new(-2.5).round().value(), -2.0);
        assert!(Money::nan().round().is_nan());
        assert_eq!(Money::new(0.499_999_999_999_999_94).round().value(), 0.0);
        assert_eq!(Money::new(-0.499_999_999_999_999_94).round().value(), 0.0);
        assert_eq!(Money::new(4_503_599_627_370_495.5).round().value(), 4_503_599_627_370_496.0);
        assert_eq!(Money::new(f64::INFINITY).round().value(), f64::INFINITY);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Money::parse("$10.50").unwrap().value(), 10.5);
        assert_eq!(Money::parse("-$10.50").unwrap().value(), -10.5);
        assert_eq!(Money::parse("1,250").unwrap().value(), 1250.0);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_parse_lenient_prefixes() {
        assert_eq!(Money::parse_lenient("-50.00").value(), -50.0);
        assert_eq!(Money::parse_lenient("  2500").value(), 2500.0);
        assert_eq!(Money::parse_lenient("12abc").value(), 12.0);
        assert_eq!(Money::parse_lenient(".5").value(), 0.5);
        assert_eq!(Money::parse_lenient("5.").value(), 5.0);
        assert_eq!(Money::parse_lenient("1e3").value(), 1000.0);
        assert_eq!(Money::parse_lenient("1e").value(), 1.0);
        assert_eq!(Money::parse_lenient("+7").value(), 7.0);
        assert_eq!(Money::parse_lenient("-Infinity").value(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_lenient_nan() {
        assert!(Money::parse_lenient("").is_nan());
        assert!(Money::parse_lenient("$5").is_nan());
        assert!(Money::parse_lenient("abc").is_nan());
        assert!(Money::parse_lenient("-").is_nan());
        assert!(Money::parse_lenient(".").is_nan());
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let json = serde_json::to_string(&Money::nan()).unwrap();
        assert_eq!(json, "null");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert!(back.is_nan());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Money::new(10.5)).unwrap();
        assert_eq!(json, "10.5");

        let back: Money = serde_json::from_str("42").unwrap();
        assert_eq!(back.value(), 42.0);
    }
}
