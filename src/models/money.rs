//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! drift when summing. The backend speaks plain decimal numbers of major
//! units, so that is what goes over the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Symbols stripped by [`Money::parse`]
const CURRENCY_SYMBOLS: &[char] = &['$', '₹', '€', '£'];

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole major units
    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Convert a decimal number of major units, rounding to the nearest cent
    pub fn from_decimal(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        Self((value * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Decimal value in major units
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// `self` as a percentage of `total`, 0 when `total` is not positive
    pub fn percent_of(&self, total: Money) -> f64 {
        if total.0 <= 0 {
            return 0.0;
        }
        self.0 as f64 / total.0 as f64 * 100.0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "-10.50", "₹1,15,000", "$10", "10.5".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let cleaned: String = rest
            .trim_start_matches(CURRENCY_SYMBOLS)
            .chars()
            .filter(|c| *c != ',' && *c != '_')
            .collect();

        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let cents = match cleaned.split_once('.') {
            Some((whole, fraction)) => {
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let fraction: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };
                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction))
                    .ok_or_else(invalid)?
            }
            None => cleaned
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        if cents < 0 {
            return Err(invalid());
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.whole().unsigned_abs()),
            self.cents_part()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.whole().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.whole(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Text(String),
            Null,
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Ok(Money::from_decimal(n)),
            Wire::Text(s) => Money::parse(&s).map_err(serde::de::Error::custom),
            Wire::Null => Ok(Money::zero()),
        }
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

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
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
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is required"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.whole(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(
            Money::from_major(115000).format_with_symbol("₹"),
            "₹115,000.00"
        );
        assert_eq!(Money::from_cents(-99).format_with_symbol("$"), "-$0.99");
        assert_eq!(Money::from_major(1000000).format_with_symbol(""), "1,000,000.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹1,15,000").unwrap().cents(), 11_500_000);
        assert_eq!(Money::parse("-10.5").unwrap().cents(), -1050);
        assert_eq!(Money::parse("$10").unwrap().cents(), 1000);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("  "), Err(MoneyParseError::Empty));
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_amounts_beyond_range() {
        assert_eq!(
            Money::parse("100000000000000000"),
            Err(MoneyParseError::InvalidFormat("100000000000000000".into()))
        );
        assert!(Money::parse("92233720368547758.07").is_ok());
        assert!(Money::parse("92233720368547758.08").is_err());
        assert!(Money::parse("-100000000000000000.5").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_percent_of() {
        let spent = Money::from_major(250);
        assert_eq!(spent.percent_of(Money::from_major(1000)), 25.0);
        assert_eq!(spent.percent_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(serde_json::to_string(&Money::from_major(1500)).unwrap(), "1500");
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "10.5");

        let from_number: Money = serde_json::from_str("1234.56").unwrap();
        assert_eq!(from_number.cents(), 123456);

        let from_text: Money = serde_json::from_str("\"99.90\"").unwrap();
        assert_eq!(from_text.cents(), 9990);

        let from_null: Money = serde_json::from_str("null").unwrap();
        assert!(from_null.is_zero());
    }
}
