//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (cents, paisa) as an i64 so that
//! repeated aggregation never drifts. Ratios against other amounts are
//! compared exactly in i128 before anything is turned into a float for
//! display.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single entry may carry (one trillion whole units)
    pub const MAX_ENTRY: Money = Money(100_000_000_000_000);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// let amount = Money::from_minor(1250); // 12.50
    /// assert_eq!(amount.major(), 12);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units and minor units
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// let amount = Money::from_major_minor(12, 50);
    /// assert_eq!(amount.minor(), 1250);
    /// ```
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Clamp negative amounts to zero
    pub fn non_negative(self) -> Self {
        self.max(Self::zero())
    }

    /// Compare this amount against `percent`% of `whole` without rounding
    ///
    /// `Money::from_minor(20).cmp_percent_of(Money::from_minor(100), 20)`
    /// is `Ordering::Equal`.
    pub fn cmp_percent_of(&self, whole: Money, percent: i64) -> Ordering {
        let lhs = i128::from(self.0) * 100;
        let rhs = i128::from(whole.0) * i128::from(percent);
        lhs.cmp(&rhs)
    }

    /// This amount as a percentage of `whole`, or `None` when `whole` is not positive
    pub fn percent_of(&self, whole: Money) -> Option<f64> {
        if whole.is_positive() {
            Some(self.0 as f64 * 100.0 / whole.0 as f64)
        } else {
            None
        }
    }

    /// `percent`% of this amount, rounded half away from zero
    pub fn percentage(&self, percent: i64) -> Money {
        let scaled = i128::from(self.0) * i128::from(percent);
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Self(rounded as i64)
    }

    /// Split this amount evenly into `parts`, flooring the result
    pub fn divide_by(&self, parts: i64) -> Money {
        if parts <= 0 {
            return Self::zero();
        }
        Self(self.0.div_euclid(parts))
    }

    /// Parse a money amount given in major units
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, digits) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        if digits.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let minor = match digits.split_once('.') {
            Some((whole, fraction)) => {
                if fraction.contains('.') || fraction.len() > 2 {
                    return Err(MoneyParseError::InvalidFormat(s.to_string()));
                }
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    parse_digits(whole, s)?
                };
                let fraction_value = match fraction.len() {
                    0 => 0,
                    1 => parse_digits(fraction, s)? * 10,
                    _ => parse_digits(fraction, s)?,
                };
                whole
                    .checked_mul(100)
                    .and_then(|w| w.checked_add(fraction_value))
                    .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
            }
            None => parse_digits(digits, s)?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?,
        };

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.minor_part())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.minor_part())
        }
    }
}

fn parse_digits(part: &str, original: &str) -> Result<i64, MoneyParseError> {
    if !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(MoneyParseError::InvalidFormat(original.to_string()));
    }
    part.parse()
        .map_err(|_| MoneyParseError::OutOfRange(original.to_string()))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain decimal rendering without a currency symbol
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(""))
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

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_minor(0)), "0.00");
        assert_eq!(format!("{}", Money::from_minor(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_minor(5)), "0.05");
        assert_eq!(format!("{:>8}", Money::from_minor(5)), "    0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_minor(1250).format_with_symbol("Rs "), "Rs 12.50");
        assert_eq!(Money::from_minor(-1250).format_with_symbol("$"), "-$12.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor(), -1050);
        assert_eq!(Money::parse("10").unwrap().minor(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().minor(), 5);
        assert_eq!(Money::parse(".75").unwrap().minor(), 75);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("$5").is_err());
    }

    #[test]
    fn test_cmp_percent_of_is_exact() {
        let income = Money::from_minor(100_000);
        assert_eq!(
            Money::from_minor(20_000).cmp_percent_of(income, 20),
            Ordering::Equal
        );
        assert_eq!(
            Money::from_minor(19_999).cmp_percent_of(income, 20),
            Ordering::Less
        );
        assert_eq!(
            Money::from_minor(-1).cmp_percent_of(income, 0),
            Ordering::Less
        );
    }

    #[test]
    fn test_percent_of() {
        let pct = Money::from_minor(4200).percent_of(Money::from_minor(5000));
        assert_eq!(pct, Some(84.0));
        assert_eq!(Money::from_minor(10).percent_of(Money::zero()), None);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::from_minor(12345).percentage(10).minor(), 1235);
        assert_eq!(Money::from_minor(12340).percentage(10).minor(), 1234);
    }

    #[test]
    fn test_divide_by() {
        assert_eq!(Money::from_minor(3100).divide_by(31).minor(), 100);
        assert_eq!(Money::from_minor(1000).divide_by(3).minor(), 333);
        assert_eq!(Money::from_minor(1000).divide_by(0), Money::zero());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);
        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);

        let total: Money = [a, b].iter().sum();
        assert_eq!(total.minor(), 1500);
        assert_eq!(a.checked_add(b), Some(Money::from_minor(1500)));
        assert_eq!(Money::from_minor(-5).non_negative(), Money::zero());
    }

    #[test]
    fn test_checked_add_detects_overflow() {
        let big = Money::parse("92233720368547758").unwrap();
        assert_eq!(big.checked_add(big), None);
        assert!(big > Money::MAX_ENTRY);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
    }
}
