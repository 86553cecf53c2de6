use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Money type carrying full decimal precision.
///
/// Projections never round; rounding belongs to the display layer via
/// [`Money::round_dp`] or the currency formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from integer amount (euros, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round half away from zero, the way amounts are shown to users
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    }

    /// strictly below zero; `-0` counts as zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// amount earned in one period at the given rate
    pub fn apply_rate(&self, rate: Rate) -> Self {
        Money(self.0 * rate.as_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Money(Decimal::from_str(s)?))
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(self.0 * other)
    }
}

/// rate type for yields, stored as a fraction (0.07 for 7%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    /// create from fraction (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from whole-number percent (e.g., 7 or 6.5)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// create from integer percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate::from_percent(Decimal::from(p))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as whole-number percent
    pub fn as_percent(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// whole-number percent, `None` if it would not fit a `Decimal`
    pub fn checked_percent(&self) -> Option<Decimal> {
        self.0.checked_mul(Decimal::ONE_HUNDRED)
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.checked_percent() {
            Some(percent) => write!(f, "{}%", percent.normalize()),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_keeps_precision() {
        let m: Money = "100.123456789012".parse().unwrap();
        assert_eq!(m.to_string(), "100.123456789012");

        let third = Money::from_major(1).apply_rate(Rate::from_decimal(Decimal::ONE / dec!(3)));
        assert!(third.as_decimal().scale() > 8);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(Money::from_decimal(dec!(2.345)).round_dp(2), Money::from_decimal(dec!(2.35)));
        assert_eq!(Money::from_decimal(dec!(-2.345)).round_dp(2), Money::from_decimal(dec!(-2.35)));
        assert_eq!(Money::from_decimal(dec!(2.5)).round_dp(0), Money::from_major(3));
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percent(dec!(7));
        assert_eq!(rate.as_decimal(), dec!(0.07));
        assert_eq!(rate.as_percent(), dec!(7));
        assert_eq!(Rate::from_percentage(12).monthly_rate().as_decimal(), dec!(0.01));
        assert_eq!(rate.to_string(), "7%");
    }

    #[test]
    fn test_percent_of_huge_rate_does_not_overflow() {
        let huge = Rate::from_decimal(Decimal::MAX);
        assert_eq!(huge.checked_percent(), None);
        assert_eq!(huge.to_string(), Decimal::MAX.to_string());
    }

    #[test]
    fn test_apply_rate() {
        let principal = Money::from_major(1_000);
        let interest = principal.apply_rate(Rate::from_percentage(7));
        assert_eq!(interest, Money::from_major(70));
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        assert!(!Money::from_decimal(dec!(-0)).is_negative());
        assert!(Money::from_decimal(dec!(-0.01)).is_negative());
    }
}
