use log::debug;
use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{InvestmentQuote, InvestmentReturns, RateBasis};

/// Project returns with the rate applied each month as given.
///
/// `monthly_return = amount × rate / 100` and
/// `total_return = amount + monthly_return × duration_months`. Full precision,
/// nothing is rounded.
pub fn calculate_returns(
    amount: Decimal,
    yield_rate_percent: Decimal,
    duration_months: i64,
) -> Result<InvestmentReturns> {
    let quote = InvestmentQuote::new(amount, yield_rate_percent, duration_months)?;
    Ok(project_returns(&quote))
}

/// Yield earned over `months` with the rate read as annual.
///
/// `yield = amount × (rate / 100 / 12) × months`; the principal is not
/// included.
pub fn calculate_expected_yield(
    amount: Decimal,
    yield_rate_percent: Decimal,
    months: i64,
) -> Result<Money> {
    let quote = InvestmentQuote::new(amount, yield_rate_percent, months)?;
    Ok(project_expected_yield(&quote))
}

pub(crate) fn project_returns(quote: &InvestmentQuote) -> InvestmentReturns {
    let monthly_return = quote.amount.apply_rate(RateBasis::PerMonth.monthly_rate(quote.yield_rate));
    let total_return = quote.amount + monthly_return * Decimal::from(quote.duration_months);

    debug!(
        "projected returns: monthly={} total={} over {} months",
        monthly_return, total_return, quote.duration_months
    );

    InvestmentReturns {
        monthly_return,
        total_return,
    }
}

pub(crate) fn project_expected_yield(quote: &InvestmentQuote) -> Money {
    let monthly_yield = quote.amount.apply_rate(RateBasis::Annual.monthly_rate(quote.yield_rate));
    monthly_yield * Decimal::from(quote.duration_months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProjectionError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculate_returns() {
        let returns = calculate_returns(dec!(1000), dec!(7), 12).unwrap();
        assert_eq!(returns.monthly_return, Money::from_major(70));
        assert_eq!(returns.total_return, Money::from_major(1_840));
    }

    #[test]
    fn test_calculate_returns_keeps_precision() {
        let returns = calculate_returns(dec!(333.33), dec!(6.5), 7).unwrap();
        assert_eq!(returns.monthly_return.as_decimal(), dec!(21.666450));
        assert_eq!(returns.total_return.as_decimal(), dec!(484.995150));
    }

    #[test]
    fn test_zero_duration_returns_principal() {
        let returns = calculate_returns(dec!(2500), dec!(9), 0).unwrap();
        assert_eq!(returns.monthly_return, Money::from_major(225));
        assert_eq!(returns.total_return, Money::from_major(2_500));
    }

    #[test]
    fn test_total_never_below_principal() {
        let amounts = [dec!(0), dec!(0.01), dec!(1), dec!(999.99), dec!(1000000)];
        let rates = [dec!(0), dec!(0.25), dec!(7), dec!(12.5), dec!(100)];
        let months = [0, 1, 12, 120, 600];

        for amount in amounts {
            for rate in rates {
                for duration in months {
                    let returns = calculate_returns(amount, rate, duration).unwrap();
                    assert!(returns.total_return >= Money::from_decimal(amount));
                    assert!(!returns.monthly_return.is_negative());
                }
            }
        }
    }

    #[test]
    fn test_calculate_expected_yield() {
        let total = calculate_expected_yield(dec!(1000), dec!(12), 12).unwrap();
        assert_eq!(total, Money::from_major(120));

        let one_month = calculate_expected_yield(dec!(1000), dec!(12), 1).unwrap();
        assert_eq!(one_month, Money::from_major(10));

        assert_eq!(calculate_expected_yield(dec!(1000), dec!(12), 0).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_expected_yield_seven_percent() {
        let total = calculate_expected_yield(dec!(10000), dec!(7), 12).unwrap();
        assert_eq!(total.round_dp(2), Money::from_decimal(dec!(700.00)));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            calculate_returns(dec!(-100), dec!(7), 12),
            Err(ProjectionError::InvalidArgument { name: "amount", .. })
        ));
        assert!(matches!(
            calculate_returns(dec!(100), dec!(-7), 12),
            Err(ProjectionError::InvalidArgument { name: "yield_rate_percent", .. })
        ));
        assert!(matches!(
            calculate_expected_yield(dec!(100), dec!(7), -1),
            Err(ProjectionError::InvalidArgument { name: "duration_months", .. })
        ));
    }

    #[test]
    fn test_huge_amounts_are_rejected_not_overflowed() {
        assert!(matches!(
            calculate_returns(Decimal::MAX, dec!(100), 600),
            Err(ProjectionError::InvalidArgument { name: "amount", .. })
        ));
        assert!(matches!(
            calculate_expected_yield(Decimal::from_scientific("1e28").unwrap(), dec!(100), 600),
            Err(ProjectionError::InvalidArgument { name: "amount", .. })
        ));
    }

    #[test]
    fn test_largest_default_quote() {
        let returns = calculate_returns(dec!(1000000000000), dec!(100), 600).unwrap();
        assert_eq!(returns.monthly_return, Money::from_major(1_000_000_000_000));
        assert_eq!(returns.total_return, Money::from_major(601_000_000_000_000));

        let total = calculate_expected_yield(dec!(1000000000000), dec!(100), 600).unwrap();
        assert_eq!(total.round_dp(2), Money::from_major(50_000_000_000_000));
    }

    #[test]
    fn test_deterministic() {
        let a = calculate_returns(dec!(1234.56), dec!(3.3), 18).unwrap();
        let b = calculate_returns(dec!(1234.56), dec!(3.3), 18).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total_return.to_string(), b.total_return.to_string());
    }
}
