use rust_decimal::Decimal;

use crate::config::{ProjectionLimits, MAX_COMPOUNDING_PERIODS};
use crate::decimal::Rate;
use crate::errors::{ProjectionError, Result};

/// Effective annual yield of a nominal annual rate compounded
/// `periods_per_year` times: `(1 + r/n)^n - 1`.
///
/// The nominal rate is bounded by the default `ProjectionLimits`.
pub fn effective_annual_yield(nominal: Rate, periods_per_year: u32) -> Result<Rate> {
    effective_annual_yield_with(nominal, periods_per_year, &ProjectionLimits::default())
}

/// `effective_annual_yield` with an explicit max rate
pub fn effective_annual_yield_with(
    nominal: Rate,
    periods_per_year: u32,
    limits: &ProjectionLimits,
) -> Result<Rate> {
    if periods_per_year == 0 || periods_per_year > MAX_COMPOUNDING_PERIODS {
        return Err(ProjectionError::invalid(
            "periods_per_year",
            format!("must be between 1 and {}, got {}", MAX_COMPOUNDING_PERIODS, periods_per_year),
        ));
    }
    if nominal.is_negative() {
        return Err(ProjectionError::invalid(
            "nominal",
            format!("must not be negative, got {}", nominal),
        ));
    }
    limits.validate()?;
    if nominal.as_decimal() > limits.max_yield_rate_percent / Decimal::ONE_HUNDRED {
        return Err(ProjectionError::invalid(
            "nominal",
            format!("{} exceeds the maximum of {}%", nominal, limits.max_yield_rate_percent),
        ));
    }

    let n = Decimal::from(periods_per_year);
    let base = Decimal::ONE + nominal.as_decimal() / n;

    let mut factor = Decimal::ONE;
    for _ in 0..periods_per_year {
        factor = factor.checked_mul(base).ok_or_else(|| {
            ProjectionError::invalid("nominal", format!("{} compounds beyond representable range", nominal))
        })?;
    }
    Ok(Rate::from_decimal(factor - Decimal::ONE))
}
