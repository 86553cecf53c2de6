use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ProjectionLimits;
use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};

/// how a yield rate is applied over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateBasis {
    /// rate is earned every month as given
    PerMonth,
    /// rate is yearly; a twelfth of it is earned each month
    Annual,
}

impl RateBasis {
    /// rate earned in a single month under this basis
    pub fn monthly_rate(&self, rate: Rate) -> Rate {
        match self {
            RateBasis::PerMonth => rate,
            RateBasis::Annual => rate.monthly_rate(),
        }
    }
}

/// validated projection input
///
/// Built through `InvestmentQuote::new` or `ReturnCalculator::quote`, which
/// reject negative and out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentQuote {
    pub(crate) amount: Money,
    pub(crate) yield_rate: Rate,
    pub(crate) duration_months: u32,
}

impl InvestmentQuote {
    /// validate raw inputs against the default limits
    pub fn new(amount: Decimal, yield_rate_percent: Decimal, duration_months: i64) -> Result<Self> {
        Self::with_limits(amount, yield_rate_percent, duration_months, &ProjectionLimits::default())
    }

    /// validate raw inputs against explicit limits
    pub fn with_limits(
        amount: Decimal,
        yield_rate_percent: Decimal,
        duration_months: i64,
        limits: &ProjectionLimits,
    ) -> Result<Self> {
        limits.validate()?;

        if amount < Decimal::ZERO {
            return Err(ProjectionError::invalid(
                "amount",
                format!("must not be negative, got {}", amount),
            ));
        }
        if amount > limits.max_amount {
            return Err(ProjectionError::invalid(
                "amount",
                format!("{} exceeds the maximum of {}", amount, limits.max_amount),
            ));
        }
        if yield_rate_percent < Decimal::ZERO {
            return Err(ProjectionError::invalid(
                "yield_rate_percent",
                format!("must not be negative, got {}", yield_rate_percent),
            ));
        }
        if yield_rate_percent > limits.max_yield_rate_percent {
            return Err(ProjectionError::invalid(
                "yield_rate_percent",
                format!(
                    "{} exceeds the maximum of {}",
                    yield_rate_percent, limits.max_yield_rate_percent
                ),
            ));
        }
        if duration_months < 0 {
            return Err(ProjectionError::invalid(
                "duration_months",
                format!("must not be negative, got {}", duration_months),
            ));
        }
        if duration_months > i64::from(limits.max_duration_months) {
            return Err(ProjectionError::invalid(
                "duration_months",
                format!(
                    "{} exceeds the maximum of {}",
                    duration_months, limits.max_duration_months
                ),
            ));
        }

        let quote = InvestmentQuote {
            amount: Money::from_decimal(amount),
            yield_rate: Rate::from_percent(yield_rate_percent),
            duration_months: duration_months as u32,
        };
        debug!(
            "validated quote: amount={} rate={} months={}",
            quote.amount, quote.yield_rate, quote.duration_months
        );
        Ok(quote)
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn yield_rate(&self) -> Rate {
        self.yield_rate
    }

    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }
}

/// projected returns for a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentReturns {
    pub monthly_return: Money,
    pub total_return: Money,
}

impl InvestmentReturns {
    /// gain over the principal
    pub fn accrued(&self, principal: Money) -> Money {
        self.total_return - principal
    }
}

/// one row of a month-by-month projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedMonth {
    /// 1-based month index
    pub month: u32,
    pub yield_amount: Money,
    pub cumulative_yield: Money,
    /// principal plus cumulative yield
    pub balance: Money,
}
