//! Return projections for an investment quote.
//!
//! Two rate conventions coexist and are kept apart on purpose:
//! [`calculate_returns`] applies the rate as given every month
//! ([`RateBasis::PerMonth`]), while [`calculate_expected_yield`] reads it as a
//! yearly rate and earns a twelfth of it each month ([`RateBasis::Annual`]).

pub mod effective;
pub mod returns;
pub mod schedule;

use rust_decimal::Decimal;

use crate::config::ProjectionLimits;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::{InvestmentQuote, InvestmentReturns, ProjectedMonth, RateBasis};

pub use effective::{effective_annual_yield, effective_annual_yield_with};
pub use returns::{calculate_expected_yield, calculate_returns};

/// projection entry point carrying its validation limits
#[derive(Debug, Clone, Default)]
pub struct ReturnCalculator {
    limits: ProjectionLimits,
}

impl ReturnCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// use custom limits; fails if they exceed the crate ceilings
    pub fn with_limits(limits: ProjectionLimits) -> Result<Self> {
        limits.validate()?;
        Ok(Self { limits })
    }

    pub fn limits(&self) -> &ProjectionLimits {
        &self.limits
    }

    /// validate raw inputs into a quote
    pub fn quote(
        &self,
        amount: Decimal,
        yield_rate_percent: Decimal,
        duration_months: i64,
    ) -> Result<InvestmentQuote> {
        InvestmentQuote::with_limits(amount, yield_rate_percent, duration_months, &self.limits)
    }

    /// simple monthly accrual with the rate applied as a monthly rate
    pub fn returns(&self, quote: &InvestmentQuote) -> InvestmentReturns {
        returns::project_returns(quote)
    }

    /// yield earned over the quote's duration with the rate read as annual
    pub fn expected_yield(&self, quote: &InvestmentQuote) -> Money {
        returns::project_expected_yield(quote)
    }

    /// month-by-month breakdown under the given rate basis
    pub fn schedule(&self, quote: &InvestmentQuote, basis: RateBasis) -> Vec<ProjectedMonth> {
        schedule::build_schedule(quote, basis)
    }

    /// compounded equivalent of a nominal annual rate, bounded by this calculator's max rate
    pub fn effective_annual_yield(&self, nominal: Rate, periods_per_year: u32) -> Result<Rate> {
        effective_annual_yield_with(nominal, periods_per_year, &self.limits)
    }
}
