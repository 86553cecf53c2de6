use rust_decimal::Decimal;

use crate::types::{InvestmentQuote, ProjectedMonth, RateBasis};

/// Simple accrual, one row per month. No compounding: every month earns the
/// same amount on the original principal.
pub(crate) fn build_schedule(quote: &InvestmentQuote, basis: RateBasis) -> Vec<ProjectedMonth> {
    let monthly_yield = quote.amount.apply_rate(basis.monthly_rate(quote.yield_rate));

    (1..=quote.duration_months)
        .map(|month| {
            // multiply rather than accumulate so the last row matches the closed form exactly
            let cumulative_yield = monthly_yield * Decimal::from(month);
            ProjectedMonth {
                month,
                yield_amount: monthly_yield,
                cumulative_yield,
                balance: quote.amount + cumulative_yield,
            }
        })
        .collect()
}
