pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod projection;
pub mod state;
pub mod types;

// re-export key types
pub use config::{DisplayConfig, ProjectionLimits};
pub use decimal::{Money, Rate};
pub use errors::{ProjectionError, Result};
pub use format::{
    format_currency, format_currency_default, format_date, format_date_with, format_rate,
    try_format_date, AmountInput, Currency, Locale,
};
pub use projection::{
    calculate_expected_yield, calculate_returns, effective_annual_yield,
    effective_annual_yield_with, ReturnCalculator,
};
pub use state::{KeyValueStore, MemoryStore, SidebarState};
pub use types::{InvestmentQuote, InvestmentReturns, ProjectedMonth, RateBasis};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
