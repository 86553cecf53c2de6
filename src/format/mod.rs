pub mod amount;
pub mod currency;
pub mod date;
pub mod locale;

pub use amount::{format_currency, format_currency_default, format_rate, AmountInput};
pub use currency::Currency;
pub use date::{format_date, format_date_with, parse_date, try_format_date};
pub use locale::{Locale, SymbolPosition};
