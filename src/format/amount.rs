use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::config::DisplayConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};
use crate::format::locale::{Locale, SymbolPosition, NBSP};

/// an amount as callers hand it over: a number or a numeric string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput<'a> {
    Decimal(Decimal),
    Float(f64),
    Integer(i64),
    Text(&'a str),
}

impl AmountInput<'_> {
    /// resolve to a decimal, rejecting non-finite floats and unparsable text
    pub fn to_decimal(&self) -> Result<Decimal> {
        match *self {
            AmountInput::Decimal(d) => Ok(d),
            AmountInput::Integer(i) => Ok(Decimal::from(i)),
            AmountInput::Float(f) => {
                if !f.is_finite() {
                    return Err(ProjectionError::invalid(
                        "amount",
                        format!("{} is not a finite number", f),
                    ));
                }
                Decimal::try_from(f).map_err(|e| ProjectionError::invalid("amount", e.to_string()))
            }
            AmountInput::Text(s) => parse_amount(s),
        }
    }
}

impl From<Decimal> for AmountInput<'_> {
    fn from(d: Decimal) -> Self {
        AmountInput::Decimal(d)
    }
}

impl From<Money> for AmountInput<'_> {
    fn from(m: Money) -> Self {
        AmountInput::Decimal(m.as_decimal())
    }
}

impl From<f64> for AmountInput<'_> {
    fn from(f: f64) -> Self {
        AmountInput::Float(f)
    }
}

impl From<i64> for AmountInput<'_> {
    fn from(i: i64) -> Self {
        AmountInput::Integer(i)
    }
}

impl From<i32> for AmountInput<'_> {
    fn from(i: i32) -> Self {
        AmountInput::Integer(i64::from(i))
    }
}

impl<'a> From<&'a str> for AmountInput<'a> {
    fn from(s: &'a str) -> Self {
        AmountInput::Text(s)
    }
}

impl<'a> From<&'a String> for AmountInput<'a> {
    fn from(s: &'a String) -> Self {
        AmountInput::Text(s.as_str())
    }
}

/// strict numeric parse: plain or scientific notation, surrounding whitespace ignored
fn parse_amount(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ProjectionError::invalid("amount", "empty string is not a number"));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ProjectionError::invalid("amount", format!("{:?} is not a number", s)))
}

/// Format an amount of money for display.
///
/// Separators, symbol placement and spacing follow `config.locale_tag`; the
/// number of decimals follows the currency. Rounds half away from zero.
pub fn format_currency<'a>(amount: impl Into<AmountInput<'a>>, config: &DisplayConfig) -> Result<String> {
    let value = amount.into().to_decimal()?;
    let currency = config.currency()?;
    let locale = config.locale()?;

    let (negative, digits) = localized_number(value, currency.decimal_places(), locale);
    let sign = if negative { "-" } else { "" };

    Ok(match locale.symbol_position() {
        SymbolPosition::Prefix => format!("{}{}{}", sign, currency.symbol(), digits),
        SymbolPosition::Suffix => format!("{}{}{}{}", sign, digits, NBSP, currency.symbol()),
    })
}

/// `format_currency` with the default `EUR` / `fr-FR` configuration
pub fn format_currency_default<'a>(amount: impl Into<AmountInput<'a>>) -> Result<String> {
    format_currency(amount, &DisplayConfig::default())
}

/// format a yield rate as a percentage with two decimals
pub fn format_rate(rate: Rate, config: &DisplayConfig) -> Result<String> {
    let locale = config.locale()?;
    let percent = rate.checked_percent().ok_or_else(|| {
        ProjectionError::invalid("rate", format!("{} is too large to show as a percentage", rate))
    })?;
    let (negative, digits) = localized_number(percent, 2, locale);
    let sign = if negative { "-" } else { "" };
    Ok(format!("{}{}{}", sign, digits, locale.percent_suffix()))
}

/// round and render the magnitude of `value`; returns whether it is negative
/// after rounding so callers never show `-0`
fn localized_number(value: Decimal, dp: u32, locale: Locale) -> (bool, String) {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let plain = format!("{:.*}", dp as usize, rounded.abs());

    let (integer_part, fraction_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut out = group_digits(integer_part, locale.group_separator());
    if let Some(fraction) = fraction_part {
        out.push(locale.decimal_separator());
        out.push_str(fraction);
    }
    (negative, out)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
