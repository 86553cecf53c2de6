use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{ProjectionError, Result};
use crate::format::{Currency, Locale};

pub const DEFAULT_CURRENCY_CODE: &str = "EUR";
pub const DEFAULT_LOCALE_TAG: &str = "fr-FR";

/// display configuration handed to the formatters
///
/// Codes are kept as strings so a config can be deserialized before it is
/// known to be supported; `currency()` and `locale()` resolve them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_code: String,
    pub locale_tag: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            locale_tag: DEFAULT_LOCALE_TAG.to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn new(currency_code: impl Into<String>, locale_tag: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            locale_tag: locale_tag.into(),
        }
    }

    /// euros shown the french way
    pub fn french() -> Self {
        Self::default()
    }

    /// euros shown the german way
    pub fn german() -> Self {
        Self::new("EUR", "de-DE")
    }

    /// us dollars for a us audience
    pub fn us() -> Self {
        Self::new("USD", "en-US")
    }

    /// pounds sterling for a uk audience
    pub fn british() -> Self {
        Self::new("GBP", "en-GB")
    }

    /// load from a json document; missing fields take the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency_code).ok_or_else(|| {
            ProjectionError::invalid(
                "currency_code",
                format!("unsupported currency {:?}", self.currency_code),
            )
        })
    }

    pub fn locale(&self) -> Result<Locale> {
        Locale::from_tag(&self.locale_tag).ok_or_else(|| {
            ProjectionError::invalid(
                "locale_tag",
                format!("unsupported locale {:?}", self.locale_tag),
            )
        })
    }
}

/// ceilings no configuration may exceed; within them every projection
/// stays far below `Decimal::MAX`
pub const CEILING_AMOUNT: Decimal = dec!(1000000000000000000);
pub const CEILING_YIELD_RATE_PERCENT: Decimal = dec!(1000);
pub const CEILING_DURATION_MONTHS: u32 = 1200;
/// daily compounding is the finest the crate supports
pub const MAX_COMPOUNDING_PERIODS: u32 = 365;

/// bounds applied when validating projection inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionLimits {
    /// largest accepted principal
    pub max_amount: Decimal,
    /// highest accepted yield rate, in whole-number percent
    pub max_yield_rate_percent: Decimal,
    pub max_duration_months: u32,
}

impl Default for ProjectionLimits {
    fn default() -> Self {
        Self {
            max_amount: dec!(1000000000000),
            max_yield_rate_percent: dec!(100),
            max_duration_months: 600,
        }
    }
}

impl ProjectionLimits {
    pub fn from_json(json: &str) -> Result<Self> {
        let limits: ProjectionLimits = serde_json::from_str(json)?;
        limits.validate()?;
        Ok(limits)
    }

    /// check the limits are non-negative and within the crate ceilings
    pub fn validate(&self) -> Result<()> {
        if self.max_amount < Decimal::ZERO || self.max_amount > CEILING_AMOUNT {
            return Err(ProjectionError::invalid(
                "max_amount",
                format!("must be between 0 and {}, got {}", CEILING_AMOUNT, self.max_amount),
            ));
        }
        if self.max_yield_rate_percent < Decimal::ZERO
            || self.max_yield_rate_percent > CEILING_YIELD_RATE_PERCENT
        {
            return Err(ProjectionError::invalid(
                "max_yield_rate_percent",
                format!(
                    "must be between 0 and {}, got {}",
                    CEILING_YIELD_RATE_PERCENT, self.max_yield_rate_percent
                ),
            ));
        }
        if self.max_duration_months > CEILING_DURATION_MONTHS {
            return Err(ProjectionError::invalid(
                "max_duration_months",
                format!(
                    "must be at most {}, got {}",
                    CEILING_DURATION_MONTHS, self.max_duration_months
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.currency_code, "EUR");
        assert_eq!(config.locale_tag, "fr-FR");
        assert_eq!(config.currency().unwrap(), Currency::EUR);
        assert_eq!(config.locale().unwrap(), Locale::FrFr);
    }

    #[test]
    fn test_display_from_json() {
        let config = DisplayConfig::from_json(r#"{"currency_code":"USD","locale_tag":"en-US"}"#).unwrap();
        assert_eq!(config, DisplayConfig::us());

        // partial documents fall back to defaults
        let config = DisplayConfig::from_json(r#"{"locale_tag":"de-DE"}"#).unwrap();
        assert_eq!(config, DisplayConfig::german());

        assert!(DisplayConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_unsupported_codes() {
        let config = DisplayConfig::new("XYZ", "tlh-KX");
        assert!(config.currency().unwrap_err().is_invalid_argument());
        assert!(config.locale().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_limits_from_json() {
        let limits = ProjectionLimits::from_json(r#"{"max_duration_months":120}"#).unwrap();
        assert_eq!(limits.max_duration_months, 120);
        assert_eq!(limits.max_yield_rate_percent, dec!(100));

        let limits = ProjectionLimits::from_json(r#"{"max_yield_rate_percent":"15.5"}"#).unwrap();
        assert_eq!(limits.max_yield_rate_percent, dec!(15.5));

        assert!(ProjectionLimits::from_json(r#"{"max_yield_rate_percent":"-1"}"#).is_err());
    }

    #[test]
    fn test_limits_validate_ceilings() {
        assert!(ProjectionLimits::default().validate().is_ok());

        let limits = ProjectionLimits {
            max_amount: Decimal::MAX,
            ..ProjectionLimits::default()
        };
        assert!(limits.validate().unwrap_err().is_invalid_argument());

        let limits = ProjectionLimits {
            max_yield_rate_percent: dec!(1000.01),
            ..ProjectionLimits::default()
        };
        assert!(limits.validate().is_err());

        let limits = ProjectionLimits {
            max_duration_months: CEILING_DURATION_MONTHS + 1,
            ..ProjectionLimits::default()
        };
        assert!(limits.validate().is_err());

        // a struct built by hand can carry a negative rate; deserializing directly skips from_json
        let limits: ProjectionLimits = serde_json::from_str(r#"{"max_yield_rate_percent":"-1"}"#).unwrap();
        assert!(limits.validate().is_err());
        assert!(ProjectionLimits::from_json(r#"{"max_amount":"1e30"}"#).is_err());
    }
}
