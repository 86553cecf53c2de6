//! Number and date conventions per supported locale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// narrow no-break space, the french group separator
pub const NARROW_NBSP: char = '\u{202F}';
/// no-break space
pub const NBSP: char = '\u{00A0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    FrFr,
    DeDe,
    EnUs,
    EnGb,
}

/// where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `€1,234.50`
    Prefix,
    /// `1 234,50 €`, separated by a no-break space
    Suffix,
}

const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin",
    "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni",
    "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::FrFr => "fr-FR",
            Locale::DeDe => "de-DE",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
        }
    }

    /// parse a BCP 47 tag; case-insensitive, `_` accepted in place of `-`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().replace('_', "-").to_lowercase().as_str() {
            "fr-fr" | "fr" => Some(Locale::FrFr),
            "de-de" | "de" => Some(Locale::DeDe),
            "en-us" | "en" => Some(Locale::EnUs),
            "en-gb" => Some(Locale::EnGb),
            _ => None,
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::FrFr | Locale::DeDe => ',',
            Locale::EnUs | Locale::EnGb => '.',
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Locale::FrFr => NARROW_NBSP,
            Locale::DeDe => '.',
            Locale::EnUs | Locale::EnGb => ',',
        }
    }

    pub fn symbol_position(&self) -> SymbolPosition {
        match self {
            Locale::FrFr | Locale::DeDe => SymbolPosition::Suffix,
            Locale::EnUs | Locale::EnGb => SymbolPosition::Prefix,
        }
    }

    /// text placed after a number to mark a percentage
    pub fn percent_suffix(&self) -> &'static str {
        match self {
            Locale::FrFr => "\u{202F}%",
            Locale::DeDe => "\u{00A0}%",
            Locale::EnUs | Locale::EnGb => "%",
        }
    }

    /// abbreviated month name, `month` is 1-based
    pub fn month_abbreviation(&self, month: u32) -> &'static str {
        let months = match self {
            Locale::FrFr => &MONTHS_FR,
            Locale::DeDe => &MONTHS_DE,
            Locale::EnUs | Locale::EnGb => &MONTHS_EN,
        };
        months[(month.clamp(1, 12) - 1) as usize]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Locale::from_tag("fr-FR"), Some(Locale::FrFr));
        assert_eq!(Locale::from_tag("de_de"), Some(Locale::DeDe));
        assert_eq!(Locale::from_tag("EN-gb"), Some(Locale::EnGb));
        assert_eq!(Locale::from_tag("pt-BR"), None);
        assert_eq!(Locale::EnUs.to_string(), "en-US");
    }

    #[test]
    fn test_month_abbreviations() {
        assert_eq!(Locale::FrFr.month_abbreviation(1), "janv.");
        assert_eq!(Locale::FrFr.month_abbreviation(8), "août");
        assert_eq!(Locale::DeDe.month_abbreviation(3), "März");
        assert_eq!(Locale::EnGb.month_abbreviation(12), "Dec");
    }
}
