//! Locale tables for calendar labels.
//!
//! Only the slot structure of labels lives in core; translated resource
//! bundles stay in the UI layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

const PT_BR_MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];
const EN_US_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Display locale for calendar labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

impl Locale {
    /// Parses a BCP 47 style tag (`pt-BR`, `en_us`, ...).
    pub fn parse(value: &str) -> Result<Self, LocaleError> {
        let normalized = value.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(LocaleError::Empty),
            "pt" | "pt-br" => Ok(Self::PtBr),
            "en" | "en-us" => Ok(Self::EnUs),
            _ => Err(LocaleError::Unsupported(value.trim().to_string())),
        }
    }

    /// Canonical tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    /// Month abbreviation for `month` in `1..=12`; empty string otherwise.
    pub fn month_abbrev(self, month: u32) -> &'static str {
        let table = match self {
            Self::PtBr => &PT_BR_MONTHS,
            Self::EnUs => &EN_US_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|index| table.get(index as usize))
            .copied()
            .unwrap_or("")
    }

    /// Joins day and month slots: `10 de mar` / `10 Mar`.
    pub fn day_with_month(self, day: &str, month: &str) -> String {
        match self {
            Self::PtBr => format!("{day} de {month}"),
            Self::EnUs => format!("{day} {month}"),
        }
    }

    /// Header line for an existing trip.
    pub fn trip_summary(
        self,
        destination: &str,
        start_day: &str,
        end_day: &str,
        month: &str,
    ) -> String {
        match self {
            Self::PtBr => format!("{destination} - de {start_day} a {end_day} de {month}."),
            Self::EnUs => format!("{destination} - from {start_day} to {end_day} {month}."),
        }
    }
}

/// Locale parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    Empty,
    Unsupported(String),
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "locale must not be empty"),
            Self::Unsupported(value) => {
                write!(f, "unsupported locale `{value}`; expected pt-BR|en-US")
            }
        }
    }
}

impl Error for LocaleError {}

#[cfg(test)]
mod tests {
    use super::{Locale, LocaleError};

    #[test]
    fn parses_common_tag_spellings() {
        assert_eq!(Locale::parse("pt-BR").unwrap(), Locale::PtBr);
        assert_eq!(Locale::parse(" en_us ").unwrap(), Locale::EnUs);
        assert_eq!(Locale::parse("").unwrap_err(), LocaleError::Empty);
        assert!(matches!(
            Locale::parse("fr-FR"),
            Err(LocaleError::Unsupported(_))
        ));
    }

    #[test]
    fn month_abbrev_is_bounded() {
        assert_eq!(Locale::PtBr.month_abbrev(2), "fev");
        assert_eq!(Locale::EnUs.month_abbrev(12), "Dec");
        assert_eq!(Locale::EnUs.month_abbrev(0), "");
        assert_eq!(Locale::EnUs.month_abbrev(13), "");
    }
}
