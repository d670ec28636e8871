//! Report configuration computed once at startup.

use bz_dates::{CalendarDate, Notation, parse_date};

use crate::error::{ReportError, Result};

/// Settings for one report run.
///
/// Built once from caller input and passed by value into the pipeline; no
/// part of the pipeline reads defaults from anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Earliest date (inclusive) to keep. `None` keeps every row.
    pub cutoff: Option<CalendarDate>,
    /// Notation used for dates in the report.
    pub notation: Notation,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            cutoff: None,
            notation: Notation::Dotted,
        }
    }
}

impl ReportConfig {
    /// Builds a configuration from the raw start-date argument.
    ///
    /// The report notation is `notation` when given, otherwise the notation
    /// the start date was written in, otherwise Dotted.
    ///
    /// # Errors
    ///
    /// [`ReportError::InvalidCutoffDate`] if `cutoff` is not a valid Iso or
    /// Dotted date; [`ReportError::UnsupportedNotation`] for a notation other
    /// than Iso or Dotted.
    pub fn from_cutoff(cutoff: Option<&str>, notation: Option<Notation>) -> Result<Self> {
        let parsed = cutoff
            .map(|value| {
                parse_date(value).map_err(|source| ReportError::InvalidCutoffDate {
                    value: value.to_string(),
                    source,
                })
            })
            .transpose()?;
        let notation = notation
            .or(parsed.map(|(_, written_in)| written_in))
            .unwrap_or(Notation::Dotted);
        Self::default()
            .with_notation(notation)
            .map(|config| config.with_cutoff(parsed.map(|(date, _)| date)))
    }

    #[must_use]
    pub fn with_cutoff(mut self, cutoff: Option<CalendarDate>) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Sets the report notation.
    pub fn with_notation(mut self, notation: Notation) -> Result<Self> {
        match notation {
            Notation::Iso | Notation::Dotted => {
                self.notation = notation;
                Ok(self)
            }
            Notation::Vendor | Notation::Unknown => {
                Err(ReportError::UnsupportedNotation { notation })
            }
        }
    }

    /// Returns true if a row dated `date` belongs in the report.
    pub fn accepts(&self, date: &CalendarDate) -> bool {
        self.cutoff.is_none_or(|cutoff| *date >= cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn no_cutoff_defaults_to_dotted() {
        let config = ReportConfig::from_cutoff(None, None).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert!(config.accepts(&date(2000, 1, 1)));
    }

    #[test]
    fn notation_follows_cutoff() {
        let config = ReportConfig::from_cutoff(Some("2016-01-01"), None).unwrap();
        assert_eq!(config.notation, Notation::Iso);
        assert_eq!(config.cutoff, Some(date(2016, 1, 1)));

        let config = ReportConfig::from_cutoff(Some("01.01.2016"), None).unwrap();
        assert_eq!(config.notation, Notation::Dotted);
    }

    #[test]
    fn explicit_notation_wins() {
        let config = ReportConfig::from_cutoff(Some("2016-01-01"), Some(Notation::Dotted)).unwrap();
        assert_eq!(config.notation, Notation::Dotted);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let config = ReportConfig::default().with_cutoff(Some(date(2016, 1, 1)));
        assert!(!config.accepts(&date(2015, 12, 31)));
        assert!(config.accepts(&date(2016, 1, 1)));
        assert!(config.accepts(&date(2016, 1, 2)));
    }

    #[test]
    fn invalid_cutoff_is_rejected() {
        for value in [
            "2015-02-29",
            "31.04.2016",
            "yesterday",
            "1999-12-31",
            "",
            " 2016-01-01",
            "01.01.2016 ",
        ] {
            assert!(
                matches!(
                    ReportConfig::from_cutoff(Some(value), None),
                    Err(ReportError::InvalidCutoffDate { .. })
                ),
                "{value}"
            );
        }
    }

    #[test]
    fn vendor_notation_is_not_a_report_notation() {
        assert!(matches!(
            ReportConfig::from_cutoff(None, Some(Notation::Vendor)),
            Err(ReportError::UnsupportedNotation { .. })
        ));
    }
}
