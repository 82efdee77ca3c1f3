//! # Date Adapter
//!
//! The picker never inspects dates itself. Comparison, formatting and parsing
//! go through a `DateAdapter`, which keeps the controller generic over the
//! host's date type. Failures are reported through `Option`, never panics.

use chrono::NaiveDate;
use std::fmt::{self, Write};

/// Date math and text conversion for an opaque date type
pub trait DateAdapter {
    type Date: Clone + fmt::Debug + 'static;

    /// True when `a` is chronologically after `b`
    fn is_after(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// True when `a` and `b` denote the same date
    fn is_same(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// Format `date` with `format`; an unusable format yields an empty string
    fn format(&self, locale: &str, date: &Self::Date, format: &str) -> String;

    /// Parse `text` against each of `formats` in order, first match wins
    fn parse(&self, locale: &str, text: &str, formats: &[String]) -> Option<Self::Date>;
}

/// Null-aware equality: two absent dates are equal, absent and present are
/// not, and the adapter is only consulted when both are present.
pub fn is_equal<A: DateAdapter>(
    adapter: &A,
    a: Option<&A::Date>,
    b: Option<&A::Date>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => adapter.is_same(a, b),
        _ => false,
    }
}

/// `DateAdapter` for `chrono::NaiveDate` using strftime-style formats
///
/// Chrono formats without locale tables, so the locale argument is only
/// carried through for logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoAdapter;

impl ChronoAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl DateAdapter for ChronoAdapter {
    type Date = NaiveDate;

    fn is_after(&self, a: &NaiveDate, b: &NaiveDate) -> bool {
        a > b
    }

    fn is_same(&self, a: &NaiveDate, b: &NaiveDate) -> bool {
        a == b
    }

    fn format(&self, locale: &str, date: &NaiveDate, format: &str) -> String {
        let mut text = String::new();
        // chrono reports bad specifiers through fmt::Error
        if write!(text, "{}", date.format(format)).is_err() {
            tracing::warn!(
                "Cannot format {} with '{}' (locale {})",
                date,
                format,
                locale
            );
            return String::new();
        }
        text
    }

    fn parse(&self, locale: &str, text: &str, formats: &[String]) -> Option<NaiveDate> {
        let parsed = formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok());
        tracing::trace!("Parsed '{}' (locale {}) as {:?}", text, locale, parsed);
        parsed
    }
}
