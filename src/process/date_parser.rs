use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Free-form date capability consumed by the type coercer.
///
/// Implementations return `None` when no plausible calendar date can be
/// extracted. They must not panic on arbitrary input.
pub trait DateParser: Send + Sync {
    fn parse(&self, text: &str) -> Option<NaiveDateTime>;
}

impl<F> DateParser for F
where
    F: Fn(&str) -> Option<NaiveDateTime> + Send + Sync,
{
    fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        self(text)
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

// Two-digit years first: `%Y` would happily read "23" as year 23.
// Day-first before month-first.
const DATE_FORMATS: &[&str] = &[
    "%d.%m.%y",
    "%d/%m/%y",
    "%m/%d/%y",
    "%d-%b-%y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%m-%d-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d-%b-%Y",
];

/// Chrono-backed parser covering the layouts seen in bank exports.
/// Date-only values resolve to midnight.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreeformDateParser;

impl DateParser for FreeformDateParser {
    fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        let s = text.trim();
        // every layout needs at least a day, month and year
        if s.len() < 6 || !s.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_utc());
        }

        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}
