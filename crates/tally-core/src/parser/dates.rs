//! Day-first date parsing for absence logs.

use jiff::civil::Date;
use once_cell::sync::Lazy;
use regex::Regex;

/// `01/02/2026`, `1-2-26`, `01.02.2026 00:00` (trailing text ignored).
static NUMERIC_DAY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})\b").expect("valid regex")
});

/// ISO `2026-02-01` stays year-first.
static ISO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("valid regex"));

const TEXT_FORMATS: [&str; 4] = ["%d %b %Y", "%d-%b-%Y", "%d %B %Y", "%d-%B-%Y"];

/// Parses a date written day-first, returning `None` when the text is not a
/// recognisable calendar date.
///
/// Two-digit years are taken to be in the 2000s.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use tally_core::parser::parse_day_first;
///
/// assert_eq!(parse_day_first("03/02/2026"), Some(date(2026, 2, 3)));
/// assert_eq!(parse_day_first("2026-02-03"), Some(date(2026, 2, 3)));
/// assert_eq!(parse_day_first("03 Feb 2026"), Some(date(2026, 2, 3)));
/// assert_eq!(parse_day_first("31/02/2026"), None);
/// ```
pub fn parse_day_first(text: &str) -> Option<Date> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = ISO.captures(text) {
        return Date::new(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
            .ok();
    }

    if let Some(caps) = NUMERIC_DAY_FIRST.captures(text) {
        let year_text = &caps[3];
        let mut year: i16 = year_text.parse().ok()?;
        if year_text.len() == 2 {
            year += 2000;
        }
        return Date::new(year, caps[2].parse().ok()?, caps[1].parse().ok()?).ok();
    }

    TEXT_FORMATS.iter().find_map(|format| {
        jiff::fmt::strtime::parse(format, text)
            .ok()?
            .to_date()
            .ok()
    })
}
