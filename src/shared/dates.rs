//! Flexible date resolution for spreadsheet exports.
//!
//! Operators paste dates in whatever shape their old system produced, so
//! a value is "resolvable" when any of the known day-first formats (or ISO)
//! parses it. A trailing time-of-day token is tolerated and ignored.

use chrono::NaiveDate;

/// Candidate formats, tried in order. Day-first, UK convention.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d", "%d/%m/%y"];

/// Parse a date cell. Returns `None` for blank or unresolvable values.
pub fn parse_flexible(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(date) = try_formats(trimmed) {
        return Some(date);
    }

    // Exports often carry "01/03/2024 09:30"; retry on the date token alone.
    let first_token = trimmed.split_whitespace().next()?;
    if first_token != trimmed {
        return try_formats(first_token);
    }

    None
}

fn try_formats(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Render a parsed date the way the report shows it.
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
