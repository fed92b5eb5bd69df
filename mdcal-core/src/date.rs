//! Resolving date lines: `DD.MM.YYYY` or `DD.MM.YYYY - DD.MM.YYYY`.

use chrono::NaiveDate;

use crate::error::ParseError;

/// Parse a date line into a start date and optional end date.
///
/// Calendar correctness is enforced by chrono (no 31st of April, no
/// Feb 29 outside leap years). A range whose end equals its start
/// collapses to a single-day event rather than failing.
pub fn parse_date_line(line: &str) -> Result<(NaiveDate, Option<NaiveDate>), ParseError> {
    let line = line.trim();
    let parts: Vec<&str> = line.split('-').map(str::trim).collect();

    match parts.as_slice() {
        [single] => Ok((parse_date(single, line)?, None)),
        [start, end] => {
            let start = parse_date(start, line)?;
            let end = parse_date(end, line)?;
            if end < start {
                Err(ParseError::InvertedRange(line.to_string()))
            } else if end == start {
                Ok((start, None))
            } else {
                Ok((start, Some(end)))
            }
        }
        // Three or more dash-separated pieces is not a range
        _ => Err(ParseError::InvalidDate(line.to_string())),
    }
}

fn parse_date(component: &str, line: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(component, "%d.%m.%Y")
        .map_err(|_| ParseError::InvalidDate(line.to_string()))
}
