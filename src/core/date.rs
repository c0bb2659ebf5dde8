use crate::utils::error::{ProfileError, Result};
use chrono::NaiveDate;

/// Exact formats accepted before any heuristics kick in. Order matters:
/// day-first interpretations win over month-first for ambiguous inputs.
const KNOWN_FORMATS: [&str; 7] = [
    "%Y-%m-%d", // 1990-05-15
    "%d-%m-%Y", // 15-05-1990
    "%d/%m/%Y", // 15/05/1990
    "%m/%d/%Y", // 05/15/1990
    "%d-%m-%y", // 15-05-90
    "%d/%m/%y", // 15/05/90
    "%Y/%m/%d", // 1990/05/15
];

type Strategy = fn(&str) -> Option<NaiveDate>;

/// Tried in order; first success wins. Each strategy is independent and
/// returns None on any failure, so invalid calendar values (month 13,
/// April 31) fall through instead of clamping.
const STRATEGIES: [Strategy; 3] = [known_formats, separator_heuristic, dash_fallback];

pub fn parse(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();

    for strategy in STRATEGIES {
        if let Some(date) = strategy(trimmed) {
            tracing::debug!("Parsed date '{}' as {}", raw, date);
            return Ok(date);
        }
    }

    Err(ProfileError::DateParseError {
        input: raw.to_string(),
    })
}

fn known_formats(input: &str) -> Option<NaiveDate> {
    KNOWN_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

/// Loosely formatted variants: spaces, periods and commas are treated as
/// separators, three tokens are read as day/month/year, and a 2-digit year
/// expands to 20xx below 50 and 19xx otherwise.
fn separator_heuristic(input: &str) -> Option<NaiveDate> {
    let cleaned = input.replace([' ', '.', ','], "-").replace('-', "/");
    let parts: Vec<&str> = cleaned.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = if parts[2].len() == 2 {
        let two_digit: i32 = parts[2].parse().ok()?;
        if two_digit < 50 {
            2000 + two_digit
        } else {
            1900 + two_digit
        }
    } else {
        parts[2].parse().ok()?
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Last resort: a dash-separated string whose first token looks like a day
/// and whose last token looks like a 4-digit year is read as DD-MM-YYYY.
fn dash_fallback(input: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 2 || parts[2].len() != 4 {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
