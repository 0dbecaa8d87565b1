//! Invoice date extraction.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::patterns::{
    DATE_ISO, DATE_LABELED_ISO, DATE_LABELED_MONTH, DATE_LABELED_NUMERIC, DATE_MONTH, DATE_NUMERIC,
};
use crate::models::extraction::DateField;

/// Unlabeled date-shaped matches outside this range are treated as noise
/// (invoice numbers and totals frequently look like numeric dates).
const SANE_YEAR_RANGE: std::ops::RangeInclusive<i32> = 2020..=2030;

/// How many unlabeled matches per shape family are worth examining.
const MAX_GENERIC_MATCHES: usize = 3;

type ParseFn = fn(&str) -> Option<NaiveDate>;

/// Extract the invoice date from text.
///
/// Labeled dates are searched first, one pattern at a time; a match that
/// fails to parse moves on to the next pattern rather than aborting. If
/// no labeled date parses, any date-shaped substring is considered, but
/// only accepted when its year passes the sanity bound.
pub fn extract_date(text: &str) -> Option<DateField> {
    let labeled: [(&Regex, ParseFn); 3] = [
        (&DATE_LABELED_NUMERIC, parse_numeric_date),
        (&DATE_LABELED_MONTH, parse_month_name_date),
        (&DATE_LABELED_ISO, parse_iso_date),
    ];

    for (pattern, parse) in labeled {
        if let Some(caps) = pattern.captures(text) {
            let date_text = &caps[1];
            if let Some(date) = parse(date_text) {
                return Some(to_field(date_text, date));
            }
        }
    }

    let generic: [(&Regex, ParseFn); 3] = [
        (&DATE_NUMERIC, parse_numeric_date),
        (&DATE_ISO, parse_iso_date),
        (&DATE_MONTH, parse_month_name_date),
    ];

    for (pattern, parse) in generic {
        for caps in pattern.captures_iter(text).take(MAX_GENERIC_MATCHES) {
            let date_text = &caps[1];
            if let Some(date) = parse(date_text) {
                if SANE_YEAR_RANGE.contains(&date.year()) {
                    return Some(to_field(date_text, date));
                }
            }
        }
    }

    None
}

fn to_field(text: &str, date: NaiveDate) -> DateField {
    // Midnight UTC of the parsed calendar date
    let timestamp = date
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default();

    DateField {
        text: text.to_string(),
        timestamp,
    }
}

/// Parse `M/D/Y` (or `M-D-Y`), falling back to day-first when the first
/// component cannot be a month.
fn parse_numeric_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split(['/', '-']).collect();
    if parts.len() != 3 {
        return None;
    }

    let first: u32 = parts[0].parse().ok()?;
    let second: u32 = parts[1].parse().ok()?;
    let year = parse_year(parts[2]);

    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}

/// Parse `Y-M-D` (or `Y/M/D`).
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split(['/', '-']).collect();
    if parts.len() != 3 {
        return None;
    }

    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse `Month D, Y` with full or abbreviated English month names.
fn parse_month_name_date(s: &str) -> Option<NaiveDate> {
    let cleaned = s.replace(',', " ");
    let mut parts = cleaned.split_whitespace();

    let month = month_number(parts.next()?)?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    let month = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}
