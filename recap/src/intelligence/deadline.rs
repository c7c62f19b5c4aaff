//! Natural-language deadline normalization.
//!
//! Deadlines come back from the model as free text ("next Friday",
//! "by March 3rd", "2026-11-02"). They are rewritten to ISO dates relative to
//! the moment of parsing, or to [`UNCLEAR_DEADLINE`] when unreadable.

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, Weekday};
use chrono_english::{parse_date_string, Dialect};

use crate::models::{ActionItem, UNCLEAR_DEADLINE};

/// Absolute formats tried before any relative parsing.
const EXPLICIT_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Formats for dates written without a year; the reference year is appended.
const YEARLESS_FORMATS: &[&str] = &["%B %d %Y", "%b %d %Y", "%d %B %Y", "%d %b %Y"];

/// Connectives models like to prepend ("by Friday", "due tomorrow").
const LEADING_CONNECTIVES: &[&str] = &["by ", "on ", "before ", "due ", "until "];

const ORDINAL_SUFFIXES: &[&str] = &["st", "nd", "rd", "th"];

/// Words handed to chrono-english. Anything else it would only match by prefix.
const NATURAL_WORDS: &[&str] = &[
    "today", "tomorrow", "yesterday", "next", "last", "this", "at", "noon", "midnight", "am",
    "pm",
];

const MONTH_NAMES: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

/// Parsed dates further than this many years from the reference are dropped.
const MAX_YEAR_DISTANCE: i32 = 5;

/// Parse a deadline expression into a calendar date relative to `now`.
pub fn parse_deadline(raw: &str, now: DateTime<Local>) -> Option<NaiveDate> {
    let candidate = clean_deadline(raw)?;
    let today = now.date_naive();

    parse_explicit(&candidate, today)
        .or_else(|| parse_relative(&candidate, today))
        .or_else(|| parse_natural(&candidate, now))
        .filter(|date| (date.year() - today.year()).abs() <= MAX_YEAR_DISTANCE)
}

fn clean_deadline(raw: &str) -> Option<String> {
    let mut candidate = raw.trim().trim_end_matches('.').to_lowercase();

    while let Some(rest) = LEADING_CONNECTIVES
        .iter()
        .find_map(|prefix| candidate.strip_prefix(prefix))
    {
        candidate = rest.trim_start().to_string();
    }

    let candidate = strip_ordinal_suffixes(&candidate);
    (!candidate.is_empty()).then_some(candidate)
}

/// `march 3rd, 2027` becomes `march 3, 2027`.
fn strip_ordinal_suffixes(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let (body, tail) = match word.strip_suffix(',') {
                Some(body) => (body, ","),
                None => (word, ""),
            };
            ORDINAL_SUFFIXES
                .iter()
                .find_map(|suffix| body.strip_suffix(suffix))
                .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
                .map(|digits| format!("{digits}{tail}"))
                .unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_explicit(candidate: &str, today: NaiveDate) -> Option<NaiveDate> {
    EXPLICIT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(candidate, format).ok())
        .or_else(|| {
            let with_year = format!("{candidate} {}", today.year());
            YEARLESS_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(&with_year, format).ok())
        })
}

/// Weekday names and offsets such as `this friday`, `next week`, `in 3 days`.
fn parse_relative(candidate: &str, today: NaiveDate) -> Option<NaiveDate> {
    let words: Vec<&str> = candidate.split_whitespace().collect();

    match words.as_slice() {
        ["next", "week"] => today.checked_add_signed(Duration::weeks(1)),
        ["next", "month"] => today.checked_add_months(Months::new(1)),
        ["next", day] => Some(upcoming_weekday(today, day.parse().ok()?, true)),
        ["this", day] | [day] => Some(upcoming_weekday(today, day.parse().ok()?, false)),
        ["in", amount, unit] | [amount, unit] => shift(today, count(amount)?, unit),
        _ => None,
    }
}

/// The next `target` on or after `today`; strictly after when `skip_today` is set.
fn upcoming_weekday(today: NaiveDate, target: Weekday, skip_today: bool) -> NaiveDate {
    let mut ahead =
        (7 + target.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7;
    if ahead == 0 && skip_today {
        ahead = 7;
    }
    today + Duration::days(i64::from(ahead))
}

fn count(word: &str) -> Option<u32> {
    match word {
        "a" | "an" | "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        "ten" => Some(10),
        digits => digits.parse().ok(),
    }
}

fn shift(today: NaiveDate, amount: u32, unit: &str) -> Option<NaiveDate> {
    match unit.trim_end_matches('s') {
        "day" => today.checked_add_signed(Duration::days(i64::from(amount))),
        "week" => today.checked_add_signed(Duration::weeks(i64::from(amount))),
        "month" => today.checked_add_months(Months::new(amount)),
        _ => None,
    }
}

/// Fall back to chrono-english, but only for inputs made of words it
/// understands in full. Bare numbers are never dates.
fn parse_natural(candidate: &str, now: DateTime<Local>) -> Option<NaiveDate> {
    let words: Vec<&str> = candidate
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .collect();

    let has_word = words
        .iter()
        .any(|word| word.chars().any(char::is_alphabetic));
    let understood = words
        .iter()
        .all(|word| word.chars().any(|c| c.is_ascii_digit()) || is_date_word(word));
    if !has_word || !understood {
        return None;
    }

    parse_date_string(candidate, now, Dialect::Us)
        .ok()
        .map(|parsed| parsed.date_naive())
}

fn is_date_word(word: &str) -> bool {
    NATURAL_WORDS.contains(&word)
        || MONTH_NAMES.contains(&word)
        || word.parse::<Weekday>().is_ok()
}

/// Rewrite one deadline string.
///
/// Empty stays empty, readable becomes `YYYY-MM-DD`, anything else becomes
/// exactly [`UNCLEAR_DEADLINE`].
pub fn normalize_deadline(raw: &str, now: DateTime<Local>) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match parse_deadline(raw, now) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            tracing::debug!(deadline = raw, "Deadline could not be parsed");
            UNCLEAR_DEADLINE.to_string()
        }
    }
}

pub fn normalize_deadlines(items: Vec<ActionItem>, now: DateTime<Local>) -> Vec<ActionItem> {
    items
        .into_iter()
        .map(|mut item| {
            item.deadline = normalize_deadline(&item.deadline, now);
            item
        })
        .collect()
}
