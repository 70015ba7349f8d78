//! Journal-side date heuristics.
//!
//! The retroactive-journal generator needs to know how fine-grained an
//! entry for a date mention can honestly be, how to present the date, and
//! how to slice entries by date range. All of it is substring keyword work
//! over the raw date text, sharing [`journal_sort_key`] with the timeline
//! so journal ordering never disagrees with chronological ordering.

use std::sync::LazyLock;

use regex::Regex;

use memoir_types::{DateMention, DateType, Granularity, TimelineEntry};

use crate::timeline::journal_sort_key;
use crate::wordlists::{MONTH_NAMES, SEASON_WORDS};

// Ordinal day-of-month, e.g. "the 3rd", "15th"
static RE_ORDINAL_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}(?:st|nd|rd|th)\b").expect("ordinal regex"));

// A date string that is nothing but a year
static RE_BARE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}$").expect("bare year regex"));

static RE_DISPLAY_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:19|20)\d{2}").expect("display year regex"));

/// Decide the journal granularity for a date mention.
pub fn determine_granularity(mention: &DateMention) -> Granularity {
    let date_str = mention.date.to_lowercase();

    if mention.date_type == DateType::Day || RE_ORDINAL_DAY.is_match(&date_str) {
        return Granularity::Daily;
    }

    if mention.date_type == DateType::Month
        || MONTH_NAMES
            .iter()
            .any(|m| date_str.contains(&m.to_lowercase()))
    {
        return Granularity::Monthly;
    }

    if mention.date_type == DateType::Season
        || SEASON_WORDS.iter().any(|s| date_str.contains(s))
    {
        return Granularity::Seasonal;
    }

    if ["early", "late", "mid", "around"]
        .iter()
        .any(|p| date_str.contains(p))
    {
        return Granularity::Seasonal;
    }

    if RE_BARE_YEAR.is_match(date_str.trim()) {
        return Granularity::Yearly;
    }

    Granularity::Seasonal
}

/// Format a raw date string for display at a given granularity.
pub fn format_date_display(date: &str, granularity: Granularity) -> String {
    let date_str = date.trim();

    match granularity {
        Granularity::Yearly => format!("A Year in {date_str}"),
        Granularity::Seasonal => {
            let lower = date_str.to_lowercase();
            for season in SEASON_WORDS {
                if lower.contains(season) {
                    let year = RE_DISPLAY_YEAR
                        .find(date_str)
                        .map(|m| m.as_str())
                        .unwrap_or("");
                    return format!("{} {}", capitalize(season), year)
                        .trim_end()
                        .to_string();
                }
            }
            title_case(date_str)
        }
        Granularity::Monthly => title_case(date_str),
        _ => date_str.to_string(),
    }
}

/// Filter timeline entries to an inclusive date range, compared on the
/// journal sort key. `None` leaves that side of the range open.
pub fn filter_by_date_range<'a>(
    entries: &'a [TimelineEntry],
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<&'a TimelineEntry> {
    let start_key = start.map(journal_sort_key);
    let end_key = end.map(journal_sort_key);

    entries
        .iter()
        .filter(|e| {
            let key = journal_sort_key(&e.date);
            start_key.is_none_or(|s| key >= s) && end_key.is_none_or(|s| key <= s)
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first letter of every whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
