//! Date and time-period detection.
//!
//! Five independent patterns append to one flat list. A dedup set keyed on
//! the exact raw matched string keeps "1968" from being recorded twice, but
//! deliberately does not suppress a bare year whose composite form ("June
//! 1968") was already captured, since the raw strings differ.

use std::collections::HashSet;

use regex::Regex;
use tracing::trace;

use memoir_types::{ConfidenceLevel, DateMention, DateType};

use crate::wordlists::{SEASON_WORDS, month_alternation};

/// Holds the compiled date-detection regexes.
pub struct DatesScanner {
    /// "March 15, 1968"
    re_full_date: Regex,
    /// "June 1968"
    re_month_year: Regex,
    /// "summer of 1972", "Winter 1944"
    re_season_year: Regex,
    /// "late 1960s", "mid 1970s"
    re_decade: Regex,
    /// bare 4-digit year, 1800–2029
    re_bare_year: Regex,
}

impl DatesScanner {
    pub fn new() -> Self {
        let months = month_alternation();

        let re_full_date =
            Regex::new(&format!(r"\b(?:{months})\s+\d{{1,2}},\s+\d{{4}}\b"))
                .expect("full-date regex");

        let re_month_year = Regex::new(&format!(r"\b(?:{months})\s+\d{{4}}\b"))
            .expect("month-year regex");

        let re_season_year = Regex::new(&format!(
            r"\b(?i:{})(?:\s+of)?\s+\d{{4}}\b",
            SEASON_WORDS.join("|")
        ))
        .expect("season-year regex");

        let re_decade = Regex::new(
            r"\b(?P<qualifier>(?i:early|mid|late))\s+(?P<decade>\d{4})s\b",
        )
        .expect("decade regex");

        // The year alternatives bound the accepted range to 1800–2029
        let re_bare_year =
            Regex::new(r"\b(?:1[89]\d{2}|20[0-2]\d)\b").expect("bare-year regex");

        DatesScanner {
            re_full_date,
            re_month_year,
            re_season_year,
            re_decade,
            re_bare_year,
        }
    }

    /// Scan a transcript for date mentions, in pattern order.
    pub fn scan(&self, text: &str) -> Vec<DateMention> {
        let mut dates: Vec<DateMention> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for m in self.re_full_date.find_iter(text) {
            push_unique(
                &mut dates,
                &mut seen,
                m.as_str().to_string(),
                DateType::Day,
                ConfidenceLevel::Exact,
            );
        }

        for m in self.re_month_year.find_iter(text) {
            push_unique(
                &mut dates,
                &mut seen,
                m.as_str().to_string(),
                DateType::Month,
                ConfidenceLevel::Exact,
            );
        }

        for m in self.re_season_year.find_iter(text) {
            push_unique(
                &mut dates,
                &mut seen,
                m.as_str().to_string(),
                DateType::Season,
                ConfidenceLevel::Approximate,
            );
        }

        for caps in self.re_decade.captures_iter(text) {
            // Reconstructed with single spacing regardless of source layout
            let raw = format!(
                "{} {}s",
                caps.name("qualifier").expect("qualifier").as_str(),
                caps.name("decade").expect("decade").as_str()
            );
            push_unique(
                &mut dates,
                &mut seen,
                raw,
                DateType::Approximate,
                ConfidenceLevel::Approximate,
            );
        }

        for m in self.re_bare_year.find_iter(text) {
            push_unique(
                &mut dates,
                &mut seen,
                m.as_str().to_string(),
                DateType::Year,
                ConfidenceLevel::Exact,
            );
        }

        trace!(count = dates.len(), "dates scan complete");
        dates
    }
}

impl Default for DatesScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(
    dates: &mut Vec<DateMention>,
    seen: &mut HashSet<String>,
    raw: String,
    date_type: DateType,
    confidence: ConfidenceLevel,
) {
    if !seen.insert(raw.clone()) {
        return;
    }
    dates.push(DateMention {
        date: raw,
        date_type,
        event: None,
        confidence,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<DateMention> {
        DatesScanner::new().scan(text)
    }

    fn find<'a>(dates: &'a [DateMention], raw: &str) -> &'a DateMention {
        dates
            .iter()
            .find(|d| d.date == raw)
            .unwrap_or_else(|| panic!("no mention with raw date {raw:?}"))
    }

    #[test]
    fn test_full_date() {
        let dates = scan("She was born March 15, 1968 at the county hospital.");
        let d = find(&dates, "March 15, 1968");
        assert_eq!(d.date_type, DateType::Day);
        assert_eq!(d.confidence, ConfidenceLevel::Exact);
    }

    #[test]
    fn test_month_year() {
        let dates = scan("We married in June 1968, right after graduation.");
        let d = find(&dates, "June 1968");
        assert_eq!(d.date_type, DateType::Month);
    }

    #[test]
    fn test_season_year() {
        let dates = scan("That was the summer of 1972, hottest I remember.");
        let d = find(&dates, "summer of 1972");
        assert_eq!(d.date_type, DateType::Season);
        assert_eq!(d.confidence, ConfidenceLevel::Approximate);
    }

    #[test]
    fn test_decade_with_qualifier() {
        let dates = scan("The family scattered in the late 1960s.");
        let d = find(&dates, "late 1960s");
        assert_eq!(d.date_type, DateType::Approximate);
        assert_eq!(d.confidence, ConfidenceLevel::Approximate);
    }

    #[test]
    fn test_bare_year_in_range() {
        let dates = scan("Everything changed in 1945 when the war ended.");
        let d = find(&dates, "1945");
        assert_eq!(d.date_type, DateType::Year);
        assert_eq!(d.confidence, ConfidenceLevel::Exact);
    }

    #[test]
    fn test_year_out_of_range_ignored() {
        let dates = scan("The deed was dated 1750, or so the story went 2040.");
        assert!(dates.is_empty());
    }

    #[test]
    fn test_raw_string_dedup() {
        let dates = scan("In 1968 everything changed. By 1968 we had moved twice.");
        assert_eq!(dates.iter().filter(|d| d.date == "1968").count(), 1);
    }

    #[test]
    fn test_composite_does_not_suppress_bare_year() {
        // "June 1968" and "1968" differ as raw strings, so both survive
        let dates = scan("We married in June 1968. 1968 was a good year for us.");
        assert!(dates.iter().any(|d| d.date == "June 1968"));
        assert!(dates.iter().any(|d| d.date == "1968"));
    }

    #[test]
    fn test_decade_year_not_double_counted_as_bare_year() {
        // "1960s" has no word boundary between the digits and the s
        let dates = scan("The family scattered in the late 1960s.");
        assert_eq!(dates.len(), 1);
    }
}
