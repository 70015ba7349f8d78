//! Chronological timeline assembly from merged events and date mentions.
//!
//! Ordering is by a synthesized integer key derived from the raw date text.
//! The timeline key has year resolution; [`journal_sort_key`] is the finer
//! month-resolution key used by the journal and biography consumers. Both
//! give the same raw date string the same relative position within their
//! own consumer.

use std::sync::LazyLock;

use regex::Regex;

use memoir_types::{DateMention, EntrySource, Event, EventType, TimelineEntry};

/// Sort key for entries whose date string contains no 4-digit year.
const UNDATED_KEY: i32 = 9999;
/// Journal-key equivalent of [`UNDATED_KEY`].
const UNDATED_JOURNAL_KEY: i32 = 999_999;

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("year regex"));

static RE_JOURNAL_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)\d{2}").expect("journal year regex"));

/// Build one ordered timeline from events and standalone date mentions.
///
/// Every event becomes an entry. A date mention becomes a "mention" entry
/// unless an entry with the same raw date already describes it: for a
/// mention carrying event text that means a same-date entry whose
/// description contains the text, for a bare mention any same-date entry
/// suppresses it. The sort is stable, so undated entries keep their
/// insertion order at the end.
pub fn build_timeline(events: &[Event], dates: &[DateMention]) -> Vec<TimelineEntry> {
    let mut timeline: Vec<TimelineEntry> = Vec::new();

    for event in events {
        timeline.push(TimelineEntry {
            date: event
                .date
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            entry_type: event.event_type,
            description: event.description.clone(),
            confidence: event.date_confidence,
            people: event.people_involved.clone(),
            places: event.places_involved.clone(),
            source: EntrySource::Event,
        });
    }

    for mention in dates {
        // An absent event text behaves as empty: contains("") always holds,
        // so any same-date entry suppresses a bare mention
        let needle = mention.event.as_deref().unwrap_or("").to_lowercase();
        let already_covered = timeline.iter().any(|entry| {
            entry.date == mention.date && entry.description.to_lowercase().contains(&needle)
        });
        if already_covered {
            continue;
        }
        timeline.push(TimelineEntry {
            date: mention.date.clone(),
            entry_type: EventType::Mention,
            description: mention.event.clone().unwrap_or_default(),
            confidence: mention.confidence,
            people: Vec::new(),
            places: Vec::new(),
            source: EntrySource::DateMention,
        });
    }

    timeline.sort_by_key(|entry| timeline_sort_key(&entry.date));
    timeline
}

/// Year-resolution sort key for a raw date string.
///
/// The first 4-digit run anywhere in the string is the year; "late" shifts
/// it +5 and "early" −5, checked as substrings of the whole lowercased
/// string ("late" first). The substring check can fire on unrelated text;
/// that imprecision is part of the ordering contract and is kept as is.
pub fn timeline_sort_key(date: &str) -> i32 {
    let Some(m) = RE_YEAR.find(date) else {
        return UNDATED_KEY;
    };
    let year: i32 = m.as_str().parse().expect("4-digit year parses");

    let lower = date.to_lowercase();
    if lower.contains("late") {
        year + 5
    } else if lower.contains("early") {
        year - 5
    } else {
        year
    }
}

/// Month-resolution sort key shared with the journal/biography consumers.
///
/// `year * 100` plus a sub-year offset from keyword presence; defaults to
/// mid-year when no keyword narrows it down.
pub fn journal_sort_key(date: &str) -> i32 {
    let Some(m) = RE_JOURNAL_YEAR.find(date) else {
        return UNDATED_JOURNAL_KEY;
    };
    let year: i32 = m.as_str().parse().expect("4-digit year parses");
    let lower = date.to_lowercase();

    let offset = if lower.contains("early") {
        1
    } else if lower.contains("late") {
        12
    } else if lower.contains("spring") {
        3
    } else if lower.contains("summer") {
        6
    } else if lower.contains("fall") || lower.contains("autumn") {
        9
    } else if lower.contains("winter") {
        12
    } else {
        6
    };

    year * 100 + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoir_types::ConfidenceLevel;

    fn event(event_type: EventType, description: &str, date: Option<&str>) -> Event {
        Event {
            event_type,
            description: description.to_string(),
            date: date.map(str::to_string),
            date_confidence: ConfidenceLevel::Exact,
            people_involved: Vec::new(),
            places_involved: Vec::new(),
            source_text: None,
        }
    }

    fn mention(date: &str, event: Option<&str>) -> DateMention {
        DateMention {
            date: date.to_string(),
            date_type: memoir_types::DateType::Year,
            event: event.map(str::to_string),
            confidence: ConfidenceLevel::Exact,
        }
    }

    // ── timeline_sort_key ────────────────────────────────────────────

    #[test]
    fn test_sort_key_plain_year() {
        assert_eq!(timeline_sort_key("1968"), 1968);
        assert_eq!(timeline_sort_key("June 1968"), 1968);
    }

    #[test]
    fn test_sort_key_late_and_early() {
        assert_eq!(timeline_sort_key("late 1960s"), 1965);
        assert_eq!(timeline_sort_key("early 1960s"), 1955);
        // "late" wins when both substrings are present
        assert_eq!(timeline_sort_key("late or early 1960s"), 1965);
    }

    #[test]
    fn test_sort_key_no_year() {
        assert_eq!(timeline_sort_key("Unknown"), UNDATED_KEY);
        assert_eq!(timeline_sort_key("that summer"), UNDATED_KEY);
        assert_eq!(timeline_sort_key(""), UNDATED_KEY);
    }

    #[test]
    fn test_sort_key_qualifier_fires_on_unrelated_text() {
        // The substring check is deliberately blunt: "Slater" contains
        // "late", and the offset applies anyway
        assert_eq!(timeline_sort_key("Slater Street, 1968"), 1973);
    }

    // ── journal_sort_key ─────────────────────────────────────────────

    #[test]
    fn test_journal_key_offsets() {
        assert_eq!(journal_sort_key("early 1960s"), 196001);
        assert_eq!(journal_sort_key("late 1960s"), 196012);
        assert_eq!(journal_sort_key("spring 1968"), 196803);
        assert_eq!(journal_sort_key("summer of 1972"), 197206);
        assert_eq!(journal_sort_key("fall 1950"), 195009);
        assert_eq!(journal_sort_key("winter 1950"), 195012);
        assert_eq!(journal_sort_key("1968"), 196806);
    }

    #[test]
    fn test_journal_key_no_year() {
        assert_eq!(journal_sort_key("around then"), UNDATED_JOURNAL_KEY);
    }

    #[test]
    fn test_keys_agree_on_relative_order() {
        // Both consumers must order these raw strings the same way
        let dates = ["early 1950s", "1950", "summer of 1950", "late 1950s", "1968"];
        let mut by_timeline: Vec<&str> = dates.to_vec();
        by_timeline.sort_by_key(|d| timeline_sort_key(d));
        let mut by_journal: Vec<&str> = dates.to_vec();
        by_journal.sort_by_key(|d| journal_sort_key(d));
        assert_eq!(by_timeline, by_journal);
    }

    // ── build_timeline ───────────────────────────────────────────────

    #[test]
    fn test_events_and_mentions_ordered_by_year() {
        let events = [event(EventType::Move, "moved to the city", Some("1970"))];
        let dates = [mention("1965", Some("started at the plant"))];
        let timeline = build_timeline(&events, &dates);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].date, "1965");
        assert_eq!(timeline[0].entry_type, EventType::Mention);
        assert_eq!(timeline[0].source, EntrySource::DateMention);
        assert_eq!(timeline[1].date, "1970");
        assert_eq!(timeline[1].source, EntrySource::Event);
    }

    #[test]
    fn test_bare_mention_becomes_entry() {
        let events = [event(EventType::Move, "moved to the city", Some("1970"))];
        let dates = [mention("1965", None)];
        let timeline = build_timeline(&events, &dates);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].date, "1965");
        assert_eq!(timeline[0].entry_type, EventType::Mention);
        assert_eq!(timeline[1].date, "1970");
    }

    #[test]
    fn test_bare_mention_suppressed_by_same_date_entry() {
        let events = [event(EventType::Move, "moved to the city", Some("1965"))];
        let dates = [mention("1965", None), mention("1965", None)];
        let timeline = build_timeline(&events, &dates);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].source, EntrySource::Event);
    }

    #[test]
    fn test_duplicate_mention_suppressed() {
        let events = [event(
            EventType::Job,
            "I started at the plant in 1965",
            Some("1965"),
        )];
        let dates = [mention("1965", Some("started at the plant"))];
        let timeline = build_timeline(&events, &dates);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].source, EntrySource::Event);
    }

    #[test]
    fn test_same_date_different_description_not_suppressed() {
        let events = [event(EventType::Job, "I started at the plant", Some("1965"))];
        let dates = [mention("1965", Some("bought the first car"))];
        let timeline = build_timeline(&events, &dates);
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_undated_events_sort_last_in_insertion_order() {
        let events = [
            event(EventType::Other, "first undated", None),
            event(EventType::Move, "the big move", Some("1952")),
            event(EventType::Other, "second undated", None),
        ];
        let timeline = build_timeline(&events, &[]);
        assert_eq!(timeline[0].date, "1952");
        assert_eq!(timeline[1].description, "first undated");
        assert_eq!(timeline[1].date, "Unknown");
        assert_eq!(timeline[2].description, "second undated");
    }

    #[test]
    fn test_event_fields_copied_through() {
        let mut e = event(EventType::Marriage, "we got married", Some("June 1968"));
        e.people_involved = vec!["John".to_string()];
        e.places_involved = vec!["Springfield, IL".to_string()];
        e.date_confidence = ConfidenceLevel::Approximate;
        let timeline = build_timeline(std::slice::from_ref(&e), &[]);
        let entry = &timeline[0];
        assert_eq!(entry.date, "June 1968");
        assert_eq!(entry.entry_type, EventType::Marriage);
        assert_eq!(entry.confidence, ConfidenceLevel::Approximate);
        assert_eq!(entry.people, vec!["John"]);
        assert_eq!(entry.places, vec!["Springfield, IL"]);
    }
}
