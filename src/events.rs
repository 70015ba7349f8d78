//! Life-event detection.
//!
//! Seven fixed keyword regexes, one per event type, each scanned
//! independently over the whole transcript. Every match yields an event
//! described by its surrounding snippet; a window around the match is
//! searched for a year and for already-extracted people and places.

use std::collections::HashSet;

use regex::Regex;
use tracing::trace;

use memoir_types::{ConfidenceLevel, Event, EventType, Person, Place};

use crate::snippet::context_window;
use crate::wordlists::EVENT_KEYWORDS;

/// Chars of surrounding text kept as the event description.
const DESCRIPTION_RADIUS: usize = 200;
/// Chars searched on each side of the match for dates and entity names.
const ASSOCIATION_RADIUS: usize = 100;
/// Snippet prefix length used to suppress near-identical repeats.
const DEDUP_PREFIX: usize = 80;

/// Holds the compiled per-event-type keyword regexes.
pub struct EventsScanner {
    patterns: Vec<(EventType, Regex)>,
    re_year: Regex,
}

impl EventsScanner {
    pub fn new() -> Self {
        let patterns = EVENT_KEYWORDS
            .iter()
            .map(|(event_type, body)| {
                let re = Regex::new(&format!("(?i){body}"))
                    .unwrap_or_else(|e| panic!("keyword regex for {event_type:?}: {e}"));
                (*event_type, re)
            })
            .collect();

        let re_year = Regex::new(r"\b\d{4}\b").expect("year regex");

        EventsScanner { patterns, re_year }
    }

    /// Scan a transcript for life events. `people` and `places` are the
    /// entities already extracted from the same transcript; names found in
    /// the association window are attached to the event.
    pub fn scan(&self, text: &str, people: &[Person], places: &[Place]) -> Vec<Event> {
        let mut events: Vec<Event> = Vec::new();
        let mut seen: HashSet<(EventType, String)> = HashSet::new();

        for (event_type, re) in &self.patterns {
            for m in re.find_iter(text) {
                let description =
                    context_window(text, m.start(), m.end(), DESCRIPTION_RADIUS);
                let dedup_key: String = description.chars().take(DEDUP_PREFIX).collect();
                if !seen.insert((*event_type, dedup_key)) {
                    continue;
                }

                let window =
                    context_window(text, m.start(), m.end(), ASSOCIATION_RADIUS);
                let (date, date_confidence) = match self.re_year.find(&window) {
                    Some(y) => (Some(y.as_str().to_string()), ConfidenceLevel::Exact),
                    None => (None, ConfidenceLevel::Inferred),
                };

                let window_lower = window.to_lowercase();
                let people_involved = people
                    .iter()
                    .filter(|p| window_lower.contains(&p.name.to_lowercase()))
                    .map(|p| p.name.clone())
                    .collect();
                let places_involved = places
                    .iter()
                    .filter(|p| window_lower.contains(&p.name.to_lowercase()))
                    .map(|p| p.name.clone())
                    .collect();

                events.push(Event {
                    event_type: *event_type,
                    description,
                    date,
                    date_confidence,
                    people_involved,
                    places_involved,
                    source_text: Some(m.as_str().to_string()),
                });
            }
        }

        trace!(count = events.len(), "events scan complete");
        events
    }
}

impl Default for EventsScanner {
    fn default() -> Self {
        Self::new()
    }
}
