//! Extraction orchestration: runs the four scanners over one transcript and
//! packages the results.
//!
//! The extractor is stateless: all regexes are compiled once in `new()` and
//! every call builds its result from scratch, so batch extraction can fan
//! out per transcript without shared mutable state.

use std::collections::HashSet;

use tracing::debug;

use memoir_types::ExtractionResult;

use crate::dates::DatesScanner;
use crate::events::EventsScanner;
use crate::people::PeopleScanner;
use crate::places::PlacesScanner;

/// Transcripts shorter than this (after trimming) short-circuit to an empty,
/// successful result. A policy decision, not an error: there is nothing
/// worth mining in a few characters of text.
pub const MIN_TRANSCRIPT_CHARS: usize = 10;

/// One transcript queued for batch extraction.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub text: String,
    /// Session identifier carried through for citation; never interpreted
    pub session_id: Option<String>,
}

/// Extracts biographical entities from transcripts using the pattern layer.
pub struct EntityExtractor {
    people: PeopleScanner,
    places: PlacesScanner,
    dates: DatesScanner,
    events: EventsScanner,
}

impl EntityExtractor {
    pub fn new() -> Self {
        EntityExtractor {
            people: PeopleScanner::new(),
            places: PlacesScanner::new(),
            dates: DatesScanner::new(),
            events: EventsScanner::new(),
        }
    }

    /// Extract entities from a single transcript.
    ///
    /// Never fails: unmatched or malformed input simply contributes nothing,
    /// and the result is structurally valid for any input.
    pub fn extract(&self, transcript: &str, session_id: Option<&str>) -> ExtractionResult {
        if transcript.trim().chars().count() < MIN_TRANSCRIPT_CHARS {
            return ExtractionResult::empty(session_id.map(str::to_string));
        }

        let mut people = self.people.scan(transcript);
        let places = self.places.scan(transcript);

        // A name claimed as a place is not a person. This catches city and
        // state names picked up by the generic capitalized-run pattern.
        let place_keys: HashSet<String> =
            places.iter().map(|p| p.name.to_lowercase()).collect();
        people.retain(|p| !place_keys.contains(&p.name.to_lowercase()));

        let dates = self.dates.scan(transcript);
        let events = self.events.scan(transcript, &people, &places);

        debug!(
            session = session_id.unwrap_or("-"),
            people = people.len(),
            places = places.len(),
            dates = dates.len(),
            events = events.len(),
            "transcript extracted"
        );

        ExtractionResult {
            people,
            places,
            dates,
            events,
            success: true,
            error: None,
            source_session: session_id.map(str::to_string),
        }
    }

    /// Extract from many transcripts independently, preserving input order.
    /// Cross-transcript combination is the merge step's job, not this one's.
    pub fn extract_batch(&self, transcripts: &[Transcript]) -> Vec<ExtractionResult> {
        transcripts
            .iter()
            .map(|t| self.extract(&t.text, t.session_id.as_deref()))
            .collect()
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
