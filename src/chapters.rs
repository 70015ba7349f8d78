//! Chapter-side event filtering.
//!
//! The biography generator plans chapters with free-text time periods
//! ("Childhood", "Career and professional life") and needs the events that
//! belong in each. Matching is keyword heuristics over the period text and
//! the event; periods with no recognized keyword include everything.

use memoir_types::{Event, EventType};

/// Whether an event belongs in a chapter covering `period`.
pub fn event_matches_period(event: &Event, period: &str) -> bool {
    let period = period.to_lowercase();
    let description = event.description.to_lowercase();

    if period.contains("childhood") || period.contains("early") {
        return event.event_type == EventType::Birth || description.contains("born");
    }
    if period.contains("education") || period.contains("school") {
        return event.event_type == EventType::Education || description.contains("school");
    }
    if period.contains("career") || period.contains("work") {
        return event.event_type == EventType::Job || description.contains("work");
    }
    if period.contains("family") || period.contains("marriage") {
        return event.event_type == EventType::Marriage || description.contains("family");
    }

    true
}

/// Filter a merged event list down to one chapter's events.
pub fn events_for_period<'a>(events: &'a [Event], period: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| event_matches_period(e, period))
        .collect()
}
