//! Corpus-level merge of per-transcript extraction results.
//!
//! People and places deduplicate on the lowercased name, with deliberately
//! different policies: people accumulate mention counts and backfill missing
//! fields, places are first-occurrence-wins outright. Dates and events are
//! concatenated untouched; duplicates across transcripts are expected and
//! feed the timeline as independent signals.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use memoir_types::{DateMention, Event, ExtractionResult, Person, Place};

/// Combine an ordered list of extraction results into one corpus result.
/// Never fails; an empty input yields empty aggregates.
pub fn merge_results(results: &[ExtractionResult]) -> ExtractionResult {
    let mut people: Vec<Person> = Vec::new();
    let mut people_index: HashMap<String, usize> = HashMap::new();
    let mut places: Vec<Place> = Vec::new();
    let mut claimed_places: HashSet<String> = HashSet::new();
    let mut dates: Vec<DateMention> = Vec::new();
    let mut events: Vec<Event> = Vec::new();

    for result in results {
        for person in &result.people {
            let key = person.name.to_lowercase();
            match people_index.get(&key) {
                Some(&i) => {
                    let existing = &mut people[i];
                    existing.mentions += 1;
                    // First-seen confidence is kept; only missing fields
                    // are filled from later sightings
                    if existing.relationship.is_none() && person.relationship.is_some() {
                        existing.relationship = person.relationship.clone();
                    }
                    if existing.context.is_none() && person.context.is_some() {
                        existing.context = person.context.clone();
                    }
                }
                None => {
                    // Keep the incoming count: a fresh extraction carries 1,
                    // an already-merged record carries its accumulated total.
                    // This is what makes re-merging a merged result lossless.
                    people_index.insert(key, people.len());
                    people.push(person.clone());
                }
            }
        }

        for place in &result.places {
            if claimed_places.insert(place.name.to_lowercase()) {
                places.push(place.clone());
            }
        }

        dates.extend(result.dates.iter().cloned());
        events.extend(result.events.iter().cloned());
    }

    debug!(
        inputs = results.len(),
        people = people.len(),
        places = places.len(),
        dates = dates.len(),
        events = events.len(),
        "merge complete"
    );

    ExtractionResult {
        people,
        places,
        dates,
        events,
        success: true,
        error: None,
        source_session: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoir_types::{ConfidenceLevel, DateType, EventType, PlaceType};

    fn person(name: &str, relationship: Option<&str>, confidence: ConfidenceLevel) -> Person {
        Person {
            name: name.to_string(),
            relationship: relationship.map(str::to_string),
            context: None,
            confidence,
            mentions: 1,
        }
    }

    fn place(name: &str, place_type: PlaceType, context: Option<&str>) -> Place {
        Place {
            name: name.to_string(),
            place_type,
            context: context.map(str::to_string),
            confidence: ConfidenceLevel::Exact,
        }
    }

    fn result_with(people: Vec<Person>, places: Vec<Place>) -> ExtractionResult {
        ExtractionResult {
            people,
            places,
            dates: Vec::new(),
            events: Vec::new(),
            success: true,
            error: None,
            source_session: None,
        }
    }

    #[test]
    fn test_empty_input() {
        let merged = merge_results(&[]);
        assert!(merged.success);
        assert!(merged.people.is_empty());
        assert!(merged.places.is_empty());
    }

    #[test]
    fn test_person_dedup_case_insensitive() {
        let a = result_with(vec![person("John", None, ConfidenceLevel::Exact)], vec![]);
        let b = result_with(vec![person("JOHN", None, ConfidenceLevel::Exact)], vec![]);
        let merged = merge_results(&[a, b]);
        assert_eq!(merged.people.len(), 1);
        assert_eq!(merged.people[0].mentions, 2);
        // First-seen casing survives
        assert_eq!(merged.people[0].name, "John");
    }

    #[test]
    fn test_first_seen_confidence_and_backfill() {
        // "my husband John" in one session, a bare capitalized match in the
        // next: one person, two mentions, exact confidence kept
        let a = result_with(
            vec![person("John", Some("husband"), ConfidenceLevel::Exact)],
            vec![],
        );
        let b = result_with(
            vec![person("John", None, ConfidenceLevel::Approximate)],
            vec![],
        );
        let merged = merge_results(&[a, b]);
        assert_eq!(merged.people.len(), 1);
        let john = &merged.people[0];
        assert_eq!(john.mentions, 2);
        assert_eq!(john.relationship.as_deref(), Some("husband"));
        assert_eq!(john.confidence, ConfidenceLevel::Exact);
    }

    #[test]
    fn test_relationship_backfilled_not_overwritten() {
        let a = result_with(
            vec![person("Ruth", None, ConfidenceLevel::Approximate)],
            vec![],
        );
        let b = result_with(
            vec![person("Ruth", Some("aunt"), ConfidenceLevel::Exact)],
            vec![],
        );
        let c = result_with(
            vec![person("Ruth", Some("neighbor"), ConfidenceLevel::Exact)],
            vec![],
        );
        let merged = merge_results(&[a, b, c]);
        let ruth = &merged.people[0];
        // Backfilled from the second sighting, not replaced by the third;
        // first-seen confidence is untouched
        assert_eq!(ruth.relationship.as_deref(), Some("aunt"));
        assert_eq!(ruth.confidence, ConfidenceLevel::Approximate);
        assert_eq!(ruth.mentions, 3);
    }

    #[test]
    fn test_mention_count_equals_total_sightings() {
        let results: Vec<ExtractionResult> = (0..4)
            .map(|_| result_with(vec![person("Mary", None, ConfidenceLevel::Exact)], vec![]))
            .collect();
        let merged = merge_results(&results);
        assert_eq!(merged.people[0].mentions, 4);
    }

    #[test]
    fn test_merge_is_associative_on_mentions() {
        let make = || result_with(vec![person("Mary", None, ConfidenceLevel::Exact)], vec![]);
        let (a, b, c) = (make(), make(), make());

        let all_at_once = merge_results(&[a.clone(), b.clone(), c.clone()]);
        let staged = merge_results(&[merge_results(&[a, b]), c]);

        assert_eq!(all_at_once.people[0].mentions, 3);
        assert_eq!(staged.people[0].mentions, all_at_once.people[0].mentions);
    }

    #[test]
    fn test_merge_of_single_result_is_lossless() {
        let mut mary = person("Mary", Some("mother"), ConfidenceLevel::Exact);
        mary.mentions = 3;
        let a = result_with(vec![mary], vec![place("Kansas", PlaceType::State, None)]);
        let merged = merge_results(std::slice::from_ref(&a));
        assert_eq!(merged.people[0].mentions, 3);
        assert_eq!(merged.people[0].relationship.as_deref(), Some("mother"));
        assert_eq!(merged.places.len(), 1);
    }

    #[test]
    fn test_place_first_occurrence_wins() {
        let a = result_with(
            vec![],
            vec![place("Springfield, IL", PlaceType::City, None)],
        );
        let b = result_with(
            vec![],
            vec![place("springfield, il", PlaceType::Unlabeled, Some("later context"))],
        );
        let merged = merge_results(&[a, b]);
        assert_eq!(merged.places.len(), 1);
        let p = &merged.places[0];
        // No backfill, no overwrite: the later sighting is discarded whole
        assert_eq!(p.name, "Springfield, IL");
        assert_eq!(p.place_type, PlaceType::City);
        assert!(p.context.is_none());
    }

    #[test]
    fn test_dates_and_events_concatenated_with_duplicates() {
        let date = DateMention {
            date: "1968".to_string(),
            date_type: DateType::Year,
            event: None,
            confidence: ConfidenceLevel::Exact,
        };
        let event = Event {
            event_type: EventType::Move,
            description: "moved to the city".to_string(),
            date: Some("1968".to_string()),
            date_confidence: ConfidenceLevel::Exact,
            people_involved: Vec::new(),
            places_involved: Vec::new(),
            source_text: None,
        };
        let make = || ExtractionResult {
            people: Vec::new(),
            places: Vec::new(),
            dates: vec![date.clone()],
            events: vec![event.clone()],
            success: true,
            error: None,
            source_session: None,
        };
        let merged = merge_results(&[make(), make(), make()]);
        assert_eq!(merged.dates.len(), 3);
        assert_eq!(merged.events.len(), 3);
    }

    #[test]
    fn test_single_result_round_trip() {
        let a = result_with(
            vec![person("Mary", Some("mother"), ConfidenceLevel::Exact)],
            vec![place("Kansas", PlaceType::State, None)],
        );
        let merged = merge_results(std::slice::from_ref(&a));
        assert_eq!(merged.people.len(), a.people.len());
        assert_eq!(merged.people[0].mentions, 1);
        assert_eq!(merged.places.len(), a.places.len());
    }
}
