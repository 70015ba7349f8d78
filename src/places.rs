//! Place detection: city-state pairs, street addresses, and bare state names.

use std::collections::HashSet;

use regex::Regex;
use tracing::trace;

use memoir_types::{ConfidenceLevel, Place, PlaceType};

use crate::snippet::context_window;
use crate::wordlists::{US_STATE_NAMES, state_alternation, street_type_alternation};

const CONTEXT_RADIUS: usize = 80;

/// Holds the compiled place-detection regexes.
pub struct PlacesScanner {
    /// "City, ST" or "City, StateFullName"
    re_city_state: Regex,
    /// "123 Main Street": digits, capitalized words, street-type keyword
    re_address: Regex,
}

impl PlacesScanner {
    pub fn new() -> Self {
        let states = state_alternation();
        let streets = street_type_alternation();

        let re_city_state = Regex::new(&format!(
            r"\b(?P<city>[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s+(?P<state>{states})\b"
        ))
        .expect("city-state regex");

        let re_address = Regex::new(&format!(
            r"\b\d+\s+(?:[A-Z][a-z]+\s+)+(?:{streets})\b"
        ))
        .expect("address regex");

        PlacesScanner {
            re_city_state,
            re_address,
        }
    }

    /// Scan a transcript for places. First occurrence of a normalized name
    /// wins; output preserves first-seen order.
    pub fn scan(&self, text: &str) -> Vec<Place> {
        let mut places: Vec<Place> = Vec::new();
        let mut claimed: HashSet<String> = HashSet::new();

        // Pattern 1: city + state
        for caps in self.re_city_state.captures_iter(text) {
            let whole = caps.get(0).expect("whole match");
            record(
                &mut places,
                &mut claimed,
                whole.as_str(),
                PlaceType::City,
                context_window(text, whole.start(), whole.end(), CONTEXT_RADIUS),
            );
        }

        // Pattern 2: street address
        for m in self.re_address.find_iter(text) {
            record(
                &mut places,
                &mut claimed,
                m.as_str(),
                PlaceType::Address,
                context_window(text, m.start(), m.end(), CONTEXT_RADIUS),
            );
        }

        // Pattern 3: bare state names, checked once per state as an exact
        // case-sensitive substring
        for state in US_STATE_NAMES {
            if let Some(pos) = text.find(state) {
                record(
                    &mut places,
                    &mut claimed,
                    state,
                    PlaceType::State,
                    context_window(text, pos, pos + state.len(), CONTEXT_RADIUS),
                );
            }
        }

        trace!(count = places.len(), "places scan complete");
        places
    }
}

impl Default for PlacesScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a place unless its normalized name is already claimed.
fn record(
    places: &mut Vec<Place>,
    claimed: &mut HashSet<String>,
    name: &str,
    place_type: PlaceType,
    context: String,
) {
    let key = name.to_lowercase();
    if !claimed.insert(key) {
        return;
    }
    places.push(Place {
        name: name.to_string(),
        place_type,
        context: Some(context),
        confidence: ConfidenceLevel::Exact,
    });
}
