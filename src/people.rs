//! Person detection over raw transcript text.
//!
//! Three layered patterns, applied in order. Later patterns never override
//! an earlier match for the same identity key (the lowercased name); they
//! only increment its mention count.

use std::collections::HashMap;

use regex::Regex;
use tracing::trace;

use memoir_types::{ConfidenceLevel, Person};

use crate::snippet::context_window;
use crate::wordlists::{is_stop_word, relationship_alternation};

/// Chars of surrounding text kept as a person's context snippet.
const CONTEXT_RADIUS: usize = 80;

/// Holds the compiled person-detection regexes.
pub struct PeopleScanner {
    /// "my/his/her/our {relationship} {Name}"
    re_rel_then_name: Regex,
    /// "{Name}, my/his/her/our {relationship}"
    re_name_then_rel: Regex,
    /// Two or more consecutive capitalized tokens
    re_capitalized_run: Regex,
}

impl PeopleScanner {
    pub fn new() -> Self {
        let rel = relationship_alternation();
        // Name fragment: one or more capitalized words. Kept case-sensitive
        // while the possessive/relationship part is not.
        let name = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*";

        let re_rel_then_name = Regex::new(&format!(
            r"\b(?:[Mm]y|[Hh]is|[Hh]er|[Oo]ur)\s+(?P<rel>(?i:{rel}))\s+(?P<name>{name})"
        ))
        .expect("rel-then-name regex");

        let re_name_then_rel = Regex::new(&format!(
            r"\b(?P<name>{name}),\s+(?:[Mm]y|[Hh]is|[Hh]er|[Oo]ur)\s+(?P<rel>(?i:{rel}))\b"
        ))
        .expect("name-then-rel regex");

        let re_capitalized_run =
            Regex::new(r"\b(?P<name>[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\b")
                .expect("capitalized-run regex");

        PeopleScanner {
            re_rel_then_name,
            re_name_then_rel,
            re_capitalized_run,
        }
    }

    /// Scan a transcript for people. Output preserves first-seen order.
    pub fn scan(&self, text: &str) -> Vec<Person> {
        let mut people: Vec<Person> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        // Pattern 1: possessive + relationship + name → exact
        for caps in self.re_rel_then_name.captures_iter(text) {
            let name = caps.name("name").expect("name group");
            let rel = caps.name("rel").expect("rel group").as_str().to_lowercase();
            record(
                &mut people,
                &mut index,
                name.as_str(),
                Some(rel),
                ConfidenceLevel::Exact,
                context_window(text, name.start(), name.end(), CONTEXT_RADIUS),
            );
        }

        // Pattern 2: name + comma + possessive relationship → exact
        for caps in self.re_name_then_rel.captures_iter(text) {
            let name = caps.name("name").expect("name group");
            let rel = caps.name("rel").expect("rel group").as_str().to_lowercase();
            record(
                &mut people,
                &mut index,
                name.as_str(),
                Some(rel),
                ConfidenceLevel::Exact,
                context_window(text, name.start(), name.end(), CONTEXT_RADIUS),
            );
        }

        // Pattern 3: generic capitalized run → approximate, no relationship
        for caps in self.re_capitalized_run.captures_iter(text) {
            let name = caps.name("name").expect("name group");
            record(
                &mut people,
                &mut index,
                name.as_str(),
                None,
                ConfidenceLevel::Approximate,
                context_window(text, name.start(), name.end(), CONTEXT_RADIUS),
            );
        }

        trace!(count = people.len(), "people scan complete");
        people
    }
}

impl Default for PeopleScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a new person or bump the mention count of an existing one.
/// The stored confidence is never changed by a later, weaker match;
/// relationship and context are backfilled only while missing.
fn record(
    people: &mut Vec<Person>,
    index: &mut HashMap<String, usize>,
    name: &str,
    relationship: Option<String>,
    confidence: ConfidenceLevel,
    context: String,
) {
    let first_token = name.split_whitespace().next().unwrap_or("");
    if is_stop_word(first_token) {
        return;
    }
    if name.chars().count() < 2 {
        return;
    }

    let key = name.to_lowercase();
    match index.get(&key) {
        Some(&i) => {
            let existing = &mut people[i];
            existing.mentions += 1;
            if existing.relationship.is_none() {
                existing.relationship = relationship;
            }
            if existing.context.is_none() {
                existing.context = Some(context);
            }
        }
        None => {
            index.insert(key, people.len());
            people.push(Person {
                name: name.to_string(),
                relationship,
                context: Some(context),
                confidence,
                mentions: 1,
            });
        }
    }
}
