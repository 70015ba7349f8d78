use serde::{Deserialize, Serialize};

// ── Confidence ───────────────────────────────────────────────────────────

/// How directly an extracted fact was stated in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Explicitly stated with clarity
    Exact,
    /// Stated, but with some ambiguity
    Approximate,
    /// Deduced from context, not directly stated
    Inferred,
}

// ── People ───────────────────────────────────────────────────────────────

/// A person mentioned in a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Name as captured from the text (dedup key is the lowercased form)
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub confidence: ConfidenceLevel,
    /// Total times this name was encountered; never below 1
    pub mentions: u32,
}

// ── Places ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    City,
    State,
    Address,
    Landmark,
    Unlabeled,
}

/// A place mentioned in a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Full name as captured, e.g. "Springfield, IL"
    pub name: String,
    pub place_type: PlaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub confidence: ConfidenceLevel,
}

// ── Dates ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    Day,
    Month,
    Season,
    Approximate,
    Year,
    Unknown,
}

/// A date or time period mentioned in a transcript.
///
/// Date mentions carry no identity key: duplicates across transcripts are
/// expected and feed timeline construction as independent signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateMention {
    /// The raw date text, e.g. "1968", "late 1960s", "summer of 1972"
    pub date: String,
    pub date_type: DateType,
    /// What happened at this date, if the mention came with one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    pub confidence: ConfidenceLevel,
}

// ── Events ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Birth,
    Death,
    Marriage,
    Move,
    Job,
    Education,
    Military,
    /// A standalone date mention promoted to a timeline entry
    Mention,
    Other,
}

/// A life event extracted from a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventType,
    /// Source sentence/snippet the event was found in
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub date_confidence: ConfidenceLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people_involved: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub places_involved: Vec<String>,
    /// The exact keyword span that triggered the match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
}

// ── Extraction result ────────────────────────────────────────────────────

/// Complete extraction output for one transcript, or for a merged corpus.
///
/// Built once by the extractor and treated as immutable afterwards; the
/// merge step consumes many of these and constructs a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub people: Vec<Person>,
    pub places: Vec<Place>,
    pub dates: Vec<DateMention>,
    pub events: Vec<Event>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Session identifier for citation; opaque to the pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_session: Option<String>,
}

impl ExtractionResult {
    /// An empty, successful result (the short-transcript policy outcome).
    pub fn empty(source_session: Option<String>) -> Self {
        ExtractionResult {
            people: Vec::new(),
            places: Vec::new(),
            dates: Vec::new(),
            events: Vec::new(),
            success: true,
            error: None,
            source_session,
        }
    }
}

// ── Timeline ─────────────────────────────────────────────────────────────

/// Which side of the pipeline a timeline entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    Event,
    DateMention,
}

/// One chronologically sortable record in the assembled timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Raw date string; "Unknown" when the source event carried none
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: EventType,
    pub description: String,
    pub confidence: ConfidenceLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub places: Vec<String>,
    pub source: EntrySource,
}

// ── Journal granularity ──────────────────────────────────────────────────

/// How fine-grained a reconstructed journal entry for a date mention can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    /// Never produced by the heuristics; kept for format compatibility
    Weekly,
    Monthly,
    Seasonal,
    Yearly,
}
