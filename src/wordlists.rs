//! Fixed word tables used by the pattern scanners.
//!
//! All tables are compile-time constants; the builder functions compose them
//! into regex alternation fragments, longest alternative first, so compound
//! entries ("air force", "passed away") win over their prefixes.

/// Relationship words that introduce a person, e.g. "my mother Mary".
/// Covers immediate family, extended family, and common social/professional
/// roles that oral-history speakers use to identify people.
pub const RELATIONSHIP_WORDS: &[&str] = &[
    // Immediate family
    "mother", "father", "mom", "dad", "mama", "papa", "parents",
    "sister", "brother", "son", "daughter",
    // Spouses
    "wife", "husband", "spouse", "fiance", "fiancee", "sweetheart",
    // Extended family
    "grandmother", "grandfather", "grandma", "grandpa",
    "aunt", "uncle", "cousin", "niece", "nephew",
    "stepmother", "stepfather", "stepsister", "stepbrother",
    "mother-in-law", "father-in-law", "sister-in-law", "brother-in-law",
    // Social / professional
    "friend", "neighbor", "boss", "teacher", "pastor", "doctor",
    "partner", "colleague", "coworker", "buddy",
];

/// Capitalized tokens that look like name starts but never are.
/// Pronouns, day/month/season names, and discourse markers that open
/// transcribed sentences ("Well, ...", "Anyway, ...").
pub const STOP_WORDS: &[&str] = &[
    // Pronouns and determiners
    "I", "We", "He", "She", "It", "You", "They",
    "My", "His", "Her", "Our", "Your", "Their",
    "The", "That", "This", "These", "Those", "There",
    // Question words
    "When", "Where", "What", "Who", "Why", "How",
    // Days
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
    "Saturday", "Sunday",
    // Months
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
    // Seasons
    "Spring", "Summer", "Fall", "Autumn", "Winter",
    // Discourse markers common in oral-history transcripts
    "Well", "Now", "Then", "So", "But", "And", "Or", "Anyway",
    "Okay", "Oh", "Yes", "No", "Maybe", "Back", "After", "Before",
    "Later", "Once", "Every",
];

/// US state postal abbreviations, in conventional state order pairs with
/// [`US_STATE_NAMES`].
pub const US_STATE_ABBREVS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA",
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD",
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC",
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// US state full names.
pub const US_STATE_NAMES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California",
    "Colorado", "Connecticut", "Delaware", "Florida", "Georgia",
    "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland",
    "Massachusetts", "Michigan", "Minnesota", "Mississippi", "Missouri",
    "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina",
    "South Dakota", "Tennessee", "Texas", "Utah", "Vermont",
    "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

/// Street-type keywords that terminate a street address.
pub const STREET_TYPES: &[&str] = &[
    "Street", "St", "Avenue", "Ave", "Road", "Rd", "Boulevard", "Blvd",
    "Lane", "Ln", "Drive", "Dr", "Court", "Ct", "Place", "Pl", "Way",
];

/// Month names, January first; index + 1 is the month number.
pub const MONTH_NAMES: &[&str] = &[
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Season words recognized in date mentions.
pub const SEASON_WORDS: &[&str] = &["spring", "summer", "fall", "autumn", "winter"];

/// Per-event-type keyword regex bodies. Each is scanned independently over
/// the whole transcript, case-insensitively.
pub const EVENT_KEYWORDS: &[(memoir_types::EventType, &str)] = &[
    (
        memoir_types::EventType::Birth,
        r"\b(?:was born|born|birth|gave birth)\b",
    ),
    (
        memoir_types::EventType::Death,
        r"\b(?:passed away|died|death|funeral|buried)\b",
    ),
    (
        memoir_types::EventType::Marriage,
        r"\b(?:got married|married|marriage|wedding|engaged)\b",
    ),
    (
        memoir_types::EventType::Move,
        r"\b(?:moved to|moved|moving|relocated|settled in)\b",
    ),
    (
        memoir_types::EventType::Job,
        r"\b(?:worked at|worked for|worked as|first job|new job|got a job|hired|retired|promotion)\b",
    ),
    (
        memoir_types::EventType::Education,
        r"\b(?:graduated|graduation|went to school|high school|college|university|degree|studied)\b",
    ),
    (
        memoir_types::EventType::Military,
        r"\b(?:enlisted|drafted|served in|the army|the navy|air force|marines|military|deployed)\b",
    ),
];

/// Join a word table into a regex alternation, longest entry first so
/// prefix-sharing alternatives ("grandmother" vs "grandma") match greedily.
fn alternation(words: &[&str]) -> String {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.len()));
    sorted.join("|")
}

/// Regex fragment matching any relationship word.
pub fn relationship_alternation() -> String {
    alternation(RELATIONSHIP_WORDS)
}

/// Regex fragment matching any state abbreviation or full name.
pub fn state_alternation() -> String {
    let mut all: Vec<&str> = Vec::new();
    all.extend_from_slice(US_STATE_NAMES);
    all.extend_from_slice(US_STATE_ABBREVS);
    alternation(&all)
}

/// Regex fragment matching any street-type keyword.
pub fn street_type_alternation() -> String {
    alternation(STREET_TYPES)
}

/// Regex fragment matching any month name.
pub fn month_alternation() -> String {
    MONTH_NAMES.join("|")
}

/// Whether a capitalized token is on the stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
