//! Offline entity extraction and timeline construction for oral-history
//! transcripts.
//!
//! The pipeline is pure, synchronous text processing: transcript text goes
//! in, structured people/places/dates/events come out, per-transcript
//! results merge into one corpus result, and the corpus becomes a
//! chronologically ordered timeline. No network, no model inference, no
//! shared mutable state; failure degrades to empty results rather than
//! errors.

pub mod chapters;
pub mod dates;
pub mod events;
pub mod extractor;
pub mod journal;
pub mod merge;
pub mod people;
pub mod places;
pub mod scanner;
pub mod snippet;
pub mod timeline;
pub mod wordlists;

pub use extractor::{EntityExtractor, Transcript};
pub use merge::merge_results;
pub use timeline::{build_timeline, journal_sort_key, timeline_sort_key};

pub use memoir_types as types;
