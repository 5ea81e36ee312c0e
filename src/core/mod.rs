pub mod dedupe;
pub mod errors;
pub mod sequence;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use dedupe::{
    dedupe, dedupe_by, dedupe_by_key, dedupe_in_place, has_duplicates, Unique, UniqueIter,
};
pub use errors::{Error, Result};
pub use sequence::{format_sequence, parse_sequence};

/// Result of deduplicating one integer sequence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DedupeReport {
    pub timestamp: DateTime<Utc>,
    pub original: Vec<i64>,
    pub unique: Vec<i64>,
    pub removed: usize,
}

impl DedupeReport {
    pub fn new(original: Vec<i64>) -> Self {
        let unique = dedupe(&original);
        let removed = original.len() - unique.len();
        Self {
            timestamp: Utc::now(),
            original,
            unique,
            removed,
        }
    }
}
