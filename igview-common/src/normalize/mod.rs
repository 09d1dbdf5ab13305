//! Export normalizer
//!
//! Pure functions from one parsed dataset document to the canonical view
//! records of that dataset. Missing fields resolve to fallback values (see
//! [`crate::fields`]); only structural problems are errors:
//! - a document without its record sequence is `MalformedJson`
//! - an aggregate over zero records is `EmptyDataset`
//!
//! Output preserves source order unless an operation states otherwise.

use serde_json::Value;
use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::fields::{extract_optional_field, extract_optional_timestamp, FieldPath};
use crate::time::Timespan;
use crate::{Error, Result};

mod activity;
mod connections;
mod impressions;
mod link_history;
mod login;
mod messages;
mod records;

pub use activity::{group_by_title, project_comments, summarize_comments, summarize_likes};
pub use connections::project_connections;
pub use impressions::{
    project_advertisers, project_viewed_accounts, summarize_impressions, IMPRESSION_AUTHOR,
    IMPRESSION_TIME,
};
pub use link_history::project_link_visits;
pub use login::project_login_events;
pub use messages::project_thread;
pub use records::*;

/// Label for records whose author field is absent
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// The record sequence of a dataset document.
///
/// Bare-sequence datasets must be a JSON array; the others must carry an
/// array under their records key.
pub fn records_of(document: &Value, dataset: Dataset) -> Result<&[Value]> {
    let sequence = match dataset.records_key() {
        None => document,
        Some(key) => document.get(key).ok_or_else(|| {
            Error::malformed(dataset.label(), format!("missing \"{key}\" sequence"))
        })?,
    };

    sequence
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::malformed(dataset.label(), "record sequence is not an array"))
}

/// Count records per author, in order of first occurrence of each author.
///
/// Authors are compared exactly; absent authors count as [`UNKNOWN_AUTHOR`].
/// The counts sum to `records.len()`.
pub fn count_by_author(records: &[Value], author_path: FieldPath) -> Vec<CountedEntry> {
    let mut counts: Vec<CountedEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let label = extract_optional_field(record, author_path, UNKNOWN_AUTHOR);
        match index.get(&label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push(CountedEntry { label, count: 1 });
            }
        }
    }

    counts
}

/// Earliest and latest timestamp found at `time_path`.
///
/// Records without a usable timestamp are skipped. Fails with
/// `EmptyDataset` when no record carries one, including when `records`
/// is empty.
pub fn compute_timespan(records: &[Value], time_path: FieldPath, label: &str) -> Result<Timespan> {
    Timespan::from_timestamps(
        records
            .iter()
            .filter_map(|record| extract_optional_timestamp(record, time_path)),
    )
    .ok_or_else(|| Error::EmptyDataset(label.to_string()))
}
