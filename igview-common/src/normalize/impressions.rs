//! Ads, posts and videos seen, suggested accounts, advertisers

use serde_json::Value;

use super::{compute_timespan, count_by_author, AdvertiserEntry, ImpressionSummary, ViewedAccountEntry};
use crate::fields::{extract_flag, extract_optional_field, extract_optional_timestamp, FieldPath};
use crate::Result;

/// Author of one impression record
pub const IMPRESSION_AUTHOR: FieldPath = FieldPath::new(&["string_map_data", "Author", "value"]);

/// Time of one impression record, in Unix seconds
pub const IMPRESSION_TIME: FieldPath = FieldPath::new(&["string_map_data", "Time", "timestamp"]);

const VIEWED_USERNAME: FieldPath = FieldPath::new(&["string_map_data", "Username", "value"]);

const ADVERTISER_NAME: FieldPath = FieldPath::new(&["advertiser_name"]);
const HAS_DATA_FILE_AUDIENCE: FieldPath = FieldPath::new(&["has_data_file_custom_audience"]);
const HAS_REMARKETING_AUDIENCE: FieldPath = FieldPath::new(&["has_remarketing_custom_audience"]);
const HAS_IN_PERSON_VISIT: FieldPath = FieldPath::new(&["has_in_person_store_visit"]);

/// Per-author counts and overall timespan of an impressions dataset.
///
/// `label` names the dataset in the `EmptyDataset` error raised when no
/// record carries a timestamp.
pub fn summarize_impressions(
    records: &[Value],
    author_path: FieldPath,
    time_path: FieldPath,
    label: &str,
) -> Result<ImpressionSummary> {
    let timespan = compute_timespan(records, time_path, label)?;
    Ok(ImpressionSummary {
        counts: count_by_author(records, author_path),
        timespan,
        total: records.len(),
    })
}

pub fn project_viewed_accounts(records: &[Value]) -> Vec<ViewedAccountEntry> {
    records
        .iter()
        .map(|record| ViewedAccountEntry {
            username: extract_optional_field(record, VIEWED_USERNAME, "Unknown Username"),
            viewed_at: extract_optional_timestamp(record, IMPRESSION_TIME),
        })
        .collect()
}

pub fn project_advertisers(records: &[Value]) -> Vec<AdvertiserEntry> {
    records
        .iter()
        .map(|record| AdvertiserEntry {
            name: extract_optional_field(record, ADVERTISER_NAME, "Unknown Advertiser"),
            uses_data_file_audience: extract_flag(record, HAS_DATA_FILE_AUDIENCE),
            uses_remarketing_audience: extract_flag(record, HAS_REMARKETING_AUDIENCE),
            uses_in_person_visit: extract_flag(record, HAS_IN_PERSON_VISIT),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    fn ad(author: Option<&str>, ts: i64) -> Value {
        match author {
            Some(a) => json!({"string_map_data": {"Author": {"value": a}, "Time": {"timestamp": ts}}}),
            None => json!({"string_map_data": {"Time": {"timestamp": ts}}}),
        }
    }

    #[test]
    fn test_summarize_impressions() {
        let records = vec![
            ad(Some("brand_a"), 1_700_000_300),
            ad(None, 1_700_000_100),
            ad(Some("brand_a"), 1_700_000_200),
        ];
        let summary =
            summarize_impressions(&records, IMPRESSION_AUTHOR, IMPRESSION_TIME, "Ads Viewed").unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.counts.len(), 2);
        assert_eq!(summary.counts[0].label, "brand_a");
        assert_eq!(summary.counts[0].count, 2);
        assert_eq!(summary.counts[1].label, "Unknown");
        assert_eq!(summary.timespan.start.as_secs(), 1_700_000_100);
        assert_eq!(summary.timespan.end.as_secs(), 1_700_000_300);
    }

    #[test]
    fn test_summarize_impressions_empty() {
        let err = summarize_impressions(&[], IMPRESSION_AUTHOR, IMPRESSION_TIME, "Watched Videos")
            .unwrap_err();
        assert!(matches!(err, Error::EmptyDataset(ref l) if l == "Watched Videos"));
    }

    #[test]
    fn test_viewed_accounts_fallbacks() {
        let records = vec![
            json!({"string_map_data": {"Username": {"value": "someone"}, "Time": {"timestamp": 1_600_000_000}}}),
            json!({"string_map_data": {}}),
        ];
        let entries = project_viewed_accounts(&records);
        assert_eq!(entries[0].username, "someone");
        assert_eq!(entries[0].viewed_at.map(|t| t.as_secs()), Some(1_600_000_000));
        assert_eq!(entries[1].username, "Unknown Username");
        assert_eq!(entries[1].viewed_at_label(), "Unknown Time");
    }

    #[test]
    fn test_advertisers_flags_default_false() {
        let records = vec![
            json!({
                "advertiser_name": "Shop",
                "has_data_file_custom_audience": true,
                "has_remarketing_custom_audience": false,
                "has_in_person_store_visit": "yes"
            }),
            json!({}),
        ];
        let entries = project_advertisers(&records);
        assert_eq!(
            entries[0],
            AdvertiserEntry {
                name: "Shop".to_string(),
                uses_data_file_audience: true,
                uses_remarketing_audience: false,
                uses_in_person_visit: false,
            }
        );
        assert_eq!(entries[1].name, "Unknown Advertiser");
        assert!(!entries[1].uses_data_file_audience);
    }
}
