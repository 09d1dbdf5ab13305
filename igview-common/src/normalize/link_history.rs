//! In-app browser link history
//!
//! Each record stores its fields as a `label_values` list of name/value
//! pairs instead of an object.

use serde_json::Value;

use super::LinkVisitEntry;
use crate::fields::find_by_field_name;

const PAIRS_KEY: &str = "label_values";
const NAME_KEY: &str = "ent_field_name";

pub fn project_link_visits(records: &[Value]) -> Vec<LinkVisitEntry> {
    records
        .iter()
        .map(|record| {
            let pairs = record
                .get(PAIRS_KEY)
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            LinkVisitEntry {
                page_url: find_by_field_name(pairs, NAME_KEY, "PageURL", "N/A"),
                page_title: find_by_field_name(pairs, NAME_KEY, "PageTitle", "N/A"),
                started_at: find_by_field_name(pairs, NAME_KEY, "StartTime", "Unknown Time"),
                ended_at: find_by_field_name(pairs, NAME_KEY, "EndTime", "Unknown Time"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_link_visits() {
        let records = vec![
            json!({"label_values": [
                {"ent_field_name": "PageURL", "value": "https://example.com"},
                {"ent_field_name": "PageTitle", "value": "Example"},
                {"ent_field_name": "StartTime", "value": "2024-01-02 10:00"},
                {"ent_field_name": "PageURL", "value": "https://second.example.com"}
            ]}),
            json!({"label_values": []}),
            json!({}),
        ];
        let visits = project_link_visits(&records);

        assert_eq!(visits[0].page_url, "https://example.com");
        assert_eq!(visits[0].page_title, "Example");
        assert_eq!(visits[0].started_at, "2024-01-02 10:00");
        assert_eq!(visits[0].ended_at, "Unknown Time");

        for visit in &visits[1..] {
            assert_eq!(visit.page_url, "N/A");
            assert_eq!(visit.page_title, "N/A");
            assert_eq!(visit.started_at, "Unknown Time");
        }
    }
}
