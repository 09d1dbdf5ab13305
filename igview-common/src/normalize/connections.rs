//! Followers and following

use serde_json::Value;

use super::ConnectionEntry;
use crate::fields::{extract_optional_field, extract_optional_timestamp, FieldPath};

const HREF: FieldPath = FieldPath::new(&["string_list_data", "0", "href"]);
const USERNAME: FieldPath = FieldPath::new(&["string_list_data", "0", "value"]);
const TIMESTAMP: FieldPath = FieldPath::new(&["string_list_data", "0", "timestamp"]);

/// One entry per follower or followed account.
///
/// Only the first `string_list_data` element of a record is used.
pub fn project_connections(records: &[Value]) -> Vec<ConnectionEntry> {
    records
        .iter()
        .map(|record| ConnectionEntry {
            link: extract_optional_field(record, HREF, "Link n/a"),
            username: extract_optional_field(record, USERNAME, "User n/a"),
            at: extract_optional_timestamp(record, TIMESTAMP),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_connections() {
        let records = vec![
            json!({"string_list_data": [
                {"href": "https://www.instagram.com/friend", "value": "friend", "timestamp": 1_650_000_000},
                {"href": "ignored", "value": "ignored", "timestamp": 1}
            ]}),
            json!({"string_list_data": [{"timestamp": 0}]}),
            json!({"string_list_data": []}),
        ];
        let entries = project_connections(&records);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].link, "https://www.instagram.com/friend");
        assert_eq!(entries[0].username, "friend");
        assert_eq!(entries[0].at.map(|t| t.as_secs()), Some(1_650_000_000));

        assert_eq!(entries[1].link, "Link n/a");
        assert_eq!(entries[1].username, "User n/a");
        assert_eq!(entries[1].at, None);

        assert_eq!(entries[2].username, "User n/a");
    }
}
