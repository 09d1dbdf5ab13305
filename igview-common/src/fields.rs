//! Optional-field access over untyped export records
//!
//! Every transform reads fields through the helpers here, so they all share
//! one fallback policy: a field is absent when any link of its path is
//! missing, when the value is `null` or of the wrong type, or when it is an
//! empty string. Timestamps of `0` are also absent.

use serde_json::Value;
use std::fmt;

use crate::time::Timestamp;

/// A path of object keys (or array indices, written as digits) into a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static [&'static str]);

impl FieldPath {
    pub const fn new(segments: &'static [&'static str]) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &'static [&'static str] {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Walk `path` from `record`, returning the value at its end if every link exists
pub fn value_at<'a>(record: &'a Value, path: FieldPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(record, |current, segment| match current {
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => current.get(*segment),
        })
}

/// Read a string field, or `None` when absent
pub fn optional_str<'a>(record: &'a Value, path: FieldPath) -> Option<&'a str> {
    value_at(record, path)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Read a string field, substituting `fallback` when absent
pub fn extract_optional_field(record: &Value, path: FieldPath, fallback: &str) -> String {
    optional_str(record, path).unwrap_or(fallback).to_string()
}

/// Read a Unix-seconds timestamp, or `None` when absent or zero
pub fn extract_optional_timestamp(record: &Value, path: FieldPath) -> Option<Timestamp> {
    raw_number(record, path).map(Timestamp::from_secs)
}

/// Read a Unix-milliseconds timestamp, or `None` when absent or zero
pub fn extract_optional_timestamp_millis(record: &Value, path: FieldPath) -> Option<Timestamp> {
    raw_number(record, path).map(Timestamp::from_millis)
}

/// Read a boolean flag; anything but `true` is `false`
pub fn extract_flag(record: &Value, path: FieldPath) -> bool {
    value_at(record, path)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn raw_number(record: &Value, path: FieldPath) -> Option<i64> {
    let value = value_at(record, path)?;
    let n = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))?;
    (n != 0).then_some(n)
}

/// Find the first `{ <key>: name, value }` pair in a sequence and return its value.
///
/// Some datasets store fields as a list of name/value pairs instead of an
/// object. Returns `fallback` when no pair carries `name` or when the first
/// matching pair has no usable value.
pub fn find_by_field_name(pairs: &[Value], key: &str, name: &str, fallback: &str) -> String {
    pairs
        .iter()
        .find(|pair| pair.get(key).and_then(Value::as_str) == Some(name))
        .and_then(|pair| pair.get("value"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const AUTHOR: FieldPath = FieldPath::new(&["string_map_data", "Author", "value"]);
    const TIME: FieldPath = FieldPath::new(&["string_map_data", "Time", "timestamp"]);
    const FIRST_HREF: FieldPath = FieldPath::new(&["string_list_data", "0", "href"]);

    #[test]
    fn test_value_at_nested() {
        let record = json!({"string_map_data": {"Author": {"value": "someone"}}});
        assert_eq!(value_at(&record, AUTHOR), Some(&json!("someone")));
    }

    #[test]
    fn test_value_at_array_index() {
        let record = json!({"string_list_data": [{"href": "https://a"}, {"href": "https://b"}]});
        assert_eq!(value_at(&record, FIRST_HREF), Some(&json!("https://a")));
    }

    #[test]
    fn test_value_at_missing_link() {
        let record = json!({"string_map_data": {}});
        assert_eq!(value_at(&record, AUTHOR), None);
        assert_eq!(value_at(&json!({"string_list_data": []}), FIRST_HREF), None);
        assert_eq!(value_at(&json!(null), AUTHOR), None);
    }

    #[test]
    fn test_extract_optional_field_fallbacks() {
        assert_eq!(extract_optional_field(&json!({}), AUTHOR, "Unknown"), "Unknown");
        let null_value = json!({"string_map_data": {"Author": {"value": null}}});
        assert_eq!(extract_optional_field(&null_value, AUTHOR, "Unknown"), "Unknown");
        let empty = json!({"string_map_data": {"Author": {"value": ""}}});
        assert_eq!(extract_optional_field(&empty, AUTHOR, "Unknown"), "Unknown");
        let number = json!({"string_map_data": {"Author": {"value": 7}}});
        assert_eq!(extract_optional_field(&number, AUTHOR, "Unknown"), "Unknown");
    }

    #[test]
    fn test_extract_optional_field_present() {
        let record = json!({"string_map_data": {"Author": {"value": " Spaced "}}});
        // No trimming or case folding
        assert_eq!(extract_optional_field(&record, AUTHOR, "Unknown"), " Spaced ");
    }

    #[test]
    fn test_timestamp_integer_and_float() {
        let int = json!({"string_map_data": {"Time": {"timestamp": 1_700_000_000}}});
        assert_eq!(extract_optional_timestamp(&int, TIME), Some(Timestamp::from_secs(1_700_000_000)));
        let float = json!({"string_map_data": {"Time": {"timestamp": 1_700_000_000.7}}});
        assert_eq!(extract_optional_timestamp(&float, TIME), Some(Timestamp::from_secs(1_700_000_000)));
    }

    #[test]
    fn test_timestamp_zero_or_missing_is_absent() {
        let zero = json!({"string_map_data": {"Time": {"timestamp": 0}}});
        assert_eq!(extract_optional_timestamp(&zero, TIME), None);
        assert_eq!(extract_optional_timestamp(&json!({}), TIME), None);
        let text = json!({"string_map_data": {"Time": {"timestamp": "soon"}}});
        assert_eq!(extract_optional_timestamp(&text, TIME), None);
    }

    #[test]
    fn test_flag_defaults_false() {
        let path = FieldPath::new(&["has_in_person_store_visit"]);
        assert!(extract_flag(&json!({"has_in_person_store_visit": true}), path));
        assert!(!extract_flag(&json!({"has_in_person_store_visit": "yes"}), path));
        assert!(!extract_flag(&json!({}), path));
    }

    #[test]
    fn test_find_by_field_name_first_match_wins() {
        let pairs = vec![
            json!({"ent_field_name": "PageURL", "value": "https://first"}),
            json!({"ent_field_name": "PageURL", "value": "https://second"}),
        ];
        assert_eq!(find_by_field_name(&pairs, "ent_field_name", "PageURL", "N/A"), "https://first");
    }

    #[test]
    fn test_find_by_field_name_absent_uses_fallback() {
        let pairs = vec![json!({"ent_field_name": "PageTitle", "value": "Title"})];
        assert_eq!(find_by_field_name(&pairs, "ent_field_name", "PageURL", "N/A"), "N/A");
        assert_eq!(find_by_field_name(&[], "ent_field_name", "PageURL", "N/A"), "N/A");
    }

    #[test]
    fn test_field_path_display() {
        assert_eq!(AUTHOR.to_string(), "string_map_data.Author.value");
    }
}
