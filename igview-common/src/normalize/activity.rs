//! Comments and likes

use serde_json::Value;
use std::collections::HashMap;

use super::{CommentEntry, CommentSummary, LikeGroup, LikeSummary};
use crate::fields::{extract_optional_field, extract_optional_timestamp, optional_str, FieldPath};
use crate::text::decode_mis_encoded_text;

const COMMENT_TEXT: FieldPath = FieldPath::new(&["string_map_data", "Comment", "value"]);
const MEDIA_OWNER: FieldPath = FieldPath::new(&["string_map_data", "Media Owner", "value"]);
const COMMENT_TIME: FieldPath = FieldPath::new(&["string_map_data", "Time", "timestamp"]);

const TITLE: FieldPath = FieldPath::new(&["title"]);
const LINK_HREF: FieldPath = FieldPath::new(&["href"]);
const UNTITLED: &str = "Untitled";

/// One entry per comment; text and owner are repaired with
/// [`decode_mis_encoded_text`]
pub fn project_comments(records: &[Value]) -> Vec<CommentEntry> {
    records
        .iter()
        .map(|record| {
            let text = extract_optional_field(record, COMMENT_TEXT, "No Comment");
            let owner = extract_optional_field(record, MEDIA_OWNER, "Unknown Owner");
            CommentEntry {
                text: decode_mis_encoded_text(&text).into_owned(),
                media_owner: decode_mis_encoded_text(&owner).into_owned(),
                at: extract_optional_timestamp(record, COMMENT_TIME),
            }
        })
        .collect()
}

pub fn summarize_comments(records: &[Value]) -> CommentSummary {
    let comments = project_comments(records);
    CommentSummary {
        total: comments.len(),
        comments,
    }
}

/// Group liked links by title.
///
/// Titles keep first-seen order; each group's links are the concatenation,
/// in source order, of every matching record's `string_list_data[*].href`.
/// Entries without an `href` are skipped. A title whose records carry no
/// links still gets an (empty) group.
pub fn group_by_title(records: &[Value]) -> Vec<LikeGroup> {
    let mut groups: Vec<LikeGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let title = extract_optional_field(record, TITLE, UNTITLED);
        let links = record
            .get("string_list_data")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|item| optional_str(item, LINK_HREF))
            .map(str::to_string);

        let i = match index.get(&title) {
            Some(&i) => i,
            None => {
                index.insert(title.clone(), groups.len());
                groups.push(LikeGroup {
                    title,
                    links: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[i].links.extend(links);
    }

    groups
}

/// Liked record count and link groups of a likes dataset
pub fn summarize_likes(records: &[Value]) -> LikeSummary {
    LikeSummary {
        liked_count: records.len(),
        groups: group_by_title(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn like(title: Option<&str>, hrefs: &[&str]) -> Value {
        let list: Vec<Value> = hrefs.iter().map(|h| json!({"href": h, "timestamp": 1})).collect();
        match title {
            Some(t) => json!({"title": t, "string_list_data": list}),
            None => json!({"string_list_data": list}),
        }
    }

    #[test]
    fn test_group_by_title_order_and_concatenation() {
        let records = vec![
            like(Some("b"), &["b1"]),
            like(Some("a"), &["a1", "a2"]),
            like(Some("b"), &["b2", "b3"]),
        ];
        let groups = group_by_title(&records);

        let titles: Vec<_> = groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
        assert_eq!(groups[0].links, vec!["b1", "b2", "b3"]);
        assert_eq!(groups[1].links, vec!["a1", "a2"]);
    }

    #[test]
    fn test_group_by_title_preserves_link_multiset() {
        let records = vec![
            like(None, &["x", "x"]),
            like(Some(""), &["y"]),
            like(Some("t"), &["x"]),
        ];
        let groups = group_by_title(&records);

        assert_eq!(groups[0].title, UNTITLED);
        assert_eq!(groups[0].links, vec!["x", "x", "y"]);
        let total: usize = groups.iter().map(|g| g.links.len()).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_group_by_title_skips_missing_href() {
        let records = vec![json!({"title": "t", "string_list_data": [{"timestamp": 1}, {"href": "ok"}]})];
        let groups = group_by_title(&records);
        assert_eq!(groups[0].links, vec!["ok"]);
    }

    #[test]
    fn test_summarize_likes_counts_records() {
        let records = vec![like(Some("a"), &["1", "2", "3"]), like(Some("a"), &[])];
        let summary = summarize_likes(&records);
        assert_eq!(summary.liked_count, 2);
        assert_eq!(summary.groups.len(), 1);
        assert_eq!(summary.groups[0].links.len(), 3);
    }

    #[test]
    fn test_project_comments_decodes_text() {
        // "café" whose UTF-8 bytes were escaped one code unit per byte
        let records = vec![
            json!({"string_map_data": {
                "Comment": {"value": "caf\u{00c3}\u{00a9}"},
                "Media Owner": {"value": "owner"},
                "Time": {"timestamp": 1_700_000_000}
            }}),
            json!({"string_map_data": {"Time": {}}}),
        ];
        let summary = summarize_comments(&records);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.comments[0].text, "café");
        assert_eq!(summary.comments[0].media_owner, "owner");
        assert_eq!(summary.comments[1].text, "No Comment");
        assert_eq!(summary.comments[1].media_owner, "Unknown Owner");
        assert_eq!(summary.comments[1].at, None);
    }
}
