//! Canonical view records
//!
//! These are the only shapes handed to the rendering layer. They are built
//! fresh per request and never hold raw JSON.

use serde::Serialize;

use crate::time::{Timespan, Timestamp};

/// Shown wherever an optional timestamp is absent
pub const UNKNOWN_TIME: &str = "Unknown Time";

/// Display an optional timestamp, falling back to [`UNKNOWN_TIME`]
pub fn time_label(at: Option<Timestamp>) -> String {
    at.map(|ts| ts.format_local())
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// Number of records attributed to one author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountedEntry {
    pub label: String,
    pub count: usize,
}

/// Author counts and timespan of an impressions dataset (ads, posts, videos)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpressionSummary {
    /// Ordered by first occurrence of each author
    pub counts: Vec<CountedEntry>,
    pub timespan: Timespan,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewedAccountEntry {
    pub username: String,
    pub viewed_at: Option<Timestamp>,
}

impl ViewedAccountEntry {
    pub fn viewed_at_label(&self) -> String {
        time_label(self.viewed_at)
    }
}

/// A follower or followed account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionEntry {
    pub link: String,
    pub username: String,
    pub at: Option<Timestamp>,
}

impl ConnectionEntry {
    pub fn at_label(&self) -> String {
        time_label(self.at)
    }
}

/// One page visit from the in-app browser history.
///
/// Start and end times are kept as the export wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkVisitEntry {
    pub page_url: String,
    pub page_title: String,
    pub started_at: String,
    pub ended_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentEntry {
    pub text: String,
    pub media_owner: String,
    pub at: Option<Timestamp>,
}

impl CommentEntry {
    pub fn at_label(&self) -> String {
        time_label(self.at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentSummary {
    pub total: usize,
    pub comments: Vec<CommentEntry>,
}

/// Every liked link sharing one title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeGroup {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeSummary {
    /// Number of liked records (not links)
    pub liked_count: usize,
    /// Ordered by first-seen title
    pub groups: Vec<LikeGroup>,
}

/// A login before its location is resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginEvent {
    pub device: String,
    /// `None` when the export has no address; no lookup is made then
    pub ip_address: Option<String>,
    pub at: Option<Timestamp>,
}

impl LoginEvent {
    pub fn ip_label(&self) -> &str {
        self.ip_address.as_deref().unwrap_or("Unknown IP Address")
    }

    pub fn at_label(&self) -> String {
        time_label(self.at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvertiserEntry {
    pub name: String,
    pub uses_data_file_audience: bool,
    pub uses_remarketing_audience: bool,
    pub uses_in_person_visit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageEntry {
    pub sender: String,
    pub content: Option<String>,
    pub at: Option<Timestamp>,
}

impl MessageEntry {
    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn at_label(&self) -> String {
        time_label(self.at)
    }
}

/// One conversation from the message inbox
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageThread {
    pub participant: String,
    pub messages: Vec<MessageEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_label_absent() {
        assert_eq!(time_label(None), UNKNOWN_TIME);
    }

    #[test]
    fn test_time_label_present_matches_local_format() {
        let ts = Timestamp::from_secs(1_700_000_000);
        assert_eq!(time_label(Some(ts)), ts.format_local());
    }

    #[test]
    fn test_login_ip_label_fallback() {
        let event = LoginEvent {
            device: "Laptop".to_string(),
            ip_address: None,
            at: None,
        };
        assert_eq!(event.ip_label(), "Unknown IP Address");
    }
}
