//! Login activity

use serde_json::Value;

use super::LoginEvent;
use crate::fields::{extract_optional_field, extract_optional_timestamp, optional_str, FieldPath};

const USER_AGENT: FieldPath = FieldPath::new(&["string_map_data", "User Agent", "value"]);
const IP_ADDRESS: FieldPath = FieldPath::new(&["string_map_data", "IP Address", "value"]);
const LOGIN_TIME: FieldPath = FieldPath::new(&["string_map_data", "Time", "timestamp"]);

/// Login events in source order, with locations left unresolved
pub fn project_login_events(records: &[Value]) -> Vec<LoginEvent> {
    records
        .iter()
        .map(|record| LoginEvent {
            device: extract_optional_field(record, USER_AGENT, "Unknown Device"),
            ip_address: optional_str(record, IP_ADDRESS).map(str::to_string),
            at: extract_optional_timestamp(record, LOGIN_TIME),
        })
        .collect()
}
