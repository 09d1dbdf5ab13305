//! Direct message threads

use serde_json::Value;

use super::{MessageEntry, MessageThread};
use crate::fields::{extract_optional_field, extract_optional_timestamp_millis, optional_str, FieldPath};
use crate::text::decode_mis_encoded_text;
use crate::{Error, Result};

const PARTICIPANT: FieldPath = FieldPath::new(&["participants", "0", "name"]);
const SENDER: FieldPath = FieldPath::new(&["sender_name"]);
const CONTENT: FieldPath = FieldPath::new(&["content"]);
const SENT_AT: FieldPath = FieldPath::new(&["timestamp_ms"]);

/// Project one thread document. Message order is kept as exported.
///
/// Only message content is repaired with [`decode_mis_encoded_text`].
pub fn project_thread(document: &Value, thread: &str) -> Result<MessageThread> {
    let messages = document
        .get("messages")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::malformed(thread, "missing \"messages\" sequence"))?;

    Ok(MessageThread {
        participant: extract_optional_field(document, PARTICIPANT, "Unknown User"),
        messages: messages
            .iter()
            .map(|message| MessageEntry {
                sender: extract_optional_field(message, SENDER, "Unknown Sender"),
                content: optional_str(message, CONTENT)
                    .map(|c| decode_mis_encoded_text(c).into_owned()),
                at: extract_optional_timestamp_millis(message, SENT_AT),
            })
            .collect(),
    })
}
