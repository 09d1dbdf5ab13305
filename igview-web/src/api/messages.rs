//! Direct message inbox

use axum::extract::{Path, State};
use igview_common::normalize::project_thread;

use super::{render, PageResult};
use crate::error::ApiError;
use crate::views::{ConversationsTemplate, ThreadTemplate};
use crate::AppState;

/// GET /messages
pub async fn conversation_list(State(state): State<AppState>) -> PageResult {
    let users = state.reader.list_conversations().await?;
    render(ConversationsTemplate {
        count: users.len(),
        users,
    })
}

/// GET /messages/:username
///
/// `username` is the conversation folder name as listed on /messages.
pub async fn conversation_thread(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> PageResult {
    let document = state
        .reader
        .read_thread(&username)
        .await
        .map_err(|e| match e {
            igview_common::Error::NotFound(_) => ApiError::ThreadNotFound(username.clone()),
            other => other.into(),
        })?;

    let thread = project_thread(&document, &username)?;
    tracing::debug!(thread = %username, messages = thread.messages.len(), "Loaded conversation");

    render(ThreadTemplate { thread })
}
