//! Followers and following

use axum::extract::State;
use igview_common::normalize::project_connections;
use igview_common::Dataset;

use super::{load_records, render, PageResult};
use crate::views::ConnectionsTemplate;
use crate::AppState;

async fn connections_page(state: &AppState, dataset: Dataset) -> PageResult {
    let connections = load_records(state, dataset, project_connections).await?;
    render(ConnectionsTemplate {
        title: dataset.label(),
        connections,
    })
}

/// GET /followers
pub async fn followers(State(state): State<AppState>) -> PageResult {
    connections_page(&state, Dataset::Followers).await
}

/// GET /following
pub async fn following(State(state): State<AppState>) -> PageResult {
    connections_page(&state, Dataset::Following).await
}
