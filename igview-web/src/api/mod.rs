//! HTTP handlers for igview-web

pub mod activity;
pub mod ads;
pub mod connections;
pub mod health;
pub mod index;
pub mod messages;
pub mod security;

use askama::Template;
use axum::response::Html;
use igview_common::normalize::records_of;
use igview_common::Dataset;
use serde_json::Value;

use crate::error::ApiError;
use crate::AppState;

pub use activity::{comments, liked_comments, liked_posts, reel_comments};
pub use ads::{
    ads_viewed, advertisers, posts_viewed, suggested_accounts_viewed, videos_watched,
};
pub use connections::{followers, following};
pub use health::health_routes;
pub use index::index;
pub use messages::{conversation_list, conversation_thread};
pub use security::{link_history, login_activity};

/// Page handler result
pub type PageResult = Result<Html<String>, ApiError>;

pub(crate) fn render(template: impl Template) -> PageResult {
    Ok(Html(template.render()?))
}

/// Read a dataset document fresh from the export
pub(crate) async fn load(state: &AppState, dataset: Dataset) -> Result<Value, ApiError> {
    Ok(state.reader.read(dataset).await?)
}

/// Read a dataset and hand its record sequence to `project`
pub(crate) async fn load_records<T>(
    state: &AppState,
    dataset: Dataset,
    project: impl FnOnce(&[Value]) -> T,
) -> Result<T, ApiError> {
    let document = load(state, dataset).await?;
    let records = records_of(&document, dataset)?;
    Ok(project(records))
}
