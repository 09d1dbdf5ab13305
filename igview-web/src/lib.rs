//! igview-web library - HTTP surface of the export viewer
//!
//! One GET route per dataset view, rendered server-side. Every request
//! reads its dataset fresh from the export; nothing is cached.

use axum::{routing::get, Router};
use igview_common::geo::GeoResolver;
use igview_common::reader::DatasetReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod services;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only access to the export
    pub reader: Arc<DatasetReader>,
    /// Login location lookups
    pub geo: Arc<dyn GeoResolver>,
    /// Upper bound on one location lookup
    pub geo_timeout: Duration,
}

impl AppState {
    pub fn new(reader: DatasetReader, geo: Arc<dyn GeoResolver>, geo_timeout: Duration) -> Self {
        Self {
            reader: Arc::new(reader),
            geo,
            geo_timeout,
        }
    }
}

/// Build application router
///
/// Static assets are served from `static_dir` under `/static`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/ads_viewed", get(api::ads_viewed))
        .route("/posts_viewed", get(api::posts_viewed))
        .route("/suggested_accounts_viewed", get(api::suggested_accounts_viewed))
        .route("/videos_watched", get(api::videos_watched))
        .route(
            "/advertisers_using_your_activity_or_information",
            get(api::advertisers),
        )
        .route("/followers", get(api::followers))
        .route("/following", get(api::following))
        .route("/link_history", get(api::link_history))
        .route("/comments", get(api::comments))
        .route("/reel_comments", get(api::reel_comments))
        .route("/liked_posts", get(api::liked_posts))
        .route("/liked_comments", get(api::liked_comments))
        .route("/messages", get(api::conversation_list))
        .route("/messages/:username", get(api::conversation_thread))
        .route("/login_activity", get(api::login_activity))
        .merge(api::health_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
