//! Login activity and link history

use axum::extract::State;
use igview_common::geo::locate_logins;
use igview_common::normalize::{project_link_visits, project_login_events};
use igview_common::Dataset;

use super::{load_records, render, PageResult};
use crate::views::{LinkHistoryTemplate, LoginActivityTemplate};
use crate::AppState;

/// GET /login_activity
///
/// Every login with an address triggers one geolocation lookup; the page
/// is rendered once all lookups have settled.
pub async fn login_activity(State(state): State<AppState>) -> PageResult {
    let events = load_records(&state, Dataset::LoginActivity, project_login_events).await?;
    tracing::debug!(logins = events.len(), "Resolving login locations");

    let logins = locate_logins(events, state.geo.as_ref(), state.geo_timeout).await;
    render(LoginActivityTemplate { logins })
}

/// GET /link_history
pub async fn link_history(State(state): State<AppState>) -> PageResult {
    let visits = load_records(&state, Dataset::LinkHistory, project_link_visits).await?;
    render(LinkHistoryTemplate { visits })
}
