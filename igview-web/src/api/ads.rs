//! Ads and topics views

use axum::extract::State;
use igview_common::normalize::{
    project_advertisers, project_viewed_accounts, summarize_impressions, IMPRESSION_AUTHOR,
    IMPRESSION_TIME,
};
use igview_common::Dataset;

use super::{load_records, render, PageResult};
use crate::views::{AdvertisersTemplate, ImpressionsTemplate, SuggestedAccountsTemplate};
use crate::AppState;

async fn impressions_page(state: &AppState, dataset: Dataset) -> PageResult {
    let summary = load_records(state, dataset, |records| {
        summarize_impressions(records, IMPRESSION_AUTHOR, IMPRESSION_TIME, dataset.label())
    })
    .await??;

    tracing::debug!(dataset = %dataset, total = summary.total, authors = summary.counts.len(), "Summarized impressions");

    render(ImpressionsTemplate {
        title: dataset.label(),
        summary,
    })
}

/// GET /ads_viewed
pub async fn ads_viewed(State(state): State<AppState>) -> PageResult {
    impressions_page(&state, Dataset::AdsViewed).await
}

/// GET /posts_viewed
pub async fn posts_viewed(State(state): State<AppState>) -> PageResult {
    impressions_page(&state, Dataset::PostsViewed).await
}

/// GET /videos_watched
pub async fn videos_watched(State(state): State<AppState>) -> PageResult {
    impressions_page(&state, Dataset::VideosWatched).await
}

/// GET /suggested_accounts_viewed
pub async fn suggested_accounts_viewed(State(state): State<AppState>) -> PageResult {
    let accounts =
        load_records(&state, Dataset::SuggestedAccountsViewed, project_viewed_accounts).await?;
    render(SuggestedAccountsTemplate { accounts })
}

/// GET /advertisers_using_your_activity_or_information
pub async fn advertisers(State(state): State<AppState>) -> PageResult {
    let advertisers = load_records(&state, Dataset::Advertisers, project_advertisers).await?;
    render(AdvertisersTemplate { advertisers })
}
