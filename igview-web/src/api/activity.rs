//! Comments and likes

use axum::extract::State;
use igview_common::normalize::{summarize_comments, summarize_likes};
use igview_common::Dataset;

use super::{load_records, render, PageResult};
use crate::views::{CommentsTemplate, LikesTemplate};
use crate::AppState;

async fn comments_page(state: &AppState, dataset: Dataset) -> PageResult {
    let summary = load_records(state, dataset, summarize_comments).await?;
    render(CommentsTemplate {
        title: dataset.label(),
        summary,
    })
}

async fn likes_page(state: &AppState, dataset: Dataset) -> PageResult {
    let summary = load_records(state, dataset, summarize_likes).await?;
    render(LikesTemplate {
        title: dataset.label(),
        summary,
    })
}

/// GET /comments
pub async fn comments(State(state): State<AppState>) -> PageResult {
    comments_page(&state, Dataset::PostComments).await
}

/// GET /reel_comments
pub async fn reel_comments(State(state): State<AppState>) -> PageResult {
    comments_page(&state, Dataset::ReelComments).await
}

/// GET /liked_posts
pub async fn liked_posts(State(state): State<AppState>) -> PageResult {
    likes_page(&state, Dataset::LikedPosts).await
}

/// GET /liked_comments
pub async fn liked_comments(State(state): State<AppState>) -> PageResult {
    likes_page(&state, Dataset::LikedComments).await
}
