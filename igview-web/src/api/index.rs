//! Index page listing every view

use super::{render, PageResult};
use crate::views::{IndexTemplate, ViewLink, ViewSection};

fn link(path: &'static str, label: &'static str) -> ViewLink {
    ViewLink { path, label }
}

/// GET /
pub async fn index() -> PageResult {
    let sections = vec![
        ViewSection {
            heading: "Ads and Topics",
            links: vec![
                link("/ads_viewed", "Ads Viewed"),
                link("/posts_viewed", "Posts Viewed"),
                link("/suggested_accounts_viewed", "Suggested Accounts Viewed"),
                link("/videos_watched", "Videos Watched"),
                link(
                    "/advertisers_using_your_activity_or_information",
                    "Advertisers Using Your Activity or Information",
                ),
            ],
        },
        ViewSection {
            heading: "Connections",
            links: vec![
                link("/followers", "Followers"),
                link("/following", "Following"),
            ],
        },
        ViewSection {
            heading: "Your Activity",
            links: vec![
                link("/comments", "Comments"),
                link("/reel_comments", "Reel Comments"),
                link("/liked_posts", "Liked Posts"),
                link("/liked_comments", "Liked Comments"),
                link("/messages", "Messages"),
            ],
        },
        ViewSection {
            heading: "Security and Browsing",
            links: vec![
                link("/login_activity", "Login Activity"),
                link("/link_history", "Link History"),
            ],
        },
    ];

    render(IndexTemplate { sections })
}
