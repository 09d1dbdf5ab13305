//! Catalogue of the datasets a personal data export contains
//!
//! Each dataset kind knows which export section it lives in, which file
//! name(s) it may be stored under, and where its record sequence sits
//! inside the document.

use std::fmt;

/// Sub-directories of the export that hold datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    AdsAndTopics,
    Advertisers,
    Connections,
    LinkHistory,
    Comments,
    Likes,
    Inbox,
    Login,
}

/// One logical category of exported JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    AdsViewed,
    PostsViewed,
    SuggestedAccountsViewed,
    VideosWatched,
    Advertisers,
    Followers,
    Following,
    LinkHistory,
    PostComments,
    ReelComments,
    LikedPosts,
    LikedComments,
    LoginActivity,
}

impl Dataset {
    pub const ALL: [Dataset; 13] = [
        Dataset::AdsViewed,
        Dataset::PostsViewed,
        Dataset::SuggestedAccountsViewed,
        Dataset::VideosWatched,
        Dataset::Followers,
        Dataset::Following,
        Dataset::LinkHistory,
        Dataset::PostComments,
        Dataset::ReelComments,
        Dataset::LikedPosts,
        Dataset::LikedComments,
        Dataset::LoginActivity,
        Dataset::Advertisers,
    ];

    /// Human-readable name used in page titles and error messages
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::AdsViewed => "Ads Viewed",
            Dataset::PostsViewed => "Posts Viewed",
            Dataset::SuggestedAccountsViewed => "Suggested Profiles Viewed",
            Dataset::VideosWatched => "Watched Videos",
            Dataset::Advertisers => "Advertisers",
            Dataset::Followers => "Followers",
            Dataset::Following => "Following",
            Dataset::LinkHistory => "Link History",
            Dataset::PostComments => "Comments",
            Dataset::ReelComments => "Reel Comments",
            Dataset::LikedPosts => "Liked Posts",
            Dataset::LikedComments => "Liked Comments",
            Dataset::LoginActivity => "Login Activity",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Dataset::AdsViewed
            | Dataset::PostsViewed
            | Dataset::SuggestedAccountsViewed
            | Dataset::VideosWatched => Section::AdsAndTopics,
            Dataset::Advertisers => Section::Advertisers,
            Dataset::Followers | Dataset::Following => Section::Connections,
            Dataset::LinkHistory => Section::LinkHistory,
            Dataset::PostComments | Dataset::ReelComments => Section::Comments,
            Dataset::LikedPosts | Dataset::LikedComments => Section::Likes,
            Dataset::LoginActivity => Section::Login,
        }
    }

    /// Candidate file names, in order of preference
    pub fn file_names(&self) -> &'static [&'static str] {
        match self {
            Dataset::AdsViewed => &["ads_viewed.json"],
            Dataset::PostsViewed => &["posts_viewed.json"],
            Dataset::SuggestedAccountsViewed => {
                &["suggested_profiles_viewed.json", "suggested_accounts_viewed.json"]
            }
            Dataset::VideosWatched => &["videos_watched.json"],
            Dataset::Advertisers => &["advertisers_using_your_activity_or_information.json"],
            Dataset::Followers => &["followers_1.json"],
            Dataset::Following => &["following.json"],
            Dataset::LinkHistory => &["link_history.json"],
            Dataset::PostComments => &["post_comments_1.json"],
            Dataset::ReelComments => &["reels_comments.json"],
            Dataset::LikedPosts => &["liked_posts.json"],
            Dataset::LikedComments => &["liked_comments.json"],
            Dataset::LoginActivity => &["login_activity.json"],
        }
    }

    /// Top-level key of the record sequence, or `None` for a bare sequence
    pub fn records_key(&self) -> Option<&'static str> {
        match self {
            Dataset::AdsViewed => Some("impressions_history_ads_seen"),
            Dataset::PostsViewed => Some("impressions_history_posts_seen"),
            Dataset::SuggestedAccountsViewed => Some("impressions_history_chaining_seen"),
            Dataset::VideosWatched => Some("impressions_history_videos_watched"),
            Dataset::Advertisers => Some("ig_custom_audiences_all_types"),
            Dataset::Followers => None,
            Dataset::Following => Some("relationships_following"),
            Dataset::LinkHistory => None,
            Dataset::PostComments => None,
            Dataset::ReelComments => Some("comments_reels_comments"),
            Dataset::LikedPosts => Some("likes_media_likes"),
            Dataset::LikedComments => Some("likes_comment_likes"),
            Dataset::LoginActivity => Some("account_history_login_history"),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_dataset_has_a_file_name() {
        for dataset in Dataset::ALL {
            assert!(!dataset.file_names().is_empty(), "{dataset:?} has no file name");
        }
    }

    #[test]
    fn test_only_suggested_accounts_is_dual_named() {
        let dual: Vec<_> = Dataset::ALL
            .into_iter()
            .filter(|d| d.file_names().len() > 1)
            .collect();
        assert_eq!(dual, vec![Dataset::SuggestedAccountsViewed]);
        assert_eq!(
            Dataset::SuggestedAccountsViewed.file_names()[0],
            "suggested_profiles_viewed.json"
        );
    }

    #[test]
    fn test_labels_unique() {
        let labels: HashSet<_> = Dataset::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels.len(), Dataset::ALL.len());
    }

    #[test]
    fn test_bare_sequence_datasets() {
        assert_eq!(Dataset::Followers.records_key(), None);
        assert_eq!(Dataset::PostComments.records_key(), None);
        assert_eq!(Dataset::LinkHistory.records_key(), None);
        assert_eq!(Dataset::Following.records_key(), Some("relationships_following"));
    }
}
