//! Page templates
//!
//! Each struct is handed only canonical view records. Templates live in
//! `templates/` and extend `base.html`.

use askama::Template;
use igview_common::geo::LocatedLogin;
use igview_common::normalize::{
    AdvertiserEntry, CommentSummary, ConnectionEntry, ImpressionSummary, LikeSummary,
    LinkVisitEntry, MessageThread, ViewedAccountEntry,
};

/// One entry on the index page
pub struct ViewLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// A heading on the index page with its views
pub struct ViewSection {
    pub heading: &'static str,
    pub links: Vec<ViewLink>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub sections: Vec<ViewSection>,
}

/// Ads, posts or videos seen, counted per author
#[derive(Template)]
#[template(path = "impressions.html")]
pub struct ImpressionsTemplate {
    pub title: &'static str,
    pub summary: ImpressionSummary,
}

#[derive(Template)]
#[template(path = "suggested_accounts.html")]
pub struct SuggestedAccountsTemplate {
    pub accounts: Vec<ViewedAccountEntry>,
}

#[derive(Template)]
#[template(path = "advertisers.html")]
pub struct AdvertisersTemplate {
    pub advertisers: Vec<AdvertiserEntry>,
}

/// Followers or following
#[derive(Template)]
#[template(path = "connections.html")]
pub struct ConnectionsTemplate {
    pub title: &'static str,
    pub connections: Vec<ConnectionEntry>,
}

#[derive(Template)]
#[template(path = "link_history.html")]
pub struct LinkHistoryTemplate {
    pub visits: Vec<LinkVisitEntry>,
}

/// Post or reel comments
#[derive(Template)]
#[template(path = "comments.html")]
pub struct CommentsTemplate {
    pub title: &'static str,
    pub summary: CommentSummary,
}

/// Liked posts or liked comments
#[derive(Template)]
#[template(path = "likes.html")]
pub struct LikesTemplate {
    pub title: &'static str,
    pub summary: LikeSummary,
}

#[derive(Template)]
#[template(path = "messages.html")]
pub struct ConversationsTemplate {
    pub count: usize,
    pub users: Vec<String>,
}

#[derive(Template)]
#[template(path = "messages_thread.html")]
pub struct ThreadTemplate {
    pub thread: MessageThread,
}

#[derive(Template)]
#[template(path = "login_activity.html")]
pub struct LoginActivityTemplate {
    pub logins: Vec<LocatedLogin>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub reason: &'a str,
    pub message: &'a str,
}
