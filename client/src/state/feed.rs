//! Static home-page content: quick actions and mock recent posts.
//!
//! Nothing here is fetched; the feed is placeholder layout until a posts API
//! exists.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::components::icon::Icon;

/// Colored call-to-action card at the top of the feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub blurb: &'static str,
    pub icon: Icon,
    /// Modifier appended to `quick-action--`.
    pub tone: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Events",
        blurb: "Discover upcoming events in your network.",
        icon: Icon::Calendar,
        tone: "cyan",
    },
    QuickAction {
        title: "Create a Post",
        blurb: "Share your thoughts with the network.",
        icon: Icon::Plus,
        tone: "green",
    },
    QuickAction {
        title: "Create an Event",
        blurb: "Organize an event for your group or network.",
        icon: Icon::Plus,
        tone: "purple",
    },
];

const MOCK_POST_COUNT: u32 = 3;

/// One card in the recent-posts list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub author: String,
    pub avatar_url: String,
    pub posted_at: String,
    pub body: String,
    pub likes: u32,
    pub comments: u32,
}

/// Mock posts shown under "Your Recent Posts".
#[must_use]
pub fn recent_posts() -> Vec<Post> {
    (1..=MOCK_POST_COUNT)
        .map(|id| Post {
            id,
            author: "Username".to_owned(),
            avatar_url: "/avatar.jpg".to_owned(),
            posted_at: "Posted on October 23, 2024, 3:45 PM".to_owned(),
            body: format!(
                "This is the content of post {id}. Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                 Quisque at est non erat commodo facilisis."
            ),
            likes: 23,
            comments: 12,
        })
        .collect()
}
