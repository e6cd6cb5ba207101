//! Home feed cards.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::state::feed::{Post, QuickAction};

/// Colored quick-action card.
#[component]
pub fn QuickActionCard(action: QuickAction) -> impl IntoView {
    view! {
        <div class=format!("quick-action quick-action--{}", action.tone)>
            <IconSvg icon=action.icon class="quick-action__icon"/>
            <div>
                <h3 class="quick-action__title">{action.title}</h3>
                <p>{action.blurb}</p>
            </div>
        </div>
    }
}

/// One post in the recent-posts list.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    view! {
        <article class="post-card">
            <header class="post-card__header">
                <img class="post-card__avatar" src=post.avatar_url alt="User avatar" width="50" height="50"/>
                <div>
                    <h3 class="post-card__author">{post.author}</h3>
                    <p class="post-card__time">{post.posted_at}</p>
                </div>
            </header>
            <p class="post-card__body">{post.body}</p>
            <footer class="post-card__actions">
                <button class="post-card__action">
                    <IconSvg icon=Icon::Heart/>
                    " Like "
                    <span>{format!("({})", post.likes)}</span>
                </button>
                <button class="post-card__action">
                    <IconSvg icon=Icon::Comment/>
                    " Comment "
                    <span>{format!("({})", post.comments)}</span>
                </button>
            </footer>
        </article>
    }
}
