//! Protected home page: sidebar, header actions, quick actions and feed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::feed::{PostCard, QuickActionCard};
use crate::components::icon::{Icon, IconSvg};
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::feed::{QUICK_ACTIONS, recent_posts};
use crate::util::auth::install_auth_gate;

/// Home page. Shows a "Redirecting..." placeholder until the gate confirms a
/// stored token; redirects to `/login` when there is none.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_gate(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().can_render()
            fallback=|| view! { <div class="redirecting">"Redirecting..."</div> }
        >
            <HomeContent/>
        </Show>
    }
}

#[component]
fn HomeContent() -> impl IntoView {
    view! {
        <div class="home-page">
            <Sidebar/>

            <main class="home-page__main">
                <div class="home-page__header">
                    <button class="home-page__header-button" title="Notifications">
                        <IconSvg icon=Icon::Bell/>
                    </button>
                    <button class="home-page__header-button" title="Messages">
                        <IconSvg icon=Icon::Message/>
                    </button>
                    <button class="home-page__header-button" title="Groups">
                        <IconSvg icon=Icon::Users/>
                    </button>
                </div>

                <div class="home-page__actions">
                    {QUICK_ACTIONS.into_iter().map(|action| view! { <QuickActionCard action=action/> }).collect::<Vec<_>>()}
                </div>

                <section class="home-page__posts">
                    <h2 class="home-page__posts-title">"Your Recent Posts"</h2>
                    <div class="home-page__post-list">
                        {recent_posts().into_iter().map(|post| view! { <PostCard post=post/> }).collect::<Vec<_>>()}
                    </div>
                </section>
            </main>
        </div>
    }
    .into_any()
}
