//! Navigation sidebar with the logout action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Embedded by the home page. Links are plain route targets; logout is the
//! only networked action and only navigates once the server confirms it.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::icon::{Icon, IconSvg};
use crate::state::nav::{FOOTER_LINKS, NavLink, PRIMARY_LINKS};
use crate::state::ui::UiState;
use crate::util::auth::install_redirect;

/// Collapsible sidebar; always visible on wide screens, a drawer on narrow ones.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.get().sidebar_open;
    let toggle = move |_| ui.update(UiState::toggle_sidebar);

    let redirect = install_redirect(use_navigate());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::BrowserAuthApi::default();
            if let Ok(nav) = authflow::logout(&api).await {
                redirect.set(Some(nav.to));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = redirect;
    };

    view! {
        <div class="sidebar-shell">
            <aside class="sidebar" class:sidebar--open=open>
                <div class="sidebar__body">
                    <button class="sidebar__logo" on:click=toggle>
                        <div class="sidebar__logo-mark"></div>
                        <span class="sidebar__logo-text">"MyApp"</span>
                    </button>
                    <nav class="sidebar__links">
                        {PRIMARY_LINKS.into_iter().map(|link| view! { <SidebarLink link=link/> }).collect::<Vec<_>>()}
                    </nav>
                    <div class="sidebar__footer">
                        {FOOTER_LINKS.into_iter().map(|link| view! { <SidebarLink link=link/> }).collect::<Vec<_>>()}
                        <button class="sidebar__logout" on:click=on_logout>
                            <IconSvg icon=Icon::Logout/>
                            <span>"Log out"</span>
                        </button>
                    </div>
                </div>
            </aside>

            <div class="sidebar-toggle">
                <button class="sidebar-toggle__button" on:click=toggle>
                    {move || {
                        if open() {
                            view! { <IconSvg icon=Icon::ArrowLeft/> }
                        } else {
                            view! { <IconSvg icon=Icon::Menu/> }
                        }
                    }}
                </button>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn SidebarLink(link: NavLink) -> impl IntoView {
    view! {
        <A href=link.href attr:class="sidebar-link">
            <IconSvg icon=link.icon/>
            <span class="sidebar-link__label">{link.label}</span>
        </A>
    }
}
