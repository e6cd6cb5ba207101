//! Inline stroke icons.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Dashboard,
    User,
    Settings,
    Help,
    Logout,
    Menu,
    ArrowLeft,
    Bell,
    Message,
    Users,
    Calendar,
    Plus,
    Heart,
    Comment,
}

impl Icon {
    /// SVG path data drawn on a 24x24 grid.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "M4 4h16v16H4z M4 9h16 M9 9v11",
            Self::User => "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z M5 21v-2a7 7 0 0 1 14 0v2",
            Self::Settings => "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z M12 2v3 M12 19v3 M2 12h3 M19 12h3",
            Self::Help => "M12 21a9 9 0 1 0 0-18 9 9 0 0 0 0 18z M12 17v.01 M12 13.5a2 2 0 1 0-2-2",
            Self::Logout => "M14 8V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h7a2 2 0 0 0 2-2v-2 M9 12h12 M18 9l3 3-3 3",
            Self::Menu => "M4 6h16 M4 12h16 M4 18h16",
            Self::ArrowLeft => "M5 12h14 M5 12l6 6 M5 12l6-6",
            Self::Bell => "M10 5a2 2 0 1 1 4 0 7 7 0 0 1 4 6v3l2 3H4l2-3v-3a7 7 0 0 1 4-6 M9 17v1a3 3 0 0 0 6 0v-1",
            Self::Message => "M4 5h16v11H8l-4 4z",
            Self::Users => "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z M3 21v-2a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v2 M16 3.13a4 4 0 0 1 0 7.75 M21 21v-2a4 4 0 0 0-3-3.85",
            Self::Calendar => "M4 5h16v16H4z M16 3v4 M8 3v4 M4 11h16",
            Self::Plus => "M12 5v14 M5 12h14",
            Self::Heart => "M19.5 12.57 12 20l-7.5-7.43A5 5 0 1 1 12 6.01a5 5 0 1 1 7.5 6.57",
            Self::Comment => "M3 20l1.3-3.9A9 8 0 1 1 7.7 19L3 20",
        }
    }
}

/// Render `icon` as an inline SVG.
#[component]
pub fn IconSvg(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path()></path>
        </svg>
    }
}
