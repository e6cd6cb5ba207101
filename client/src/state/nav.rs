//! Sidebar link table.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::components::icon::Icon;

/// A labeled sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// Links shown at the top of the sidebar.
pub const PRIMARY_LINKS: [NavLink; 3] = [
    NavLink { label: "Dashboard", href: "/admin", icon: Icon::Dashboard },
    NavLink { label: "Profile", href: "/profile", icon: Icon::User },
    NavLink { label: "Settings", href: "/settings", icon: Icon::Settings },
];

/// Links pinned to the bottom of the sidebar, above the logout action.
pub const FOOTER_LINKS: [NavLink; 2] = [
    NavLink { label: "Help", href: "/help", icon: Icon::Help },
    NavLink { label: "Support", href: "/support", icon: Icon::Help },
];
