use dioxus::prelude::*;
use dioxus_free_icons::icons::{fa_regular_icons, fa_solid_icons};
use dioxus_free_icons::Icon;

/// One of the three bottom navigation destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Chats,
    Search,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 3] = [NavTab::Chats, NavTab::Search, NavTab::Profile];

    pub fn path(self) -> &'static str {
        match self {
            NavTab::Chats => "/",
            NavTab::Search => "/search",
            NavTab::Profile => "/profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Chats => "Chats",
            NavTab::Search => "Search",
            NavTab::Profile => "Profile",
        }
    }

    /// Tab owning `path`. Chat threads belong to the chats tab.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(NavTab::Chats),
            "/search" => Some(NavTab::Search),
            "/profile" => Some(NavTab::Profile),
            _ if trimmed.starts_with("/chat/") => Some(NavTab::Chats),
            _ => None,
        }
    }
}

fn tab_class(active: bool) -> String {
    let class = if active { "nav-link active" } else { "nav-link" };
    class.to_string()
}

#[component]
fn NavIcon(tab: NavTab, active: bool) -> Element {
    match (tab, active) {
        (NavTab::Chats, true) => rsx! { Icon { icon: fa_solid_icons::FaComments, width: 22, height: 22 } },
        (NavTab::Chats, false) => rsx! { Icon { icon: fa_regular_icons::FaComments, width: 22, height: 22 } },
        (NavTab::Search, _) => rsx! { Icon { icon: fa_solid_icons::FaMagnifyingGlass, width: 22, height: 22 } },
        (NavTab::Profile, true) => rsx! { Icon { icon: fa_solid_icons::FaUser, width: 22, height: 22 } },
        (NavTab::Profile, false) => rsx! { Icon { icon: fa_regular_icons::FaUser, width: 22, height: 22 } },
    }
}

#[component]
pub fn Navbar(#[props(!optional)] active: Option<NavTab>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            for tab in NavTab::ALL {
                Link {
                    key: "{tab.label()}",
                    class: tab_class(active == Some(tab)),
                    to: tab.path(),
                    NavIcon { tab, active: active == Some(tab) }
                }
            }
        }
    }
}
