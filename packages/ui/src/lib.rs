//! Shared UI for the Gocha client: the app-state provider and its hooks, the
//! live-feed bootstrap, and the small components every page is built from.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

pub mod format;
pub mod platform;

mod context;
pub use context::{use_app_state, use_feed, use_services, AppProvider, Dispatch, FeedHandle, Services};

mod live;
pub use live::use_chat_bootstrap;

mod navbar;
pub use navbar::{NavTab, Navbar};

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

mod chat_row;
pub use chat_row::ChatRow;

mod message_bubble;
pub use message_bubble::MessageBubble;

mod access_denied;
pub use access_denied::AccessDenied;

mod form_field;
pub use form_field::FormField;
