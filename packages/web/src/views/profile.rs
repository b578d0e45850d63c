use api::auth::log_out;
use dioxus::prelude::*;
use ui::{format, use_app_state, use_feed, use_services};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let services = use_services();
    let mut state = use_app_state();
    let feed = use_feed();
    let nav = use_navigator();

    let handle_logout = move |_| {
        feed.close();
        log_out(&mut state.write(), &services.storage);
        tracing::info!("Logged out");
        nav.replace(Route::Login {});
    };

    let Some(user) = state.read().current_user().cloned() else {
        return rsx! {
            div { class: "loading", "Loading" }
        };
    };
    let created = format::local_date(&user.created_at);
    let activated = if user.activated { "Yes" } else { "No" };

    rsx! {
        div {
            class: "profile",
            h2 { class: "page-title", "Profile" }
            dl {
                dt { "Name" }
                dd { "{user.name}" }
                dt { "Email" }
                dd { "{user.email}" }
                dt { "Created" }
                dd { "{created}" }
                dt { "Activated" }
                dd { "{activated}" }
                dt { "ID" }
                dd { "{user.id}" }
            }
            button { class: "button", onclick: handle_logout, "Logout" }
        }
    }
}
