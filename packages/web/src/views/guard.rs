use dioxus::prelude::*;
use ui::{use_app_state, NavTab, Navbar};

use crate::Route;

/// Renders its routes only for a logged-in user.
#[component]
pub fn RequireAuth() -> Element {
    let state = use_app_state();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        if !state.read().is_logged_in() {
            nav.replace(Route::Login {});
        }
    });

    if !state.read().is_logged_in() {
        return rsx! {};
    }

    let active = NavTab::from_path(&route.to_string());

    rsx! {
        main {
            class: "page",
            Outlet::<Route> {}
        }
        Navbar { active }
    }
}
