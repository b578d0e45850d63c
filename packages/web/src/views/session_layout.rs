//! Outermost layout: checks the stored session on every navigation.

use api::auth::{apply_revalidation, revalidate, Revalidation};
use dioxus::prelude::*;
use ui::{platform, use_app_state, use_chat_bootstrap, use_feed, use_services, ThemeToggle};

use crate::Route;

#[component]
pub fn SessionLayout() -> Element {
    let services = use_services();
    let mut state = use_app_state();
    let feed = use_feed();
    let route = use_route::<Route>();
    let nav = use_navigator();
    let mut checked = use_signal(|| false);

    use_chat_bootstrap();

    use_effect(use_reactive((&route,), move |(route,)| {
        let services = services.clone();
        spawn(async move {
            let logged_in = state.peek().is_logged_in();
            let outcome =
                revalidate(&services.backend, &services.storage, logged_in, platform::now()).await;
            apply_revalidation(&mut state.write(), &outcome);

            if outcome.requires_login() {
                feed.close();
                if !route.is_public() {
                    tracing::debug!("No valid session for {route}, redirecting to login");
                    nav.replace(Route::Login {});
                }
            } else if let Revalidation::Restored(user) = &outcome {
                tracing::info!("Restored session for {}", user.email);
                // Re-enter the route so the guard sees the restored user.
                nav.replace(route);
            }
            checked.set(true);
        });
    }));

    rsx! {
        div {
            class: "app-shell",
            header {
                class: "app-header",
                h1 { "Gocha" }
                ThemeToggle {}
            }
            if checked() {
                Outlet::<Route> {}
            } else {
                div { class: "loading", "Loading" }
            }
        }
    }
}
