use api::chat::{commit_chats, fetch_chats};
use dioxus::prelude::*;

use crate::context::{use_app_state, use_feed, use_services};

/// Load the chat list once a user is present, then open the live feed.
///
/// Runs at most once per login: the request flag is cleared when the user
/// goes away so the next login loads again. A result that lands after its
/// session ended is discarded by [`commit_chats`].
pub fn use_chat_bootstrap() {
    let mut state = use_app_state();
    let services = use_services();
    let feed = use_feed();
    let mut requested = use_signal(|| false);

    use_effect(move || {
        let (logged_in, loaded) = {
            let current = state.read();
            (current.is_logged_in(), current.chats.loaded)
        };

        if !logged_in {
            if *requested.peek() {
                requested.set(false);
            }
            feed.close();
            return;
        }
        if loaded || *requested.peek() {
            return;
        }
        requested.set(true);

        let services = services.clone();
        spawn(async move {
            let fetch = fetch_chats(&services.backend, &services.storage).await;
            let token = commit_chats(&mut state.write(), &services.storage, fetch);
            if let Some(token) = token {
                feed.open(&services.config.api, &token, state);
            }
        });
    });
}
