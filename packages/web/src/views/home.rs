use dioxus::prelude::*;
use store::ChatSummary;
use ui::{use_app_state, ChatRow};

use crate::Route;

/// Rows for `chats`, each opening its thread.
#[component]
pub(super) fn ChatList(chats: Vec<ChatSummary>) -> Element {
    let nav = use_navigator();

    rsx! {
        ul {
            class: "chat-list",
            for summary in chats {
                ChatRow {
                    key: "{summary.chat.id}",
                    summary: summary.clone(),
                    onclick: move |chat_id: String| {
                        nav.push(Route::ChatPage { chat_id });
                    },
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let state = use_app_state();
    let chats = state.read().chats.clone();

    rsx! {
        h2 { class: "page-title", "Chats" }
        if !chats.loaded {
            div { class: "loading", "Loading" }
        } else if chats.chats.is_empty() {
            div { class: "empty", "You Don't Have Any Chats" }
        } else {
            ChatList { chats: chats.chats }
        }
    }
}
