use dioxus::prelude::*;
use ui::use_app_state;

use super::home::ChatList;

/// Filters the loaded chats by name.
#[component]
pub fn Search() -> Element {
    let state = use_app_state();
    let mut query = use_signal(String::new);

    let loaded = state.read().chats.loaded;
    let results = state.read().search_chats(&query());

    rsx! {
        h2 { class: "page-title", "Search" }
        input {
            class: "search-input",
            r#type: "search",
            placeholder: "Search chats",
            value: "{query}",
            oninput: move |evt: FormEvent| query.set(evt.value()),
        }
        if !loaded {
            div { class: "loading", "Loading" }
        } else if results.is_empty() {
            div { class: "empty", "No chats match \"{query}\"" }
        } else {
            ChatList { chats: results }
        }
    }
}
