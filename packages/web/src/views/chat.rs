//! A single chat thread: the newest page of messages, kept current by the
//! live feed, plus the compose box.

use api::chat::{open_thread, send_message, ThreadLoad};
use dioxus::prelude::*;
use store::reconcile::pending_for_thread;
use ui::icons::{FaArrowLeft, FaPaperPlane};
use ui::{platform, use_app_state, use_services, AccessDenied, Icon, MessageBubble};

use crate::Route;

const NEWEST_MESSAGE_ID: &str = "newest-message";

#[component]
pub fn ChatPage(chat_id: String) -> Element {
    // Keyed so switching chats starts from a fresh thread.
    rsx! {
        ChatThread { key: "{chat_id}", chat_id: chat_id.clone() }
    }
}

#[component]
fn ChatThread(chat_id: String) -> Element {
    let services = use_services();
    let state = use_app_state();
    let nav = use_navigator();
    let mut thread = use_signal(|| Option::<ThreadLoad>::None);
    let mut input = use_signal(String::new);

    let load_services = services.clone();
    let load_id = chat_id.clone();
    let _loader = use_resource(move || {
        let services = load_services.clone();
        let chat_id = load_id.clone();
        async move {
            let load = match services.token() {
                Ok(token) => {
                    open_thread(&services.backend, &token, &chat_id, services.config.chat.page_size)
                        .await
                }
                Err(e) => {
                    tracing::warn!("Cannot open chat {chat_id}: {e}");
                    ThreadLoad::Unavailable
                }
            };
            thread.set(Some(load));
        }
    });

    // Append every message the feed delivered for this chat that the page lacks.
    let merge_id = chat_id.clone();
    use_effect(move || {
        let arrivals = state.read().arrivals_for(&merge_id);
        if arrivals.is_empty() {
            return;
        }
        let pending = match &*thread.read() {
            Some(ThreadLoad::Loaded(entries)) => pending_for_thread(entries, &arrivals),
            _ => return,
        };
        if pending.is_empty() {
            return;
        }
        if let Some(ThreadLoad::Loaded(entries)) = thread.write().as_mut() {
            entries.extend(pending);
        }
    });

    use_effect(move || {
        if let Some(ThreadLoad::Loaded(entries)) = &*thread.read() {
            if !entries.is_empty() {
                platform::scroll_into_view(NEWEST_MESSAGE_ID);
            }
        }
    });

    use_effect(move || {
        let current = state.read();
        if current.chats.loaded && current.chats.chats.is_empty() {
            nav.replace(Route::Home {});
        }
    });

    let send_services = services.clone();
    let send_id = chat_id.clone();
    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        let services = send_services.clone();
        let chat_id = send_id.clone();
        let text = input();
        spawn(async move {
            let sent = match services.token() {
                Ok(token) => send_message(&services.backend, &token, &chat_id, &text).await,
                Err(e) => Err(e),
            };
            match sent {
                Ok(true) => input.set(String::new()),
                Ok(false) => {}
                Err(e) => tracing::error!("Failed to send message to {chat_id}: {e}"),
            }
        });
    };

    let (loaded, summary, me) = {
        let current = state.read();
        (
            current.chats.loaded,
            current.chat(&chat_id).cloned(),
            current
                .current_user()
                .map(|u| u.id.clone())
                .unwrap_or_default(),
        )
    };

    if matches!(&*thread.read(), Some(ThreadLoad::Denied)) {
        return rsx! {
            AccessDenied {}
        };
    }

    if !loaded {
        return rsx! {
            div { class: "loading", "Loading" }
        };
    }

    let body = match thread() {
        None => rsx! {
            div { class: "loading", "Loading" }
        },
        Some(ThreadLoad::Denied) => rsx! {
            AccessDenied {}
        },
        Some(ThreadLoad::Unavailable) => rsx! {
            div { class: "empty", "Messages could not be loaded" }
        },
        Some(ThreadLoad::Loaded(entries)) => {
            let newest = entries.len().saturating_sub(1);
            rsx! {
                div {
                    class: "messages",
                    for (i, entry) in entries.into_iter().enumerate() {
                        MessageBubble {
                            key: "{entry.id()}",
                            is_me: entry.is_from(&me),
                            anchor: (i == newest).then(|| NEWEST_MESSAGE_ID.to_string()),
                            entry: entry.clone(),
                        }
                    }
                }
                form {
                    class: "compose",
                    onsubmit: handle_send,
                    input {
                        class: "compose-input",
                        placeholder: "Message",
                        value: "{input}",
                        oninput: move |evt: FormEvent| input.set(evt.value()),
                    }
                    button {
                        class: "button",
                        r#type: "submit",
                        Icon { icon: FaPaperPlane, width: 16, height: 16 }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "chat-page",
            header {
                class: "chat-header",
                Link { class: "back".to_string(), to: Route::Home {}, Icon { icon: FaArrowLeft, width: 18, height: 18 } }
                if let Some(summary) = summary {
                    div {
                        class: "chat-title",
                        h2 { "{summary.chat.name}" }
                        span { class: "chat-members", "{summary.members.count()} members" }
                    }
                }
            }
            {body}
        }
    }
}
