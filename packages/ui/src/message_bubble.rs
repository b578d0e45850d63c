use dioxus::prelude::*;
use store::MessageEntry;

use crate::format;

/// A single message. Joins, leaves and other non-chat lines render as centred
/// system text.
#[component]
pub fn MessageBubble(
    entry: MessageEntry,
    is_me: bool,
    #[props(!optional)] anchor: Option<String>,
) -> Element {
    let time = format::local_clock(&entry.message.sent);

    if !entry.message.kind.is_normal() {
        return rsx! {
            div {
                id: anchor,
                class: "system-message",
                "{entry.message.content}"
            }
        };
    }

    rsx! {
        div {
            id: anchor,
            class: if is_me { "message me" } else { "message them" },
            if !is_me {
                span { class: "message-sender", "{entry.user.name}" }
            }
            p { class: "message-content", "{entry.message.content}" }
            span { class: "message-time", "{time}" }
        }
    }
}
