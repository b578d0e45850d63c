use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaUser, FaUsers};
use dioxus_free_icons::Icon;
use store::ChatSummary;

use crate::format;

/// `(content, time)` of the chat's latest message.
fn preview(summary: &ChatSummary) -> Option<(String, String)> {
    summary.last_message.as_ref().map(|entry| {
        (
            entry.message.content.clone(),
            format::local_clock(&entry.message.sent),
        )
    })
}

/// One chat in a list. Clicking it reports the chat id.
#[component]
pub fn ChatRow(summary: ChatSummary, onclick: EventHandler<String>) -> Element {
    let id = summary.chat.id.clone();
    let last = preview(&summary);

    rsx! {
        li {
            class: "chat-row",
            onclick: move |_| onclick.call(id.clone()),
            div {
                class: "chat-avatar",
                if summary.chat.is_private {
                    Icon { icon: FaUser, width: 20, height: 20 }
                } else {
                    Icon { icon: FaUsers, width: 20, height: 20 }
                }
            }
            div {
                class: "chat-info",
                span { class: "chat-name", "{summary.chat.name}" }
                if let Some((content, time)) = last {
                    div {
                        class: "chat-preview",
                        span { class: "chat-preview-text", "{content}" }
                        span { class: "chat-preview-time", "{time}" }
                    }
                }
            }
        }
    }
}
