use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "button".to_string(), to: "/", "Return To Chats" }
        }
    }
}
