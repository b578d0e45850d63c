use dioxus::prelude::*;

#[component]
pub fn AccessDenied() -> Element {
    rsx! {
        div {
            class: "access-denied",
            h2 { "You Are Not A Member Of This Chat" }
            Link { class: "button".to_string(), to: "/", "Return To Chats" }
        }
    }
}
