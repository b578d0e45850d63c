use dioxus::prelude::*;

/// Labelled input with its validation message rendered underneath.
#[component]
pub fn FormField(
    name: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(!optional)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let failed = error.is_some();

    rsx! {
        div {
            class: if failed { "form-field failed" } else { "form-field" },
            label { r#for: "{name}", "{label}" }
            input {
                id: "{name}",
                name: "{name}",
                class: if failed { "failed" } else { "" },
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}
