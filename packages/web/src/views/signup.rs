//! Account creation. A successful signup logs straight in.

use api::auth::{set_auth_info, signup};
use dioxus::prelude::*;
use store::forms::{FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD};
use store::FormFailure;
use ui::{platform, use_app_state, use_services, FormField};

use super::login::field_error;
use crate::Route;

const SIGNUP_FIELDS: [&str; 3] = [FIELD_NAME, FIELD_EMAIL, FIELD_PASSWORD];

#[component]
pub fn Signup() -> Element {
    let services = use_services();
    let mut state = use_app_state();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut failure = use_signal(|| Option::<FormFailure>::None);
    let mut loading = use_signal(|| false);
    let mut done = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() || done() {
            return;
        }
        let services = services.clone();
        spawn(async move {
            failure.set(None);
            loading.set(true);

            match signup(&services.backend, &name(), &email(), &password()).await {
                Ok(auth) => {
                    set_auth_info(&mut state.write(), &services.storage, auth);
                    loading.set(false);
                    done.set(true);
                    platform::sleep_ms(services.config.login.confirm_delay_ms).await;
                    nav.push(Route::Home {});
                }
                Err(f) => {
                    loading.set(false);
                    failure.set(Some(f));
                }
            }
        });
    };

    let banner = failure().and_then(|f| f.general_message(&SIGNUP_FIELDS));

    rsx! {
        div {
            class: "auth-page",
            h2 { "Sign Up" }

            form {
                class: "auth-form",
                onsubmit: handle_signup,

                if let Some(message) = banner {
                    div { class: "error-banner", "{message}" }
                }

                FormField {
                    name: "{FIELD_NAME}",
                    label: "Name",
                    value: name(),
                    error: field_error(&failure(), FIELD_NAME),
                    oninput: move |v: String| name.set(v),
                }
                FormField {
                    name: "{FIELD_EMAIL}",
                    label: "Email",
                    input_type: "email",
                    value: email(),
                    error: field_error(&failure(), FIELD_EMAIL),
                    oninput: move |v: String| email.set(v),
                }
                FormField {
                    name: "{FIELD_PASSWORD}",
                    label: "Password",
                    input_type: "password",
                    value: password(),
                    error: field_error(&failure(), FIELD_PASSWORD),
                    oninput: move |v: String| password.set(v),
                }

                button {
                    class: "button",
                    r#type: "submit",
                    disabled: loading() || done(),
                    if done() {
                        "Logged in successfully!"
                    } else if loading() {
                        "Creating account..."
                    } else {
                        "Sign Up"
                    }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
