//! Email/password login form.

use api::auth::{login, set_auth_info};
use dioxus::prelude::*;
use store::forms::{FIELD_EMAIL, FIELD_PASSWORD};
use store::FormFailure;
use ui::{platform, use_app_state, use_services, FormField};

use crate::Route;

const LOGIN_FIELDS: [&str; 2] = [FIELD_EMAIL, FIELD_PASSWORD];

/// Inline message for `field`, if the last attempt failed on it.
pub(super) fn field_error(failure: &Option<FormFailure>, field: &str) -> Option<String> {
    failure
        .as_ref()
        .and_then(|f| f.message_for(field))
        .map(str::to_string)
}

#[component]
pub fn Login() -> Element {
    let services = use_services();
    let mut state = use_app_state();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut failure = use_signal(|| Option::<FormFailure>::None);
    let mut loading = use_signal(|| false);
    let mut done = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() || done() {
            return;
        }
        let services = services.clone();
        spawn(async move {
            failure.set(None);
            loading.set(true);

            match login(&services.backend, &email(), &password()).await {
                Ok(auth) => {
                    tracing::info!("Logged in as {}", auth.user.email);
                    set_auth_info(&mut state.write(), &services.storage, auth);
                    loading.set(false);
                    done.set(true);
                    platform::sleep_ms(services.config.login.confirm_delay_ms).await;
                    nav.push(Route::Profile {});
                }
                Err(f) => {
                    loading.set(false);
                    failure.set(Some(f));
                }
            }
        });
    };

    let banner = failure().and_then(|f| f.general_message(&LOGIN_FIELDS));

    rsx! {
        div {
            class: "auth-page",
            h2 { "Login" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(message) = banner {
                    div { class: "error-banner", "{message}" }
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
                        "Logging in..."
                    } else {
                        "Login"
                    }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
