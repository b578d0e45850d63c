use dioxus::prelude::*;

use store::ClientConfig;
use ui::AppProvider;
use views::{ChatPage, Home, Login, NotFound, Profile, RequireAuth, Search, SessionLayout, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SessionLayout)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[layout(RequireAuth)]
            #[route("/")]
            Home {},
            #[route("/search")]
            Search {},
            #[route("/chat/:chat_id")]
            ChatPage { chat_id: String },
            #[route("/profile")]
            Profile {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Reachable without a session.
    fn is_public(&self) -> bool {
        matches!(self, Route::Login {} | Route::Signup {} | Route::NotFound { .. })
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG: &str = include_str!("../gocha.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClientConfig::from_toml_or_default(CONFIG));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(Route::Login {}.is_public());
        assert!(Route::Signup {}.is_public());
        assert!(!Route::Home {}.is_public());
        assert!(!Route::ChatPage { chat_id: "1".into() }.is_public());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::ChatPage { chat_id: "42".into() }.to_string(), "/chat/42");
        assert_eq!(Route::Profile {}.to_string(), "/profile");
        assert_eq!("/search".parse::<Route>().ok(), Some(Route::Search {}));
        assert!(matches!("/nowhere".parse::<Route>(), Ok(Route::NotFound { .. })));
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = ClientConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config.chat.page_size, 25);
        assert_eq!(config.login.confirm_delay_ms, 1000);
    }
}
