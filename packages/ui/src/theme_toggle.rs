use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;
use store::theme::{load_theme, toggle_theme};
use store::Theme;

use crate::context::use_services;
use crate::platform;

/// Light/dark switch. Applies the stored theme on mount and after each toggle.
#[component]
pub fn ThemeToggle() -> Element {
    let services = use_services();
    let storage = services.storage.clone();
    let mut theme = use_signal(move || load_theme(&storage));

    use_effect(move || {
        let current = theme();
        tracing::debug!("Applying {} theme", current.as_str());
        platform::set_root_properties(&current.css_variables());
    });

    let on_toggle = move |_| theme.set(toggle_theme(&services.storage));

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: on_toggle,
            if shows_sun(theme()) {
                Icon { icon: FaSun, width: 18, height: 18 }
            } else {
                Icon { icon: FaMoon, width: 18, height: 18 }
            }
        }
    }
}

/// The icon names the active theme.
fn shows_sun(theme: Theme) -> bool {
    theme == Theme::Light
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_matches_active_theme() {
        assert!(shows_sun(Theme::Light));
        assert!(!shows_sun(Theme::Dark));
    }
}
