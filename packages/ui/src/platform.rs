//! Platform glue shared by every view.
//!
//! - **Web** (WASM + `web` feature): `localStorage`, `gloo-timers`, the real DOM.
//! - **Native** (tests, tooling): an in-memory store, `tokio` timers, and DOM
//!   calls that do nothing.

use chrono::{DateTime, Utc};

/// Key-value store backing the session and theme.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Storage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Storage = store::MemoryStore;

/// Create the platform-appropriate storage handle.
pub fn make_storage() -> Storage {
    Storage::new()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub async fn sleep_ms(ms: u64) {
    let duration = std::time::Duration::from_millis(ms);
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Set CSS custom properties on `<html>`.
pub fn set_root_properties(vars: &[(&str, String)]) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let style = root.style();
        for (name, value) in vars {
            if let Err(e) = style.set_property(name, value) {
                tracing::warn!("Failed to set {name}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Skipping {} CSS properties outside the browser", vars.len());
    }
}

/// Scroll the element with `id` into view, if it exists.
pub fn scroll_into_view(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.scroll_into_view();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}
