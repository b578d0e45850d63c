//! # Client configuration: `gocha.toml`
//!
//! Build-time configuration for the web client, embedded into the binary and
//! parsed once at startup.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:4000"   # REST root; the live feed URL is derived from it
//!
//! [chat]
//! page_size = 25                        # messages fetched when a thread opens
//!
//! [login]
//! confirm_delay_ms = 1000               # how long the success state shows before navigating
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and the filename constant. |
//! | [`ApiConfig`] | Backend base URL plus the derived WebSocket URL. |
//! | [`ChatConfig`] | Thread page size. |
//! | [`LoginConfig`] | Delay of the post-login confirmation state. |
//!
//! Every section has a serde default, so an empty file is the default configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub login: LoginConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default = "default_confirm_delay")]
    pub confirm_delay_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_page_size() -> u32 {
    25
}

fn default_confirm_delay() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: default_confirm_delay(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    pub fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Live feed endpoint: same host, `ws`/`wss` scheme.
    pub fn ws_url(&self) -> String {
        let root = self.root();
        let swapped = if let Some(rest) = root.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = root.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            root.to_string()
        };
        format!("{swapped}/v1/ws")
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    pub fn filename() -> &'static str {
        "gocha.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `s`, logging and falling back to defaults when it is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::error!("Invalid {}: {e}", Self::filename());
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.chat.page_size, 25);
        assert_eq!(config.login.confirm_delay_ms, 1000);
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml("[chat]\npage_size = 50\n").unwrap();
        assert_eq!(config.chat.page_size, 50);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_ws_url() {
        let config = ClientConfig::default().with_base_url("https://chat.example.com/");
        assert_eq!(config.api.root(), "https://chat.example.com");
        assert_eq!(config.api.ws_url(), "wss://chat.example.com/v1/ws");

        let local = ClientConfig::default();
        assert_eq!(local.api.ws_url(), "ws://localhost:4000/v1/ws");
    }

    #[test]
    fn test_roundtrip_and_fallback() {
        let config = ClientConfig::default().with_base_url("http://10.0.0.2:4000");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);

        assert_eq!(
            ClientConfig::from_toml_or_default("[chat]\npage_size = \"many\""),
            ClientConfig::default()
        );
    }
}
