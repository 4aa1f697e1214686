//! Application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tunable of the shell (storage key, simulated login latency, layout
//! breakpoint, drawer animation length, demo account, log level) lives here.
//! The browser build may override defaults with an inline JSON block in
//! `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">{ "login_delay_ms": 250 }</script>
//! ```
//!
//! Missing fields keep their defaults. The resolved config is provided to the
//! component tree via Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

/// DOM id of the optional inline config block.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// The single account the mock login accepts.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            email: "demo@example.com".to_owned(),
            password: "password".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key holding the auth flag.
    pub session_key: String,
    /// Artificial latency before the credential check resolves.
    pub login_delay_ms: u64,
    /// Viewport width at which the fixed desktop sidebar replaces the drawer.
    pub desktop_breakpoint_px: u32,
    /// Length of the drawer fade/slide animations.
    pub drawer_transition_ms: u64,
    pub demo_account: DemoAccount,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: "isAuthenticated".to_owned(),
            login_delay_ms: 1000,
            desktop_breakpoint_px: 1024,
            drawer_transition_ms: 300,
            demo_account: DemoAccount::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON config.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.log_level.parse::<log::Level>().is_err() {
            return Err(ConfigError::LogLevel(config.log_level));
        }
        Ok(config)
    }

    /// Load the config from the inline `#app-config` block, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the block exists but does not parse.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
                _ => Ok(Self::default()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(Self::default())
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn drawer_transition(&self) -> Duration {
        Duration::from_millis(self.drawer_transition_ms)
    }

    /// Media query matching the desktop layout.
    pub fn desktop_media_query(&self) -> String {
        format!("(min-width: {}px)", self.desktop_breakpoint_px)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
