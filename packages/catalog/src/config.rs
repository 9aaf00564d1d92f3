//! # Client configuration: `signup.toml`
//!
//! The web binary embeds a `signup.toml` next to its manifest and parses it at
//! startup. Every field has a default, so a missing section or an empty file
//! is equivalent to [`ClientConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [server]
//! base_url = ""              # empty = same origin as the page
//!
//! [status]
//! hide_after_ms = 5000
//! timer = "reset"            # or "independent"
//!
//! [list]
//! show_remove_controls = true
//! confirm_unregister = true
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`ServerConfig`] | Where the activities backend lives. |
//! | [`StatusConfig`] | How long status messages stay visible and how hide timers interact. |
//! | [`ListConfig`] | Participant list behaviour: remove buttons and the confirmation prompt. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration stored in `signup.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Absolute backend URL. Empty string means the page's own origin.
    #[serde(default)]
    pub base_url: String,
}

/// How pending hide timers treat a newer message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPolicy {
    /// Only the most recent message's timer may hide the region.
    #[default]
    Reset,
    /// Every timer hides whatever is showing when it fires.
    Independent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusConfig {
    #[serde(default = "default_hide_after_ms")]
    pub hide_after_ms: u64,
    #[serde(default)]
    pub timer: TimerPolicy,
}

fn default_hide_after_ms() -> u64 {
    5000
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            hide_after_ms: default_hide_after_ms(),
            timer: TimerPolicy::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Render a remove button next to each participant.
    #[serde(default = "default_true")]
    pub show_remove_controls: bool,
    /// Ask before unregistering. Turning this off skips the prompt entirely.
    #[serde(default = "default_true")]
    pub confirm_unregister: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            show_remove_controls: true,
            confirm_unregister: true,
        }
    }
}

impl ClientConfig {
    /// Config pointing at an explicit backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    pub fn with_hide_after_ms(mut self, ms: u64) -> Self {
        self.status.hide_after_ms = ms;
        self
    }

    pub fn with_timer_policy(mut self, policy: TimerPolicy) -> Self {
        self.status.timer = policy;
        self
    }

    pub fn with_remove_controls(mut self, show: bool) -> Self {
        self.list.show_remove_controls = show;
        self
    }

    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.status.hide_after_ms)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "signup.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
