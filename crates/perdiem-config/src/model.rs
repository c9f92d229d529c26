use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom data directory for the budgeting stores.
    /// Defaults to the platform data dir when unset.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    fn default_locale() -> String {
        "en-US".into()
    }

    fn default_currency() -> String {
        "USD".into()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            data_dir: None,
        }
    }
}
