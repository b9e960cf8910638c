//! Configuration shared by the web app and the CLI.
//!
//! Every field has a serde default, so an empty JSON object (or a missing
//! config file) yields the stock setup pointing at the public PokeAPI.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_list_limit() -> u32 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How many entries the listing request asks for; the random pick is
    /// drawn from whatever comes back.
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,

    /// Only honoured by native clients; browser `fetch` has no timeout knob.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_limit: default_list_limit(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Replace the catalog root, e.g. from an environment variable.
    /// Blank values are ignored; a trailing slash is dropped.
    pub fn with_base_url_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.catalog.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}
