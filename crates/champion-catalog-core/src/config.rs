//! Catalog configuration.
//!
//! Holds the Data Dragon base URL, data version and language used to build
//! request and image URLs. Hosts usually embed this as a section of their own
//! configuration; any missing field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::utils::normalize_champion_name;

/// Data Dragon CDN root
const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com/cdn";

/// Data Dragon release the catalog is pinned to
const DEFAULT_VERSION: &str = "15.13.1";

/// Locale for display names and titles
const DEFAULT_LANGUAGE: &str = "en_US";

/// HTTP request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub version: String,
    pub language: String,
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// URL of the champion list document for the configured version and language
    pub fn champion_data_url(&self) -> String {
        format!(
            "{}/{}/data/{}/champion.json",
            self.base_url.trim_end_matches('/'),
            self.version,
            self.language
        )
    }

    /// Square portrait URL for a champion. The name is normalized first, so
    /// display names such as "Kai'Sa" resolve to their image key.
    pub fn champion_image_url(&self, name: &str) -> String {
        format!(
            "{}/{}/img/champion/{}.png",
            self.base_url.trim_end_matches('/'),
            self.version,
            normalize_champion_name(name)
        )
    }
}
