//! Backend connection settings.
//!
//! Sources are merged in order, later ones winning:
//! 1. `ApiConfig::default()`
//! 2. `deepwiki.toml` in the working directory (optional)
//! 3. `DEEPWIKI_*` environment variables (e.g. `DEEPWIKI_BASE_URL`)

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const CONFIG_FILE: &str = "deepwiki.toml";
pub const ENV_PREFIX: &str = "DEEPWIKI_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL of the OpenDeepWiki backend.
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Page size used when a listing request omits one.
    pub default_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5085".to_string(),
            request_timeout_secs: 30,
            default_page_size: 20,
        }
    }
}

impl ApiConfig {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ApiConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, ApiError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ApiError> {
        let config: ApiConfig = figment
            .extract()
            .map_err(|err| ApiError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ApiError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        if self.default_page_size == 0 {
            return Err(ApiError::Config(
                "default_page_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
