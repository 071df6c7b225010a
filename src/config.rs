use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_COLLECTION_ID, DEFAULT_LANGUAGE, DEFAULT_SITEMAP_FILE,
    DEFAULT_SITE_NAME, DEFAULT_WINDOW_HOURS, TOKEN_ENV_VAR, WEBFLOW_API_BASE,
};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved configuration with all values filled in (no Options).
///
/// This struct holds every external dependency of the pipeline — endpoint,
/// collection, publication metadata, output path, and the recency window —
/// so that stages receive their inputs as explicit arguments instead of
/// reading process-wide state. It can be deserialized by the TOML loader;
/// all fields have concrete defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Base URL of the Webflow Data API
    pub api_base_url: String,
    /// Collection holding the news articles
    pub collection_id: String,
    /// Public URL prefix that article slugs are appended to
    pub base_url: String,
    /// Path of the rendered sitemap file, overwritten on every run
    pub output_path: PathBuf,
    /// Publication name reported in the news block
    pub site_name: String,
    /// Publication language reported in the news block
    pub language: String,
    /// Sliding recency window in hours
    pub recency_window_hours: f64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: WEBFLOW_API_BASE.to_string(),
            collection_id: DEFAULT_COLLECTION_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_SITEMAP_FILE),
            site_name: DEFAULT_SITE_NAME.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            recency_window_hours: DEFAULT_WINDOW_HOURS,
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Every key is optional and falls back to the built-in default.
    /// The parser rejects unknown keys to catch typos.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, unknown keys are
    /// present, or validation fails (empty collection id or base URL,
    /// non-positive recency window).
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates field values after CLI overrides or TOML loading.
    pub fn validate(&self) -> AppResult<()> {
        if self.collection_id.is_empty() {
            return Err(AppError::InvalidInput(
                "Collection id must not be empty".into(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(AppError::InvalidInput("Base URL must not be empty".into()));
        }
        // Also rejects NaN, which would otherwise disable the window bound
        if !(self.recency_window_hours > 0.0) {
            return Err(AppError::InvalidInput(
                "Recency window must be greater than 0 hours".into(),
            ));
        }
        Ok(())
    }

    /// Reads the bearer credential from the environment.
    ///
    /// A missing credential is not a local error: the request is sent with
    /// an empty token and the API rejection surfaces through the
    /// missing-`items` diagnostic path.
    pub fn token_from_env() -> String {
        std::env::var(TOKEN_ENV_VAR).unwrap_or_default()
    }
}
