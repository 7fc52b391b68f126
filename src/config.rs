use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::TMDB_BASE_URL;
use crate::trends::DEFAULT_TRENDING_LIMIT;

/// Settings for the Appwrite-backed trend store
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// TMDB read access token (sent as a bearer token)
    #[serde(default)]
    pub tmdb_api_key: Option<String>,
    #[serde(default = "default_catalog_base_url")]
    pub catalog_base_url: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,
    #[serde(default = "default_show_welcome")]
    pub show_welcome: bool,
    /// Appwrite trend store; trending is kept in memory when absent
    #[serde(default)]
    pub trend_store: Option<AppwriteConfig>,
}

fn default_catalog_base_url() -> String {
    TMDB_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_trending_limit() -> usize {
    DEFAULT_TRENDING_LIMIT
}

fn default_show_welcome() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            catalog_base_url: default_catalog_base_url(),
            debounce_ms: default_debounce_ms(),
            trending_limit: default_trending_limit(),
            show_welcome: default_show_welcome(),
            trend_store: None,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid (all-defaults) config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config file")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    /// Apply environment overrides. `lookup` is `std::env::var` in the
    /// binary and a map in tests.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup("TMDB_API_KEY") {
            self.tmdb_api_key = Some(key);
        }
        if let Some(url) = lookup("TMDB_BASE_URL") {
            self.catalog_base_url = url;
        }

        let endpoint = lookup("APPWRITE_ENDPOINT");
        let project_id = lookup("APPWRITE_PROJECT_ID");
        let database_id = lookup("APPWRITE_DATABASE_ID");
        let collection_id = lookup("APPWRITE_COLLECTION_ID");
        let api_key = lookup("APPWRITE_API_KEY");

        let any_set = endpoint.is_some()
            || project_id.is_some()
            || database_id.is_some()
            || collection_id.is_some()
            || api_key.is_some();
        if !any_set {
            return;
        }

        let mut store = self.trend_store.clone().unwrap_or(AppwriteConfig {
            endpoint: String::new(),
            project_id: String::new(),
            database_id: String::new(),
            collection_id: String::new(),
            api_key: None,
        });
        if let Some(v) = endpoint {
            store.endpoint = v;
        }
        if let Some(v) = project_id {
            store.project_id = v;
        }
        if let Some(v) = database_id {
            store.database_id = v;
        }
        if let Some(v) = collection_id {
            store.collection_id = v;
        }
        if api_key.is_some() {
            store.api_key = api_key;
        }
        self.trend_store = Some(store);
    }

    /// Check required settings; returns the catalog API key
    pub fn validate(&self) -> Result<&str> {
        let api_key = self
            .tmdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "TMDB API key missing. Set TMDB_API_KEY or tmdb_api_key in the config file."
                )
            })?;

        if self.debounce_ms == 0 {
            anyhow::bail!("debounce_ms must be greater than zero");
        }
        if self.trending_limit == 0 {
            anyhow::bail!("trending_limit must be greater than zero");
        }

        if let Some(store) = &self.trend_store {
            let missing: Vec<&str> = [
                ("endpoint", &store.endpoint),
                ("project_id", &store.project_id),
                ("database_id", &store.database_id),
                ("collection_id", &store.collection_id),
            ]
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

            if !missing.is_empty() {
                anyhow::bail!(
                    "Incomplete trend_store settings, missing: {}",
                    missing.join(", ")
                );
            }
        }

        Ok(api_key)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Determine the config file path with fallback logic.
///
/// Returns `Ok(None)` when no file exists; every setting can also come
/// from the environment.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/popcine/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("popcine").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Apply environment overrides and validate once; returns the config with
/// its TMDB API key
pub fn resolve<F>(mut config: Config, lookup: F) -> Result<(Config, String)>
where
    F: Fn(&str) -> Option<String>,
{
    config.apply_env(lookup);
    let api_key = config.validate()?.to_string();
    Ok((config, api_key))
}

/// Load config from the resolved file (if any) and the process environment
pub fn load(cli_path: Option<String>) -> Result<(Config, String)> {
    let config = match get_config_path(cli_path)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::from_file(&path)?
        }
        None => Config::default(),
    };

    resolve(config, |key| std::env::var(key).ok())
}
