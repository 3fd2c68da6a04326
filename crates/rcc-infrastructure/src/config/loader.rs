//! Layered configuration
//!
//! Later layers win: built-in defaults, then a TOML file, then the bare
//! `REDIS_URL` variable, then `RCC_`-prefixed variables such as
//! `RCC_SERVER__PORT`. The merged result is validated before it is returned.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rcc_application::ports::registry::list_cache_providers;
use rcc_domain::error::{Error, Result};
use rcc_providers::CACHE_PROVIDERS;

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    REDIS_URL_ENV_VAR, REMOTE_CACHE_PROVIDERS,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Builds an [`AppConfig`] from defaults, file and environment
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader that searches the default locations for `rcc.toml`
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of searching
    ///
    /// A missing file is logged and skipped, not treated as an error.
    #[must_use]
    pub fn with_config_path(self, path: impl AsRef<Path>) -> Self {
        Self {
            explicit_path: Some(path.as_ref().to_owned()),
        }
    }

    /// Explicit file path, if one was given
    pub fn config_path(&self) -> Option<&Path> {
        self.explicit_path.as_deref()
    }

    /// Merge every layer, extract and validate
    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;
        validate_app_config(&config)?;
        Ok(config)
    }

    /// Write `config` as pretty TOML
    pub fn save_to_file(&self, config: &AppConfig, path: impl AsRef<Path>) -> Result<()> {
        let rendered = toml::to_string_pretty(config).config_context("Failed to render TOML")?;
        let path = path.as_ref();
        std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    fn figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        match self.file_layer() {
            Some(path) if path.exists() => {
                log_config_loaded(&path, true);
                figment = figment.merge(Toml::file(path));
            }
            Some(path) => log_config_loaded(&path, false),
            None => {}
        }

        let bare_url = Env::raw()
            .only(&[REDIS_URL_ENV_VAR])
            .map(|_| "cache.redis_url".into());
        let prefixed = Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR);

        figment.merge(bare_url).merge(prefixed)
    }

    fn file_layer(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit_path {
            return Some(path.clone());
        }
        search_paths().into_iter().find(|candidate| candidate.exists())
    }
}

/// `./rcc.toml`, `./rcc/rcc.toml`, then the user config directory
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_CONFIG_FILENAME));
        paths.push(cwd.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
    }
    if let Some(user_dir) = dirs::config_dir() {
        paths.push(user_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
    }
    paths
}

/// Reject configurations the server cannot start with
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }

    let cache = &config.cache;
    if cache.enabled {
        if cache.default_ttl_secs == 0 {
            return Err(Error::configuration(
                "Cache TTL cannot be 0 when cache is enabled",
            ));
        }

        let registered: Vec<&str> = list_cache_providers(CACHE_PROVIDERS)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        if !registered.contains(&cache.provider.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown cache provider '{}'. Available providers: {registered:?}",
                cache.provider
            )));
        }

        let url_missing = cache
            .redis_url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty());
        if url_missing && REMOTE_CACHE_PROVIDERS.contains(&cache.provider.as_str()) {
            return Err(Error::configuration(format!(
                "Cache provider '{}' requires cache.redis_url",
                cache.provider
            )));
        }
    }

    parse_log_level(&config.logging.level).map(|_| ())
}
