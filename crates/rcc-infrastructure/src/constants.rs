//! Infrastructure defaults
//!
//! Key format and TTL live in `rcc_domain::constants`; these are the
//! knobs of configuration, serving, logging and health reporting.

// Configuration sources

/// File searched for when no `--config` path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "rcc.toml";

/// Subdirectory searched under the working and user config directories
pub const DEFAULT_CONFIG_DIR: &str = "rcc";

/// Prefix of layered environment variables (`RCC_SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "RCC";

/// Nesting separator in prefixed variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Bare variable mapped onto `cache.redis_url`
pub const REDIS_URL_ENV_VAR: &str = "REDIS_URL";

// Server

/// Bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Listen port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// Store

/// Store used when the config names none
pub const DEFAULT_CACHE_PROVIDER: &str = "redis";

/// Stores that cannot start without `cache.redis_url`
pub const REMOTE_CACHE_PROVIDERS: &[&str] = &["redis", "tiered"];

// Logging

/// Level used when the config names none
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter directive that overrides `logging.level`
pub const LOG_FILTER_ENV_VAR: &str = "RCC_LOG";

/// Log file stem when `logging.file_output` has none
pub const LOG_FILE_DEFAULT_STEM: &str = "rcc";

// Health

/// Component name of the store check
pub const STORE_HEALTH_CHECK_NAME: &str = "store";
