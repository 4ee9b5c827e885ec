//! Configuration loader
//!
//! Loads connector configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! Required:
//! - `I95DEV_REFRESH_TOKEN`: Commerce API refresh token
//! - `I95DEV_CLIENT_ID`: Commerce API client id
//! - `I95DEV_SUBSCRIPTION_KEY`: Commerce API subscription key
//! - `I95DEV_INSTANCE_TYPE`: Instance type (e.g. `Staging`)
//! - `I95DEV_ENDPOINT_CODE`: Endpoint code
//! - `I95DEV_BASE_URL`: Commerce API base URL
//!
//! Optional:
//! - `I95DEV_TENANT_ID`, `I95DEV_CLIENT_ID_BC`, `I95DEV_CLIENT_SECRET_BC`:
//!   Business Central app registration
//! - `I95DEV_ENVIRONMENT`: Business Central environment (default `N8N`)
//! - `I95DEV_HTTP_TIMEOUT_SECS`: Request timeout in seconds (default 30)
//! - `I95DEV_BC_LOGIN_URL`, `I95DEV_BC_API_URL`: Business Central endpoint
//!   overrides
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./i95connect.json` or `./i95connect.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use i95connect_domain::{
    BusinessCentralEndpoints, ConnectorConfig, ConnectorError, Credentials, HttpSettings, Result,
};
use url::Url;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["i95connect.json", "i95connect.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ConnectorError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or the base URL is not usable
pub fn load() -> Result<ConnectorConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ConnectorError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<ConnectorConfig> {
    let credentials = Credentials {
        refresh_token: env_var("I95DEV_REFRESH_TOKEN")?,
        client_id: env_var("I95DEV_CLIENT_ID")?,
        subscription_key: env_var("I95DEV_SUBSCRIPTION_KEY")?,
        instance_type: env_var("I95DEV_INSTANCE_TYPE")?,
        endpoint_code: env_var("I95DEV_ENDPOINT_CODE")?,
        base_url: env_var("I95DEV_BASE_URL")?,
        tenant_id: env_opt("I95DEV_TENANT_ID"),
        client_id_bc: env_opt("I95DEV_CLIENT_ID_BC"),
        client_secret_bc: env_opt("I95DEV_CLIENT_SECRET_BC"),
        environment: env_opt("I95DEV_ENVIRONMENT"),
    };

    let mut http = HttpSettings::default();
    if let Some(timeout) = env_opt("I95DEV_HTTP_TIMEOUT_SECS") {
        http.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| ConnectorError::Config(format!("Invalid HTTP timeout: {e}")))?;
    }

    let defaults = BusinessCentralEndpoints::default();
    let business_central = BusinessCentralEndpoints {
        login_base_url: env_opt("I95DEV_BC_LOGIN_URL").unwrap_or(defaults.login_base_url),
        api_base_url: env_opt("I95DEV_BC_API_URL").unwrap_or(defaults.api_base_url),
    };

    let config = ConnectorConfig { credentials, http, business_central };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ConnectorError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ConnectorConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConnectorError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConnectorError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ConnectorError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ConnectorConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConnectorError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConnectorError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ConnectorError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Check that the loaded configuration is usable
///
/// # Errors
/// Returns `ConnectorError::Config` when a required credential is blank or a
/// base URL is not an absolute http(s) URL.
pub fn validate(config: &ConnectorConfig) -> Result<()> {
    let creds = &config.credentials;
    let required = [
        ("refreshToken", &creds.refresh_token),
        ("clientId", &creds.client_id),
        ("subscriptionKey", &creds.subscription_key),
        ("instanceType", &creds.instance_type),
        ("endpointCode", &creds.endpoint_code),
        ("baseUrl", &creds.base_url),
    ];
    if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ConnectorError::Config(format!("Missing required credential: {name}")));
    }

    validate_http_url("baseUrl", &creds.base_url)?;
    validate_http_url("business_central.login_base_url", &config.business_central.login_base_url)?;
    validate_http_url("business_central.api_base_url", &config.business_central.api_base_url)?;
    Ok(())
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| ConnectorError::Config(format!("Invalid {name}: {value} ({e})")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => {
            Err(ConnectorError::Config(format!("Invalid {name}: unsupported scheme '{scheme}'")))
        }
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./i95connect.{json,toml}`,
///    `./config.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    ["", "..", "../.."]
        .iter()
        .flat_map(|prefix| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(prefix).join(name)))
        .collect()
}

/// Get required environment variable
///
/// # Errors
/// Returns `ConnectorError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        ConnectorError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
