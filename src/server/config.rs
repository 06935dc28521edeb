use jsonwebtoken::Algorithm;
use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ALGORITHM: &str = "HS256";
const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 7;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8080";
const DEFAULT_MEDIA_ROOT: &str = "./media";
const DEFAULT_MEDIA_URL: &str = "/media";
const DEFAULT_API_PREFIX: &str = "/api/v1";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Immutable application configuration, built once in `main` and shared through `AppState`.
///
/// Secrets (`secret_key`, payment and AI keys) are held here but the type deliberately has
/// no `Debug` implementation so it cannot end up in log output.
pub struct Config {
    pub database_url: String,

    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
    pub allow_mock_token: bool,

    pub cors_origins: Vec<String>,
    pub media_root: PathBuf,
    pub media_url: String,
    pub api_prefix: String,
    pub bind_address: String,

    pub seed_demo_data: bool,

    pub ai_service_url: Option<String>,
    pub ai_service_api_key: Option<String>,
    pub stripe_secret_key: Option<String>,
    pub stripe_publishable_key: Option<String>,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let algorithm = parse_algorithm(
            &get("ALGORITHM").unwrap_or_else(|| DEFAULT_ALGORITHM.to_string()),
        )?;

        let access_token_expire_minutes = match get("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "ACCESS_TOKEN_EXPIRE_MINUTES".to_string(),
                    reason: format!("expected a positive number of minutes, got '{}'", value),
                })?,
            None => DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
        };

        let cors_origins = get("BACKEND_CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            secret_key: required("SECRET_KEY")?,
            algorithm,
            access_token_expire_minutes,
            allow_mock_token: parse_flag("AUTH_ALLOW_MOCK_TOKEN", get("AUTH_ALLOW_MOCK_TOKEN"))?,
            cors_origins,
            media_root: PathBuf::from(
                get("MEDIA_ROOT").unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_string()),
            ),
            media_url: normalize_path_prefix(
                get("MEDIA_URL").unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string()),
            ),
            api_prefix: normalize_path_prefix(
                get("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string()),
            ),
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            seed_demo_data: parse_flag("SEED_DEMO_DATA", get("SEED_DEMO_DATA"))?,
            ai_service_url: get("AI_SERVICE_URL"),
            ai_service_api_key: get("AI_SERVICE_API_KEY"),
            stripe_secret_key: get("STRIPE_SECRET_KEY"),
            stripe_publishable_key: get("STRIPE_PUBLISHABLE_KEY"),
        })
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match value.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(ConfigError::InvalidEnvVar {
            name: "ALGORITHM".to_string(),
            reason: format!("unsupported signing algorithm '{}'", other),
        }),
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}

/// Ensures a leading slash and strips trailing ones, so `media/` becomes `/media`.
fn normalize_path_prefix(value: String) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by unit tests: in-memory database, fixed secret, sentinel off.
    pub fn for_test() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            secret_key: "test-secret-key".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expire_minutes: DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            allow_mock_token: false,
            cors_origins: vec!["http://localhost:3000".to_string()],
            media_root: std::env::temp_dir().join("zelux-test-media"),
            media_url: DEFAULT_MEDIA_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            seed_demo_data: false,
            ai_service_url: None,
            ai_service_api_key: None,
            stripe_secret_key: None,
            stripe_publishable_key: None,
        }
    }
}
