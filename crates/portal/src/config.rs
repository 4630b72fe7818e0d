//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PORTAL_ACCESS_KEY` - Dealer gateway access key (min 24 chars, high entropy)
//!
//! ## Optional
//! - `PORTAL_HOST` - Bind address (default: 0.0.0.0)
//! - `PORTAL_PORT` - Listen port (default: 3000)
//! - `BACKEND_MODE` - Operations backend, `mock` or `live` (default: mock)
//! - `GEOCODER_BASE_URL` - ZIP resolver base URL (default: <https://api.zippopotam.us>)
//! - `GEOCODER_TIMEOUT_SECS` - ZIP resolver request timeout (default: 4)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (e.g., production)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_ACCESS_KEY_LENGTH: usize = 24;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Which operations backend serves the dealer gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendMode {
    /// Seeded in-memory data, no upstream calls.
    #[default]
    Mock,
    /// The factory ERP API.
    Live,
}

impl std::fmt::Display for BackendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mock => write!(f, "mock"),
            Self::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for BackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mock" => Ok(Self::Mock),
            "live" => Ok(Self::Live),
            _ => Err(format!("invalid backend mode: {s} (expected mock or live)")),
        }
    }
}

/// ZIP resolver configuration.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL of the Zippopotam.us-style API
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Portal application configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Which operations backend to use
    pub backend: BackendMode,
    /// ZIP resolver configuration
    pub geocoder: GeocoderConfig,
    /// Dealer gateway access key
    pub access_key: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the access key fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PORTAL_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORTAL_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_PORT".to_string(), e.to_string()))?;
        let backend = get_env_or_default("BACKEND_MODE", "mock")
            .parse::<BackendMode>()
            .map_err(|e| ConfigError::InvalidEnvVar("BACKEND_MODE".to_string(), e))?;

        let geocoder = GeocoderConfig::from_env()?;

        let access_key = get_validated_secret("PORTAL_ACCESS_KEY")?;
        validate_access_key_length(&access_key, "PORTAL_ACCESS_KEY")?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            backend,
            geocoder,
            access_key,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl GeocoderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("GEOCODER_BASE_URL", "https://api.zippopotam.us");
        let timeout_secs = get_env_or_default("GEOCODER_TIMEOUT_SECS", "4")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("GEOCODER_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "GEOCODER_TIMEOUT_SECS".to_string(),
                "must be at least 1 second".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the access key meets minimum length requirements.
fn validate_access_key_length(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_ACCESS_KEY_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_ACCESS_KEY_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real access keys have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated key."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_shannon_entropy_high() {
        // Random-looking string should have high entropy
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-access-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_changeme() {
        let result = validate_secret_strength("changeme123", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // High-entropy random string
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_access_key_too_short() {
        let secret = SecretString::from("short");
        let result = validate_access_key_length(&secret, "TEST_KEY");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_access_key_valid_length() {
        let secret = SecretString::from("a".repeat(24));
        let result = validate_access_key_length(&secret, "TEST_KEY");
        assert!(result.is_ok());
    }

    #[test]
    fn test_backend_mode_parse() {
        assert_eq!("mock".parse::<BackendMode>().unwrap(), BackendMode::Mock);
        assert_eq!("live".parse::<BackendMode>().unwrap(), BackendMode::Live);
        assert!("staging".parse::<BackendMode>().is_err());
        assert_eq!(BackendMode::Live.to_string(), "live");
    }

    #[test]
    fn test_socket_addr() {
        let config = PortalConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            backend: BackendMode::Mock,
            geocoder: GeocoderConfig {
                base_url: "https://api.zippopotam.us".to_string(),
                timeout: Duration::from_secs(4),
            },
            access_key: SecretString::from("x".repeat(24)),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
