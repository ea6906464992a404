use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::wizard::validation::{ValidationMode, ValidationModeError};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub generator: GeneratorConfig,
    pub wizard: WizardConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let base_url = env::var("GENERATOR_BASE_URL")
            .unwrap_or_else(|_| GeneratorConfig::DEFAULT_BASE_URL.to_string());
        let base_url = GeneratorConfig::normalize_base_url(&base_url)?;
        let timeout_secs = env::var("GENERATOR_TIMEOUT_SECS")
            .unwrap_or_else(|_| GeneratorConfig::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout)?;

        let validation_mode = env::var("WIZARD_VALIDATION_MODE")
            .unwrap_or_else(|_| ValidationMode::default().label().to_string())
            .parse::<ValidationMode>()
            .map_err(|source| ConfigError::InvalidValidationMode { source })?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            generator: GeneratorConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            wizard: WizardConfig {
                validation_mode,
                sample_enabled: environment != AppEnvironment::Production,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the document generator lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl GeneratorConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Self::normalize_base_url(base_url)?,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        })
    }

    fn normalize_base_url(value: &str) -> Result<String, ConfigError> {
        let trimmed = value.trim().trim_end_matches('/');
        match reqwest::Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(trimmed.to_string()),
            _ => Err(ConfigError::InvalidGeneratorUrl {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WizardConfig {
    pub validation_mode: ValidationMode,
    /// Whether the sample-data shortcut is offered.
    pub sample_enabled: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidGeneratorUrl { value: String },
    InvalidTimeout,
    InvalidValidationMode { source: ValidationModeError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidGeneratorUrl { value } => {
                write!(f, "GENERATOR_BASE_URL must be an http(s) URL, got '{value}'")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "GENERATOR_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::InvalidValidationMode { source } => {
                write!(f, "WIZARD_VALIDATION_MODE is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidValidationMode { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidGeneratorUrl { .. }
            | ConfigError::InvalidTimeout => None,
        }
    }
}
