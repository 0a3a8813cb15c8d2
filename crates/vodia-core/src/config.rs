//! Configuration module
//!
//! Process-wide configuration, loaded once at startup from environment
//! variables and treated as immutable for the process lifetime. Missing
//! Bunny Stream credentials are a startup-time fatal condition, never a
//! per-call error.

use std::env;

use crate::constants::{DEFAULT_EMBED_HOSTNAME, STREAM_API_BASE_URL};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// HTTP server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Bunny Stream library configuration.
#[derive(Clone, Debug)]
pub struct StreamConfig {
    /// Long-lived private credential. Never transmitted to clients directly;
    /// only its SHA-256 presence inside upload signatures leaves the process.
    pub api_key: String,
    /// Identifier of the target video library.
    pub library_id: String,
    /// Per-library CDN hostname used for delivery URLs.
    pub cdn_hostname: String,
    /// Hostname of the iframe-embeddable player.
    pub embed_hostname: String,
    /// Base URL of the management API.
    pub api_base_url: String,
    /// Timeout for management API calls, in seconds.
    pub upstream_timeout_secs: u64,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub stream: StreamConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let server = ServerConfig {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
        };

        let stream = StreamConfig {
            api_key: env::var("BUNNY_STREAM_API_KEY")
                .map_err(|_| anyhow::anyhow!("BUNNY_STREAM_API_KEY must be set"))?,
            library_id: env::var("BUNNY_STREAM_LIBRARY_ID")
                .map_err(|_| anyhow::anyhow!("BUNNY_STREAM_LIBRARY_ID must be set"))?,
            cdn_hostname: env::var("BUNNY_CDN_HOSTNAME")
                .map_err(|_| anyhow::anyhow!("BUNNY_CDN_HOSTNAME must be set"))?,
            embed_hostname: env::var("BUNNY_EMBED_HOSTNAME")
                .unwrap_or_else(|_| DEFAULT_EMBED_HOSTNAME.to_string()),
            api_base_url: env::var("BUNNY_API_BASE_URL")
                .unwrap_or_else(|_| STREAM_API_BASE_URL.to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let config = Config { server, stream };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.stream.api_key.trim().is_empty() {
            return Err(anyhow::anyhow!("BUNNY_STREAM_API_KEY cannot be empty"));
        }

        if self.stream.library_id.trim().is_empty() {
            return Err(anyhow::anyhow!("BUNNY_STREAM_LIBRARY_ID cannot be empty"));
        }

        if self.stream.cdn_hostname.contains("://") {
            return Err(anyhow::anyhow!(
                "BUNNY_CDN_HOSTNAME must be a bare hostname, without scheme"
            ));
        }

        if self.stream.embed_hostname.contains("://") {
            return Err(anyhow::anyhow!(
                "BUNNY_EMBED_HOSTNAME must be a bare hostname, without scheme"
            ));
        }

        if !self.stream.api_base_url.starts_with("http") {
            return Err(anyhow::anyhow!(
                "BUNNY_API_BASE_URL must be an http(s) URL"
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.server.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                port: 4000,
                cors_origins: vec!["*".to_string()],
                environment: "development".to_string(),
            },
            stream: StreamConfig {
                api_key: "test-api-key".to_string(),
                library_id: "585866".to_string(),
                cdn_hostname: "vz-907071cc-4fd.b-cdn.net".to_string(),
                embed_hostname: DEFAULT_EMBED_HOSTNAME.to_string(),
                api_base_url: STREAM_API_BASE_URL.to_string(),
                upstream_timeout_secs: 30,
            },
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = test_config();
        config.stream.api_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cdn_hostname_with_scheme_rejected() {
        let mut config = test_config();
        config.stream.cdn_hostname = "https://vz-907071cc-4fd.b-cdn.net".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut config = test_config();
        assert!(!config.is_production());
        config.server.environment = "Production".to_string();
        assert!(config.is_production());
        config.server.environment = "prod".to_string();
        assert!(config.is_production());
    }
}
