//! Configuration module
//!
//! Environment-driven configuration for the API server: listen port, CORS,
//! and the upstream validation-service endpoint.

use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_URL: &str = "http://localhost:5000/hackathon/validate-docs";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    cors_origins: Vec<String>,
    environment: String,
    upstream_url: String,
    upstream_timeout_seconds: u64,
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

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let upstream_url =
            env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Ok(Self {
            server_port,
            cors_origins,
            environment,
            upstream_url,
            upstream_timeout_seconds,
        })
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    pub fn upstream_timeout_seconds(&self) -> u64 {
        self.upstream_timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(environment: &str, cors: &str) -> Config {
        Config {
            server_port: 3000,
            cors_origins: cors.split(',').map(str::to_string).collect(),
            environment: environment.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }

    #[test]
    fn production_detection_is_case_insensitive() {
        assert!(test_config("Production", "https://example.com").is_production());
        assert!(test_config("prod", "https://example.com").is_production());
        assert!(!test_config("development", "*").is_production());
    }

    #[test]
    fn accessors_expose_upstream_settings() {
        let config = test_config("development", "*");
        assert_eq!(config.upstream_url(), DEFAULT_UPSTREAM_URL);
        assert_eq!(config.upstream_timeout_seconds(), 30);
        assert_eq!(config.server_port(), 3000);
    }
}
