use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing — a missing scoring
/// credential is a configuration error, never discovered mid-request.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_pool_size: u32,
    pub ai_gateway_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_pool_size: std::env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_POOL_SIZE must be a positive integer")?,
            ai_gateway_api_key: require_env("AI_GATEWAY_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single env-touching test so parallel test threads never race on vars.
    #[test]
    fn test_from_env_requires_credential_and_applies_defaults() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("AI_GATEWAY_API_KEY");
        assert!(Config::from_env().is_err());

        std::env::set_var("DATABASE_URL", "postgres://localhost/mockpro");
        std::env::set_var("AI_GATEWAY_API_KEY", "test-key");
        std::env::remove_var("DATABASE_POOL_SIZE");
        std::env::remove_var("PORT");
        std::env::remove_var("RUST_LOG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_pool_size, 10);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }
}
