use anyhow::{bail, Context, Result};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Where skills, jobs and profiles are loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Seeded in-memory store (the mock dataset).
    Memory,
    /// External skills-verification API reached over HTTP.
    Http,
}

impl DataSource {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(DataSource::Memory),
            "http" => Ok(DataSource::Http),
            other => bail!("DATA_SOURCE must be 'memory' or 'http', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub data_source: DataSource,
    pub api_base_url: String,
    /// Default number of suggested jobs when the caller omits `max_jobs`.
    pub suggestion_limit: usize,
    /// When set, profile routes require an `x-wallet-address` header.
    pub require_wallet: bool,
    /// Address exposed by the local wallet provider, if any.
    pub wallet_address: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let suggestion_limit = std::env::var("SUGGESTION_LIMIT")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<usize>()
            .context("SUGGESTION_LIMIT must be a positive integer")?;
        if suggestion_limit == 0 {
            bail!("SUGGESTION_LIMIT must be at least 1");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_source: DataSource::parse(
                &std::env::var("DATA_SOURCE").unwrap_or_else(|_| "memory".to_string()),
            )?,
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            suggestion_limit,
            require_wallet: parse_bool(
                "REQUIRE_WALLET",
                &std::env::var("REQUIRE_WALLET").unwrap_or_else(|_| "false".to_string()),
            )?,
            wallet_address: std::env::var("WALLET_ADDRESS")
                .ok()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            data_source: DataSource::Memory,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            suggestion_limit: 3,
            require_wallet: false,
            wallet_address: None,
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{key} must be a boolean, got '{other}'"),
    }
}
