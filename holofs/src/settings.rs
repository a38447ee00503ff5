use anyhow::{Result, anyhow};
use client::config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use config::{Config, Environment, File, Source};
use tracing::info;

pub const CONFIG_FILE: &str = "holofs";
pub const ENV_PREFIX: &str = "HOLOFS";
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

pub struct Settings {
    pub client: ClientConfig,
}

impl Settings {
    /// Reads `holofs.{toml,yaml,json,...}` if present, then `HOLOFS_*`
    /// variables, falling back to `ANTHROPIC_API_KEY` for the key.
    pub fn load() -> Result<Self> {
        Self::from_sources(
            File::with_name(CONFIG_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX),
            std::env::var(API_KEY_ENV).ok(),
        )
    }

    /// Environment values override the file.
    pub fn from_sources<F>(
        file: F,
        env: Environment,
        fallback_api_key: Option<String>,
    ) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        let config = Self::builder()?.add_source(file).add_source(env).build()?;

        Self::from_config(&config, fallback_api_key)
    }

    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("api_version", DEFAULT_API_VERSION)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?)
    }

    pub fn from_config(config: &Config, fallback_api_key: Option<String>) -> Result<Self> {
        let api_key = config
            .get::<String>("api_key")
            .ok()
            .or(fallback_api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured: set {}_API_KEY, {} or api_key in {}.toml",
                    ENV_PREFIX,
                    API_KEY_ENV,
                    CONFIG_FILE
                )
            })?;

        let client = ClientConfig {
            api_key,
            api_version: config.get("api_version")?,
            base_url: config.get("base_url")?,
            timeout_secs: config.get("timeout_secs")?,
        };

        info!(
            "base_url: {}, api_version: {}, timeout_secs: {}",
            client.base_url, client.api_version, client.timeout_secs
        );

        Ok(Self { client })
    }
}
