use anyhow::{Context, Result};
use url::Url;

use super::config_model::{Api, DotEnvyConfig};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

    let api = Api {
        base_url: Url::parse(&base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: {}", base_url))?,
    };

    Ok(DotEnvyConfig { api })
}
