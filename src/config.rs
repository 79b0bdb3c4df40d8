//! Server configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub website_dir: PathBuf,
    /// Mount prefix for the site. Empty for root, otherwise `/name` with no
    /// trailing slash.
    pub base_path: String,
    pub contact_endpoint: String,
    pub contact_timeout: Duration,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WEBSITE_DIR`: default `website/` next to this manifest
    /// - `BASE_PATH`: default `/`
    /// - `CONTACT_ENDPOINT`: default spreadsheet script URL
    /// - `CONTACT_TIMEOUT_SECS`: default 15
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let website_dir = lookup("WEBSITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("website"));
        let base_path = normalize_base_path(lookup("BASE_PATH").as_deref().unwrap_or("/"))?;

        let contact_endpoint = lookup("CONTACT_ENDPOINT")
            .unwrap_or_else(|| client::net::contact::DEFAULT_ENDPOINT.to_owned())
            .trim()
            .to_owned();
        if !(contact_endpoint.starts_with("https://") || contact_endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid { var: "CONTACT_ENDPOINT", value: contact_endpoint });
        }

        let timeout_secs = parse_or("CONTACT_TIMEOUT_SECS", lookup("CONTACT_TIMEOUT_SECS"), DEFAULT_CONTACT_TIMEOUT_SECS)?;

        Ok(Self {
            port,
            website_dir,
            base_path,
            contact_endpoint,
            contact_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// `path` under the configured base, e.g. `/api/contact` →
    /// `/portfolio/api/contact`.
    pub fn mounted(&self, path: &str) -> String {
        format!("{}{path}", self.base_path)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

/// `"/"`, `""` → `""`; `"portfolio/"` → `"/portfolio"`.
pub fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.chars().any(|c| c.is_whitespace() || matches!(c, '?' | '#' | '{' | '}')) {
        return Err(ConfigError::Invalid { var: "BASE_PATH", value: raw.to_owned() });
    }
    if trimmed.is_empty() { Ok(String::new()) } else { Ok(format!("/{trimmed}")) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
