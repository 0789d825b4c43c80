//! Server configuration from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_ASSET_ROOT: &str = "./public";
pub const DEFAULT_BASE_URL: &str = "https://little-lost-note.vercel.app";

/// Runtime settings for the host shell
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`LOSTNOTE_BIND`)
    pub bind: SocketAddr,

    /// Directory served at `/assets` (`LOSTNOTE_ASSET_ROOT`)
    pub asset_root: PathBuf,

    /// Canonical site URL for metadata (`LOSTNOTE_BASE_URL`)
    pub base_url: String,

    /// Offer the about overlay (`LOSTNOTE_SHOW_ABOUT=true`)
    pub show_about: bool,

    /// JSON content file replacing the bundled story (`LOSTNOTE_CONTENT`)
    pub content_path: Option<PathBuf>,

    /// `*` or a comma-separated origin list (`LOSTNOTE_CORS_ORIGINS`)
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            base_url: DEFAULT_BASE_URL.to_string(),
            show_about: false,
            content_path: None,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Read settings from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind = lookup("LOSTNOTE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse()
            .with_context(|| format!("Invalid LOSTNOTE_BIND address: {}", bind))?;

        let base_url = lookup("LOSTNOTE_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            bind,
            asset_root: lookup("LOSTNOTE_ASSET_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT)),
            base_url,
            show_about: lookup("LOSTNOTE_SHOW_ABOUT").as_deref() == Some("true"),
            content_path: lookup("LOSTNOTE_CONTENT").map(PathBuf::from),
            cors_origins: lookup("LOSTNOTE_CORS_ORIGINS"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.show_about);
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_show_about_requires_exact_true() {
        let on = ServerConfig::from_lookup(lookup(&[("LOSTNOTE_SHOW_ABOUT", "true")])).unwrap();
        assert!(on.show_about);
        let off = ServerConfig::from_lookup(lookup(&[("LOSTNOTE_SHOW_ABOUT", "1")])).unwrap();
        assert!(!off.show_about);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ServerConfig::from_lookup(lookup(&[(
            "LOSTNOTE_BASE_URL",
            "https://example.com/",
        )]))
        .unwrap();
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn test_invalid_bind() {
        let err = ServerConfig::from_lookup(lookup(&[("LOSTNOTE_BIND", "nowhere")])).unwrap_err();
        assert!(err.to_string().contains("LOSTNOTE_BIND"));
    }
}
