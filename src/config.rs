use anyhow::{Context, Result};
use url::Url;

/// Public production origin, used when no base URL is configured.
pub const PRODUCTION_BASE_URL: &str = "https://www.linguapress.com";

/// Local origin used for links generated in development.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,

    // Canonical URLs
    pub base_url: String,
    pub base_domain: String,

    // Email link fallbacks, in priority order after the request host
    pub deployment_url: Option<String>,
    pub app_base_url: Option<String>,
    pub public_site_url: Option<String>,

    // Listings
    pub page_size: u32,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = non_empty("SITE_BASE_URL")
            .unwrap_or_else(|| PRODUCTION_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = Url::parse(&base_url)
            .with_context(|| format!("SITE_BASE_URL is not a valid URL: {}", base_url))?;

        let base_domain = match non_empty("BASE_DOMAIN") {
            Some(domain) => domain.to_ascii_lowercase(),
            None => registrable_domain(
                parsed
                    .host_str()
                    .context("SITE_BASE_URL must include a host")?,
            ),
        };

        Ok(Self {
            environment: non_empty("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Production),

            base_url,
            base_domain,

            deployment_url: non_empty("DEPLOYMENT_URL"),
            app_base_url: non_empty("APP_BASE_URL"),
            public_site_url: non_empty("PUBLIC_SITE_URL"),

            page_size: non_empty("PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(10),

            port: non_empty("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

/// Drop a leading `www.` so that apex and www hosts both validate.
fn registrable_domain(host: &str) -> String {
    let host = host.to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).expect("defaults should load");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.base_url, PRODUCTION_BASE_URL);
        assert_eq!(config.base_domain, "linguapress.com");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.port, 8080);
        assert!(config.deployment_url.is_none());
        assert!(config.app_base_url.is_none());
        assert!(config.public_site_url.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = config_from(&[("SITE_BASE_URL", "https://news.example.org/")]).unwrap();
        assert_eq!(config.base_url, "https://news.example.org");
        assert_eq!(config.base_domain, "news.example.org");
    }

    #[test]
    fn test_explicit_base_domain_wins() {
        let config = config_from(&[
            ("SITE_BASE_URL", "https://www.example.org"),
            ("BASE_DOMAIN", "Example.ORG"),
        ])
        .unwrap();
        assert_eq!(config.base_domain, "example.org");
    }

    #[test]
    fn test_invalid_base_url_is_error() {
        let result = config_from(&[("SITE_BASE_URL", "not a url")]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("SITE_BASE_URL is not a valid URL"));
    }

    #[test]
    fn test_environment_parsing() {
        let dev = config_from(&[("APP_ENV", "development")]).unwrap();
        assert!(dev.environment.is_development());

        let prod = config_from(&[("APP_ENV", "production")]).unwrap();
        assert!(!prod.environment.is_development());

        let other = config_from(&[("APP_ENV", "staging")]).unwrap();
        assert_eq!(other.environment, Environment::Production);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = config_from(&[("DEPLOYMENT_URL", "  "), ("PAGE_SIZE", "")]).unwrap();
        assert!(config.deployment_url.is_none());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let config = config_from(&[("PAGE_SIZE", "0")]).unwrap();
        assert_eq!(config.page_size, 10);

        let config = config_from(&[("PAGE_SIZE", "24")]).unwrap();
        assert_eq!(config.page_size, 24);
    }

    #[test]
    fn test_registrable_domain() {
        assert_eq!(registrable_domain("www.example.com"), "example.com");
        assert_eq!(registrable_domain("example.com"), "example.com");
        assert_eq!(registrable_domain("WWW.Example.com"), "example.com");
    }
}
