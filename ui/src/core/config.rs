//! Site configuration: base URLs, the contact phone and the mailing-list endpoint.
//!
//! Defaults ship inside the binary (`ui/site.toml`); native launchers may point
//! [`SiteConfig::load`] at an override file.

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use serde::Deserialize;
use url::Url;

const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("`{field}` is not an absolute http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Product name interpolated into marketing copy.
    pub brand: String,
    pub site_url: String,
    pub blog_url: String,
    /// Site locale tags offered by the locale picker, first one is the default.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    pub phone: PhoneConfig,
    pub mail_api: MailApiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhoneConfig {
    /// Digits used in the `tel:` link.
    pub dial: String,
    /// Human-formatted number shown in the menu.
    pub display: String,
}

/// Where the subscription popup posts to, and which list it targets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MailApiConfig {
    pub url: String,
    /// Opaque classification tag passed through as the `type` field.
    #[serde(rename = "type")]
    pub kind: String,
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Compiled-in defaults. The embedded file is covered by tests, so a
    /// failure here only happens after someone edits `site.toml` by hand.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Reads the override at `path` when one is given. A broken override is
    /// logged and the embedded defaults are used instead.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            match Self::from_path(path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded site config override");
                    return Ok(config);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), "ignoring site config override: {err}");
                }
            }
        }
        Self::embedded()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_url("site_url", &self.site_url)?;
        check_url("blog_url", &self.blog_url)?;
        check_url("mail_api.url", &self.mail_api.url)?;
        Ok(())
    }
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string()]
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok};

    const SAMPLE: &str = r#"
brand = "Acme"
site_url = "https://www.example.com"
blog_url = "https://www.example.com/blog"

[phone]
dial = "+15550100"
display = "+1 555 0100"

[mail_api]
url = "https://api.example.com/subscribe"
type = "news"
"#;

    #[test]
    fn embedded_config_parses() {
        assert_ok!(SiteConfig::embedded());
    }

    #[test]
    fn sample_round_trips_fields() {
        let config = SiteConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.site_url, "https://www.example.com");
        assert_eq!(config.phone.display, "+1 555 0100");
        assert_eq!(config.mail_api.kind, "news");
        assert_eq!(config.locales, vec!["en".to_string()]);
    }

    #[test]
    fn embedded_config_offers_english_first() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.locales.first().map(String::as_str), Some("en"));
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let raw = SAMPLE.replace("https://api.example.com/subscribe", "/subscribe");
        let err = SiteConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                field: "mail_api.url",
                ..
            }
        ));
    }

    #[test]
    fn override_file_wins_over_embedded() {
        let path = std::env::temp_dir().join(format!("sitekit-override-{}.toml", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let config = SiteConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.brand, "Acme");
    }

    #[test]
    fn unreadable_override_falls_back_to_embedded() {
        let path = std::env::temp_dir().join("sitekit-does-not-exist.toml");
        assert!(matches!(
            SiteConfig::from_path(&path),
            Err(ConfigError::Read { .. })
        ));
        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config, SiteConfig::embedded().unwrap());
    }

    #[test]
    fn missing_section_is_a_parse_error() {
        let raw = SAMPLE.replace("[mail_api]", "[other]");
        assert_err!(SiteConfig::from_toml_str(&raw));
    }
}
