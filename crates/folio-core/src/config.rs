//! Site configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Top-level configuration for the site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Contact feature settings.
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used for the document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Contact feature configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Mailer API endpoint that receives form submissions.
    #[serde(default = "default_mailer_url")]
    pub mailer_url: String,

    /// Published contact address shown in the info panel.
    #[serde(default = "default_email")]
    pub email: String,

    /// Human-readable location line.
    #[serde(default)]
    pub location: String,

    /// Label for the timezone shown next to the clock.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

// Default value functions
fn default_title() -> String {
    "Folio".to_string()
}

fn default_mailer_url() -> String {
    "https://mailer-api-mu.vercel.app/api/mailer".to_string()
}

fn default_email() -> String {
    "hello@example.com".to_string()
}

fn default_timezone() -> String {
    "Central Standard Time".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
            author: None,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            mailer_url: default_mailer_url(),
            email: default_email(),
            location: String::new(),
            timezone: default_timezone(),
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string.
    ///
    /// The app embeds its `site.toml` at build time, so there is no file
    /// system involved on the WASM side.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.contact.mailer_url.is_empty() {
            return Err(CoreError::config("contact.mailer_url cannot be empty"));
        }

        if self.contact.mailer_url.ends_with('/') {
            tracing::warn!("contact.mailer_url should not have a trailing slash");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_input() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.site.title, "Folio");
        assert_eq!(
            config.contact.mailer_url,
            "https://mailer-api-mu.vercel.app/api/mailer"
        );
        assert_eq!(config.contact.timezone, "Central Standard Time");
        assert!(config.contact.location.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            [site]
            title = "My Site"
            description = "Portfolio and writing"

            [contact]
            mailer_url = "https://mailer.example.com/api/send"
            email = "me@example.com"
            location = "Austin, Texas - USA"
            timezone = "Central Standard Time"
        "#;

        let config = Config::from_toml_str(raw).unwrap();
        assert_eq!(config.site.title, "My Site");
        assert_eq!(config.site.description.as_deref(), Some("Portfolio and writing"));
        assert_eq!(config.contact.mailer_url, "https://mailer.example.com/api/send");
        assert_eq!(config.contact.email, "me@example.com");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let raw = r#"
            [contact]
            email = "me@example.com"
        "#;

        let config = Config::from_toml_str(raw).unwrap();
        assert_eq!(config.contact.email, "me@example.com");
        assert_eq!(
            config.contact.mailer_url,
            "https://mailer-api-mu.vercel.app/api/mailer"
        );
        assert_eq!(config.site.title, "Folio");
    }

    #[test]
    fn test_empty_mailer_url_is_rejected() {
        let raw = r#"
            [contact]
            mailer_url = ""
        "#;

        let err = Config::from_toml_str(raw).unwrap_err();
        assert!(err.to_string().contains("mailer_url"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = Config::from_toml_str("site = nope").unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
