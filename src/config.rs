use std::fmt;

use thiserror::Error;

/// Base URL used when no [`ConfigOption::BaseUrl`] is given.
pub const DEFAULT_BASE_URL: &str = "https://huggingface.co/api";

/// Environment variable holding the API token read by [`ClientConfig::from_env`].
pub const TOKEN_ENV: &str = "HUB_API_TOKEN";

/// Optional environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "HUB_API_BASE_URL";

/// Reasons a client configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("option #{index} rejected: {field} should not be empty")]
    EmptyValue { index: usize, field: &'static str },

    #[error("api key should not be empty")]
    MissingCredential,

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

/// Resolved client settings. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    credential: String,
    base_url: String,
}

/// A single override applied on top of the default configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
    /// Replace the bearer token.
    Credential(String),
    /// Replace the API root, e.g. `http://localhost:8080/api`.
    BaseUrl(String),
}

impl ConfigOption {
    pub fn credential(value: impl Into<String>) -> Self {
        ConfigOption::Credential(value.into())
    }

    pub fn base_url(value: impl Into<String>) -> Self {
        ConfigOption::BaseUrl(value.into())
    }

    fn apply(self, index: usize, draft: &mut ClientConfig) -> Result<(), ConfigError> {
        let (field, value, slot) = match self {
            ConfigOption::Credential(v) => ("api key", v, &mut draft.credential),
            ConfigOption::BaseUrl(v) => ("base URL", v, &mut draft.base_url),
        };
        if value.is_empty() {
            return Err(ConfigError::EmptyValue { index, field });
        }
        *slot = value;
        Ok(())
    }
}

impl ClientConfig {
    /// Build a configuration from a credential and an ordered list of options.
    ///
    /// Options are applied front to back; the first one that fails validation
    /// aborts resolution and the remaining options are never looked at.
    pub fn resolve<I>(credential: impl Into<String>, options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        let mut draft = ClientConfig {
            credential: credential.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        for (index, option) in options.into_iter().enumerate() {
            option.apply(index, &mut draft)?;
        }
        if draft.credential.is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(draft)
    }

    /// Load the configuration from `HUB_API_TOKEN` and, if set, `HUB_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| ConfigError::MissingEnv(TOKEN_ENV))?;
        let options = std::env::var(BASE_URL_ENV)
            .ok()
            .map(ConfigOption::BaseUrl);
        Self::resolve(token, options)
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credential", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = ClientConfig::resolve("apiKey", []).unwrap();
        assert_eq!(config.credential(), "apiKey");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_applies_options_in_order() {
        let config = ClientConfig::resolve(
            "apiKey",
            [
                ConfigOption::base_url("customURL"),
                ConfigOption::credential("customApiKey"),
                ConfigOption::base_url("http://localhost:9000/api"),
            ],
        )
        .unwrap();
        assert_eq!(config.credential(), "customApiKey");
        assert_eq!(config.base_url(), "http://localhost:9000/api");
    }

    #[test]
    fn test_resolve_stops_at_first_invalid_option() {
        let err = ClientConfig::resolve(
            "apiKey",
            [
                ConfigOption::credential("other"),
                ConfigOption::base_url(""),
                ConfigOption::credential(""),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyValue {
                index: 1,
                field: "base URL"
            }
        );
        assert_eq!(err.to_string(), "option #1 rejected: base URL should not be empty");
    }

    #[test]
    fn test_resolve_rejects_empty_credential_option() {
        let err = ClientConfig::resolve("apiKey", [ConfigOption::credential("")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyValue {
                index: 0,
                field: "api key"
            }
        );
    }

    #[test]
    fn test_resolve_requires_credential() {
        assert_eq!(
            ClientConfig::resolve("", []).unwrap_err(),
            ConfigError::MissingCredential
        );
        // an option can still supply it
        let config = ClientConfig::resolve("", [ConfigOption::credential("late")]).unwrap();
        assert_eq!(config.credential(), "late");
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = ClientConfig::resolve("hf_secret", []).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("hf_secret"));
        assert!(printed.contains(DEFAULT_BASE_URL));
    }
}
