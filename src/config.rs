//! Client configuration: account identifier, credentials, environment.

use std::fmt;

use crate::error::ConfigError;
use crate::network::Environment;

/// Environment variable holding the account identifier.
pub const ENV_HNR: &str = "TRADEBYTE_HNR";
/// Environment variable holding the API user name.
pub const ENV_USER: &str = "TRADEBYTE_USER";
/// Environment variable holding the API password.
pub const ENV_PASS: &str = "TRADEBYTE_PASS";
/// Environment variable selecting the sandbox host (`1`/`true`/`yes`).
pub const ENV_SANDBOX: &str = "TRADEBYTE_SANDBOX";

/// Validated, immutable client configuration.
///
/// `hnr` is the merchant account identifier issued by Tradebyte; it becomes
/// the first path segment of every request.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    hnr: String,
    user: String,
    pass: String,
    environment: Environment,
}

impl ClientConfig {
    /// Build a configuration for the production host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if any field is empty.
    pub fn new(
        hnr: impl Into<String>,
        user: impl Into<String>,
        pass: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            hnr: hnr.into(),
            user: user.into(),
            pass: pass.into(),
            environment: Environment::Production,
        };
        config.validate()?;
        Ok(config)
    }

    /// Switch to the sandbox (`true`) or production (`false`) host.
    pub fn with_sandbox(mut self, is_sandbox: bool) -> Self {
        self.environment = Environment::from_sandbox_flag(is_sandbox);
        self
    }

    /// Load from `TRADEBYTE_HNR`, `TRADEBYTE_USER`, `TRADEBYTE_PASS` and the
    /// optional `TRADEBYTE_SANDBOX`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        let sandbox = matches!(
            var(ENV_SANDBOX).trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        );
        Ok(Self::new(var(ENV_HNR), var(ENV_USER), var(ENV_PASS))?.with_sandbox(sandbox))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("hnr", &self.hnr), ("user", &self.user), ("pass", &self.pass)] {
            if value.is_empty() {
                return Err(ConfigError::MissingCredentials { field });
            }
        }
        Ok(())
    }

    pub fn hnr(&self) -> &str {
        &self.hnr
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub(crate) fn pass(&self) -> &str {
        &self.pass
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn is_sandbox(&self) -> bool {
        self.environment == Environment::Sandbox
    }
}

// Keep the password out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("hnr", &self.hnr)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_production() {
        let config = ClientConfig::new("1234", "api", "secret").unwrap();
        assert!(!config.is_sandbox());
        assert_eq!(config.environment().host(), "rest.trade-server.net");
    }

    #[test]
    fn test_sandbox_switch() {
        let config = ClientConfig::new("1234", "api", "secret")
            .unwrap()
            .with_sandbox(true);
        assert!(config.is_sandbox());
        assert_eq!(config.environment().host(), "reststaging.tradebyte.com");
    }

    #[test]
    fn test_missing_fields_rejected() {
        let cases = [
            ("", "api", "secret", "hnr"),
            ("1234", "", "secret", "user"),
            ("1234", "api", "", "pass"),
        ];
        for (hnr, user, pass, expected) in cases {
            match ClientConfig::new(hnr, user, pass) {
                Err(ConfigError::MissingCredentials { field }) => assert_eq!(field, expected),
                other => panic!("expected missing {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_whitespace_fields_are_present() {
        let config = ClientConfig::new(" ", " ", " ").unwrap();
        assert_eq!(config.hnr(), " ");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ClientConfig::new("1234", "api", "hunter2").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
