//! Network constants for the Tradebyte REST API.

/// Production REST API host.
pub const PRODUCTION_HOST: &str = "rest.trade-server.net";

/// Sandbox (staging) REST API host.
pub const SANDBOX_HOST: &str = "reststaging.tradebyte.com";

/// Which Tradebyte environment a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn from_sandbox_flag(is_sandbox: bool) -> Self {
        if is_sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    pub fn host(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_HOST,
            Environment::Sandbox => SANDBOX_HOST,
        }
    }

    /// `https://<host>`, without the account scope.
    pub fn origin(&self) -> String {
        format!("https://{}", self.host())
    }
}
