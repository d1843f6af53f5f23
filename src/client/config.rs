//! Client configuration options.

use std::time::Duration;

use crate::{ApiVersion, Environment, Error, Result};

/// Configuration for the Well Data Labs client.
///
/// # Example
///
/// ```
/// use welldatalabs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(30))
///     .with_base_url("https://staging.example.com")
///     .with_connection_close(true);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Which deployment to talk to
    pub environment: Environment,
    /// Per-request timeout, covering connect through the end of the body.
    ///
    /// This includes streamed per-second downloads; raise it for large jobs.
    pub timeout: Duration,
    /// Timeout for establishing a connection
    pub connect_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Value of the `api-version` header
    pub api_version: ApiVersion,
    /// Send `Connection: close` and keep no idle connections
    pub connection_close: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("welldatalabs-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            api_version: ApiVersion::default(),
            connection_close: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deployment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Point the client at another host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.environment = Environment::Custom(base_url.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Pin to a specific API version.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Close the connection after every request instead of keeping it alive.
    pub fn with_connection_close(mut self, close: bool) -> Self {
        self.connection_close = close;
        self
    }

    /// The base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.environment.api_base_url().trim_end_matches('/')
    }

    /// Check the configuration before building a client.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(self.base_url())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() {
            return Err(Error::Config(
                "Base URL must not carry a query string".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("Timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}
