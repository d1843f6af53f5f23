//! Primitive types and newtypes for type-safe API interactions.
//!
//! Job and well identifiers are GUIDs on the wire, but lookups also accept a
//! well API number in the same path position, so they are kept as strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed job identifier.
///
/// # Example
///
/// ```
/// use welldatalabs::JobId;
///
/// let job = JobId::new("8eeefc91-8b9e-403b-ad27-1d53f339f8a3");
/// println!("Job: {}", job);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Create a new job id from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the job id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A strongly-typed well identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WellId(String);

impl WellId {
    /// Create a new well id.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the well id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WellId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WellId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// API version sent in the `api-version` request header.
///
/// Well Data Labs versions its API by header rather than by URL. The only
/// published version is `"1"`, which is the default.
///
/// # Example
///
/// ```
/// use welldatalabs::ApiVersion;
///
/// let version = ApiVersion::new("1").expect("valid version");
/// assert_eq!(version, ApiVersion::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Version `1` of the API.
    pub const V1: &'static str = "1";

    /// Create a new API version, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is empty or contains anything other
    /// than ASCII letters, digits and dots.
    pub fn new(version: &str) -> crate::Result<Self> {
        let version = version.trim();
        if version.is_empty() {
            return Err(crate::Error::InvalidInput(
                "API version must not be empty".to_string(),
            ));
        }

        if !version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.')
        {
            return Err(crate::Error::InvalidInput(format!(
                "Invalid API version format: {}",
                version
            )));
        }

        Ok(ApiVersion(version.to_string()))
    }

    /// Get the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        ApiVersion(Self::V1.to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Well Data Labs deployment to talk to.
///
/// # Example
///
/// ```
/// use welldatalabs::Environment;
///
/// assert_eq!(Environment::Production.api_base_url(), "https://api.welldatalabs.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    /// The public production API.
    #[default]
    Production,
    /// Any other host, e.g. a staging deployment or a local fixture server.
    Custom(String),
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &str {
        match self {
            Environment::Production => "https://api.welldatalabs.com",
            Environment::Custom(url) => url,
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Custom(url) => write!(f, "custom({})", url),
        }
    }
}
