//! Error types for the Well Data Labs API client.
//!
//! Every fallible operation in this crate returns [`Error`]. Argument problems
//! are reported before any request is sent; everything else comes from the
//! transport, the server, or the JSON decoder.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Well Data Labs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Well Data Labs API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed for a reason other than connect or timeout
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed on a non-empty body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success status
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided message, or one synthesized from the status
        message: String,
        /// Raw response body, `Null` when it was not JSON
        body: Value,
    },

    /// The server could not be reached (DNS, refused, reset)
    #[error("Connection failure: {0}")]
    Connection(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// The caller cancelled the operation
    #[error("Request cancelled")]
    Cancelled,

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Local I/O failed while writing a download
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if the server answered 404 for the requested resource.
    ///
    /// Lookups of an unknown job id either come back empty or fail with
    /// this error, depending on the endpoint.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
    /// let plugs = match client.plugs().get("no-such-job", None).await {
    ///     Ok(plugs) => plugs,
    ///     Err(e) if e.is_not_found() => Vec::new(),
    ///     Err(e) => return Err(e),
    /// };
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the failure happened on the wire: a non-success
    /// status, a connection failure, or a timeout.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Error::Api { .. } | Error::Connection(_) | Error::Timeout | Error::Http(_)
        )
    }

    /// The HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a status and raw response text.
    ///
    /// The message comes from a top-level `message` string when the body is
    /// JSON and has one.
    pub(crate) fn from_api_response(status: u16, text: &str) -> Self {
        let body: Value = serde_json::from_str(text).unwrap_or(Value::Null);

        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.trim().is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("API returned a status code of {}", status));

        Error::Api {
            status,
            message,
            body,
        }
    }

    /// Classify a `reqwest` failure into connection, timeout, or generic HTTP.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else {
            Error::Http(err)
        }
    }
}
