//! HTTP client implementation for the Well Data Labs API.

use std::future::Future;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONNECTION};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::api::{
    CustomFlagService, DepthFeatureService, FluidsAndChemicalsService, JobHeaderService,
    JobSummaryService, PerSecDataService, PerforationService, PlugService, ProppantService,
    SleeveService, StageCommentService,
};
use crate::serialization::from_json_text;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::query::QueryParams;
use super::stream::ByteStream;

const API_VERSION_HEADER: &str = "api-version";

/// The main client for interacting with the Well Data Labs API.
///
/// Create one client and share it: it owns the connection pool, and cloning
/// it is cheap. Each accessor returns a service for one API resource.
///
/// # Example
///
/// ```no_run
/// use welldatalabs::WellDataClient;
///
/// # async fn example() -> welldatalabs::Result<()> {
/// let client = WellDataClient::new("your-api-key")?;
///
/// let headers = client.job_headers().get_all().await?;
/// if let Some(header) = headers.first() {
///     let plugs = client.plugs().get(header.job_id.as_str(), None).await?;
///     println!("{} plugs", plugs.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct WellDataClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) api_key: SecretString,
    pub(crate) config: ClientConfig,
}

impl WellDataClient {
    /// Create a client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::InvalidInput("API key must not be empty".to_string()));
        }
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if config.connection_close {
            headers.insert(CONNECTION, HeaderValue::from_static("close"));
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);
        if config.connection_close {
            builder = builder.pool_max_idle_per_host(0);
        }
        let http = builder.build()?;

        tracing::debug!(
            base_url = config.base_url(),
            api_version = %config.api_version,
            "created Well Data Labs client"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                api_key: SecretString::from(api_key),
                config,
            }),
        })
    }

    /// Get the job headers service.
    pub fn job_headers(&self) -> JobHeaderService {
        JobHeaderService::new(self.inner.clone())
    }

    /// Get the job summaries service.
    pub fn job_summaries(&self) -> JobSummaryService {
        JobSummaryService::new(self.inner.clone())
    }

    /// Get the depth features service.
    pub fn depth_features(&self) -> DepthFeatureService {
        DepthFeatureService::new(self.inner.clone())
    }

    /// Get the perforations service.
    pub fn perforations(&self) -> PerforationService {
        PerforationService::new(self.inner.clone())
    }

    /// Get the plugs service.
    pub fn plugs(&self) -> PlugService {
        PlugService::new(self.inner.clone())
    }

    /// Get the proppants service.
    pub fn proppants(&self) -> ProppantService {
        ProppantService::new(self.inner.clone())
    }

    /// Get the sleeves service.
    pub fn sleeves(&self) -> SleeveService {
        SleeveService::new(self.inner.clone())
    }

    /// Get the custom flags service.
    pub fn custom_flags(&self) -> CustomFlagService {
        CustomFlagService::new(self.inner.clone())
    }

    /// Get the fluids and chemicals service.
    pub fn fluids_and_chemicals(&self) -> FluidsAndChemicalsService {
        FluidsAndChemicalsService::new(self.inner.clone())
    }

    /// Get the stage comments service.
    pub fn stage_comments(&self) -> StageCommentService {
        StageCommentService::new(self.inner.clone())
    }

    /// Get the per-second data service (premium feature).
    pub fn per_sec_data(&self) -> PerSecDataService {
        PerSecDataService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Full request URL for an endpoint path and query.
    pub(crate) fn url(&self, path: &str, query: &QueryParams) -> String {
        format!(
            "{}/{}{}",
            self.config.base_url(),
            path.trim_start_matches('/'),
            query.encode()
        )
    }

    /// Build per-request headers with authentication and API version.
    pub(crate) fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
            .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            API_VERSION_HEADER,
            HeaderValue::from_str(self.config.api_version.as_str())
                .map_err(|_| Error::InvalidInput("Invalid API version".to_string()))?,
        );

        Ok(headers)
    }

    /// Issue a GET and return the response once its status is known to be
    /// a success.
    async fn send(
        &self,
        path: &str,
        query: &QueryParams,
        cancel: Option<&CancellationToken>,
    ) -> Result<reqwest::Response> {
        let url = self.url(path, query);
        let headers = self.build_headers()?;

        tracing::debug!(%url, api_version = %self.config.api_version, "GET");

        let response = cancellable(cancel, self.http.get(&url).headers(headers).send())
            .await?
            .map_err(Error::from_transport)?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "response received");

        if status.is_success() {
            return Ok(response);
        }

        let text = cancellable(cancel, response.text())
            .await?
            .unwrap_or_default();
        let err = Error::from_api_response(status.as_u16(), &text);
        tracing::warn!(%url, status = status.as_u16(), error = %err, "request failed");
        Err(err)
    }

    /// GET and return the body as text.
    pub(crate) async fn get_text(
        &self,
        path: &str,
        query: &QueryParams,
        cancel: Option<&CancellationToken>,
    ) -> Result<String> {
        let response = self.send(path, query, cancel).await?;
        cancellable(cancel, response.text())
            .await?
            .map_err(Error::from_transport)
    }

    /// GET and decode a JSON body. A blank body decodes to `T::default()`.
    pub(crate) async fn get_json<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        query: &QueryParams,
        cancel: Option<&CancellationToken>,
    ) -> Result<T> {
        let text = self.get_text(path, query, cancel).await?;
        from_json_text(&text)
    }

    /// GET and hand back the still-open body.
    pub(crate) async fn get_stream(
        &self,
        path: &str,
        query: &QueryParams,
        cancel: Option<&CancellationToken>,
    ) -> Result<ByteStream> {
        let response = self.send(path, query, cancel).await?;
        Ok(ByteStream::new(response, cancel.cloned()))
    }
}

/// Race `fut` against the cancellation token, if there is one.
pub(crate) async fn cancellable<F: Future>(
    cancel: Option<&CancellationToken>,
    fut: F,
) -> Result<F::Output> {
    match cancel {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(Error::Cancelled),
            out = fut => Ok(out),
        },
        None => Ok(fut.await),
    }
}

impl Clone for WellDataClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for WellDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WellDataClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
