//! Job headers service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{ChangeWindow, JobHeader, StageRange};
use crate::Result;

/// Service for job header lookups.
///
/// Job headers are the entry point to the rest of the API: they carry the
/// job id, well id and well API number that every other resource is keyed
/// by.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
/// // Look a job up by well API number
/// let headers = client.job_headers().get("10-203-04050-60-", None).await?;
/// for header in headers {
///     println!("{} ({:?})", header.job_id, header.well_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct JobHeaderService {
    endpoint: Endpoint,
}

impl JobHeaderService {
    pub(crate) const PATH: &'static str = "jobheaders";

    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self {
            endpoint: Endpoint::new(inner, Self::PATH),
        }
    }

    /// Abort in-flight requests from this service when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.endpoint.set_cancellation(token);
        self
    }

    /// Get the first page of job headers the server returns.
    ///
    /// The server truncates this list; it is not paginated by the client.
    pub async fn get_all(&self) -> Result<Vec<JobHeader>> {
        self.endpoint.list().await
    }

    /// Get job headers for a job id, well id or well API number.
    ///
    /// A job id yields at most one header; a well API number may yield
    /// several.
    ///
    /// # Arguments
    ///
    /// * `id` - Job id, well id or well API number
    /// * `stages` - Optional stage-number range
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<JobHeader>> {
        self.endpoint.by_id(id, stages).await
    }

    /// Get job headers for jobs modified within a UTC window.
    ///
    /// An open `to` bound means "modified since `from`"; an open `from`
    /// bound means "modified before `to`".
    pub async fn by_change_utc(
        &self,
        window: ChangeWindow,
        stages: Option<StageRange>,
    ) -> Result<Vec<JobHeader>> {
        self.endpoint.by_change_utc(window, stages).await
    }
}
