//! Job summaries service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{ChangeWindow, JobSummary, StageRange};
use crate::Result;

/// Service for tabular job summaries.
///
/// Each summary is a table with one job-total row and one row per stage.
/// Resolve columns through the metadata rather than by position.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
/// let summaries = client.job_summaries().get("10-203-04050-60-", None).await?;
/// for summary in &summaries {
///     if let Some(column) = summary.column("well_api") {
///         for value in summary.column_values(column) {
///             println!("{:?}", value);
///         }
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct JobSummaryService {
    endpoint: Endpoint,
}

impl JobSummaryService {
    pub(crate) const PATH: &'static str = "jobsummaries";

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

    /// Get job summaries for the first jobs the server returns.
    pub async fn get_all(&self) -> Result<Vec<JobSummary>> {
        self.endpoint.list().await
    }

    /// Get job summaries for a job id, well id or well API number.
    ///
    /// # Arguments
    ///
    /// * `id` - Job id, well id or well API number
    /// * `stages` - Optional stage-number range
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<JobSummary>> {
        self.endpoint.by_id(id, stages).await
    }

    /// Get job summaries for jobs modified within a UTC window, optionally
    /// narrowed to a stage range.
    pub async fn by_change_utc(
        &self,
        window: ChangeWindow,
        stages: Option<StageRange>,
    ) -> Result<Vec<JobSummary>> {
        self.endpoint.by_change_utc(window, stages).await
    }

    /// Get job summaries within a stage-number range across jobs.
    ///
    /// Either bound may be open.
    pub async fn by_stage_number(&self, stages: StageRange) -> Result<Vec<JobSummary>> {
        self.endpoint.by_stage_number(stages).await
    }
}
