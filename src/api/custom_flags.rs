//! Custom flags service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{ChangeWindow, CustomFlag, StageRange};
use crate::Result;

/// Service for user-defined flags on the job timeline.
///
/// # Example
///
/// ```no_run
/// use chrono::{Duration, Utc};
/// use welldatalabs::ChangeWindow;
///
/// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
/// let window = ChangeWindow::since(Utc::now() - Duration::days(30));
/// let flags = client.custom_flags().by_change_utc(window, None).await?;
/// for flag in flags {
///     println!("{}: {:?}", flag.job_id, flag.comment_text);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CustomFlagService {
    endpoint: Endpoint,
}

impl CustomFlagService {
    pub(crate) const PATH: &'static str = "customflags";

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

    /// Get custom flags for the first jobs the server returns.
    pub async fn get_all(&self) -> Result<Vec<CustomFlag>> {
        self.endpoint.list().await
    }

    /// Get custom flags for a job id, well id or well API number.
    ///
    /// # Arguments
    ///
    /// * `id` - Job id, well id or well API number
    /// * `stages` - Optional stage-number range
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<CustomFlag>> {
        self.endpoint.by_id(id, stages).await
    }

    /// Get custom flags for jobs modified within a UTC window, optionally
    /// narrowed to a stage range.
    pub async fn by_change_utc(
        &self,
        window: ChangeWindow,
        stages: Option<StageRange>,
    ) -> Result<Vec<CustomFlag>> {
        self.endpoint.by_change_utc(window, stages).await
    }

    /// Get custom flags within a stage-number range across jobs.
    ///
    /// Either bound may be open.
    pub async fn by_stage_number(&self, stages: StageRange) -> Result<Vec<CustomFlag>> {
        self.endpoint.by_stage_number(stages).await
    }
}
