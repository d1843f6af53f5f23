//! Depth features service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{ChangeWindow, DepthFeature, StageRange};
use crate::Result;

/// Service for depth features: perforations, sleeves and plugs flattened
/// into one record shape.
///
/// # Example
///
/// ```no_run
/// use welldatalabs::StageRange;
/// use rust_decimal::Decimal;
///
/// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
/// let stages = StageRange::between(Decimal::ONE, Decimal::from(100));
/// let features = client.depth_features().by_stage_number(stages).await?;
/// println!("{} depth features", features.len());
/// # Ok(())
/// # }
/// ```
pub struct DepthFeatureService {
    endpoint: Endpoint,
}

impl DepthFeatureService {
    pub(crate) const PATH: &'static str = "depthfeatures";

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

    /// Get depth features for the first jobs the server returns.
    pub async fn get_all(&self) -> Result<Vec<DepthFeature>> {
        self.endpoint.list().await
    }

    /// Get depth features for a job id, well id or well API number.
    ///
    /// # Arguments
    ///
    /// * `id` - Job id, well id or well API number
    /// * `stages` - Optional stage-number range
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<DepthFeature>> {
        self.endpoint.by_id(id, stages).await
    }

    /// Get depth features for jobs modified within a UTC window, optionally
    /// narrowed to a stage range.
    pub async fn by_change_utc(
        &self,
        window: ChangeWindow,
        stages: Option<StageRange>,
    ) -> Result<Vec<DepthFeature>> {
        self.endpoint.by_change_utc(window, stages).await
    }

    /// Get depth features within a stage-number range across jobs.
    ///
    /// Either bound may be open.
    pub async fn by_stage_number(&self, stages: StageRange) -> Result<Vec<DepthFeature>> {
        self.endpoint.by_stage_number(stages).await
    }
}
