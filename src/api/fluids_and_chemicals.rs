//! Fluids and chemicals service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{ChangeWindow, FluidsAndChemicals, StageRange};
use crate::Result;

/// Service for fluids and chemical additives pumped per stage.
pub struct FluidsAndChemicalsService {
    endpoint: Endpoint,
}

impl FluidsAndChemicalsService {
    pub(crate) const PATH: &'static str = "fluidsandchemicals";

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

    /// Get fluids and chemicals for the first jobs the server returns.
    pub async fn get_all(&self) -> Result<Vec<FluidsAndChemicals>> {
        self.endpoint.list().await
    }

    /// Get fluids and chemicals for a job id, well id or well API number.
    ///
    /// # Arguments
    ///
    /// * `id` - Job id, well id or well API number
    /// * `stages` - Optional stage-number range
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<FluidsAndChemicals>> {
        self.endpoint.by_id(id, stages).await
    }

    /// Get fluids and chemicals for jobs modified within a UTC window, optionally
    /// narrowed to a stage range.
    pub async fn by_change_utc(
        &self,
        window: ChangeWindow,
        stages: Option<StageRange>,
    ) -> Result<Vec<FluidsAndChemicals>> {
        self.endpoint.by_change_utc(window, stages).await
    }

    /// Get fluids and chemicals within a stage-number range across jobs.
    ///
    /// Either bound may be open.
    pub async fn by_stage_number(&self, stages: StageRange) -> Result<Vec<FluidsAndChemicals>> {
        self.endpoint.by_stage_number(stages).await
    }
}
