//! Perforations service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{Perforation, StageRange};
use crate::Result;

/// Service for perforation intervals of a job.
///
/// Intervals are keyed by job and stage number, with `ordinal` ordering
/// the intervals within a stage.
pub struct PerforationService {
    endpoint: Endpoint,
}

impl PerforationService {
    pub(crate) const PATH: &'static str = "perforations";

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

    /// Get perforation intervals for a job id or well API number.
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<Perforation>> {
        self.endpoint.by_id(id, stages).await
    }
}
