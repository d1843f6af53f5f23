//! Proppants service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{Proppant, StageRange};
use crate::Result;

/// Service for proppant pumped per stage.
///
/// One record per job, stage and proppant product.
pub struct ProppantService {
    endpoint: Endpoint,
}

impl ProppantService {
    pub(crate) const PATH: &'static str = "proppants";

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

    /// Get proppant records for a job id or well API number.
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<Proppant>> {
        self.endpoint.by_id(id, stages).await
    }
}
