//! Stage comments service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{StageComment, StageRange};
use crate::Result;

/// Service for comments left on stages.
///
/// Comments are keyed by job and stage number. Some deployments answer an
/// unknown id with an empty body, which decodes to an empty list.
pub struct StageCommentService {
    endpoint: Endpoint,
}

impl StageCommentService {
    pub(crate) const PATH: &'static str = "stagecomments";

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

    /// Get stage comments for a job id or well API number.
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<StageComment>> {
        self.endpoint.by_id(id, stages).await
    }
}
