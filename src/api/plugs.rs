//! Plugs service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{Plug, StageRange};
use crate::Result;

/// Service for plugs set between stages.
///
/// # Example
///
/// ```no_run
/// use welldatalabs::StageRange;
/// use rust_decimal::Decimal;
///
/// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
/// let plugs = client
///     .plugs()
///     .get("8eeefc91-8b9e-403b-ad27-1d53f339f8a3", Some(StageRange::up_to(Decimal::TEN)))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct PlugService {
    endpoint: Endpoint,
}

impl PlugService {
    pub(crate) const PATH: &'static str = "plugs";

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

    /// Get plugs for a job id or well API number.
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<Plug>> {
        self.endpoint.by_id(id, stages).await
    }
}
