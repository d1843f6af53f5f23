//! Sleeves service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::endpoint::Endpoint;
use crate::client::ClientInner;
use crate::models::{Sleeve, StageRange};
use crate::Result;

/// Service for sliding sleeves.
///
/// Sleeves are keyed by job and stage number; each record carries the
/// port and ball sizes and the seat inner diameter. An unknown id comes
/// back as an empty list.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
/// for sleeve in client.sleeves().get("10-203-04050-60-", None).await? {
///     println!("stage {}: seat {:?}", sleeve.stage_number, sleeve.seat_id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SleeveService {
    endpoint: Endpoint,
}

impl SleeveService {
    pub(crate) const PATH: &'static str = "sleeves";

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

    /// Get sleeves for a job id or well API number.
    pub async fn get(&self, id: &str, stages: Option<StageRange>) -> Result<Vec<Sleeve>> {
        self.endpoint.by_id(id, stages).await
    }
}
