//! Per-second treatment data service.
//!
//! Per-second data is a premium feature and is far larger than any other
//! resource. The server answers with delimited text: a row of channel
//! names, a row of units, then one row per sample. The body is streamed to
//! a writer or a file and never buffered whole.

use std::path::PathBuf;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;

use super::endpoint::require_id;
use crate::client::{format_stage_number, ByteStream, ClientInner, QueryParams};
use crate::models::StageRange;
use crate::Result;

/// What to download.
///
/// # Example
///
/// ```
/// use welldatalabs::api::PerSecDataRequest;
/// use welldatalabs::StageRange;
/// use rust_decimal::Decimal;
///
/// let request = PerSecDataRequest::new("8eeefc91-8b9e-403b-ad27-1d53f339f8a3")
///     .with_stages(StageRange::between(Decimal::ONE, Decimal::TWO))
///     .include_all_channels(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerSecDataRequest {
    /// Job id or well API number
    pub id: String,
    /// Stages to include; bounds of zero or less are ignored
    pub stages: StageRange,
    /// Ask for every recorded channel instead of the standard set
    pub include_all_channels: Option<bool>,
}

impl PerSecDataRequest {
    /// Request every stage of a job.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stages: StageRange::default(),
            include_all_channels: None,
        }
    }

    /// Restrict the download to a stage range.
    pub fn with_stages(mut self, stages: StageRange) -> Self {
        self.stages = stages;
        self
    }

    /// Include every recorded channel.
    pub fn include_all_channels(mut self, include: bool) -> Self {
        self.include_all_channels = Some(include);
        self
    }

    /// Build the query string parameters, validating the id.
    pub(crate) fn query(&self) -> Result<QueryParams> {
        let id = require_id(&self.id)?;
        let positive = |stage: Option<Decimal>| {
            stage
                .filter(|s| *s > Decimal::ZERO)
                .map(format_stage_number)
        };

        Ok(QueryParams::new()
            .with("id", Some(id.to_string()))
            .with("fromStageNumber", positive(self.stages.from))
            .with("toStageNumber", positive(self.stages.to))
            .with(
                "includeAllChannels",
                self.include_all_channels.map(|b| b.to_string()),
            ))
    }
}

/// Service for downloading per-second data.
///
/// # Example
///
/// ```no_run
/// use welldatalabs::api::PerSecDataRequest;
///
/// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
/// let request = PerSecDataRequest::new("8eeefc91-8b9e-403b-ad27-1d53f339f8a3");
/// let path = client.per_sec_data().download_to_file(&request).await?;
/// println!("saved to {}", path.display());
/// std::fs::remove_file(path)?;
/// # Ok(())
/// # }
/// ```
pub struct PerSecDataService {
    inner: Arc<ClientInner>,
    cancel: Option<CancellationToken>,
}

impl PerSecDataService {
    pub(crate) const PATH: &'static str = "persecdata";

    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self {
            inner,
            cancel: None,
        }
    }

    /// Abort in-flight downloads from this service when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Open the download and return the body unread.
    ///
    /// The stream holds a connection until it is read to the end or dropped.
    pub async fn open(&self, request: &PerSecDataRequest) -> Result<ByteStream> {
        let query = request.query()?;
        self.inner
            .get_stream(Self::PATH, &query, self.cancel.as_ref())
            .await
    }

    /// Copy the download into `out`. Returns the number of bytes written.
    pub async fn download_to_writer<W>(&self, out: &mut W, request: &PerSecDataRequest) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let body = self.open(request).await?;
        let written = body.copy_to(out).await?;
        tracing::debug!(id = %request.id, bytes = written, "per-second download complete");
        Ok(written)
    }

    /// Download into a new temporary file and return its path.
    ///
    /// The file is kept on disk; deleting it is up to the caller. If the
    /// download fails the partial file is removed.
    pub async fn download_to_file(&self, request: &PerSecDataRequest) -> Result<PathBuf> {
        // Validate before touching the filesystem.
        request.query()?;

        let (file, path) = tempfile::Builder::new()
            .prefix("persecdata-")
            .suffix(".csv")
            .tempfile()?
            .keep()
            .map_err(|e| e.error)?;
        let mut file = tokio::fs::File::from_std(file);

        match self.download_to_writer(&mut file, request).await {
            Ok(_) => Ok(path),
            Err(e) => {
                drop(file);
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(path = %path.display(), error = %remove_err, "failed to remove partial download");
                }
                Err(e)
            }
        }
    }
}
