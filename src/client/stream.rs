//! Streaming response bodies.
//!
//! A [`ByteStream`] holds one pooled connection until it is read to the end
//! or dropped. Dropping it on any path (error, early return, cancellation)
//! releases the connection.

use bytes::Bytes;
use futures_util::Stream;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use super::http::cancellable;
use crate::{Error, Result};

/// An open response body, read chunk by chunk.
///
/// # Example
///
/// ```no_run
/// use welldatalabs::api::PerSecDataRequest;
///
/// # async fn example(client: welldatalabs::WellDataClient) -> welldatalabs::Result<()> {
/// let request = PerSecDataRequest::new("8eeefc91-8b9e-403b-ad27-1d53f339f8a3");
/// let mut body = client.per_sec_data().open(&request).await?;
/// while let Some(chunk) = body.next_chunk().await? {
///     println!("{} bytes", chunk.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ByteStream {
    response: reqwest::Response,
    cancel: Option<CancellationToken>,
    bytes_read: u64,
}

impl ByteStream {
    pub(crate) fn new(response: reqwest::Response, cancel: Option<CancellationToken>) -> Self {
        Self {
            response,
            cancel,
            bytes_read: 0,
        }
    }

    /// Body length announced by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Bytes handed out so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read the next chunk, or `None` at the end of the body.
    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        let chunk = cancellable(self.cancel.as_ref(), self.response.chunk())
            .await?
            .map_err(Error::from_transport)?;
        if let Some(ref bytes) = chunk {
            self.bytes_read += bytes.len() as u64;
        }
        Ok(chunk)
    }

    /// Copy the whole body into `out` and flush it. Returns the byte count.
    pub async fn copy_to<W>(mut self, out: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        while let Some(chunk) = self.next_chunk().await? {
            out.write_all(&chunk).await?;
        }
        out.flush().await?;
        Ok(self.bytes_read)
    }

    /// Turn into a [`Stream`] of chunks.
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes>> + Send {
        futures_util::stream::try_unfold(self, |mut body| async move {
            Ok(body.next_chunk().await?.map(|chunk| (chunk, body)))
        })
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream")
            .field("status", &self.response.status())
            .field("content_length", &self.content_length())
            .field("bytes_read", &self.bytes_read)
            .finish()
    }
}
