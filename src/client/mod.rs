//! HTTP transport for the Well Data Labs API.
//!
//! This module provides the main entry point [`WellDataClient`], the query
//! encoder used by every service, and [`ByteStream`] for bodies that are too
//! large to buffer.
//!
//! # Example
//!
//! ```no_run
//! use welldatalabs::{ClientConfig, WellDataClient};
//! use std::time::Duration;
//!
//! # async fn example() -> welldatalabs::Result<()> {
//! let client = WellDataClient::with_config(
//!     "your-api-key",
//!     ClientConfig::default().with_timeout(Duration::from_secs(30)),
//! )?;
//!
//! let summaries = client.job_summaries().get_all().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod query;
mod stream;

pub use config::ClientConfig;
pub use http::WellDataClient;
pub use query::{format_change_utc, format_stage_number, QueryParams};
pub use stream::ByteStream;
pub(crate) use http::ClientInner;
