//! # welldatalabs-rs
//!
//! A Rust client for the Well Data Labs completion data API.
//!
//! The crate wraps every public resource of the API (job headers, job
//! summaries, depth features, perforations, plugs, proppants, sleeves,
//! custom flags, fluids and chemicals, stage comments) plus the premium
//! per-second data download.
//!
//! ## Features
//!
//! - **One shared client**: a single [`WellDataClient`] owns the connection
//!   pool; services borrow it
//! - **Typed records**: camelCase JSON decoded into strongly-typed models
//! - **Filters**: stage-number ranges and change-time windows
//! - **Streaming**: per-second data copied straight to a writer or file
//! - **Async-first**: built on Tokio, with [`blocking`] wrappers for
//!   synchronous callers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use welldatalabs::WellDataClient;
//!
//! #[tokio::main]
//! async fn main() -> welldatalabs::Result<()> {
//!     let client = WellDataClient::new("your-api-key")?;
//!
//!     let headers = client.job_headers().get_all().await?;
//!     println!("Found {} jobs", headers.len());
//!
//!     if let Some(header) = headers.first() {
//!         let proppants = client
//!             .proppants()
//!             .get(header.job_id.as_str(), None)
//!             .await?;
//!         for p in proppants {
//!             println!("stage {}: {:?} {:?}", p.stage_number, p.mass, p.mass_unit);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Per-second data
//!
//! ```rust,no_run
//! use welldatalabs::WellDataClient;
//! use welldatalabs::api::PerSecDataRequest;
//!
//! #[tokio::main]
//! async fn main() -> welldatalabs::Result<()> {
//!     let client = WellDataClient::new("your-api-key")?;
//!     let request = PerSecDataRequest::new("8eeefc91-8b9e-403b-ad27-1d53f339f8a3");
//!
//!     let mut out = tokio::io::stdout();
//!     client.per_sec_data().download_to_writer(&mut out, &request).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod blocking;
pub mod client;
pub mod error;
pub mod models;
pub mod serialization;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{ApiVersion, ChangeWindow, Environment, JobId, StageRange, WellId};
pub use client::{ByteStream, ClientConfig, WellDataClient};

/// Prelude module for convenient imports.
///
/// ```rust
/// use welldatalabs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives and filters
        ApiVersion, ChangeWindow, Environment, JobId, StageRange, WellId,
        // Records
        CustomFlag, CustomFlagAssociatedChannel, DepthFeature, FluidsAndChemicals, JobHeader,
        JobSummary, JobSummaryColumn, Perforation, Plug, Proppant, Sleeve, StageComment,
    };
    pub use crate::api::PerSecDataRequest;
    pub use crate::client::{ByteStream, ClientConfig, WellDataClient};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_creation() {
        let job = JobId::new("8eeefc91-8b9e-403b-ad27-1d53f339f8a3");
        assert_eq!(job.as_str(), "8eeefc91-8b9e-403b-ad27-1d53f339f8a3");
    }

    #[test]
    fn test_default_environment_url() {
        assert_eq!(
            ClientConfig::default().base_url(),
            "https://api.welldatalabs.com"
        );
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WellDataClient>();
        assert_send_sync::<blocking::Client>();
    }
}
