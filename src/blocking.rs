//! Blocking versions of every service.
//!
//! [`Client`] owns a small Tokio runtime and drives the async services to
//! completion on it. Results and errors are exactly those of the async API;
//! a failure comes back as the single [`Error`](crate::Error) that caused it.
//!
//! Do not use this module from inside an async context: blocking on the
//! runtime from a runtime thread panics.
//!
//! # Example
//!
//! ```no_run
//! use welldatalabs::blocking::Client;
//!
//! # fn example() -> welldatalabs::Result<()> {
//! let client = Client::new("your-api-key")?;
//! let headers = client.job_headers().get("10-203-04050-60-", None)?;
//! println!("{} headers", headers.len());
//! # Ok(())
//! # }
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use bytes::{Buf, Bytes};
use tokio::runtime::Runtime;

use crate::api::{self, PerSecDataRequest};
use crate::models::{
    ChangeWindow, CustomFlag, DepthFeature, FluidsAndChemicals, JobHeader, JobSummary,
    Perforation, Plug, Proppant, Sleeve, StageComment, StageRange,
};
use crate::{ClientConfig, Result, WellDataClient};

/// Blocking client for the Well Data Labs API.
#[derive(Clone)]
pub struct Client {
    client: WellDataClient,
    runtime: Arc<Runtime>,
}

impl Client {
    /// Create a blocking client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a blocking client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("welldatalabs-blocking")
            .enable_all()
            .build()?;
        let client = WellDataClient::with_config(api_key, config)?;
        Ok(Self {
            client,
            runtime: Arc::new(runtime),
        })
    }

    /// The async client underneath.
    pub fn inner(&self) -> &WellDataClient {
        &self.client
    }

    /// Get the job headers service.
    pub fn job_headers(&self) -> JobHeaderService {
        JobHeaderService::new(self.client.job_headers(), self.runtime.clone())
    }

    /// Get the job summaries service.
    pub fn job_summaries(&self) -> JobSummaryService {
        JobSummaryService::new(self.client.job_summaries(), self.runtime.clone())
    }

    /// Get the depth features service.
    pub fn depth_features(&self) -> DepthFeatureService {
        DepthFeatureService::new(self.client.depth_features(), self.runtime.clone())
    }

    /// Get the perforations service.
    pub fn perforations(&self) -> PerforationService {
        PerforationService::new(self.client.perforations(), self.runtime.clone())
    }

    /// Get the plugs service.
    pub fn plugs(&self) -> PlugService {
        PlugService::new(self.client.plugs(), self.runtime.clone())
    }

    /// Get the proppants service.
    pub fn proppants(&self) -> ProppantService {
        ProppantService::new(self.client.proppants(), self.runtime.clone())
    }

    /// Get the sleeves service.
    pub fn sleeves(&self) -> SleeveService {
        SleeveService::new(self.client.sleeves(), self.runtime.clone())
    }

    /// Get the custom flags service.
    pub fn custom_flags(&self) -> CustomFlagService {
        CustomFlagService::new(self.client.custom_flags(), self.runtime.clone())
    }

    /// Get the fluids and chemicals service.
    pub fn fluids_and_chemicals(&self) -> FluidsAndChemicalsService {
        FluidsAndChemicalsService::new(self.client.fluids_and_chemicals(), self.runtime.clone())
    }

    /// Get the stage comments service.
    pub fn stage_comments(&self) -> StageCommentService {
        StageCommentService::new(self.client.stage_comments(), self.runtime.clone())
    }

    /// Get the per-second data service.
    pub fn per_sec_data(&self) -> PerSecDataService {
        PerSecDataService::new(self.client.per_sec_data(), self.runtime.clone())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Client")
            .field("config", self.client.config())
            .finish()
    }
}

/// Declares a blocking wrapper whose methods block on the async service's
/// method of the same name.
macro_rules! blocking_service {
    (
        $(#[$meta:meta])*
        $name:ident => $service:ty {
            $(
                $(#[$fmeta:meta])*
                fn $method:ident(&self $(, $arg:ident : $ty:ty)*) -> $ret:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            service: $service,
            runtime: Arc<Runtime>,
        }

        impl $name {
            fn new(service: $service, runtime: Arc<Runtime>) -> Self {
                Self { service, runtime }
            }

            $(
                $(#[$fmeta])*
                pub fn $method(&self $(, $arg: $ty)*) -> Result<$ret> {
                    self.runtime.block_on(self.service.$method($($arg),*))
                }
            )*
        }
    };
}

blocking_service! {
    /// Blocking [`api::JobHeaderService`].
    JobHeaderService => api::JobHeaderService {
        /// See [`api::JobHeaderService::get_all`].
        fn get_all(&self) -> Vec<JobHeader>;
        /// See [`api::JobHeaderService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<JobHeader>;
        /// See [`api::JobHeaderService::by_change_utc`].
        fn by_change_utc(&self, window: ChangeWindow, stages: Option<StageRange>) -> Vec<JobHeader>;
    }
}

blocking_service! {
    /// Blocking [`api::JobSummaryService`].
    JobSummaryService => api::JobSummaryService {
        /// See [`api::JobSummaryService::get_all`].
        fn get_all(&self) -> Vec<JobSummary>;
        /// See [`api::JobSummaryService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<JobSummary>;
        /// See [`api::JobSummaryService::by_change_utc`].
        fn by_change_utc(&self, window: ChangeWindow, stages: Option<StageRange>) -> Vec<JobSummary>;
        /// See [`api::JobSummaryService::by_stage_number`].
        fn by_stage_number(&self, stages: StageRange) -> Vec<JobSummary>;
    }
}

blocking_service! {
    /// Blocking [`api::DepthFeatureService`].
    DepthFeatureService => api::DepthFeatureService {
        /// See [`api::DepthFeatureService::get_all`].
        fn get_all(&self) -> Vec<DepthFeature>;
        /// See [`api::DepthFeatureService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<DepthFeature>;
        /// See [`api::DepthFeatureService::by_change_utc`].
        fn by_change_utc(&self, window: ChangeWindow, stages: Option<StageRange>) -> Vec<DepthFeature>;
        /// See [`api::DepthFeatureService::by_stage_number`].
        fn by_stage_number(&self, stages: StageRange) -> Vec<DepthFeature>;
    }
}

blocking_service! {
    /// Blocking [`api::CustomFlagService`].
    CustomFlagService => api::CustomFlagService {
        /// See [`api::CustomFlagService::get_all`].
        fn get_all(&self) -> Vec<CustomFlag>;
        /// See [`api::CustomFlagService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<CustomFlag>;
        /// See [`api::CustomFlagService::by_change_utc`].
        fn by_change_utc(&self, window: ChangeWindow, stages: Option<StageRange>) -> Vec<CustomFlag>;
        /// See [`api::CustomFlagService::by_stage_number`].
        fn by_stage_number(&self, stages: StageRange) -> Vec<CustomFlag>;
    }
}

blocking_service! {
    /// Blocking [`api::FluidsAndChemicalsService`].
    FluidsAndChemicalsService => api::FluidsAndChemicalsService {
        /// See [`api::FluidsAndChemicalsService::get_all`].
        fn get_all(&self) -> Vec<FluidsAndChemicals>;
        /// See [`api::FluidsAndChemicalsService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<FluidsAndChemicals>;
        /// See [`api::FluidsAndChemicalsService::by_change_utc`].
        fn by_change_utc(&self, window: ChangeWindow, stages: Option<StageRange>) -> Vec<FluidsAndChemicals>;
        /// See [`api::FluidsAndChemicalsService::by_stage_number`].
        fn by_stage_number(&self, stages: StageRange) -> Vec<FluidsAndChemicals>;
    }
}

blocking_service! {
    /// Blocking [`api::PerforationService`].
    PerforationService => api::PerforationService {
        /// See [`api::PerforationService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<Perforation>;
    }
}

blocking_service! {
    /// Blocking [`api::PlugService`].
    PlugService => api::PlugService {
        /// See [`api::PlugService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<Plug>;
    }
}

blocking_service! {
    /// Blocking [`api::ProppantService`].
    ProppantService => api::ProppantService {
        /// See [`api::ProppantService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<Proppant>;
    }
}

blocking_service! {
    /// Blocking [`api::SleeveService`].
    SleeveService => api::SleeveService {
        /// See [`api::SleeveService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<Sleeve>;
    }
}

blocking_service! {
    /// Blocking [`api::StageCommentService`].
    StageCommentService => api::StageCommentService {
        /// See [`api::StageCommentService::get`].
        fn get(&self, id: &str, stages: Option<StageRange>) -> Vec<StageComment>;
    }
}

/// Blocking [`api::PerSecDataService`].
pub struct PerSecDataService {
    service: api::PerSecDataService,
    runtime: Arc<Runtime>,
}

impl PerSecDataService {
    fn new(service: api::PerSecDataService, runtime: Arc<Runtime>) -> Self {
        Self { service, runtime }
    }

    /// Open the download and return the body as a [`Read`]er.
    ///
    /// Status errors are reported here; the body is read lazily afterwards.
    pub fn open(&self, request: &PerSecDataRequest) -> Result<ByteStream> {
        let body = self.runtime.block_on(self.service.open(request))?;
        Ok(ByteStream {
            body,
            runtime: self.runtime.clone(),
            pending: Bytes::new(),
        })
    }

    /// Copy the download into `out`. Returns the number of bytes written.
    pub fn download_to_writer<W>(&self, out: &mut W, request: &PerSecDataRequest) -> Result<u64>
    where
        W: Write + ?Sized,
    {
        self.runtime.block_on(async {
            let mut body = self.service.open(request).await?;
            while let Some(chunk) = body.next_chunk().await? {
                out.write_all(&chunk)?;
            }
            out.flush()?;
            Ok(body.bytes_read())
        })
    }

    /// See [`api::PerSecDataService::download_to_file`].
    pub fn download_to_file(&self, request: &PerSecDataRequest) -> Result<PathBuf> {
        self.runtime.block_on(self.service.download_to_file(request))
    }
}

/// Blocking per-second body.
///
/// Each `read` drives the async body on the client's runtime. Failures
/// reading the body surface as [`io::Error`]s wrapping the crate
/// [`Error`](crate::Error).
///
/// # Example
///
/// ```no_run
/// use std::io::{BufRead, BufReader};
/// use welldatalabs::api::PerSecDataRequest;
///
/// # fn example(client: welldatalabs::blocking::Client) -> welldatalabs::Result<()> {
/// let body = client
///     .per_sec_data()
///     .open(&PerSecDataRequest::new("10-203-04050-60-"))?;
/// for line in BufReader::new(body).lines().take(2) {
///     println!("{}", line?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ByteStream {
    body: crate::ByteStream,
    runtime: Arc<Runtime>,
    pending: Bytes,
}

impl ByteStream {
    /// Body length announced by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.body.content_length()
    }

    /// Bytes received from the server so far, including any not yet read.
    pub fn bytes_read(&self) -> u64 {
        self.body.bytes_read()
    }
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.pending.is_empty() {
            match self.runtime.block_on(self.body.next_chunk()) {
                Ok(Some(chunk)) => self.pending = chunk,
                Ok(None) => return Ok(0),
                Err(e) => return Err(io::Error::other(e)),
            }
        }
        let n = buf.len().min(self.pending.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.advance(n);
        Ok(n)
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::ByteStream")
            .field("body", &self.body)
            .field("pending", &self.pending.len())
            .finish()
    }
}
