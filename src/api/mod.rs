//! API service modules for Well Data Labs endpoints.
//!
//! Each service wraps one resource of the API. Services are created from a
//! [`WellDataClient`](crate::WellDataClient) and share its connection pool.

mod custom_flags;
mod depth_features;
mod endpoint;
mod fluids_and_chemicals;
mod job_headers;
mod job_summaries;
mod per_sec_data;
mod perforations;
mod plugs;
mod proppants;
mod sleeves;
mod stage_comments;

pub use custom_flags::CustomFlagService;
pub use depth_features::DepthFeatureService;
pub use fluids_and_chemicals::FluidsAndChemicalsService;
pub use job_headers::JobHeaderService;
pub use job_summaries::JobSummaryService;
pub use per_sec_data::{PerSecDataRequest, PerSecDataService};
pub use perforations::PerforationService;
pub use plugs::PlugService;
pub use proppants::ProppantService;
pub use sleeves::SleeveService;
pub use stage_comments::StageCommentService;
