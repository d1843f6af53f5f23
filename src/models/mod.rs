//! Data models for the Well Data Labs API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Identifiers, API version and environment
//! - [`filters`] - Stage-number and change-time range filters
//! - [`job`] - Job headers and tabular job summaries
//! - [`stage`] - Per-stage completion records
//! - [`custom_flag`] - Timeline flags

pub mod primitives;
pub mod filters;
pub mod job;
pub mod stage;
pub mod custom_flag;

// Re-export commonly used types
pub use primitives::*;
pub use filters::*;
pub use job::*;
pub use stage::*;
pub use custom_flag::*;
