//! Custom flags placed on the job timeline.

use serde::{Deserialize, Serialize};

use super::primitives::JobId;

/// A user-defined flag on the job's time axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFlag {
    /// Owning job
    pub job_id: JobId,
    /// Job time the flag points at, as sent by the server
    #[serde(default)]
    pub job_time: Option<String>,
    /// Flag type
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Comment attached to the flag
    #[serde(default)]
    pub comment_text: Option<String>,
    /// Channel readings captured at the flag
    #[serde(default, deserialize_with = "crate::serialization::null_as_default")]
    pub associated_values: Vec<CustomFlagAssociatedChannel>,
}

/// One channel reading captured with a [`CustomFlag`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFlagAssociatedChannel {
    /// Channel name, e.g. `Treating Pressure`
    #[serde(default)]
    pub channel_name: Option<String>,
    /// Reading, kept as text since channels are not all numeric
    #[serde(default, deserialize_with = "crate::serialization::optional_lenient_string")]
    pub value: Option<String>,
    /// Unit of `value`
    #[serde(default)]
    pub unit_text: Option<String>,
}
