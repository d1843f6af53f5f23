//! Job header and job summary models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{JobId, WellId};

/// Descriptive header for one completion job and its well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHeader {
    /// Unique job identifier
    pub job_id: JobId,
    /// Well the job was performed on
    pub well_id: WellId,
    /// Well name
    #[serde(default)]
    pub well_name: Option<String>,
    /// Well API number, e.g. `42-123-45678-00-00`
    #[serde(default, alias = "API")]
    pub api: Option<String>,
    /// When the job started
    #[serde(default, deserialize_with = "crate::serialization::optional_utc")]
    pub job_start_date: Option<DateTime<Utc>>,
    /// Service company that pumped the job
    #[serde(default)]
    pub service_company: Option<String>,
    /// Operator of the well
    #[serde(default)]
    pub operator: Option<String>,
    /// Operator-defined asset group
    #[serde(default)]
    pub asset_group: Option<String>,
    /// Target formation
    #[serde(default)]
    pub formation: Option<String>,
    /// Job type
    #[serde(default)]
    pub job_type: Option<String>,
    /// Frac system
    #[serde(default)]
    pub frac_system: Option<String>,
    /// Fluid system
    #[serde(default)]
    pub fluid_system: Option<String>,
    /// Bottomhole latitude
    #[serde(default)]
    pub bottomhole_latitude: Option<Decimal>,
    /// Bottomhole longitude
    #[serde(default)]
    pub bottomhole_longitude: Option<Decimal>,
    /// Measured depth of the well
    #[serde(default)]
    pub measured_depth: Option<i64>,
    /// Unit for `measured_depth`
    #[serde(default)]
    pub measured_depth_unit_text: Option<String>,
    /// Number of stages in the job
    #[serde(default)]
    pub stage_count: i32,
    /// Pad name
    #[serde(default)]
    pub pad_name: Option<String>,
    /// County
    #[serde(default)]
    pub county: Option<String>,
    /// State
    #[serde(default)]
    pub state: Option<String>,
    /// Surface latitude
    #[serde(default)]
    pub surface_latitude: Option<Decimal>,
    /// Surface longitude
    #[serde(default)]
    pub surface_longitude: Option<Decimal>,
    /// Legal description of the surface location
    #[serde(default)]
    pub legal_description: Option<String>,
    /// Last time the job was modified
    #[serde(default, deserialize_with = "crate::serialization::optional_utc")]
    pub modified_utc: Option<DateTime<Utc>>,
}

/// Metadata for one column of a [`JobSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummaryColumn {
    /// Display name
    pub name: String,
    /// Stable field name, e.g. `well_api`
    #[serde(default)]
    pub wdl_field_name: Option<String>,
    /// Unit of the values in this column
    #[serde(default)]
    pub unit_text: Option<String>,
    /// Zero-based position of this column in every row
    pub column_index: usize,
    /// Data type tag
    #[serde(default)]
    pub data_type: Option<String>,
}

/// Tabular summary of a job: a job-total row plus one row per stage.
///
/// Rows are positional. Resolve a column through [`JobSummary::column`]
/// and read cells with [`JobSummary::value`] instead of hard-coding indexes.
///
/// # Example
///
/// ```
/// # use welldatalabs::models::JobSummary;
/// # fn example(summary: &JobSummary) {
/// if let Some(api) = summary.column("well_api") {
///     for row in &summary.row_data {
///         println!("{:?}", JobSummary::value(row, api));
///     }
/// }
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    /// Job this summary belongs to
    pub job_id: JobId,
    /// Column metadata in column order
    #[serde(default, deserialize_with = "crate::serialization::null_as_default")]
    pub column_metadata: Vec<JobSummaryColumn>,
    /// Row values aligned with `column_metadata`; numeric cells arrive as text
    #[serde(default, deserialize_with = "crate::serialization::lenient_rows")]
    pub row_data: Vec<Vec<Option<String>>>,
}

impl JobSummary {
    /// Find a column by its stable field name.
    pub fn column(&self, wdl_field_name: &str) -> Option<&JobSummaryColumn> {
        self.column_metadata
            .iter()
            .find(|c| c.wdl_field_name.as_deref() == Some(wdl_field_name))
    }

    /// Find a column by display name, ignoring ASCII case.
    pub fn column_by_name(&self, name: &str) -> Option<&JobSummaryColumn> {
        self.column_metadata
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Read the cell for `column` out of `row`.
    pub fn value<'a>(row: &'a [Option<String>], column: &JobSummaryColumn) -> Option<&'a str> {
        row.get(column.column_index).and_then(|v| v.as_deref())
    }

    /// All values of one column, top to bottom.
    pub fn column_values<'a>(
        &'a self,
        column: &'a JobSummaryColumn,
    ) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.row_data.iter().map(move |row| Self::value(row, column))
    }

    /// Returns `true` when every row has exactly one cell per column.
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_metadata.len();
        self.row_data.iter().all(|row| row.len() == width)
    }
}
