//! Per-stage completion records.
//!
//! Every record is keyed by job id and a decimal stage number. Measurements
//! are nullable and most carry a paired unit string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::JobId;

/// A depth feature (perforation cluster, sleeve, plug, ...) flattened into
/// one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthFeature {
    /// Owning job
    pub job_id: JobId,
    /// Well name
    #[serde(default)]
    pub well_name: Option<String>,
    /// Well API number
    #[serde(default, alias = "API")]
    pub api: Option<String>,
    /// Stage number
    pub stage_number: Decimal,
    /// Feature kind, e.g. `Perforation`, `Sleeve`, `Plug`
    #[serde(default)]
    pub feature: Option<String>,
    /// Feature name
    #[serde(default)]
    pub name: Option<String>,
    /// Top measured depth
    #[serde(default)]
    pub top_measured_depth: Option<Decimal>,
    /// Bottom measured depth
    #[serde(default)]
    pub bottom_measured_depth: Option<Decimal>,
    /// Unit of the depth fields
    #[serde(default)]
    pub depth_unit: Option<String>,
    /// Cluster count
    #[serde(default)]
    pub clusters: Option<Decimal>,
    /// Shot density
    #[serde(default)]
    pub shot_density: Option<Decimal>,
    /// Unit of `shot_density`
    #[serde(default)]
    pub shot_density_unit: Option<String>,
    /// Shot count
    #[serde(default)]
    pub shot_count: Option<Decimal>,
    /// Phasing in degrees
    #[serde(default)]
    pub phasing: Option<Decimal>,
    /// Port size
    #[serde(default)]
    pub port_size: Option<Decimal>,
    /// Unit of `port_size`
    #[serde(default)]
    pub port_size_unit: Option<String>,
    /// Ball size
    #[serde(default)]
    pub ball_size: Option<Decimal>,
    /// Unit of `ball_size`
    #[serde(default)]
    pub ball_size_unit: Option<String>,
    /// Seat inner diameter
    #[serde(default, rename = "seatID", alias = "seatId")]
    pub seat_id: Option<Decimal>,
    /// Diameter
    #[serde(default)]
    pub diameter: Option<Decimal>,
    /// Unit of `diameter`
    #[serde(default)]
    pub diameter_unit: Option<String>,
}

/// A perforation interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perforation {
    /// Owning job
    pub job_id: JobId,
    /// Well name
    #[serde(default)]
    pub well_name: Option<String>,
    /// Well API number
    #[serde(default, alias = "API")]
    pub api: Option<String>,
    /// Stage number
    pub stage_number: Decimal,
    /// Interval name
    #[serde(default)]
    pub name: Option<String>,
    /// Position of the interval within the stage
    #[serde(default)]
    pub ordinal: i32,
    /// Top measured depth
    #[serde(default)]
    pub top_measured_depth: Option<Decimal>,
    /// Bottom measured depth
    #[serde(default)]
    pub bottom_measured_depth: Option<Decimal>,
    /// Unit of the depth fields
    #[serde(default)]
    pub depth_unit: Option<String>,
    /// Cluster count
    #[serde(default)]
    pub clusters: Option<Decimal>,
    /// Shot density
    #[serde(default)]
    pub shot_density: Option<Decimal>,
    /// Unit of `shot_density`
    #[serde(default)]
    pub shot_density_unit: Option<String>,
    /// Shot count
    #[serde(default)]
    pub shot_count: Option<Decimal>,
    /// Phasing in degrees
    #[serde(default)]
    pub phasing: Option<Decimal>,
    /// Perforating company
    #[serde(default)]
    pub perforation_company: Option<String>,
    /// Gun size
    #[serde(default)]
    pub gun_size: Option<Decimal>,
    /// Unit of `gun_size`
    #[serde(default)]
    pub gun_size_unit: Option<String>,
    /// Conveyance method, e.g. wireline
    #[serde(default)]
    pub conveyance_method: Option<String>,
    /// Charge type
    #[serde(default)]
    pub charge_type: Option<String>,
    /// Charge size
    #[serde(default)]
    pub charge_size: Option<Decimal>,
    /// Unit of `charge_size`
    #[serde(default)]
    pub charge_size_unit: Option<String>,
    /// Penetration
    #[serde(default)]
    pub penetration: Option<Decimal>,
    /// Unit of `penetration`
    #[serde(default)]
    pub penetration_unit: Option<String>,
    /// Estimated hole diameter
    #[serde(default)]
    pub estimated_hole_diameter: Option<Decimal>,
    /// Unit of `estimated_hole_diameter`
    #[serde(default)]
    pub estimated_hole_diameter_unit: Option<String>,
}

/// A plug set between stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plug {
    /// Owning job
    pub job_id: JobId,
    /// Well name
    #[serde(default)]
    pub well_name: Option<String>,
    /// Well API number
    #[serde(default, alias = "API")]
    pub api: Option<String>,
    /// Stage number
    pub stage_number: Decimal,
    /// Plug name
    #[serde(default)]
    pub name: Option<String>,
    /// Position within the stage
    #[serde(default)]
    pub ordinal: i32,
    /// Top measured depth
    #[serde(default)]
    pub top_measured_depth: Option<Decimal>,
    /// Bottom measured depth
    #[serde(default)]
    pub bottom_measured_depth: Option<Decimal>,
    /// Unit of the depth fields
    #[serde(default)]
    pub depth_unit: Option<String>,
    /// Plug diameter
    #[serde(default)]
    pub diameter: Option<Decimal>,
    /// Unit of `diameter`
    #[serde(default)]
    pub diameter_unit: Option<String>,
    /// Manufacturer
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Model
    #[serde(default)]
    pub model: Option<String>,
}

/// Proppant pumped in a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proppant {
    /// Owning job
    pub job_id: JobId,
    /// Stage number
    pub stage_number: Decimal,
    /// Proppant name
    #[serde(default)]
    pub name: Option<String>,
    /// Pumped mass
    #[serde(default)]
    pub mass: Option<Decimal>,
    /// Unit of `mass`
    #[serde(default)]
    pub mass_unit: Option<String>,
    /// Material, e.g. sand or ceramic
    #[serde(default)]
    pub material: Option<String>,
    /// Mesh size, e.g. `40/70`
    #[serde(default)]
    pub mesh_size: Option<String>,
}

/// A sliding sleeve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sleeve {
    /// Owning job
    pub job_id: JobId,
    /// Well name
    #[serde(default)]
    pub well_name: Option<String>,
    /// Well API number
    #[serde(default, alias = "API")]
    pub api: Option<String>,
    /// Stage number
    pub stage_number: Decimal,
    /// Sleeve name
    #[serde(default)]
    pub name: Option<String>,
    /// Position within the stage
    #[serde(default)]
    pub ordinal: i32,
    /// Top measured depth
    #[serde(default)]
    pub top_measured_depth: Option<Decimal>,
    /// Bottom measured depth
    #[serde(default)]
    pub bottom_measured_depth: Option<Decimal>,
    /// Unit of the depth fields
    #[serde(default)]
    pub depth_unit: Option<String>,
    /// Port size
    #[serde(default)]
    pub port_size: Option<Decimal>,
    /// Unit of `port_size`
    #[serde(default)]
    pub port_size_unit: Option<String>,
    /// Ball size
    #[serde(default)]
    pub ball_size: Option<Decimal>,
    /// Unit of `ball_size`
    #[serde(default)]
    pub ball_size_unit: Option<String>,
    /// Seat inner diameter
    #[serde(default, rename = "seatID", alias = "seatId")]
    pub seat_id: Option<Decimal>,
    /// Manufacturer
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Model
    #[serde(default)]
    pub model: Option<String>,
}

/// A fluid or chemical additive pumped in a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidsAndChemicals {
    /// Owning job
    pub job_id: JobId,
    /// Well name
    #[serde(default)]
    pub well_name: Option<String>,
    /// Well API number
    #[serde(default, alias = "API")]
    pub api: Option<String>,
    /// Stage number
    pub stage_number: Decimal,
    /// Category, e.g. fluid or chemical
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Sub-category
    #[serde(default)]
    pub sub_type: Option<String>,
    /// Product name
    #[serde(default)]
    pub name: Option<String>,
    /// Volume
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Unit of `volume`
    #[serde(default)]
    pub volume_unit: Option<String>,
    /// Volume concentration
    #[serde(default)]
    pub volume_concentration: Option<Decimal>,
    /// Unit of `volume_concentration`
    #[serde(default)]
    pub volume_concentration_unit: Option<String>,
    /// Dry total
    #[serde(default)]
    pub dry_total: Option<Decimal>,
    /// Unit of `dry_total`
    #[serde(default)]
    pub dry_total_unit: Option<String>,
    /// Dry concentration
    #[serde(default)]
    pub dry_concentration: Option<Decimal>,
    /// Unit of `dry_concentration`
    #[serde(default)]
    pub dry_concentration_unit: Option<String>,
}

/// A free-text comment left on a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageComment {
    /// Owning job
    pub job_id: JobId,
    /// Stage number
    pub stage_number: Decimal,
    /// Comment text
    #[serde(default)]
    pub comment: Option<String>,
    /// Author
    #[serde(default)]
    pub user_name: Option<String>,
}
