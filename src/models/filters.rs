//! Range filters accepted by the list endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Inclusive stage-number range.
///
/// Either bound may be left open. Stage numbers are decimal because
/// sub-stages such as `20.1` exist.
///
/// # Example
///
/// ```
/// use welldatalabs::StageRange;
/// use rust_decimal::Decimal;
///
/// let first_ten = StageRange::between(Decimal::ONE, Decimal::TEN);
/// let from_five = StageRange::starting_at(Decimal::from(5));
/// assert!(StageRange::default().is_unbounded());
/// # let _ = (first_ten, from_five);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageRange {
    /// Lowest stage to include
    pub from: Option<Decimal>,
    /// Highest stage to include
    pub to: Option<Decimal>,
}

impl StageRange {
    /// A range with both bounds set.
    pub fn between(from: Decimal, to: Decimal) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Stages from `from` upward.
    pub fn starting_at(from: Decimal) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Stages up to and including `to`.
    pub fn up_to(to: Decimal) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    /// Build from two optional bounds.
    pub fn new(from: Option<Decimal>, to: Option<Decimal>) -> Self {
        Self { from, to }
    }

    /// Returns `true` when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// UTC window over the record's last-modified time.
///
/// Leaving `to` open returns everything changed since `from`; leaving
/// `from` open returns everything changed before `to`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeWindow {
    /// Earliest modification time
    pub from: Option<DateTime<Utc>>,
    /// Latest modification time
    pub to: Option<DateTime<Utc>>,
}

impl ChangeWindow {
    /// A window with both bounds set.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Everything changed at or after `from`.
    pub fn since(from: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Everything changed at or before `to`.
    pub fn until(to: DateTime<Utc>) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    /// Build from two optional bounds.
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// Returns `true` when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}
