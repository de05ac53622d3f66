//! Launch record domain model
//!
//! Defines the immutable row type of the dashboard dataset together with
//! the two parameter types the interactive widgets produce: a site
//! selection (a concrete site or the "all sites" sentinel) and an
//! inclusive payload-mass range.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Outcome of a launch's primary objective.
///
/// The source dataset encodes this as the integer column `class`
/// (1 = success, 0 = failure); the custom deserializer accepts that
/// encoding directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// Primary objective achieved
    Success,

    /// Primary objective missed
    Failure,
}

impl Outcome {
    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Fixed display label, `"Success"` or `"Failure"`
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    /// Integer class encoding (1 = success, 0 = failure), used as the
    /// scatter view's y-axis value
    pub fn class(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            1 => Ok(Outcome::Success),
            0 => Ok(Outcome::Failure),
            other => Err(de::Error::custom(format!(
                "outcome class must be 0 or 1, got {other}"
            ))),
        }
    }
}

/// One row of the launch dataset.
///
/// Field renames match the source table's column headers so rows
/// deserialize directly from the CSV. The dataset is immutable after
/// load; records are only ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Ground-location identifier for the launch
    #[serde(rename = "Launch Site")]
    pub launch_site: String,

    /// Cargo mass in kilograms, always present and non-negative
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    /// Vehicle-variant label, used downstream only for grouping and
    /// coloring, never filtered on
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,

    /// Launch outcome, source column `class`
    #[serde(rename = "class")]
    pub outcome: Outcome,
}

/// Site filter produced by the dashboard's site dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// The "all sites" sentinel; no site filtering applied
    All,

    /// Restrict to one exact site identifier
    Site(String),
}

impl SiteSelection {
    /// Sentinel strings the UI widgets emit for the all-sites option
    const ALL_SENTINELS: [&'static str; 2] = ["ALL", "All Sites"];

    /// Interpret a raw dropdown value. The sentinels `ALL` and
    /// `All Sites` map to [`SiteSelection::All`]; anything else is
    /// treated as an exact site identifier.
    pub fn from_widget_value(value: &str) -> Self {
        if Self::ALL_SENTINELS.contains(&value) {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether a record passes this site filter
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str("All Sites"),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

/// Inclusive payload-mass range from the dashboard's range slider.
///
/// Enforcing `low <= high` is the caller's responsibility; an inverted
/// range is not an error, it simply matches no record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    /// Lower bound in kilograms, inclusive
    pub low: f64,

    /// Upper bound in kilograms, inclusive
    pub high: f64,
}

impl PayloadRange {
    /// Create a range; no ordering check, see the type-level contract
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether a payload mass falls inside the range, both ends
    /// inclusive. Always false for an inverted range.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}
