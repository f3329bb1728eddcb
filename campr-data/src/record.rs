use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekly campsite demand for one park.
///
/// `sres` is the fraction of sites reserved (0 to 1) for the week
/// starting at `pseudo_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampingRecord {
    #[serde(rename = "parkShort")]
    pub park_short: String,
    #[serde(rename = "parkLong", default)]
    pub park_long: String,
    /// Week of year, nominally 0 to 53. Out-of-range values are kept.
    pub week: i32,
    pub sres: f64,
    pub cluster: u32,
    pub pseudo_date: NaiveDate,
}

/// Cumulative booking progress for one camping date at one park.
///
/// `pct` is the share (0 to 100) of that date's reservations already made
/// by `pseudo_book`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningRecord {
    #[serde(rename = "parkShort")]
    pub park_short: String,
    pub pseudo_date: NaiveDate,
    pub pseudo_book: NaiveDate,
    pub pct: f64,
    pub cluster: u32,
}

/// Records that belong to a park by display short-name.
pub trait Keyed {
    fn park_short(&self) -> &str;
}

impl Keyed for CampingRecord {
    fn park_short(&self) -> &str {
        &self.park_short
    }
}

impl Keyed for PlanningRecord {
    fn park_short(&self) -> &str {
        &self.park_short
    }
}

/// Demand-pattern category of a park. Drives the fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Cluster {
    One,
    Two,
    Three,
}

impl Cluster {
    pub const ALL: [Cluster; 3] = [Cluster::One, Cluster::Two, Cluster::Three];

    pub fn id(&self) -> u32 {
        match self {
            Cluster::One => 1,
            Cluster::Two => 2,
            Cluster::Three => 3,
        }
    }
}

impl TryFrom<u32> for Cluster {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Cluster::One),
            2 => Ok(Cluster::Two),
            3 => Ok(Cluster::Three),
            other => Err(other),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
