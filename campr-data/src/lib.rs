//! Campsite reservation data for the park demand charts.
//!
//! - `record`: camping-demand and planning (booking) records as they appear
//!   in the source JSON document, plus the cluster category
//! - `park_key`: identifier-safe park keys derived from display names
//! - `group`: order-preserving grouping of records by park
//! - `dataset`: the JSON document and its parser
//! - `index`: validated, grouped view used by the charts

pub mod dataset;
pub mod error;
pub mod group;
pub mod index;
pub mod park_key;
pub mod record;

pub use dataset::Dataset;
pub use error::{DatasetError, Result};
pub use group::{group_by_park, ParkGroup};
pub use index::ParkIndex;
pub use park_key::ParkKey;
pub use record::{CampingRecord, Cluster, Keyed, PlanningRecord};
