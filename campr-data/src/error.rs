/// Error types for loading and validating the campsite dataset
use thiserror::Error;

/// Main error type for dataset ingestion
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The document is not valid JSON or does not match the record shapes
    #[error("Failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// No camping demand records at all
    #[error("Dataset contains no camping demand records")]
    Empty,

    /// A cluster id outside the known palette
    #[error("Unknown cluster id {cluster} for park '{park}'")]
    UnknownCluster { park: String, cluster: u32 },

    /// Cluster id is not constant within one park's demand records
    #[error("Cluster for park '{park}' changes from {expected} to {found}")]
    ClusterMismatch {
        park: String,
        expected: u32,
        found: u32,
    },

    /// Two display names normalize to the same park key
    #[error("Parks '{first}' and '{second}' both normalize to key '{key}'")]
    KeyCollision {
        key: String,
        first: String,
        second: String,
    },
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
