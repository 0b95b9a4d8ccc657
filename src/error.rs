use thiserror::Error;

/// Possible errors that arise when building, reducing or loading clusters.
#[derive(Debug, Error)]
pub enum UpgmaError {
    #[error("Unable to allocate storage: {0}")]
    AllocationFailure(String),
    #[error("Index {index} is out of bounds for an array of {len} clusters")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Cluster at index {first} must come before the cluster at index {second} to merge")]
    InvalidMergeOrder { first: usize, second: usize },
    #[error("Distance to an empty cluster is undefined")]
    EmptyCluster,
    #[error("At least two clusters are needed to find neighbours, found {0}")]
    TooFewClusters(usize),
    #[error("Cannot reduce {count} clusters to {target}")]
    InvalidTargetCount { target: usize, count: usize },
    #[error("The dataset provided is empty")]
    EmptyDataset,
    #[error("Non finite coordinate: {0}")]
    NonFiniteCoordinate(String),
    #[error("Object id {0} is not unique")]
    DuplicateId(i32),
    #[error("Malformed input on line {line}: {msg}")]
    InputFormat { line: usize, msg: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
