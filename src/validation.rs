use crate::{ClusterArray, UpgmaError};
use num_traits::Float;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    clusters: &'a ClusterArray<T>,
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(clusters: &'a ClusterArray<T>) -> Self {
        Self { clusters }
    }

    /// Checks the array can be reduced: at least one cluster, no empty clusters and only finite
    /// coordinates.
    pub(crate) fn validate_input_data(&self) -> Result<(), UpgmaError> {
        if self.clusters.is_empty() {
            return Err(UpgmaError::EmptyDataset);
        }
        if self.clusters.iter().any(|cluster| cluster.is_empty()) {
            return Err(UpgmaError::EmptyCluster);
        }
        self.validate_finite_coords()
    }

    pub(crate) fn validate_finite_coords(&self) -> Result<(), UpgmaError> {
        for (n, cluster) in self.clusters.iter().enumerate() {
            if let Some(object) = cluster.objects().iter().find(|object| !object.is_finite()) {
                return Err(UpgmaError::NonFiniteCoordinate(format!(
                    "object {} in {n}th cluster has non-finite coordinate(s)",
                    object.id
                )));
            }
        }
        Ok(())
    }

    /// Ids are only required to be unique for loaded input; merging itself never looks at them
    /// beyond sorting.
    pub(crate) fn validate_unique_ids(&self) -> Result<(), UpgmaError> {
        let mut seen = HashSet::new();
        for object in self.clusters.iter().flat_map(|cluster| cluster.objects()) {
            if !seen.insert(object.id) {
                return Err(UpgmaError::DuplicateId(object.id));
            }
        }
        Ok(())
    }
}
