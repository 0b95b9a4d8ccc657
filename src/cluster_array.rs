use crate::data_wrappers::NeighbourPair;
use crate::distance::cluster_distance;
use crate::{Cluster, UpgmaError};
use num_traits::Float;

/// The live clusters of a clustering run, stored contiguously with no gaps. The array owns its
/// clusters, and a cluster removed from it is cleared before it is dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterArray<T> {
    clusters: Vec<Cluster<T>>,
}

impl<T: Float> ClusterArray<T> {
    pub fn new() -> Self {
        ClusterArray { clusters: Vec::new() }
    }

    /// Creates an empty array with storage reserved for `capacity` clusters.
    pub fn with_capacity(capacity: usize) -> Result<Self, UpgmaError> {
        let mut clusters = Vec::new();
        clusters
            .try_reserve_exact(capacity)
            .map_err(|err| UpgmaError::AllocationFailure(err.to_string()))?;
        Ok(ClusterArray { clusters })
    }

    /// The number of live clusters.
    pub fn count(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cluster<T>> {
        self.clusters.get(index)
    }

    pub fn clusters(&self) -> &[Cluster<T>] {
        &self.clusters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster<T>> {
        self.clusters.iter()
    }

    pub fn push(&mut self, cluster: Cluster<T>) -> Result<(), UpgmaError> {
        self.clusters
            .try_reserve(1)
            .map_err(|err| UpgmaError::AllocationFailure(err.to_string()))?;
        self.clusters.push(cluster);
        Ok(())
    }

    /// Finds the two closest clusters by average linkage distance.
    ///
    /// Pairs are scanned with the outer index ascending and the inner index ascending above it,
    /// and only a strictly smaller distance replaces the current best, so ties go to the first
    /// pair in that order.
    ///
    /// # Returns
    /// * The closest pair with `left_idx < right_idx`, or `UpgmaError::TooFewClusters` if the
    ///   array holds fewer than two clusters. Empty clusters give `UpgmaError::EmptyCluster`.
    ///
    /// # Examples
    /// ```
    ///use upgma::{Cluster, ClusterArray, Object};
    ///
    ///let mut array = ClusterArray::new();
    ///for (id, x) in [(1, 0.0_f64), (2, 10.0), (3, 11.0)] {
    ///    let mut cluster = Cluster::with_capacity(1).unwrap();
    ///    cluster.append(Object::new(id, x, 0.0)).unwrap();
    ///    array.push(cluster).unwrap();
    ///}
    ///let pair = array.find_neighbours().unwrap();
    ///assert_eq!((1, 2), (pair.left_idx, pair.right_idx));
    ///assert_eq!(1.0, pair.distance);
    /// ```
    pub fn find_neighbours(&self) -> Result<NeighbourPair<T>, UpgmaError> {
        let n_clusters = self.count();
        if n_clusters < 2 {
            return Err(UpgmaError::TooFewClusters(n_clusters));
        }
        let mut nearest = NeighbourPair { left_idx: 0, right_idx: 1, distance: T::infinity() };
        for left_idx in 0..n_clusters {
            for right_idx in (left_idx + 1)..n_clusters {
                let distance =
                    cluster_distance(&self.clusters[left_idx], &self.clusters[right_idx])?;
                if distance < nearest.distance {
                    nearest = NeighbourPair { left_idx, right_idx, distance };
                }
            }
        }
        Ok(nearest)
    }

    /// Merges the cluster at `right_idx` into the cluster at `left_idx` and removes it, so the
    /// lower index always survives. Returns the new number of clusters.
    pub fn merge_neighbours(&mut self, left_idx: usize, right_idx: usize) -> Result<usize, UpgmaError> {
        if left_idx >= right_idx {
            return Err(UpgmaError::InvalidMergeOrder { first: left_idx, second: right_idx });
        }
        self.check_index(right_idx)?;
        let (head, tail) = self.clusters.split_at_mut(right_idx);
        head[left_idx].merge_into(&tail[0])?;
        self.remove(right_idx)
    }

    /// Destroys the cluster at `index` and shifts every later cluster one place to the left,
    /// keeping their relative order.
    ///
    /// # Returns
    /// * The number of clusters left in the array, or `UpgmaError::IndexOutOfBounds`.
    pub fn remove(&mut self, index: usize) -> Result<usize, UpgmaError> {
        self.check_index(index)?;
        let mut removed = self.clusters.remove(index);
        removed.clear();
        Ok(self.count())
    }

    fn check_index(&self, index: usize) -> Result<(), UpgmaError> {
        if index >= self.count() {
            return Err(UpgmaError::IndexOutOfBounds { index, len: self.count() });
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a ClusterArray<T> {
    type Item = &'a Cluster<T>;
    type IntoIter = std::slice::Iter<'a, Cluster<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
