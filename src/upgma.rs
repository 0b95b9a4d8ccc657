use crate::validation::DataValidator;
use crate::{Cluster, ClusterArray, Object, UpgmaError, UpgmaParams};
use num_traits::Float;
use tracing::{debug, info};

/// The UPGMA reduction over an array of clusters. Generic over floating point numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct Upgma<T> {
    clusters: ClusterArray<T>,
    hp: UpgmaParams,
}

impl<T: Float> Upgma<T> {
    /// Creates a reduction over `clusters` using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `clusters` - the starting clusters, usually one per input object. Every cluster must
    ///                be non-empty and contain only finite coordinates.
    /// * `hyper_params` - the parameter configuration.
    ///
    /// # Returns
    /// * The UPGMA model instance.
    ///
    /// # Examples
    /// ```
    ///use upgma::{parse_clusters, Upgma, UpgmaParams};
    ///
    ///let input = "count=3\n1 0 0\n2 0 1\n3 9 9\n";
    ///let clusters = parse_clusters::<f32, _>(input.as_bytes(), 1).unwrap();
    ///let config = UpgmaParams::builder().target_clusters(2).build();
    ///let upgma = Upgma::new(clusters, config);
    /// ```
    pub fn new(clusters: ClusterArray<T>, hyper_params: UpgmaParams) -> Self {
        Upgma { clusters, hp: hyper_params }
    }

    /// Creates a reduction using the default parameters, which merge everything into a single
    /// cluster.
    pub fn default_params(clusters: ClusterArray<T>) -> Self {
        Upgma::new(clusters, UpgmaParams::default())
    }

    /// Creates a reduction with one cluster per object, in the order given. Each cluster is
    /// allocated with the configured `initial_capacity`.
    ///
    /// # Examples
    /// ```
    ///use upgma::{Object, Upgma, UpgmaParams};
    ///
    ///let objects = vec![Object::new(1, 0.0_f64, 0.0), Object::new(2, 3.0, 4.0)];
    ///let config = UpgmaParams::builder().initial_capacity(4).build();
    ///let result = Upgma::from_objects(&objects, config).unwrap().reduce().unwrap();
    ///assert_eq!(2, result.clusters()[0].size());
    /// ```
    pub fn from_objects(
        objects: &[Object<T>],
        hyper_params: UpgmaParams,
    ) -> Result<Self, UpgmaError> {
        let mut clusters = ClusterArray::with_capacity(objects.len())?;
        for object in objects {
            let mut cluster = Cluster::with_capacity(hyper_params.initial_capacity)?;
            cluster.append(*object)?;
            clusters.push(cluster)?;
        }
        Ok(Upgma::new(clusters, hyper_params))
    }

    /// Repeatedly merges the two closest clusters until the target number of clusters remains.
    ///
    /// Of each closest pair the cluster at the lower index absorbs the other, which is then
    /// removed, so each step shrinks the array by exactly one and surviving clusters keep their
    /// relative order. Reducing to the current count leaves the array untouched.
    ///
    /// # Returns
    /// * A result that, if successful, contains the remaining clusters. An error is returned if
    ///   the array is empty, holds an empty cluster or a non-finite coordinate, or if the target
    ///   is larger than the number of clusters.
    ///
    /// # Examples
    /// ```
    ///use upgma::{parse_clusters, Upgma, UpgmaParams};
    ///
    ///let input = "count=4\n1 1 1\n2 1 2\n3 5 5\n4 5 6\n";
    ///let clusters = parse_clusters::<f32, _>(input.as_bytes(), 1).unwrap();
    ///let config = UpgmaParams::builder().target_clusters(2).build();
    ///let result = Upgma::new(clusters, config).reduce().unwrap();
    ///
    ///let ids: Vec<Vec<i32>> = result
    ///    .iter()
    ///    .map(|cluster| cluster.objects().iter().map(|o| o.id).collect())
    ///    .collect();
    ///assert_eq!(vec![vec![1, 2], vec![3, 4]], ids);
    /// ```
    pub fn reduce(mut self) -> Result<ClusterArray<T>, UpgmaError> {
        DataValidator::new(&self.clusters).validate_input_data()?;
        let target = self.hp.target_clusters;
        let count = self.clusters.count();
        if target == 0 || target > count {
            return Err(UpgmaError::InvalidTargetCount { target, count });
        }

        info!(clusters = count, target, "starting reduction");
        while self.clusters.count() > target {
            let pair = self.clusters.find_neighbours()?;
            let remaining = self.clusters.merge_neighbours(pair.left_idx, pair.right_idx)?;
            debug!(
                left = pair.left_idx,
                right = pair.right_idx,
                distance = ?pair.distance.to_f64(),
                merged_size = self.clusters.clusters()[pair.left_idx].size(),
                remaining,
                "merged nearest clusters"
            );
        }
        info!(clusters = self.clusters.count(), "reduction finished");
        Ok(self.clusters)
    }
}
