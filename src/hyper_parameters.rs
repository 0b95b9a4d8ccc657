use tracing::warn;

// Defaults for parameters
const TARGET_CLUSTERS_DEFAULT: usize = 1;
const INITIAL_CAPACITY_DEFAULT: usize = 1;

// Valid minimums/left bounds of parameters
const TARGET_CLUSTERS_MINIMUM: usize = 1;
const INITIAL_CAPACITY_MINIMUM: usize = 1;

/// A wrapper around the parameters of a UPGMA reduction.
/// Only use if you want to change the defaults. Otherwise use `Upgma::default_params()` to
/// reduce the clusters all the way down to a single cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgmaParams {
    pub(crate) target_clusters: usize,
    pub(crate) initial_capacity: usize,
}

/// Builder object to set custom parameters.
pub struct UpgmaParamsBuilder {
    target_clusters: Option<usize>,
    initial_capacity: Option<usize>,
}

impl UpgmaParams {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> UpgmaParamsBuilder {
        UpgmaParamsBuilder {
            target_clusters: None,
            initial_capacity: None,
        }
    }

    pub fn target_clusters(&self) -> usize {
        self.target_clusters
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl UpgmaParamsBuilder {
    /// Sets the number of clusters to stop at. Merging continues until exactly this many
    /// clusters remain. Defaults to 1.
    ///
    /// # Parameters
    /// * target_clusters - the final number of clusters
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn target_clusters(mut self, target_clusters: usize) -> UpgmaParamsBuilder {
        let valid_target_clusters = UpgmaParamsBuilder::validate_input_left_bound(
            target_clusters,
            TARGET_CLUSTERS_MINIMUM,
            "target_clusters",
        );
        self.target_clusters = Some(valid_target_clusters);
        self
    }

    /// Sets the number of object slots allocated for each single object cluster built by
    /// `Upgma::from_objects` or passed to `load_clusters`. Clusters still grow by
    /// `CLUSTER_CHUNK` slots whenever they fill up. Defaults to 1.
    ///
    /// # Parameters
    /// * initial_capacity - the starting capacity of single object clusters
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn initial_capacity(mut self, initial_capacity: usize) -> UpgmaParamsBuilder {
        let valid_initial_capacity = UpgmaParamsBuilder::validate_input_left_bound(
            initial_capacity,
            INITIAL_CAPACITY_MINIMUM,
            "initial_capacity",
        );
        self.initial_capacity = Some(valid_initial_capacity);
        self
    }

    /// Finishes the building of the parameter configuration. A call to this method is
    /// required to exit the builder pattern and complete the construction of the parameters.
    ///
    /// # Returns
    /// * The completed UPGMA parameter configuration.
    pub fn build(self) -> UpgmaParams {
        UpgmaParams {
            target_clusters: self.target_clusters.unwrap_or(TARGET_CLUSTERS_DEFAULT),
            initial_capacity: self.initial_capacity.unwrap_or(INITIAL_CAPACITY_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
        if input_param < left_bound {
            warn!("{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}.");
            left_bound
        } else {
            input_param
        }
    }
}
