//! Agglomerative hierarchical clustering of labelled 2D points using the unweighted pair-group
//! method with arithmetic mean ("UPGMA"). Generic over floating point numeric types.
//!
//! Every object starts in a cluster of its own. The two closest clusters are merged, over and
//! over, until the requested number of clusters remains. The distance between two clusters is
//! the average of the distances between all of their members, so every object weighs the same
//! no matter how its cluster was built up.
//!
//! The building blocks are public:
//!  1. [`Cluster`] is a growable collection of objects that grows in fixed steps of
//!     [`CLUSTER_CHUNK`] slots;
//!  2. [`ClusterArray`] holds the live clusters, finds the closest pair and removes merged
//!     clusters while keeping the others in order; and
//!  3. [`Upgma`] drives the reduction down to a target number of clusters.
//!
//! # Examples
//! ```
//!use upgma::{Cluster, ClusterArray, Object, Upgma, UpgmaParams};
//!
//!let objects = vec![
//!    Object::new(1, 1.0_f64, 1.0),
//!    Object::new(2, 1.0, 2.0),
//!    Object::new(3, 5.0, 5.0),
//!    Object::new(4, 5.0, 6.0),
//!];
//!let mut clusters = ClusterArray::new();
//!for object in objects {
//!    let mut cluster = Cluster::with_capacity(1).unwrap();
//!    cluster.append(object).unwrap();
//!    clusters.push(cluster).unwrap();
//!}
//!
//!let config = UpgmaParams::builder().target_clusters(2).build();
//!let result = Upgma::new(clusters, config).reduce().unwrap();
//!assert_eq!(2, result.count());
//!assert_eq!("1[1,1] 2[1,2]", result.clusters()[0].to_string());
//!assert_eq!("3[5,5] 4[5,6]", result.clusters()[1].to_string());
//! ```
//!
//! # References
//! * [UPGMA](https://en.wikipedia.org/wiki/UPGMA)

pub use crate::cluster::{Cluster, CLUSTER_CHUNK};
pub use crate::cluster_array::ClusterArray;
pub use crate::data_wrappers::NeighbourPair;
pub use crate::distance::{cluster_distance, object_distance};
pub use crate::error::UpgmaError;
pub use crate::hyper_parameters::{UpgmaParams, UpgmaParamsBuilder};
pub use crate::io::{load_clusters, parse_clusters, print_cluster, print_clusters};
pub use crate::object::Object;
pub use crate::upgma::Upgma;

mod cluster;
mod cluster_array;
mod data_wrappers;
mod distance;
mod error;
mod hyper_parameters;
mod io;
mod object;
mod upgma;
mod validation;
