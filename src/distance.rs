use crate::{Cluster, Object, UpgmaError};
use num_traits::Float;

/// Euclidean distance between two objects.
pub fn object_distance<T: Float>(a: &Object<T>, b: &Object<T>) -> T {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Average linkage distance between two clusters: the mean of the distances between every
/// object in `a` and every object in `b`. Each member counts equally, whatever the history of
/// merges that built the cluster.
///
/// # Returns
/// * The mean pairwise distance, or `UpgmaError::EmptyCluster` if either cluster is empty.
///
/// # Examples
/// ```
///use upgma::{cluster_distance, Cluster, Object};
///
///let mut a = Cluster::with_capacity(2).unwrap();
///a.append(Object::new(1, 0.0_f64, 0.0)).unwrap();
///a.append(Object::new(2, 0.0_f64, 2.0)).unwrap();
///let mut b = Cluster::with_capacity(1).unwrap();
///b.append(Object::new(3, 0.0_f64, 4.0)).unwrap();
///
///assert_eq!(3.0, cluster_distance(&a, &b).unwrap());
/// ```
pub fn cluster_distance<T: Float>(a: &Cluster<T>, b: &Cluster<T>) -> Result<T, UpgmaError> {
    if a.is_empty() || b.is_empty() {
        return Err(UpgmaError::EmptyCluster);
    }
    let (total, n_pairs) = a
        .objects()
        .iter()
        .flat_map(|oa| b.objects().iter().map(move |ob| object_distance(oa, ob)))
        .fold((T::zero(), T::zero()), |(sum, count), dist| (sum + dist, count + T::one()));
    Ok(total / n_pairs)
}
