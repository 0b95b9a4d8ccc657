use crate::{Object, UpgmaError};
use num_traits::Float;
use tracing::trace;

/// Number of object slots added to a cluster each time it runs out of room. Growth is a fixed
/// increment rather than a doubling, so capacity always moves in steps of this size.
pub const CLUSTER_CHUNK: usize = 10;

/// A growable, ordered collection of objects with an explicitly tracked capacity.
///
/// The cluster owns copies of its objects. Capacity only changes through [`Cluster::resize`],
/// which `append` and `merge_into` call in steps of [`CLUSTER_CHUNK`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<T> {
    objects: Vec<Object<T>>,
    capacity: usize,
}

impl<T: Float> Cluster<T> {
    /// Creates an empty cluster with room for `capacity` objects. A capacity of zero allocates
    /// nothing.
    ///
    /// # Parameters
    /// * `capacity` - the number of object slots to allocate up front.
    ///
    /// # Returns
    /// * The empty cluster, or `UpgmaError::AllocationFailure` if the storage could not be
    ///   obtained.
    ///
    /// # Examples
    /// ```
    ///use upgma::Cluster;
    ///
    ///let cluster = Cluster::<f32>::with_capacity(4).unwrap();
    ///assert_eq!(0, cluster.size());
    ///assert_eq!(4, cluster.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, UpgmaError> {
        let mut cluster = Cluster { objects: Vec::new(), capacity: 0 };
        cluster.resize(capacity)?;
        Ok(cluster)
    }

    pub fn size(&self) -> usize {
        self.objects.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The objects in their current stored order.
    pub fn objects(&self) -> &[Object<T>] {
        &self.objects
    }

    /// Drops every object and releases the storage, leaving a cluster of size and capacity 0.
    pub fn clear(&mut self) {
        self.objects = Vec::new();
        self.capacity = 0;
    }

    /// Changes the capacity to exactly `new_capacity`. When shrinking below the current size,
    /// objects past the new capacity are dropped; the rest keep their order.
    ///
    /// If the storage cannot be grown the cluster is left untouched and
    /// `UpgmaError::AllocationFailure` is returned.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), UpgmaError> {
        if new_capacity == 0 {
            self.clear();
            return Ok(());
        }
        if new_capacity > self.objects.capacity() {
            let additional = new_capacity - self.objects.len();
            self.objects
                .try_reserve_exact(additional)
                .map_err(|err| UpgmaError::AllocationFailure(err.to_string()))?;
        } else {
            self.objects.truncate(new_capacity);
            self.objects.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
        Ok(())
    }

    /// Adds `object` to the end of the cluster, growing the capacity by [`CLUSTER_CHUNK`] first
    /// if the cluster is full.
    pub fn append(&mut self, object: Object<T>) -> Result<(), UpgmaError> {
        if self.size() == self.capacity {
            self.grow_by_chunks(1)?;
        }
        self.objects.push(object);
        Ok(())
    }

    /// Copies every object of `other` onto the end of this cluster, then sorts by id so the
    /// result does not depend on the order clusters were merged in. `other` is not modified.
    ///
    /// Capacity grows in whole [`CLUSTER_CHUNK`] steps, all reserved before any object is
    /// copied, so an allocation failure leaves this cluster as it was.
    ///
    /// # Examples
    /// ```
    ///use upgma::{Cluster, Object};
    ///
    ///let mut left = Cluster::with_capacity(1).unwrap();
    ///left.append(Object::new(7, 0.0_f32, 0.0)).unwrap();
    ///let mut right = Cluster::with_capacity(1).unwrap();
    ///right.append(Object::new(3, 1.0_f32, 1.0)).unwrap();
    ///
    ///left.merge_into(&right).unwrap();
    ///let ids: Vec<i32> = left.objects().iter().map(|o| o.id).collect();
    ///assert_eq!(vec![3, 7], ids);
    ///assert_eq!(1, right.size());
    /// ```
    pub fn merge_into(&mut self, other: &Cluster<T>) -> Result<(), UpgmaError> {
        let required = self.size() + other.size();
        if required > self.capacity {
            let missing = required - self.capacity;
            self.grow_by_chunks(missing.div_ceil(CLUSTER_CHUNK))?;
        }
        self.objects.extend_from_slice(&other.objects);
        self.sort_by_id();
        Ok(())
    }

    /// Stable ascending sort of the objects by id.
    pub fn sort_by_id(&mut self) {
        self.objects.sort_by_key(|object| object.id);
    }

    fn grow_by_chunks(&mut self, n_chunks: usize) -> Result<(), UpgmaError> {
        let new_capacity = self.capacity + n_chunks * CLUSTER_CHUNK;
        trace!(from = self.capacity, to = new_capacity, "growing cluster");
        self.resize(new_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster_of(ids: &[i32]) -> Cluster<f64> {
        let mut cluster = Cluster::with_capacity(1).unwrap();
        for &id in ids {
            cluster.append(Object::new(id, id as f64, -(id as f64))).unwrap();
        }
        cluster
    }

    fn ids(cluster: &Cluster<f64>) -> Vec<i32> {
        cluster.objects().iter().map(|o| o.id).collect()
    }

    #[test]
    fn zero_capacity_allocates_nothing() {
        let cluster = Cluster::<f64>::with_capacity(0).unwrap();
        assert_eq!(0, cluster.size());
        assert_eq!(0, cluster.capacity());
        assert!(cluster.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut cluster = cluster_of(&[1, 2, 3]);
        cluster.clear();
        assert_eq!(0, cluster.size());
        assert_eq!(0, cluster.capacity());
        let once = cluster.clone();
        cluster.clear();
        assert_eq!(once, cluster);
    }

    #[test]
    fn append_grows_by_fixed_chunks() {
        let mut cluster = Cluster::<f64>::with_capacity(0).unwrap();
        let mut growth_events = 0;
        let mut last_capacity = cluster.capacity();
        for id in 0..25 {
            cluster.append(Object::new(id, 0.0, 0.0)).unwrap();
            let capacity = cluster.capacity();
            assert!(capacity >= last_capacity);
            if capacity != last_capacity {
                assert_eq!(last_capacity + CLUSTER_CHUNK, capacity);
                growth_events += 1;
            }
            last_capacity = capacity;
        }
        assert_eq!(3, growth_events);
        assert_eq!(3 * CLUSTER_CHUNK, cluster.capacity());
        assert_eq!(25, cluster.size());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let cluster = cluster_of(&[5, 1, 3]);
        assert_eq!(vec![5, 1, 3], ids(&cluster));
    }

    #[test]
    fn resize_preserves_prefix() {
        let mut cluster = cluster_of(&[4, 2, 9, 1]);
        cluster.resize(2).unwrap();
        assert_eq!(2, cluster.capacity());
        assert_eq!(vec![4, 2], ids(&cluster));

        cluster.resize(40).unwrap();
        assert_eq!(40, cluster.capacity());
        assert_eq!(vec![4, 2], ids(&cluster));

        cluster.resize(0).unwrap();
        assert_eq!(0, cluster.capacity());
        assert!(cluster.is_empty());
    }

    #[test]
    fn failed_resize_leaves_cluster_unchanged() {
        let mut cluster = cluster_of(&[3, 1]);
        let before = cluster.clone();
        let result = cluster.resize(usize::MAX);
        assert!(matches!(result, Err(UpgmaError::AllocationFailure(_))));
        assert_eq!(before, cluster);
        assert_eq!(vec![3, 1], ids(&cluster));
    }

    #[test]
    fn merge_into_sorts_and_leaves_other_unchanged() {
        let mut left = cluster_of(&[8, 3]);
        let right = cluster_of(&[5, 1, 9]);
        let right_before = right.clone();

        left.merge_into(&right).unwrap();

        assert_eq!(5, left.size());
        assert_eq!(vec![1, 3, 5, 8, 9], ids(&left));
        assert_eq!(right_before, right);
    }

    #[test]
    fn merge_into_grows_in_whole_chunks() {
        let mut left = cluster_of(&[1]);
        assert_eq!(1, left.capacity());
        let right = cluster_of(&(2..=15).collect::<Vec<_>>());

        left.merge_into(&right).unwrap();

        assert_eq!(15, left.size());
        assert_eq!(1 + 2 * CLUSTER_CHUNK, left.capacity());
    }

    #[test]
    fn merge_into_empty_cluster() {
        let mut left = Cluster::with_capacity(0).unwrap();
        let right = cluster_of(&[2, 1]);
        left.merge_into(&right).unwrap();
        assert_eq!(vec![1, 2], ids(&left));
        assert_eq!(CLUSTER_CHUNK, left.capacity());
    }

    #[test]
    fn sort_by_id_is_stable() {
        let mut cluster = Cluster::with_capacity(3).unwrap();
        cluster.append(Object::new(2, 0.0, 0.0)).unwrap();
        cluster.append(Object::new(1, 1.0, 0.0)).unwrap();
        cluster.append(Object::new(1, 2.0, 0.0)).unwrap();
        cluster.sort_by_id();
        let xs: Vec<f64> = cluster.objects().iter().map(|o| o.x).collect();
        assert_eq!(vec![1.0, 2.0, 0.0], xs);
    }
}
