use upgma::{
    cluster_distance, Cluster, ClusterArray, Object, Upgma, UpgmaError, UpgmaParams,
    CLUSTER_CHUNK,
};

#[test]
fn reduce_two_pairs() {
    let data = vec![(1, 1.0, 1.0), (2, 1.0, 2.0), (3, 5.0, 5.0), (4, 5.0, 6.0)];
    let clusters = singleton_clusters(&data);
    let hp = UpgmaParams::builder().target_clusters(2).build();
    let result = Upgma::new(clusters, hp).reduce().unwrap();
    assert_eq!(vec![vec![1, 2], vec![3, 4]], cluster_ids(&result));
}

#[test]
fn reduce_order_independent_of_input_order() {
    // Same points as above with the pairs interleaved
    let data = vec![(3, 5.0, 5.0), (1, 1.0, 1.0), (4, 5.0, 6.0), (2, 1.0, 2.0)];
    let clusters = singleton_clusters(&data);
    let hp = UpgmaParams::builder().target_clusters(2).build();
    let result = Upgma::new(clusters, hp).reduce().unwrap();
    // Lower slots survive, so the cluster holding 3 stays first
    assert_eq!(vec![vec![3, 4], vec![1, 2]], cluster_ids(&result));
}

#[test]
fn reduce_three_groups() {
    let data = cluster_test_data();
    let clusters = singleton_clusters(&data);
    let hp = UpgmaParams::builder().target_clusters(3).build();
    let result = Upgma::new(clusters, hp).reduce().unwrap();
    assert_eq!(
        vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9, 10], vec![11]],
        cluster_ids(&result)
    );
}

#[test]
fn reduce_to_single_cluster() {
    let data = cluster_test_data();
    let clusters = singleton_clusters(&data);
    let result = Upgma::default_params(clusters).reduce().unwrap();
    assert_eq!(1, result.count());
    let ids: Vec<i32> = (1..=11).collect();
    assert_eq!(vec![ids], cluster_ids(&result));
    assert_eq!(11, result.clusters()[0].size());
}

#[test]
fn reduce_each_step_shrinks_by_one() {
    let data = cluster_test_data();
    for target in 1..=data.len() {
        let clusters = singleton_clusters(&data);
        let hp = UpgmaParams::builder().target_clusters(target).build();
        let result = Upgma::new(clusters, hp).reduce().unwrap();
        assert_eq!(target, result.count());
        let n_objects: usize = result.iter().map(|cluster| cluster.size()).sum();
        assert_eq!(data.len(), n_objects);
    }
}

#[test]
fn reduce_to_current_count_is_noop() {
    let data = vec![
        (5, 0.0, 0.0),
        (2, 3.0, 1.0),
        (9, 1.0, 1.0),
        (1, 8.0, 2.0),
        (4, 2.5, 6.0),
    ];
    let clusters = singleton_clusters(&data);
    let hp = UpgmaParams::builder().target_clusters(5).build();
    let result = Upgma::new(clusters.clone(), hp).reduce().unwrap();
    assert_eq!(clusters, result);
}

#[test]
fn average_linkage_differs_from_single_linkage() {
    // Single linkage would join {1, 2} with 3 (nearest member 2.0 away), while the average
    // distance from 3 to {1, 2} is 3.0 and from 4 to {1, 2} is only about 2.88.
    let data = vec![(1, 0.0, 0.0), (2, 2.0, 0.0), (3, 4.0, 0.0), (4, 1.0, 2.7)];
    let clusters = singleton_clusters(&data);

    let pair_12 = cluster_distance(&clusters.clusters()[0], &clusters.clusters()[1]).unwrap();
    assert_eq!(2.0, pair_12);

    let hp = UpgmaParams::builder().target_clusters(2).build();
    let result = Upgma::new(clusters, hp).reduce().unwrap();
    assert_eq!(vec![vec![1, 2, 4], vec![3]], cluster_ids(&result));
}

#[test]
fn merged_clusters_grow_in_chunks() {
    let data: Vec<(i32, f64, f64)> = (1..=25).map(|id| (id, id as f64, 0.0)).collect();
    let clusters = singleton_clusters(&data);
    let result = Upgma::default_params(clusters).reduce().unwrap();
    let merged = &result.clusters()[0];
    assert_eq!(25, merged.size());
    assert_eq!(0, (merged.capacity() - 1) % CLUSTER_CHUNK);
    assert!(merged.capacity() >= merged.size());
}

#[test]
fn target_larger_than_count() {
    let clusters = singleton_clusters(&[(1, 0.0, 0.0), (2, 1.0, 1.0)]);
    let hp = UpgmaParams::builder().target_clusters(3).build();
    let result = Upgma::new(clusters, hp).reduce();
    assert!(matches!(
        result,
        Err(UpgmaError::InvalidTargetCount { target: 3, count: 2 })
    ));
}

#[test]
fn empty_data() {
    let result = Upgma::default_params(ClusterArray::<f32>::new()).reduce();
    assert!(matches!(result, Err(UpgmaError::EmptyDataset)));
}

#[test]
fn non_finite_coordinate() {
    let clusters = singleton_clusters(&[(1, 0.0, 0.0), (2, f64::INFINITY, 1.0)]);
    let result = Upgma::default_params(clusters).reduce();
    assert!(matches!(result, Err(UpgmaError::NonFiniteCoordinate(..))));
}

fn singleton_clusters(data: &[(i32, f64, f64)]) -> ClusterArray<f64> {
    let mut clusters = ClusterArray::with_capacity(data.len()).unwrap();
    for &(id, x, y) in data {
        let mut cluster = Cluster::with_capacity(1).unwrap();
        cluster.append(Object::new(id, x, y)).unwrap();
        clusters.push(cluster).unwrap();
    }
    clusters
}

fn cluster_ids(clusters: &ClusterArray<f64>) -> Vec<Vec<i32>> {
    clusters
        .iter()
        .map(|cluster| cluster.objects().iter().map(|o| o.id).collect())
        .collect()
}

fn cluster_test_data() -> Vec<(i32, f64, f64)> {
    vec![
        (1, 1.5, 2.2),
        (2, 1.0, 1.1),
        (3, 1.2, 1.4),
        (4, 0.8, 1.0),
        (5, 1.1, 1.0),
        (6, 3.7, 4.0),
        (7, 3.9, 3.9),
        (8, 3.6, 4.1),
        (9, 3.8, 3.9),
        (10, 4.0, 4.1),
        (11, 10.0, 10.0),
    ]
}
