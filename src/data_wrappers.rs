/// The closest pair of clusters found by a neighbour search. `left_idx` is always lower than
/// `right_idx`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighbourPair<T> {
    pub left_idx: usize,
    pub right_idx: usize,
    pub distance: T,
}
