use num_traits::Float;

/// A single labelled point in the plane. Objects are plain values: clusters hold their own
/// copies and never mutate them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object<T> {
    pub id: i32,
    pub x: T,
    pub y: T,
}

impl<T: Float> Object<T> {
    pub fn new(id: i32, x: T, y: T) -> Self {
        Object { id, x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
