/// A list of items that can be split into fixed-size chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch<T>(Vec<T>);

impl<T: Clone> Batch<T> {
    pub fn new(items: Vec<T>) -> Self {
        Batch(items)
    }

    /// Splits the items into chunks of at most `size` elements, preserving
    /// order. Returns `None` when `size` is zero.
    pub fn chunks(&self, size: usize) -> Option<Vec<Vec<T>>> {
        if size == 0 {
            return None;
        }
        Some(self.0.chunks(size).map(<[T]>::to_vec).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> FromIterator<T> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Batch(iter.into_iter().collect())
    }
}
