// creation.rs contains the functions that create a Sequence
// serialization.rs contains the optional serde support

use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An owned, immutable sequence of elements.
///
/// This is what the operations return when they build a new sequence.
/// A sequence is normalized on construction: no elements is always `Empty`,
/// a single element is always `One`. Cloning is cheap, as the elements of
/// `Many` are shared.
#[derive(Debug, Clone)]
pub enum Sequence<T> {
    Empty,
    One(T),
    Many(Rc<[T]>),
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Sequence<T> {
    /// View the elements as a slice, in order.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Sequence::Empty => &[],
            Sequence::One(item) => std::slice::from_ref(item),
            Sequence::Many(items) => items,
        }
    }

    /// Copy the elements out into a vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

// equality goes by content, not by variant
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
