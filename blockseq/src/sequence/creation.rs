use std::rc::Rc;

use super::sequence_core::Sequence;

impl<T> Sequence<T> {
    /// Create a sequence from a vector, normalizing the variant.
    pub fn new(mut items: Vec<T>) -> Self {
        match items.len() {
            0 => Self::Empty,
            1 => items.pop().map_or(Self::Empty, Self::One),
            _ => Self::Many(items.into()),
        }
    }

    /// Concatenate two sequences producing a new sequence.
    pub fn concat(self, other: Self) -> Self
    where
        T: Clone,
    {
        match (self, other) {
            (Self::Empty, other) => other,
            (this, Self::Empty) => this,
            (Self::One(item1), Self::One(item2)) => Self::Many(Rc::from(vec![item1, item2])),
            (this, other) => {
                let (a, b) = (this.as_slice(), other.as_slice());
                let mut many = Vec::with_capacity(a.len() + b.len());
                many.extend_from_slice(a);
                many.extend_from_slice(b);
                Self::Many(many.into())
            }
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> From<Option<T>> for Sequence<T> {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => Self::One(item),
            None => Self::Empty,
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
