use std::collections::VecDeque;

use crate::error;
use crate::ops;

use super::sequence_core::Sequence;

/// The core sequence interface: a container must implement this to take
/// part in the traversal operations.
///
/// If you do, [`SequenceExt`] provides the whole operation set on top of it.
pub trait SequenceCore<'a> {
    /// The element type.
    type Item: 'a;

    /// Iterator over the elements, in source order.
    type Iter: Iterator<Item = &'a Self::Item>;

    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool;

    /// The amount of elements in the sequence
    fn len(&self) -> usize;

    /// Get the element at the index, if it exists
    fn get(&'a self, index: usize) -> Option<&'a Self::Item>;

    /// Get the elements from the sequence as an iterator
    fn iter(&'a self) -> Self::Iter;

    /// Get the single element from the sequence, if it only contains one
    fn one(&'a self) -> error::Result<&'a Self::Item> {
        let mut iter = self.iter();
        match (iter.next(), iter.next()) {
            (Some(item), None) => Ok(item),
            _ => Err(error::Error::NotOne(self.len())),
        }
    }

    /// Get an optional element from the sequence
    ///
    /// An empty sequence gives `None`; more than one element is an error.
    fn option(&'a self) -> error::Result<Option<&'a Self::Item>> {
        let mut iter = self.iter();
        match (iter.next(), iter.next()) {
            (None, _) => Ok(None),
            (Some(item), None) => Ok(Some(item)),
            _ => Err(error::Error::MoreThanOne(self.len())),
        }
    }
}

/// The traversal operations as methods on any [`SequenceCore`].
///
/// Each method delegates to the free function of the same name in the
/// crate root.
pub trait SequenceExt<'a>: SequenceCore<'a> {
    /// Invoke `action` once per element, in order.
    fn each<F>(&'a self, action: F)
    where
        F: FnMut(&'a Self::Item),
    {
        ops::each(self, action)
    }

    /// Invoke `action` once per element, stopping at the first failure.
    fn try_each<F, E>(&'a self, action: F) -> Result<(), E>
    where
        F: FnMut(&'a Self::Item) -> Result<(), E>,
    {
        ops::try_each(self, action)
    }

    /// The first element for which `predicate` holds.
    fn find_match<P>(&'a self, predicate: P) -> Option<&'a Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        ops::find_match(self, predicate)
    }

    fn try_find_match<P, E>(&'a self, predicate: P) -> Result<Option<&'a Self::Item>, E>
    where
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        ops::try_find_match(self, predicate)
    }

    /// The elements for which `predicate` holds, in order.
    fn select<P>(&'a self, predicate: P) -> Sequence<Self::Item>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        ops::select(self, predicate)
    }

    fn try_select<P, E>(&'a self, predicate: P) -> Result<Sequence<Self::Item>, E>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        ops::try_select(self, predicate)
    }

    /// The elements for which `predicate` does not hold, in order.
    fn reject<P>(&'a self, predicate: P) -> Sequence<Self::Item>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        ops::reject(self, predicate)
    }

    fn try_reject<P, E>(&'a self, predicate: P) -> Result<Sequence<Self::Item>, E>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        ops::try_reject(self, predicate)
    }

    /// Split into `(selected, rejected)` in a single pass.
    fn partition<P>(&'a self, predicate: P) -> (Sequence<Self::Item>, Sequence<Self::Item>)
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        ops::partition(self, predicate)
    }

    #[allow(clippy::type_complexity)]
    fn try_partition<P, E>(
        &'a self,
        predicate: P,
    ) -> Result<(Sequence<Self::Item>, Sequence<Self::Item>), E>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        ops::try_partition(self, predicate)
    }

    /// Transform every element, keeping positions.
    fn map<U, F>(&'a self, transform: F) -> Sequence<U>
    where
        F: FnMut(&'a Self::Item) -> U,
    {
        ops::map(self, transform)
    }

    fn try_map<U, F, E>(&'a self, transform: F) -> Result<Sequence<U>, E>
    where
        F: FnMut(&'a Self::Item) -> Result<U, E>,
    {
        ops::try_map(self, transform)
    }

    /// Left fold starting from `initial`.
    fn reduce<R, F>(&'a self, initial: R, accumulator: F) -> R
    where
        F: FnMut(R, &'a Self::Item) -> R,
    {
        ops::reduce(self, initial, accumulator)
    }

    fn try_reduce<R, F, E>(&'a self, initial: R, accumulator: F) -> Result<R, E>
    where
        F: FnMut(R, &'a Self::Item) -> Result<R, E>,
    {
        ops::try_reduce(self, initial, accumulator)
    }
}

impl<'a, S> SequenceExt<'a> for S where S: SequenceCore<'a> + ?Sized {}

impl<'a, T: 'a> SequenceCore<'a> for [T] {
    type Item = T;
    type Iter = std::slice::Iter<'a, T>;

    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&'a self, index: usize) -> Option<&'a T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn iter(&'a self) -> std::slice::Iter<'a, T> {
        <[T]>::iter(self)
    }
}

impl<'a, T: 'a> SequenceCore<'a> for Vec<T> {
    type Item = T;
    type Iter = std::slice::Iter<'a, T>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&'a self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn iter(&'a self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T: 'a> SequenceCore<'a> for VecDeque<T> {
    type Item = T;
    type Iter = std::collections::vec_deque::Iter<'a, T>;

    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&'a self, index: usize) -> Option<&'a T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn iter(&'a self) -> std::collections::vec_deque::Iter<'a, T> {
        VecDeque::iter(self)
    }
}

impl<'a, T: 'a> SequenceCore<'a> for Sequence<T> {
    type Item = T;
    type Iter = std::slice::Iter<'a, T>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            Sequence::Empty => 0,
            Sequence::One(_) => 1,
            Sequence::Many(items) => items.len(),
        }
    }

    #[inline]
    fn get(&'a self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn iter(&'a self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}
