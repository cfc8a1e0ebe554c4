// Traversal operations over anything implementing SequenceCore.
//
// Every operation comes in two forms. The `try_` form takes a caller
// function returning a Result, stops at the first Err and hands it back
// untouched. The plain form runs the same traversal with an infallible
// function.

use std::convert::Infallible;

use crate::sequence::{Sequence, SequenceCore};

#[inline]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

// record where a traversal stopped, then pass the caller's error on
fn stopped<E>(operation: &'static str, index: usize, err: E) -> E {
    log::trace!("{operation} stopped at element {index}: caller function failed");
    err
}

/// Invoke `action` once per element, in source order.
///
/// Nothing is invoked for an empty sequence.
pub fn each<'a, S, F>(seq: &'a S, mut action: F)
where
    S: SequenceCore<'a> + ?Sized,
    F: FnMut(&'a S::Item),
{
    infallible(try_each(seq, |item| {
        action(item);
        Ok(())
    }))
}

/// Invoke `action` once per element, in source order.
///
/// If `action` fails the traversal stops there and the error is returned;
/// later elements are not visited.
pub fn try_each<'a, S, F, E>(seq: &'a S, mut action: F) -> Result<(), E>
where
    S: SequenceCore<'a> + ?Sized,
    F: FnMut(&'a S::Item) -> Result<(), E>,
{
    for (index, item) in seq.iter().enumerate() {
        action(item).map_err(|err| stopped("each", index, err))?;
    }
    Ok(())
}

/// The first element for which `predicate` holds, or `None`.
///
/// The predicate is not evaluated past the first match.
pub fn find_match<'a, S, P>(seq: &'a S, mut predicate: P) -> Option<&'a S::Item>
where
    S: SequenceCore<'a> + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    infallible(try_find_match(seq, |item| Ok(predicate(item))))
}

/// Like [`find_match`], stopping at the first error from `predicate`.
pub fn try_find_match<'a, S, P, E>(seq: &'a S, mut predicate: P) -> Result<Option<&'a S::Item>, E>
where
    S: SequenceCore<'a> + ?Sized,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    for (index, item) in seq.iter().enumerate() {
        if predicate(item).map_err(|err| stopped("find_match", index, err))? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

fn try_filter<'a, S, P, E>(
    seq: &'a S,
    mut predicate: P,
    keep: bool,
    operation: &'static str,
) -> Result<Sequence<S::Item>, E>
where
    S: SequenceCore<'a> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, item) in seq.iter().enumerate() {
        if predicate(item).map_err(|err| stopped(operation, index, err))? == keep {
            kept.push(item.clone());
        }
    }
    Ok(kept.into())
}

/// A new sequence with the elements for which `predicate` holds, in
/// source order.
///
/// This is empty, never absent, when nothing qualifies.
pub fn select<'a, S, P>(seq: &'a S, mut predicate: P) -> Sequence<S::Item>
where
    S: SequenceCore<'a> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    infallible(try_select(seq, |item| Ok(predicate(item))))
}

/// Like [`select`], stopping at the first error from `predicate`.
pub fn try_select<'a, S, P, E>(seq: &'a S, predicate: P) -> Result<Sequence<S::Item>, E>
where
    S: SequenceCore<'a> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    try_filter(seq, predicate, true, "select")
}

/// A new sequence with the elements for which `predicate` does not hold,
/// in source order. The complement of [`select`].
pub fn reject<'a, S, P>(seq: &'a S, mut predicate: P) -> Sequence<S::Item>
where
    S: SequenceCore<'a> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    infallible(try_reject(seq, |item| Ok(predicate(item))))
}

/// Like [`reject`], stopping at the first error from `predicate`.
pub fn try_reject<'a, S, P, E>(seq: &'a S, predicate: P) -> Result<Sequence<S::Item>, E>
where
    S: SequenceCore<'a> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    try_filter(seq, predicate, false, "reject")
}

/// Split into `(selected, rejected)`, evaluating `predicate` once per
/// element.
pub fn partition<'a, S, P>(seq: &'a S, mut predicate: P) -> (Sequence<S::Item>, Sequence<S::Item>)
where
    S: SequenceCore<'a> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    infallible(try_partition(seq, |item| Ok(predicate(item))))
}

/// Like [`partition`], stopping at the first error from `predicate`.
#[allow(clippy::type_complexity)]
pub fn try_partition<'a, S, P, E>(
    seq: &'a S,
    mut predicate: P,
) -> Result<(Sequence<S::Item>, Sequence<S::Item>), E>
where
    S: SequenceCore<'a> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    let mut selected = Vec::new();
    let mut rejected = Vec::new();
    for (index, item) in seq.iter().enumerate() {
        if predicate(item).map_err(|err| stopped("partition", index, err))? {
            selected.push(item.clone());
        } else {
            rejected.push(item.clone());
        }
    }
    Ok((selected.into(), rejected.into()))
}

/// Apply `transform` to every element, in source order.
///
/// The result has the same length as the input. There is no way for
/// `transform` to drop an element: map to a marker such as `Option` and
/// filter afterwards if that is needed.
pub fn map<'a, S, U, F>(seq: &'a S, mut transform: F) -> Sequence<U>
where
    S: SequenceCore<'a> + ?Sized,
    F: FnMut(&'a S::Item) -> U,
{
    infallible(try_map(seq, |item| Ok(transform(item))))
}

/// Apply `transform` to every element, in source order.
///
/// The first failure fails the whole operation; no partial sequence is
/// returned.
pub fn try_map<'a, S, U, F, E>(seq: &'a S, mut transform: F) -> Result<Sequence<U>, E>
where
    S: SequenceCore<'a> + ?Sized,
    F: FnMut(&'a S::Item) -> Result<U, E>,
{
    let mut mapped = Vec::with_capacity(seq.len());
    for (index, item) in seq.iter().enumerate() {
        mapped.push(transform(item).map_err(|err| stopped("map", index, err))?);
    }
    Ok(mapped.into())
}

/// Fold left to right, starting from `initial`.
///
/// The accumulated type is independent of the element type. An empty
/// sequence gives back `initial` unchanged.
pub fn reduce<'a, S, R, F>(seq: &'a S, initial: R, mut accumulator: F) -> R
where
    S: SequenceCore<'a> + ?Sized,
    F: FnMut(R, &'a S::Item) -> R,
{
    infallible(try_reduce(seq, initial, |running, item| {
        Ok(accumulator(running, item))
    }))
}

/// Like [`reduce`], stopping at the first error from `accumulator`.
pub fn try_reduce<'a, S, R, F, E>(seq: &'a S, initial: R, mut accumulator: F) -> Result<R, E>
where
    S: SequenceCore<'a> + ?Sized,
    F: FnMut(R, &'a S::Item) -> Result<R, E>,
{
    let mut running = initial;
    for (index, item) in seq.iter().enumerate() {
        running = accumulator(running, item).map_err(|err| stopped("reduce", index, err))?;
    }
    Ok(running)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn test_each_visits_in_order() {
        let s = vec![1, 2, 3];
        let mut seen = Vec::new();
        each(&s, |x| seen.push(*x));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_each_empty_invokes_nothing() {
        let s: Vec<i32> = vec![];
        let mut calls = 0;
        each(&s, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_try_each_stops_at_failure() {
        let s = vec![1, 2, 3, 4];
        let mut seen = Vec::new();
        let result = try_each(&s, |x| {
            if *x == 3 {
                return Err("three");
            }
            seen.push(*x);
            Ok(())
        });
        assert_eq!(result, Err("three"));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_find_match_short_circuits() {
        let s = vec![1, 2, 3, 4, 5];
        let calls = Cell::new(0);
        let found = find_match(&s, |x| {
            calls.set(calls.get() + 1);
            *x > 3
        });
        assert_eq!(found, Some(&4));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_find_match_first_of_duplicates() {
        let s = vec![(1, 'a'), (2, 'b'), (2, 'c')];
        assert_eq!(find_match(&s, |(n, _)| *n == 2), Some(&(2, 'b')));
    }

    #[test]
    fn test_find_match_none() {
        let s = vec![1, 3, 5];
        assert_eq!(find_match(&s, is_even), None);
    }

    #[test]
    fn test_try_find_match_error_before_match() {
        let s = vec![1, 0, 5];
        let result = try_find_match(&s, |x| if *x == 0 { Err(()) } else { Ok(*x > 3) });
        assert_eq!(result, Err(()));
    }

    #[test]
    fn test_try_find_match_match_before_error() {
        let s = vec![5, 0];
        let result = try_find_match(&s, |x| if *x == 0 { Err(()) } else { Ok(*x > 3) });
        assert_eq!(result, Ok(Some(&5)));
    }

    #[test]
    fn test_select_and_reject() {
        let s = vec![1, 2, 3, 4, 5];
        assert_eq!(select(&s, is_even).as_slice(), &[2, 4]);
        assert_eq!(reject(&s, is_even).as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn test_select_nothing_is_empty_sequence() {
        let s = vec![1, 3];
        assert_eq!(select(&s, is_even), Sequence::Empty);
    }

    #[test]
    fn test_try_select_propagates() {
        let s = vec![1, 2, 3];
        let mut seen = Vec::new();
        let result = try_select(&s, |x| {
            seen.push(*x);
            if *x == 2 {
                Err("bad")
            } else {
                Ok(true)
            }
        });
        assert_eq!(result, Err("bad"));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_try_reject_propagates() {
        let s = vec![1, 2, 3];
        let result = try_reject(&s, |x| if *x == 2 { Err("bad") } else { Ok(false) });
        assert_eq!(result, Err("bad"));
    }

    #[test]
    fn test_partition_calls_predicate_once_per_element() {
        let s = vec![1, 2, 3, 4, 5];
        let mut calls = 0;
        let (evens, odds) = partition(&s, |x| {
            calls += 1;
            is_even(x)
        });
        assert_eq!(calls, 5);
        assert_eq!(evens.as_slice(), &[2, 4]);
        assert_eq!(odds.as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn test_try_partition_stops_at_failure() {
        let s = vec![1, 2, 0, 4];
        let mut seen = Vec::new();
        let result = try_partition(&s, |x| {
            seen.push(*x);
            if *x == 0 {
                Err("zero")
            } else {
                Ok(is_even(x))
            }
        });
        assert_eq!(result, Err("zero"));
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_try_partition_without_failure() {
        let s = vec![1, 2, 0, 4];
        let result = try_partition(&s, |x| Ok::<_, ()>(is_even(x)));
        let (evens, odds) = result.unwrap();
        assert_eq!(evens.as_slice(), &[2, 0, 4]);
        assert_eq!(odds.as_slice(), &[1]);
    }

    #[test]
    fn test_map_squares() {
        let s = vec![1, 2, 3, 4, 5];
        assert_eq!(map(&s, |x| x * x).as_slice(), &[1, 4, 9, 16, 25]);
    }

    #[test]
    fn test_map_to_other_type() {
        let s = vec![1, 22, 333];
        let lengths = map(&s, |x| x.to_string().len());
        assert_eq!(lengths.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_try_map_division_by_zero() {
        let s = vec![1, 2, 0, 4];
        let calls = Cell::new(0);
        let result = try_map(&s, |x| {
            calls.set(calls.get() + 1);
            10_i32.checked_div(*x).ok_or("division by zero")
        });
        assert_eq!(result, Err("division by zero"));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_reduce_sum() {
        let s = vec![1, 2, 3, 4, 5];
        assert_eq!(reduce(&s, 0, |sum, x| sum + x), 15);
    }

    #[test]
    fn test_reduce_empty_returns_initial() {
        let s: Vec<i32> = vec![];
        assert_eq!(reduce(&s, "seed", |_, _| "changed"), "seed");
    }

    #[test]
    fn test_reduce_is_left_fold() {
        let s = vec!["a", "b", "c"];
        let folded = reduce(&s, String::from("z"), |acc, x| format!("({acc}{x})"));
        assert_eq!(folded, "(((za)b)c)");
    }

    #[test]
    fn test_try_reduce_propagates() {
        let s = vec![1_u8, 200, 100];
        let result = try_reduce(&s, 0_u8, |acc, x| acc.checked_add(*x).ok_or(acc));
        assert_eq!(result, Err(201));
    }
}
