//! Block-style traversal operations over ordered sequences.
//!
//! The operations are `each`, `find_match`, `select`, `reject`, `map` and
//! `reduce`, plus `partition`. They are available as free functions and as
//! methods through [`SequenceExt`]. They work on slices, `Vec`, `VecDeque`
//! and the owned [`Sequence`] they return.
//!
//! ```
//! use blockseq::{reduce, select, SequenceExt};
//!
//! let s = vec![1, 2, 3, 4, 5];
//! assert_eq!(select(&s, |x| x % 2 == 0).as_slice(), &[2, 4]);
//! assert_eq!(reduce(&s, 0, |sum, x| sum + x), 15);
//! assert_eq!(s.find_match(|x| *x > 3), Some(&4));
//! ```
//!
//! Every operation has a `try_` form taking a function that returns a
//! `Result`; the first error stops the traversal and is returned as is.
mod error;
mod ops;
mod sequence;

pub use error::{Error, Result};
pub use ops::{
    each, find_match, map, partition, reduce, reject, select, try_each, try_find_match, try_map,
    try_partition, try_reduce, try_reject, try_select,
};
pub use sequence::{Sequence, SequenceCore, SequenceExt};
