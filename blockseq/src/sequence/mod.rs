/// A sequence is an ordered, finite list of elements, possibly with
/// duplicates. Traversal operations only ever read it.
///
/// Any container implementing `SequenceCore` can be traversed; `Sequence`
/// is the owned value the operations hand back.
mod creation;
mod sequence_core;
#[cfg(feature = "serde")]
mod serialization;
mod traits;

pub use sequence_core::Sequence;
pub use traits::{SequenceCore, SequenceExt};
