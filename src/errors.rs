use thiserror::Error;

/// Errors surfaced when replaying patches against a sequence.
///
/// Patches produced by this crate from a diff over the same two sequences
/// always apply cleanly; an error here means the patch was constructed by
/// hand or replayed out of order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("patch index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
