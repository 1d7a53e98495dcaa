use std::fmt;

use crate::diff::{Diff, DiffElement};
use crate::errors::Error;

/// Single step in a patch sequence, directly applicable to a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Insert `element` at `index`.
    Insertion { index: usize, element: T },
    /// Delete the element at `index`.
    Deletion { index: usize },
}

impl<T> Patch<T> {
    pub fn index(&self) -> usize {
        match self {
            Patch::Insertion { index, .. } | Patch::Deletion { index } => *index,
        }
    }

    pub(crate) fn shift(&mut self, by: isize) {
        match self {
            Patch::Insertion { index, .. } | Patch::Deletion { index } => {
                *index = (*index as isize + by) as usize;
            }
        }
    }
}

impl Diff {
    /// Generates a patch based on the diff: the list of steps to apply, in
    /// order, to obtain `to` from `from`.
    ///
    /// Every step's index accounts for all edits emitted before it, so the
    /// steps are only valid when replayed sequentially. Use
    /// [`Diff::patch_sorted`] to reorder them safely.
    ///
    /// Complexity: O(D).
    pub fn patch<T: Clone>(&self, from: &[T], to: &[T]) -> Vec<Patch<T>> {
        let mut shift: isize = 0;
        self.elements
            .iter()
            .map(|element| match element {
                DiffElement::Delete { at } => {
                    debug_assert!(*at < from.len(), "deletion outside the source sequence");
                    shift -= 1;
                    Patch::Deletion {
                        index: (*at as isize + shift + 1) as usize,
                    }
                }
                DiffElement::Insert { at } => {
                    shift += 1;
                    Patch::Insertion {
                        index: *at,
                        element: to[*at].clone(),
                    }
                }
            })
            .collect()
    }
}

/// Generates a patch transforming `from` into `to`.
///
/// Complexity: O((N+M)*D).
pub fn patch<T: Clone + PartialEq>(from: &[T], to: &[T]) -> Vec<Patch<T>> {
    crate::diff::diff(from, to).patch(from, to)
}

/// Replays a patch against a copy of `seq`, step by step in the given order.
pub fn apply<T: Clone>(seq: &[T], patch: &[Patch<T>]) -> Result<Vec<T>, Error> {
    let mut result = seq.to_vec();

    for step in patch {
        match step {
            Patch::Insertion { index, element } => {
                if *index > result.len() {
                    return Err(Error::IndexOutOfBounds {
                        index: *index,
                        len: result.len(),
                    });
                }
                result.insert(*index, element.clone());
            }
            Patch::Deletion { index } => {
                if *index >= result.len() {
                    return Err(Error::IndexOutOfBounds {
                        index: *index,
                        len: result.len(),
                    });
                }
                result.remove(*index);
            }
        }
    }

    Ok(result)
}

impl<T: fmt::Display> fmt::Display for Patch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::Deletion { index } => write!(f, "D({index})"),
            Patch::Insertion { index, element } => write!(f, "I({index},{element})"),
        }
    }
}
