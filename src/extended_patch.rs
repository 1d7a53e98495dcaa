use std::fmt;

use crate::errors::Error;
use crate::extended::{ExtendedDiff, ExtendedDiffElement};
use crate::patch::Patch;
use crate::sort::{before_ordering, shifted_patch_elements, SortedPatchElement};

/// Single step in an extended patch sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendedPatch<T> {
    /// Insert `element` at `index`.
    Insertion { index: usize, element: T },
    /// Delete the element at `index`.
    Deletion { index: usize },
    /// Remove the element at `from` and insert it at `to`.
    Move { from: usize, to: usize },
}

/// A move keeps its deletion and insertion halves linked so a caller supplied
/// sort can only reposition it as a unit.
enum BoxedElement<T> {
    Move {
        diff_element: ExtendedDiffElement,
        deletion: SortedPatchElement<T>,
        insertion: SortedPatchElement<T>,
    },
    Single {
        diff_element: ExtendedDiffElement,
        patch: SortedPatchElement<T>,
    },
}

impl<T> BoxedElement<T> {
    fn diff_element(&self) -> &ExtendedDiffElement {
        match self {
            BoxedElement::Move { diff_element, .. } | BoxedElement::Single { diff_element, .. } => {
                diff_element
            }
        }
    }
}

fn unbox<T>(element: BoxedElement<T>) -> Vec<SortedPatchElement<T>> {
    match element {
        BoxedElement::Move {
            deletion,
            insertion,
            ..
        } => vec![deletion, insertion],
        BoxedElement::Single { patch, .. } => vec![patch],
    }
}

impl ExtendedDiff {
    /// Generates a patch based on the extended diff: deletions, insertions
    /// and moves to apply, in order, to obtain `to` from `from`.
    ///
    /// Complexity: O(D^2).
    pub fn patch<T: Clone>(&self, from: &[T], to: &[T]) -> Vec<ExtendedPatch<T>> {
        let result = shifted_patch_elements(self.default_order_elements(from, to));
        self.reassemble_moves(result)
    }

    /// Generates an arbitrarily ordered extended patch. `sort` must describe
    /// a strict weak ordering over diff elements; a move's two halves sort as
    /// a unit at the move's own position.
    ///
    /// Complexity: O(D^2).
    ///
    /// # Panics
    ///
    /// Panics if `sort` is not a strict weak ordering.
    pub fn patch_sorted<T, S>(&self, from: &[T], to: &[T], sort: S) -> Vec<ExtendedPatch<T>>
    where
        T: Clone,
        S: Fn(&ExtendedDiffElement, &ExtendedDiffElement) -> bool,
    {
        let result = shifted_patch_elements(self.sorted_elements(from, to, &sort));
        self.reassemble_moves(result)
    }

    /// Shifted patch steps in source order, each carrying the position it
    /// takes once move halves are brought next to each other.
    fn default_order_elements<T: Clone>(&self, from: &[T], to: &[T]) -> Vec<SortedPatchElement<T>> {
        self.source
            .patch(from, to)
            .into_iter()
            .enumerate()
            .map(|(source_index, value)| SortedPatchElement {
                value,
                source_index,
                sorted_index: self.reordered_index[source_index],
            })
            .collect()
    }

    fn sorted_elements<T, S>(&self, from: &[T], to: &[T], sort: &S) -> Vec<SortedPatchElement<T>>
    where
        T: Clone,
        S: Fn(&ExtendedDiffElement, &ExtendedDiffElement) -> bool,
    {
        let mut boxed = self.box_elements(from, to);
        boxed.sort_by(|a, b| before_ordering(sort, a.diff_element(), b.diff_element()));

        let mut unboxed: Vec<SortedPatchElement<T>> =
            boxed.into_iter().flat_map(unbox).collect();
        for (sorted_index, element) in unboxed.iter_mut().enumerate() {
            element.sorted_index = sorted_index;
        }
        unboxed.sort_by_key(|element| element.source_index);
        unboxed
    }

    /// Pairs every move element with the patch steps of its two halves.
    fn box_elements<T: Clone>(&self, from: &[T], to: &[T]) -> Vec<BoxedElement<T>> {
        let source_patch = self.default_order_elements(from, to);
        let mut index_diff = 0;

        self.elements
            .iter()
            .enumerate()
            .map(|(i, &diff_element)| match diff_element {
                ExtendedDiffElement::Move { .. } => {
                    index_diff += 1;
                    BoxedElement::Move {
                        diff_element,
                        deletion: source_patch[self.source_index[i + index_diff - 1]].clone(),
                        insertion: source_patch[self.source_index[i + index_diff]].clone(),
                    }
                }
                _ => BoxedElement::Single {
                    diff_element,
                    patch: source_patch[self.source_index[i + index_diff]].clone(),
                },
            })
            .collect()
    }

    /// Rebuilds moves from adjacent deletion+insertion pairs. The halves of a
    /// move are never separated by a valid sort; finding them apart is an
    /// internal error and halts rather than emitting a wrong patch.
    fn reassemble_moves<T: Clone>(
        &self,
        result: Vec<SortedPatchElement<T>>,
    ) -> Vec<ExtendedPatch<T>> {
        let mut out = Vec::with_capacity(result.len());

        for i in 0..result.len() {
            let element = &result[i];
            if self.move_indices.contains(&element.source_index) {
                let Some(other_half) = result.get(i + 1) else {
                    panic!("move halves were separated while reordering an extended patch")
                };
                match (&element.value, &other_half.value) {
                    (Patch::Deletion { index }, Patch::Insertion { index: to, .. }) => {
                        out.push(ExtendedPatch::Move {
                            from: *index,
                            to: *to,
                        });
                    }
                    (Patch::Insertion { index, .. }, Patch::Deletion { index: from }) => {
                        out.push(ExtendedPatch::Move {
                            from: *from,
                            to: *index,
                        });
                    }
                    _ => panic!("move halves were separated while reordering an extended patch"),
                }
            } else if !(i > 0 && self.move_indices.contains(&result[i - 1].source_index)) {
                out.push(match &element.value {
                    Patch::Deletion { index } => ExtendedPatch::Deletion { index: *index },
                    Patch::Insertion { index, element } => ExtendedPatch::Insertion {
                        index: *index,
                        element: element.clone(),
                    },
                });
            }
        }

        out
    }
}

/// Generates an extended patch transforming `from` into `to`.
///
/// Complexity: O((N+M)*D), plus O(D^2) to detect the moves.
pub fn extended_patch<T: Clone + PartialEq>(from: &[T], to: &[T]) -> Vec<ExtendedPatch<T>> {
    crate::extended::extended_diff(from, to).patch(from, to)
}

/// Generates an arbitrarily ordered extended patch transforming `from` into
/// `to`. See [`ExtendedDiff::patch_sorted`].
pub fn extended_patch_sorted<T, S>(from: &[T], to: &[T], sort: S) -> Vec<ExtendedPatch<T>>
where
    T: Clone + PartialEq,
    S: Fn(&ExtendedDiffElement, &ExtendedDiffElement) -> bool,
{
    crate::extended::extended_diff(from, to).patch_sorted(from, to, sort)
}

/// Replays an extended patch against a copy of `seq`, step by step in the
/// given order. A move removes the element at `from` and reinserts it at `to`.
pub fn apply_extended<T: Clone>(seq: &[T], patch: &[ExtendedPatch<T>]) -> Result<Vec<T>, Error> {
    let mut result = seq.to_vec();

    for step in patch {
        match step {
            ExtendedPatch::Insertion { index, element } => {
                if *index > result.len() {
                    return Err(Error::IndexOutOfBounds {
                        index: *index,
                        len: result.len(),
                    });
                }
                result.insert(*index, element.clone());
            }
            ExtendedPatch::Deletion { index } => {
                if *index >= result.len() {
                    return Err(Error::IndexOutOfBounds {
                        index: *index,
                        len: result.len(),
                    });
                }
                result.remove(*index);
            }
            ExtendedPatch::Move { from, to } => {
                if *from >= result.len() {
                    return Err(Error::IndexOutOfBounds {
                        index: *from,
                        len: result.len(),
                    });
                }
                let element = result.remove(*from);
                if *to > result.len() {
                    return Err(Error::IndexOutOfBounds {
                        index: *to,
                        len: result.len(),
                    });
                }
                result.insert(*to, element);
            }
        }
    }

    Ok(result)
}

impl<T: fmt::Display> fmt::Display for ExtendedPatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedPatch::Deletion { index } => write!(f, "D({index})"),
            ExtendedPatch::Insertion { index, element } => write!(f, "I({index},{element})"),
            ExtendedPatch::Move { from, to } => write!(f, "M({from},{to})"),
        }
    }
}
