use std::cmp::Ordering;

use crate::diff::{Diff, DiffElement};
use crate::patch::Patch;

/// A patch step tagged with its position in the source diff and its position
/// in the caller's requested order.
#[derive(Debug, Clone)]
pub(crate) struct SortedPatchElement<T> {
    pub(crate) value: Patch<T>,
    pub(crate) source_index: usize,
    pub(crate) sorted_index: usize,
}

impl Diff {
    /// Generates an arbitrarily ordered patch. `sort` is an "ordered before"
    /// predicate over diff elements and must describe a strict weak ordering;
    /// the indices of the emitted steps are corrected so the patch still
    /// transforms `from` into `to` when replayed in the requested order.
    ///
    /// Complexity: O(D^2).
    ///
    /// # Panics
    ///
    /// Panics if `sort` is not a strict weak ordering.
    pub fn patch_sorted<T, S>(&self, from: &[T], to: &[T], sort: S) -> Vec<Patch<T>>
    where
        T: Clone,
        S: Fn(&DiffElement, &DiffElement) -> bool,
    {
        let shifted = self.patch(from, to);
        let sorted = sorted_patch_elements(&self.elements, &shifted, &sort);
        shifted_patch_elements(sorted)
            .into_iter()
            .map(|element| element.value)
            .collect()
    }
}

/// Generates an arbitrarily ordered patch transforming `from` into `to`.
/// See [`Diff::patch_sorted`].
pub fn patch_sorted<T, S>(from: &[T], to: &[T], sort: S) -> Vec<Patch<T>>
where
    T: Clone + PartialEq,
    S: Fn(&DiffElement, &DiffElement) -> bool,
{
    crate::diff::diff(from, to).patch_sorted(from, to, sort)
}

/// Turns an "ordered before" predicate into an [`Ordering`]; incomparable
/// pairs compare equal, which keeps the stable sort deterministic.
pub(crate) fn before_ordering<E>(sort: &impl Fn(&E, &E) -> bool, a: &E, b: &E) -> Ordering {
    if sort(a, b) {
        Ordering::Less
    } else if sort(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn sorted_patch_elements<T, S>(
    elements: &[DiffElement],
    source: &[Patch<T>],
    sort: &S,
) -> Vec<SortedPatchElement<T>>
where
    T: Clone,
    S: Fn(&DiffElement, &DiffElement) -> bool,
{
    let mut order: Vec<usize> = (0..elements.len()).collect();
    order.sort_by(|&a, &b| before_ordering(sort, &elements[a], &elements[b]));

    let mut sorted: Vec<SortedPatchElement<T>> = order
        .iter()
        .enumerate()
        .map(|(sorted_index, &source_index)| SortedPatchElement {
            value: source[source_index].clone(),
            source_index,
            sorted_index,
        })
        .collect();
    sorted.sort_by_key(|element| element.source_index);
    sorted
}

/// Corrects the embedded indices of reordered patch steps.
///
/// `nodes` is an arena ordered by source position; walking each node's
/// earlier-in-source predecessors, any predecessor that ends up *after* the
/// node once sorted no longer precedes it at apply time, so the node's index
/// must stop accounting for it: an insertion crossing right decrements the
/// node, a deletion increments it. The result is flattened in sorted order.
///
/// Two nodes sharing a sorted position mean the caller's comparator is not a
/// strict weak ordering; that is a programmer error and halts instead of
/// producing a silently wrong patch.
pub(crate) fn shifted_patch_elements<T>(
    mut nodes: Vec<SortedPatchElement<T>>,
) -> Vec<SortedPatchElement<T>> {
    for node in 1..nodes.len() {
        let mut previous = node;
        while previous > 0 {
            previous -= 1;
            if nodes[previous].source_index >= nodes[node].source_index {
                break;
            }

            match nodes[previous].sorted_index.cmp(&nodes[node].sorted_index) {
                Ordering::Equal => {
                    panic!("patch sort comparator is not a strict weak ordering")
                }
                Ordering::Greater => {
                    let by = match nodes[previous].value {
                        Patch::Insertion { .. } => -1,
                        Patch::Deletion { .. } => 1,
                    };
                    nodes[node].value.shift(by);
                }
                Ordering::Less => {}
            }
        }
    }

    nodes.sort_by_key(|element| element.sorted_index);
    nodes
}
