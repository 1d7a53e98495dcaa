use std::collections::HashSet;
use std::fmt;

use crate::diff::{diff_by, Diff, DiffElement};

/// A single extended diff operation: a deletion, an insertion, or a paired
/// deletion+insertion of equal values re-expressed as a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendedDiffElement {
    Insert { at: usize },
    Delete { at: usize },
    Move { from: usize, to: usize },
}

impl From<DiffElement> for ExtendedDiffElement {
    fn from(element: DiffElement) -> Self {
        match element {
            DiffElement::Insert { at } => ExtendedDiffElement::Insert { at },
            DiffElement::Delete { at } => ExtendedDiffElement::Delete { at },
        }
    }
}

/// A sequence of deletions, insertions and moves, plus the bookkeeping
/// required to reorder the derived patch without breaking move pairs.
#[derive(Debug, Clone)]
pub struct ExtendedDiff {
    /// The diff the extended diff was computed from.
    pub source: Diff,
    pub elements: Vec<ExtendedDiffElement>,
    /// Maps positions in a reordering where each move's deletion and
    /// insertion sit next to each other back to positions in `source`.
    pub(crate) source_index: Vec<usize>,
    /// Inverse of `source_index`.
    pub(crate) reordered_index: Vec<usize>,
    /// Positions in `source` holding the deletion half of a move.
    pub(crate) move_indices: HashSet<usize>,
}

/// Creates an extended diff between `from` and `to`.
///
/// Complexity: O((N+M)*D), plus O(D^2) to detect the moves.
pub fn extended_diff<T: PartialEq>(from: &[T], to: &[T]) -> ExtendedDiff {
    extended_diff_by(from, to, |a, b| a == b)
}

/// Creates an extended diff between `from` and `to` using a caller supplied
/// equality predicate.
pub fn extended_diff_by<T, F>(from: &[T], to: &[T], is_equal: F) -> ExtendedDiff
where
    F: Fn(&T, &T) -> bool,
{
    let diff = diff_by(from, to, &is_equal);
    ExtendedDiff::from_diff(diff, from, to, is_equal)
}

impl ExtendedDiff {
    /// Detects moves in an existing diff over the same two sequences.
    ///
    /// Pairing is greedy: every unconsumed element searches forward for the
    /// first unconsumed complementary element with an equal value, and both
    /// halves are consumed once paired. With several equal-valued candidates
    /// the first found wins; the policy is deliberately not globally optimal.
    ///
    /// Complexity: O(D^2) where D is the number of diff elements.
    pub fn from_diff<T, F>(diff: Diff, from: &[T], to: &[T], is_equal: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut elements = Vec::new();
        let mut move_origins = HashSet::new();
        let mut move_targets = HashSet::new();
        let mut source_index = Vec::new();

        for candidate_index in 0..diff.elements.len() {
            if move_targets.contains(&candidate_index) || move_origins.contains(&candidate_index)
            {
                continue;
            }

            let candidate = diff.elements[candidate_index];
            match first_match(
                &diff,
                &move_origins,
                &move_targets,
                candidate,
                candidate_index,
                from,
                to,
                &is_equal,
            ) {
                Some((mv, match_index)) => {
                    // The deletion half is recorded first; the candidate is
                    // that half exactly when it is the pair's delete. Both
                    // halves can share an index, so the variant decides.
                    if matches!(candidate, DiffElement::Delete { .. }) {
                        source_index.push(candidate_index);
                        source_index.push(match_index);
                        move_origins.insert(candidate_index);
                        move_targets.insert(match_index);
                    } else {
                        source_index.push(match_index);
                        source_index.push(candidate_index);
                        move_origins.insert(match_index);
                        move_targets.insert(candidate_index);
                    }
                    elements.push(mv);
                }
                None => {
                    source_index.push(candidate_index);
                    elements.push(ExtendedDiffElement::from(candidate));
                }
            }
        }

        let reordered_index = flip(&source_index);

        ExtendedDiff {
            source: diff,
            source_index,
            reordered_index,
            elements,
            move_indices: move_origins,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn first_match<T, F>(
    diff: &Diff,
    move_origins: &HashSet<usize>,
    move_targets: &HashSet<usize>,
    candidate: DiffElement,
    candidate_index: usize,
    from: &[T],
    to: &[T],
    is_equal: &F,
) -> Option<(ExtendedDiffElement, usize)>
where
    F: Fn(&T, &T) -> bool,
{
    for match_index in candidate_index + 1..diff.elements.len() {
        if move_origins.contains(&match_index) || move_targets.contains(&match_index) {
            continue;
        }
        if let Some(mv) = create_match(candidate, diff.elements[match_index], from, to, is_equal)
        {
            return Some((mv, match_index));
        }
    }
    None
}

fn create_match<T, F>(
    candidate: DiffElement,
    matched: DiffElement,
    from: &[T],
    to: &[T],
    is_equal: &F,
) -> Option<ExtendedDiffElement>
where
    F: Fn(&T, &T) -> bool,
{
    match (candidate, matched) {
        (DiffElement::Delete { at: deleted }, DiffElement::Insert { at: inserted })
        | (DiffElement::Insert { at: inserted }, DiffElement::Delete { at: deleted }) => {
            if is_equal(&from[deleted], &to[inserted]) {
                Some(ExtendedDiffElement::Move {
                    from: deleted,
                    to: inserted,
                })
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Inverts a permutation given as an array of indices.
fn flip(array: &[usize]) -> Vec<usize> {
    let mut pairs: Vec<(usize, usize)> = array.iter().copied().zip(0..).collect();
    pairs.sort_by_key(|&(value, _)| value);
    pairs.into_iter().map(|(_, position)| position).collect()
}

impl fmt::Display for ExtendedDiffElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedDiffElement::Delete { at } => write!(f, "D({at})"),
            ExtendedDiffElement::Insert { at } => write!(f, "I({at})"),
            ExtendedDiffElement::Move { from, to } => write!(f, "M({from},{to})"),
        }
    }
}

impl fmt::Display for ExtendedDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
