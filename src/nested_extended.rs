use std::fmt;

use crate::diff::Diff;
use crate::extended::{extended_diff_by, ExtendedDiff, ExtendedDiffElement};
use crate::trace::{diff_path_traces, TraceKind};

/// A single operation of a two-level extended diff: section edits and moves,
/// plus element edits and moves scoped to matched or moved section pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedExtendedDiffElement {
    DeleteSection { section: usize },
    InsertSection { section: usize },
    MoveSection { from: usize, to: usize },
    DeleteElement { at: usize, section: usize },
    InsertElement { at: usize, section: usize },
    /// Element move between `(item, section)` coordinates.
    MoveElement {
        from: (usize, usize),
        to: (usize, usize),
    },
}

/// An extended diff between two sequences of sequences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NestedExtendedDiff {
    pub elements: Vec<NestedExtendedDiffElement>,
}

/// Creates an extended diff between `from` and `to`, diffing elements two
/// levels deep. Sections compare by value equality of the whole inner
/// sequence.
pub fn nested_extended_diff<S, T>(from: &[S], to: &[S]) -> NestedExtendedDiff
where
    S: AsRef<[T]> + PartialEq,
    T: PartialEq,
{
    nested_extended_diff_by(from, to, |a, b| a == b, |a, b| a == b)
}

/// Creates an extended diff between `from` and `to`, diffing elements two
/// levels deep with caller supplied section and element equality predicates.
///
/// Emission order: section edits and moves, then the element edits of every
/// moved section pair, then the element edits of every matched section pair.
/// Element deletions are tagged with the source section index, insertions
/// with the target section index, moves with both.
pub fn nested_extended_diff_by<S, T, FS, FE>(
    from: &[S],
    to: &[S],
    is_equal_section: FS,
    is_equal_element: FE,
) -> NestedExtendedDiff
where
    S: AsRef<[T]>,
    FS: Fn(&S, &S) -> bool,
    FE: Fn(&T, &T) -> bool,
{
    let traces = diff_path_traces(from, to, &is_equal_section);
    let section_diff =
        ExtendedDiff::from_diff(Diff::from_traces(&traces), from, to, &is_equal_section);

    let mut elements: Vec<NestedExtendedDiffElement> = section_diff
        .elements
        .iter()
        .map(|element| match element {
            ExtendedDiffElement::Delete { at } => {
                NestedExtendedDiffElement::DeleteSection { section: *at }
            }
            ExtendedDiffElement::Insert { at } => {
                NestedExtendedDiffElement::InsertSection { section: *at }
            }
            ExtendedDiffElement::Move { from, to } => NestedExtendedDiffElement::MoveSection {
                from: *from,
                to: *to,
            },
        })
        .collect();

    // Moved section pairs still get their contents diffed.
    for element in &section_diff.elements {
        if let ExtendedDiffElement::Move {
            from: from_section,
            to: to_section,
        } = *element
        {
            let inner = extended_diff_by(
                from[from_section].as_ref(),
                to[to_section].as_ref(),
                &is_equal_element,
            );
            elements.extend(inner.elements.iter().map(|element| match *element {
                ExtendedDiffElement::Insert { at } => NestedExtendedDiffElement::InsertElement {
                    at,
                    section: to_section,
                },
                ExtendedDiffElement::Delete { at } => NestedExtendedDiffElement::DeleteElement {
                    at,
                    section: from_section,
                },
                ExtendedDiffElement::Move { from, to } => {
                    NestedExtendedDiffElement::MoveElement {
                        from: (from, from_section),
                        to: (to, to_section),
                    }
                }
            }));
        }
    }

    for trace in traces
        .iter()
        .filter(|trace| trace.kind() == TraceKind::MatchPoint)
    {
        let source_section = trace.from.x as usize;
        let target_section = trace.from.y as usize;

        let inner = extended_diff_by(
            from[source_section].as_ref(),
            to[target_section].as_ref(),
            &is_equal_element,
        );
        elements.extend(inner.elements.iter().map(|element| match *element {
            ExtendedDiffElement::Delete { at } => NestedExtendedDiffElement::DeleteElement {
                at,
                section: source_section,
            },
            ExtendedDiffElement::Insert { at } => NestedExtendedDiffElement::InsertElement {
                at,
                section: target_section,
            },
            ExtendedDiffElement::Move { from, to } => NestedExtendedDiffElement::MoveElement {
                from: (from, source_section),
                to: (to, target_section),
            },
        }));
    }

    NestedExtendedDiff { elements }
}

impl fmt::Display for NestedExtendedDiffElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedExtendedDiffElement::DeleteSection { section } => write!(f, "DS({section})"),
            NestedExtendedDiffElement::InsertSection { section } => write!(f, "IS({section})"),
            NestedExtendedDiffElement::MoveSection { from, to } => write!(f, "MS({from},{to})"),
            NestedExtendedDiffElement::DeleteElement { at, section } => {
                write!(f, "DE({at},{section})")
            }
            NestedExtendedDiffElement::InsertElement { at, section } => {
                write!(f, "IE({at},{section})")
            }
            NestedExtendedDiffElement::MoveElement { from, to } => {
                write!(f, "ME(({},{}),({},{}))", from.0, from.1, to.0, to.1)
            }
        }
    }
}

impl fmt::Display for NestedExtendedDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
