use std::fmt;

use crate::diff::{diff_by, Diff, DiffElement};
use crate::trace::{diff_path_traces, TraceKind};

/// A single operation of a two-level diff: whole-section edits plus element
/// edits scoped to a matched pair of sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedDiffElement {
    DeleteSection { section: usize },
    InsertSection { section: usize },
    DeleteElement { at: usize, section: usize },
    InsertElement { at: usize, section: usize },
}

/// A diff between two sequences of sequences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NestedDiff {
    pub elements: Vec<NestedDiffElement>,
}

/// Creates a diff between `from` and `to`, diffing elements two levels deep.
/// Sections compare by value equality of the whole inner sequence.
pub fn nested_diff<S, T>(from: &[S], to: &[S]) -> NestedDiff
where
    S: AsRef<[T]> + PartialEq,
    T: PartialEq,
{
    nested_diff_by(from, to, |a, b| a == b, |a, b| a == b)
}

/// Creates a diff between `from` and `to`, diffing elements two levels deep
/// with caller supplied section and element equality predicates.
///
/// Section edits come first, followed by the element edits of every matched
/// section pair in path order. Element deletions are tagged with the source
/// section index, element insertions with the target section index.
pub fn nested_diff_by<S, T, FS, FE>(
    from: &[S],
    to: &[S],
    is_equal_section: FS,
    is_equal_element: FE,
) -> NestedDiff
where
    S: AsRef<[T]>,
    FS: Fn(&S, &S) -> bool,
    FE: Fn(&T, &T) -> bool,
{
    let traces = diff_path_traces(from, to, &is_equal_section);

    let mut elements: Vec<NestedDiffElement> = Diff::from_traces(&traces)
        .elements
        .iter()
        .map(|element| match element {
            DiffElement::Delete { at } => NestedDiffElement::DeleteSection { section: *at },
            DiffElement::Insert { at } => NestedDiffElement::InsertSection { section: *at },
        })
        .collect();

    for trace in traces
        .iter()
        .filter(|trace| trace.kind() == TraceKind::MatchPoint)
    {
        let source_section = trace.from.x as usize;
        let target_section = trace.from.y as usize;

        let inner = diff_by(
            from[source_section].as_ref(),
            to[target_section].as_ref(),
            &is_equal_element,
        );
        elements.extend(inner.elements.iter().map(|element| match element {
            DiffElement::Delete { at } => NestedDiffElement::DeleteElement {
                at: *at,
                section: source_section,
            },
            DiffElement::Insert { at } => NestedDiffElement::InsertElement {
                at: *at,
                section: target_section,
            },
        }));
    }

    NestedDiff { elements }
}

impl fmt::Display for NestedDiffElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedDiffElement::DeleteSection { section } => write!(f, "DS({section})"),
            NestedDiffElement::InsertSection { section } => write!(f, "IS({section})"),
            NestedDiffElement::DeleteElement { at, section } => write!(f, "DE({at},{section})"),
            NestedDiffElement::InsertElement { at, section } => write!(f, "IE({at},{section})"),
        }
    }
}

impl fmt::Display for NestedDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
