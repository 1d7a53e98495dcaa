use std::fmt;

use crate::trace::{diff_path_traces, Trace, TraceKind};

/// A single diff operation. Deletions point at the source sequence,
/// insertions at the target sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffElement {
    Insert { at: usize },
    Delete { at: usize },
}

impl DiffElement {
    fn from_trace(trace: &Trace) -> Option<Self> {
        match trace.kind() {
            TraceKind::Insertion => Some(DiffElement::Insert {
                at: trace.from.y as usize,
            }),
            TraceKind::Deletion => Some(DiffElement::Delete {
                at: trace.from.x as usize,
            }),
            TraceKind::MatchPoint => None,
        }
    }

}

/// An ordered sequence of deletions and insertions transforming one sequence
/// into another.
///
/// ```text
/// "12" -> "":   D(0)D(1)
/// ""   -> "12": I(0)I(1)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diff {
    pub elements: Vec<DiffElement>,
}

impl Diff {
    pub fn new(elements: Vec<DiffElement>) -> Self {
        Self { elements }
    }

    /// Builds a diff from path traces, dropping match points (they represent
    /// unchanged elements, not edits) and preserving path order.
    pub fn from_traces(traces: &[Trace]) -> Self {
        Self {
            elements: traces.iter().filter_map(DiffElement::from_trace).collect(),
        }
    }
}

/// Creates a diff between `from` and `to`.
///
/// Complexity: O((N+M)*D).
pub fn diff<T: PartialEq>(from: &[T], to: &[T]) -> Diff {
    diff_by(from, to, |a, b| a == b)
}

/// Creates a diff between `from` and `to` using a caller supplied equality
/// predicate.
pub fn diff_by<T, F>(from: &[T], to: &[T], is_equal: F) -> Diff
where
    F: Fn(&T, &T) -> bool,
{
    Diff::from_traces(&diff_path_traces(from, to, is_equal))
}

impl fmt::Display for DiffElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffElement::Delete { at } => write!(f, "D({at})"),
            DiffElement::Insert { at } => write!(f, "I({at})"),
        }
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
