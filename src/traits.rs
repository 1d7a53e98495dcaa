use crate::diff::{Diff, DiffElement};
use crate::extended::{ExtendedDiff, ExtendedDiffElement};
use crate::nested::{NestedDiff, NestedDiffElement};
use crate::nested_extended::{NestedExtendedDiff, NestedExtendedDiffElement};

/// Shared behavior of the diff flavors: an ordered sequence of diff elements.
pub trait SequenceDiff {
    type Element;

    fn elements(&self) -> &[Self::Element];

    fn len(&self) -> usize {
        self.elements().len()
    }

    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    fn iter(&self) -> std::slice::Iter<'_, Self::Element> {
        self.elements().iter()
    }
}

impl SequenceDiff for Diff {
    type Element = DiffElement;

    fn elements(&self) -> &[DiffElement] {
        &self.elements
    }
}

impl SequenceDiff for ExtendedDiff {
    type Element = ExtendedDiffElement;

    fn elements(&self) -> &[ExtendedDiffElement] {
        &self.elements
    }
}

impl SequenceDiff for NestedDiff {
    type Element = NestedDiffElement;

    fn elements(&self) -> &[NestedDiffElement] {
        &self.elements
    }
}

impl SequenceDiff for NestedExtendedDiff {
    type Element = NestedExtendedDiffElement;

    fn elements(&self) -> &[NestedExtendedDiffElement] {
        &self.elements
    }
}
