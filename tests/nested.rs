use differ_rs::{
    nested_diff, nested_diff_by, nested_extended_diff, NestedDiff, NestedDiffElement,
};

/// A section that compares by key only, the way a sectioned list with
/// stable identifiers would.
#[derive(Debug, Clone)]
struct Keyed {
    key: i32,
    elements: Vec<i32>,
}

fn keyed(key: i32, elements: &[i32]) -> Keyed {
    Keyed {
        key,
        elements: elements.to_vec(),
    }
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl AsRef<[i32]> for Keyed {
    fn as_ref(&self) -> &[i32] {
        &self.elements
    }
}

#[test]
fn test_keyed_outputs() {
    let expectations: &[(Vec<Keyed>, Vec<Keyed>, &str)] = &[
        (
            vec![],
            vec![keyed(0, &[1, 2]), keyed(1, &[1])],
            "IS(0)IS(1)",
        ),
        (
            vec![keyed(0, &[2]), keyed(1, &[1])],
            vec![keyed(0, &[1]), keyed(1, &[])],
            "DE(0,0)IE(0,0)DE(0,1)",
        ),
        (
            vec![keyed(0, &[2]), keyed(5, &[0]), keyed(1, &[1])],
            vec![keyed(0, &[1]), keyed(1, &[])],
            "DS(1)DE(0,0)IE(0,0)DE(0,2)",
        ),
        (
            vec![keyed(0, &[2]), keyed(-1, &[1, 2, 3]), keyed(1, &[1])],
            vec![keyed(0, &[2, 3]), keyed(1, &[1, 2])],
            "DS(1)IE(1,0)IE(1,1)",
        ),
        (
            vec![keyed(0, &[2]), keyed(1, &[1])],
            vec![keyed(0, &[2, 1]), keyed(1, &[])],
            "IE(1,0)DE(0,1)",
        ),
        (
            vec![keyed(0, &[]), keyed(1, &[1, 2])],
            vec![keyed(0, &[2]), keyed(1, &[])],
            "IE(0,0)DE(0,1)DE(1,1)",
        ),
        (
            vec![keyed(0, &[1, 2]), keyed(1, &[])],
            vec![keyed(0, &[]), keyed(1, &[1])],
            "DE(0,0)DE(1,0)IE(0,1)",
        ),
        (
            vec![keyed(0, &[]), keyed(1, &[1]), keyed(2, &[2])],
            vec![keyed(0, &[1, 2]), keyed(1, &[]), keyed(2, &[])],
            "IE(0,0)IE(1,0)DE(0,1)DE(0,2)",
        ),
    ];

    for (from, to, expected) in expectations {
        assert_eq!(nested_diff(from, to).to_string(), *expected);
    }
}

// Sections pair up by their length here, so reordered contents surface as
// element edits within a matched pair.
#[test]
fn test_length_matched_sections() {
    let expectations: &[(Vec<Vec<i32>>, Vec<Vec<i32>>, &str)] = &[
        (vec![], vec![vec![1, 2], vec![1]], "IS(0)IS(1)"),
        (vec![vec![1, 2], vec![]], vec![], "DS(0)DS(1)"),
        (
            vec![vec![1, 2], vec![], vec![1]],
            vec![vec![1, 2], vec![], vec![1]],
            "",
        ),
        (
            vec![vec![1, 2], vec![1, 4]],
            vec![vec![5, 2], vec![10, 4, 8]],
            "DS(1)IS(1)DE(0,0)IE(0,0)",
        ),
        (vec![vec![1]], vec![vec![], vec![1, 2]], "DS(0)IS(0)IS(1)"),
        (vec![vec![1]], vec![vec![], vec![2]], "IS(0)DE(0,0)IE(0,1)"),
    ];

    for (from, to, expected) in expectations {
        let diff = nested_diff_by(from, to, |a, b| a.len() == b.len(), |a, b| a == b);
        assert_eq!(diff.to_string(), *expected);
    }
}

// With every section treated as matched, all edits are section-relative
// element edits.
#[test]
fn test_section_relative_element_edits() {
    let from: Vec<Vec<i32>> = vec![vec![1, 2], vec![1, 4]];
    let to: Vec<Vec<i32>> = vec![vec![5, 2], vec![10, 4, 8]];

    let diff = nested_diff_by(&from, &to, |_, _| true, |a, b| a == b);
    assert_eq!(diff.to_string(), "DE(0,0)IE(0,0)DE(0,1)IE(0,1)IE(2,1)");
}

#[test]
fn test_keyed_extended_outputs() {
    let expectations: &[(Vec<Keyed>, Vec<Keyed>, &str)] = &[
        (
            vec![keyed(1, &[]), keyed(0, &[])],
            vec![keyed(0, &[]), keyed(1, &[])],
            "MS(0,1)",
        ),
        (
            vec![keyed(1, &[1]), keyed(0, &[1, 2])],
            vec![keyed(0, &[1, 2]), keyed(1, &[1, 2])],
            "MS(0,1)IE(1,1)",
        ),
        (
            vec![keyed(1, &[1, 2]), keyed(0, &[1, 2])],
            vec![keyed(0, &[1, 2]), keyed(1, &[1])],
            "MS(0,1)DE(1,0)",
        ),
        (
            vec![keyed(1, &[1]), keyed(0, &[2, 1])],
            vec![keyed(0, &[1, 2]), keyed(1, &[1])],
            "MS(0,1)ME((0,1),(1,0))",
        ),
        (
            vec![keyed(1, &[1]), keyed(0, &[2, 1])],
            vec![keyed(0, &[2, 1])],
            "DS(0)",
        ),
        (
            vec![keyed(1, &[1])],
            vec![keyed(0, &[1]), keyed(1, &[1])],
            "IS(0)",
        ),
        (
            vec![keyed(0, &[0, 1]), keyed(1, &[2, 3])],
            vec![keyed(1, &[3, 2]), keyed(0, &[0, 1]), keyed(2, &[12])],
            "MS(0,1)IS(2)ME((0,1),(1,0))",
        ),
        (
            vec![keyed(1, &[3, 2]), keyed(0, &[0, 1]), keyed(2, &[12])],
            vec![keyed(0, &[0, 1]), keyed(1, &[2, 3])],
            "MS(0,1)DS(2)ME((0,0),(1,1))",
        ),
    ];

    for (from, to, expected) in expectations {
        assert_eq!(nested_extended_diff(from, to).to_string(), *expected);
    }
}

/// Replays a nested diff onto a list of lists: element deletions against the
/// source sections, then section deletions and insertions, then element
/// insertions against the target layout.
fn replay(from: &[Vec<i32>], to: &[Vec<i32>], diff: &NestedDiff) -> Vec<Vec<i32>> {
    let mut sections: Vec<Vec<i32>> = from.to_vec();

    let mut element_deletions: Vec<(usize, usize)> = Vec::new();
    let mut section_deletions: Vec<usize> = Vec::new();
    let mut section_insertions: Vec<usize> = Vec::new();
    let mut element_insertions: Vec<(usize, usize)> = Vec::new();
    for element in &diff.elements {
        match *element {
            NestedDiffElement::DeleteElement { at, section } => {
                element_deletions.push((section, at));
            }
            NestedDiffElement::DeleteSection { section } => section_deletions.push(section),
            NestedDiffElement::InsertSection { section } => section_insertions.push(section),
            NestedDiffElement::InsertElement { at, section } => {
                element_insertions.push((section, at));
            }
        }
    }

    element_deletions.sort();
    for &(section, at) in element_deletions.iter().rev() {
        sections[section].remove(at);
    }
    section_deletions.sort();
    for &section in section_deletions.iter().rev() {
        sections.remove(section);
    }
    section_insertions.sort();
    for &section in &section_insertions {
        sections.insert(section, to[section].clone());
    }
    element_insertions.sort();
    for &(section, at) in &element_insertions {
        let element = to[section][at];
        sections[section].insert(at, element);
    }
    sections
}

#[test]
fn test_nested_round_trip() {
    let cases: &[(Vec<Vec<i32>>, Vec<Vec<i32>>)] = &[
        (vec![], vec![vec![1, 2], vec![1]]),
        (vec![vec![1, 2], vec![]], vec![]),
        (vec![vec![1, 2], vec![1, 4]], vec![vec![5, 2], vec![10, 4, 8]]),
        (vec![vec![1]], vec![vec![], vec![1, 2]]),
        (vec![vec![1]], vec![vec![], vec![2]]),
        (
            vec![vec![1, 2, 3], vec![4, 5], vec![6]],
            vec![vec![6], vec![1, 3, 7], vec![8, 9]],
        ),
    ];

    for (from, to) in cases {
        let diff = nested_diff(from, to);
        assert_eq!(replay(from, to, &diff), *to, "{from:?} -> {to:?}");
    }
}
