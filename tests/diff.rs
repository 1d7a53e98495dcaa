use std::collections::HashSet;

use differ_rs::{diff, diff_traces, extended_diff, SequenceDiff};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

const EXPECTATIONS: &[(&str, &str, &str)] = &[
    ("kitten", "sitting", "D(0)I(0)D(4)I(4)I(6)"),
    ("🐩itt🐨ng", "kitten", "D(0)I(0)D(4)I(4)D(6)"),
    ("1234", "ABCD", "D(0)D(1)D(2)D(3)I(0)I(1)I(2)I(3)"),
    ("1234", "", "D(0)D(1)D(2)D(3)"),
    ("", "1234", "I(0)I(1)I(2)I(3)"),
    ("Hi", "Oh Hi", "I(0)I(1)I(2)"),
    ("Hi", "Hi O", "I(2)I(3)"),
    ("Oh Hi", "Hi", "D(0)D(1)D(2)"),
    ("Hi O", "Hi", "D(2)D(3)"),
    ("Wojtek", "Wojciech", "D(3)I(3)I(4)D(5)I(6)I(7)"),
    ("1234", "1234", ""),
    ("", "", ""),
    ("Oh Hi", "Hi Oh", "D(0)D(1)D(2)I(2)I(3)I(4)"),
    ("1362", "31526", "D(0)D(2)I(1)I(2)I(4)"),
];

const EXTENDED_EXPECTATIONS: &[(&str, &str, &str)] = &[
    ("sitting", "kitten", "D(0)I(0)D(4)I(4)D(6)"),
    ("🐩itt🐨ng", "kitten", "D(0)I(0)D(4)I(4)D(6)"),
    ("1234", "ABCD", "D(0)D(1)D(2)D(3)I(0)I(1)I(2)I(3)"),
    ("1234", "", "D(0)D(1)D(2)D(3)"),
    ("", "1234", "I(0)I(1)I(2)I(3)"),
    ("Hi", "Oh Hi", "I(0)I(1)I(2)"),
    ("Hi", "Hi O", "I(2)I(3)"),
    ("Oh Hi", "Hi", "D(0)D(1)D(2)"),
    ("Hi O", "Hi", "D(2)D(3)"),
    ("Wojtek", "Wojciech", "D(3)I(3)I(4)D(5)I(6)I(7)"),
    ("1234", "1234", ""),
    ("", "", ""),
    ("gitten", "sitting", "M(0,6)I(0)D(4)I(4)"),
    ("Oh Hi", "Hi Oh", "M(0,3)M(1,4)M(2,2)"),
    ("Hi Oh", "Oh Hi", "M(0,3)M(1,4)M(2,2)"),
    ("12345", "12435", "M(2,3)"),
    ("1362", "31526", "M(0,1)M(2,4)I(2)"),
];

#[test]
fn test_diff_outputs() {
    for (from, to, expected) in EXPECTATIONS {
        assert_eq!(
            diff(&chars(from), &chars(to)).to_string(),
            *expected,
            "diff {from:?} -> {to:?}"
        );
    }
}

#[test]
fn test_extended_diff_outputs() {
    for (from, to, expected) in EXTENDED_EXPECTATIONS {
        assert_eq!(
            extended_diff(&chars(from), &chars(to)).to_string(),
            *expected,
            "extended diff {from:?} -> {to:?}"
        );
    }
}

#[test]
fn test_single_element_array() {
    let changes = diff(&chars("a"), &chars("a"));
    assert_eq!(changes.len(), 0);
}

#[test]
fn test_identical_sequences_need_no_edits() {
    assert!(diff(&[1, 2, 3], &[1, 2, 3]).is_empty());
    assert!(diff::<i32>(&[], &[]).is_empty());
}

// The tests below check efficiency of the algorithm

#[test]
fn test_duplicate_traces() {
    for (from, to, _) in EXPECTATIONS {
        let traces = diff_traces(&chars(from), &chars(to), |a, b| a == b);
        let unique: HashSet<_> = traces.iter().collect();
        assert_eq!(
            traces.len(),
            unique.len(),
            "duplicate traces for {from:?} -> {to:?}"
        );
    }
}

#[test]
fn test_traces_out_of_bounds() {
    for (from, to, _) in EXPECTATIONS {
        let from = chars(from);
        let to = chars(to);
        let out_of_bounds: Vec<_> = diff_traces(&from, &to, |a, b| a == b)
            .into_iter()
            .filter(|trace| {
                trace.to.x > from.len() as isize || trace.to.y > to.len() as isize
            })
            .collect();
        assert_eq!(out_of_bounds, vec![], "traces out of bounds");
    }
}
