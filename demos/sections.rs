//! Diffs two sectioned lists, the shape a settings screen or grouped table
//! would have, and prints every resulting operation.

use differ_rs::{extended_patch, nested_extended_diff_by, SequenceDiff};

#[derive(Debug, Clone)]
struct Section {
    title: &'static str,
    rows: Vec<&'static str>,
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl AsRef<[&'static str]> for Section {
    fn as_ref(&self) -> &[&'static str] {
        &self.rows
    }
}

fn main() {
    let before = vec![
        Section {
            title: "General",
            rows: vec!["Appearance", "Language", "Notifications"],
        },
        Section {
            title: "Account",
            rows: vec!["Profile", "Password"],
        },
    ];
    let after = vec![
        Section {
            title: "Account",
            rows: vec!["Profile", "Password", "Two-factor"],
        },
        Section {
            title: "General",
            rows: vec!["Language", "Appearance"],
        },
    ];

    let diff = nested_extended_diff_by(&before, &after, |a, b| a == b, |a, b| a == b);
    println!("{} operations:", diff.len());
    for element in diff.iter() {
        println!("  {element}");
    }

    // A flat patch over the row names of one section.
    let patch = extended_patch(&before[0].rows, &after[1].rows);
    println!("\npatch for {:?}:", before[0].title);
    for step in &patch {
        println!("  {step}");
    }
}
