use crate::{apply, apply_extended, diff, extended_diff, Error};

/// Round-trip assertion used by the fuzz target: any pair of byte sequences
/// must patch cleanly from one to the other, with and without moves.
pub fn fuzz(old: &[u8], new: &[u8]) -> Result<(), Error> {
    let patch = diff(old, new).patch(old, new);
    assert_eq!(new, apply(old, &patch)?.as_slice());

    let patch = extended_diff(old, new).patch(old, new);
    assert_eq!(new, apply_extended(old, &patch)?.as_slice());

    Ok(())
}
