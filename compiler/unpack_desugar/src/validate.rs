//! Debug-mode validation of spliced statement lists.
//!
//! After a splice the container's new list must:
//! - have `old - 1 + inserted` statements
//! - hold the inserted statements contiguously where the replaced one was
//! - keep every other statement, by identity, in its original order
//!
//! `validate_splice` asserts this in debug builds only.

use unpack_ir::StmtId;

/// Check a splice, describing the first violation found.
pub fn check_splice(
    before: &[StmtId],
    after: &[StmtId],
    replaced: StmtId,
    inserted: &[StmtId],
) -> Result<(), String> {
    let Some(position) = before.iter().position(|&s| s == replaced) else {
        return Err(format!("replaced {replaced:?} was not in the old list"));
    };

    let expected_len = before.len() - 1 + inserted.len();
    if after.len() != expected_len {
        return Err(format!(
            "new list has {} statements, expected {expected_len}",
            after.len()
        ));
    }

    let head = &after[..position];
    let middle = &after[position..position + inserted.len()];
    let tail = &after[position + inserted.len()..];

    if head != &before[..position] {
        return Err("statements before the splice changed".to_string());
    }
    if middle != inserted {
        return Err(format!(
            "inserted statements not found contiguously at index {position}"
        ));
    }
    if tail != &before[position + 1..] {
        return Err("statements after the splice changed".to_string());
    }
    Ok(())
}

/// Assert `check_splice` in debug builds.
pub fn validate_splice(before: &[StmtId], after: &[StmtId], replaced: StmtId, inserted: &[StmtId]) {
    if cfg!(debug_assertions) {
        let result = check_splice(before, after, replaced, inserted);
        debug_assert!(result.is_ok(), "invalid splice: {result:?}");
    }
}
