use crate::core::models::{Access, UserRole};
use crate::utils::error::{RbacError, Result};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Distinct ids of the roles still granted by `assignments` at `now`
pub(super) fn active_role_ids(assignments: &[UserRole], now: DateTime<Utc>) -> Vec<i32> {
    assignments
        .iter()
        .filter(|assignment| assignment.is_active_at(now))
        .map(|assignment| assignment.role_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fail with an integrity error when an association references an id
/// that has no row behind it.
pub(super) fn ensure_all_present(
    kind: &str,
    referenced: &[i32],
    found: impl IntoIterator<Item = i32>,
) -> Result<()> {
    let found: BTreeSet<i32> = found.into_iter().collect();
    let missing: Vec<String> = referenced
        .iter()
        .filter(|id| !found.contains(id))
        .map(ToString::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RbacError::integrity(format!(
            "association references missing {} id(s): {}",
            kind,
            missing.join(", ")
        )))
    }
}

/// Distinct access names in ascending order
pub(super) fn distinct_names(accesses: &[Access]) -> Vec<String> {
    accesses
        .iter()
        .map(|access| access.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted distinct ids
pub(super) fn dedup_ids(ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
