//! Shape of namespace prefixes and the permissions behind complete entries.
//!
//! Namespace prefixes read service-first (`service::action::resource...`),
//! permissions read level-first (`level::action::service::resource...`).

use am_listing_sdk::{AmEntry, OwnershipLevel, PATH_SEPARATOR, Permission, PermissionError, WILDCARD};

/// Deepest prefix that still gets a synthesized wildcard child.
const MAX_WILDCARD_DEPTH: usize = 3;

/// Number of non-empty `::` segments; a trailing separator opens a new level
/// but does not count as one.
#[must_use]
pub fn segment_count(prefix: &str) -> usize {
    prefix
        .split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .count()
}

/// `prefix*` entry standing for everything below `prefix`, when one should be
/// shown in front of `entries`.
#[must_use]
pub fn wildcard_for(prefix: &str, entries: &[AmEntry]) -> Option<AmEntry> {
    if !prefix.ends_with(PATH_SEPARATOR) {
        return None;
    }
    let depth = segment_count(prefix);
    if depth > MAX_WILDCARD_DEPTH {
        return None;
    }
    let wildcard_suffix = format!("{PATH_SEPARATOR}{WILDCARD}");
    if entries.iter().any(|e| e.prefix.ends_with(&wildcard_suffix)) {
        return None;
    }
    Some(AmEntry {
        prefix: format!("{prefix}{WILDCARD}"),
        complete: depth >= MAX_WILDCARD_DEPTH,
        ..AmEntry::default()
    })
}

/// Permission granting `level` over the resource a complete prefix names.
///
/// # Errors
///
/// Any [`PermissionError`] of the rebuilt string.
pub fn permission_at(prefix: &str, level: OwnershipLevel) -> Result<Permission, PermissionError> {
    let mut segments: Vec<&str> = prefix.split(PATH_SEPARATOR).collect();
    if segments.len() > 1 {
        segments.swap(0, 1);
    }
    segments.insert(0, level.as_str());
    Permission::parse(&segments.join(PATH_SEPARATOR))
}

/// Lender and Owner permissions behind a complete prefix, in that order.
///
/// # Errors
///
/// Any [`PermissionError`] of the rebuilt strings.
pub fn paired_permissions(prefix: &str) -> Result<(Permission, Permission), PermissionError> {
    Ok((
        permission_at(prefix, OwnershipLevel::Lender)?,
        permission_at(prefix, OwnershipLevel::Owner)?,
    ))
}
