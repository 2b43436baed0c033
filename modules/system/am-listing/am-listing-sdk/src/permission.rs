//! Canonical permission grammar.
//!
//! A permission is written `OwnershipLevel::Action::Service::ResourceHierarchy`,
//! for example `RL::EditRole::self::3f0c` or `RO::Deploy::maestro::sniper-3d::na::*`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PermissionError;

/// Separator between the parts of a permission and between hierarchy segments.
pub const PATH_SEPARATOR: &str = "::";

/// Segment standing for "everything at this level and below".
pub const WILDCARD: &str = "*";

/// Holding right over an action on a resource.
///
/// - `Owner` can exercise the action and grant the exact same right to others.
/// - `Lender` can only exercise the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnershipLevel {
    #[serde(rename = "RO")]
    Owner,
    #[serde(rename = "RL")]
    Lender,
}

impl OwnershipLevel {
    /// Wire token of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "RO",
            Self::Lender => "RL",
        }
    }

    /// Whether holding `self` implies holding `requested`.
    #[must_use]
    pub fn covers(self, requested: Self) -> bool {
        self == Self::Owner || self == requested
    }
}

impl fmt::Display for OwnershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnershipLevel {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RO" => Ok(Self::Owner),
            "RL" => Ok(Self::Lender),
            other => Err(PermissionError::InvalidOwnershipLevel {
                token: other.to_owned(),
            }),
        }
    }
}

/// Action identifier, defined by the service owning it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action(String);

impl Action {
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self(action.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Permission-namespace name of a service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Service(String);

impl Service {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self(service.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path to a resource or to a resource scope.
///
/// Examples:
/// - closed: `maestro::sniper-3d::na::sniper3d-red`
/// - open: `*`
///
/// A hierarchy is open when it consists of a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHierarchy {
    open: bool,
    size: usize,
    hierarchy: Vec<String>,
}

impl ResourceHierarchy {
    /// Split a resource path into its segments.
    ///
    /// # Errors
    ///
    /// `EmptyPart` when any segment is empty; `index` is the position of the
    /// first empty segment within `path`.
    pub fn parse(path: &str) -> Result<Self, PermissionError> {
        let hierarchy: Vec<String> = path.split(PATH_SEPARATOR).map(str::to_owned).collect();
        if let Some(index) = hierarchy.iter().position(String::is_empty) {
            return Err(PermissionError::EmptyPart { index });
        }
        let size = hierarchy.len();
        Ok(Self {
            open: size == 1,
            size,
            hierarchy,
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.hierarchy
    }

    /// Whether a grant over `self` reaches `requested`.
    ///
    /// A `*` segment matches exactly one segment, except in last position where
    /// it matches any non-empty remainder.
    #[must_use]
    pub fn covers(&self, requested: &Self) -> bool {
        let last = self.hierarchy.len() - 1;
        for (i, granted) in self.hierarchy.iter().enumerate() {
            if granted == WILDCARD && i == last {
                return requested.size >= self.size;
            }
            match requested.hierarchy.get(i) {
                Some(segment) if granted == WILDCARD || granted == segment => {}
                _ => return false,
            }
        }
        requested.size == self.size
    }
}

impl fmt::Display for ResourceHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hierarchy.join(PATH_SEPARATOR))
    }
}

/// Ownership level of an action over a resource of a service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission {
    ownership_level: OwnershipLevel,
    action: Action,
    service: Service,
    resource_hierarchy: ResourceHierarchy,
}

impl Permission {
    #[must_use]
    pub fn new(
        ownership_level: OwnershipLevel,
        action: Action,
        service: Service,
        resource_hierarchy: ResourceHierarchy,
    ) -> Self {
        Self {
            ownership_level,
            action,
            service,
            resource_hierarchy,
        }
    }

    /// Parse a permission from its canonical string form.
    ///
    /// # Errors
    ///
    /// - `Incomplete` when there are fewer than four `::`-separated parts
    /// - `InvalidOwnershipLevel` when the first part is not `RO` or `RL`
    /// - `EmptyPart` when any part is empty
    pub fn parse(s: &str) -> Result<Self, PermissionError> {
        let parts: Vec<&str> = s.split(PATH_SEPARATOR).collect();
        if parts.len() < 4 {
            return Err(PermissionError::Incomplete { parts: parts.len() });
        }
        let ownership_level: OwnershipLevel = parts[0].parse()?;
        if let Some(index) = parts.iter().position(|p| p.is_empty()) {
            return Err(PermissionError::EmptyPart { index });
        }
        let resource_hierarchy = ResourceHierarchy::parse(&parts[3..].join(PATH_SEPARATOR))?;

        Ok(Self {
            ownership_level,
            action: Action::new(parts[1]),
            service: Service::new(parts[2]),
            resource_hierarchy,
        })
    }

    #[must_use]
    pub fn ownership_level(&self) -> OwnershipLevel {
        self.ownership_level
    }

    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }

    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    #[must_use]
    pub fn resource_hierarchy(&self) -> &ResourceHierarchy {
        &self.resource_hierarchy
    }

    /// Same action, service and resource at another ownership level.
    #[must_use]
    pub fn with_ownership_level(&self, ownership_level: OwnershipLevel) -> Self {
        Self {
            ownership_level,
            ..self.clone()
        }
    }

    /// Whether holding `self` implies holding `requested`.
    #[must_use]
    pub fn covers(&self, requested: &Self) -> bool {
        self.ownership_level.covers(requested.ownership_level)
            && self.action == requested.action
            && self.service == requested.service
            && self.resource_hierarchy.covers(&requested.resource_hierarchy)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{level}{sep}{action}{sep}{service}{sep}{rh}",
            level = self.ownership_level,
            action = self.action,
            service = self.service,
            rh = self.resource_hierarchy,
            sep = PATH_SEPARATOR,
        )
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn perm(s: &str) -> Permission {
        Permission::parse(s).unwrap()
    }

    #[test]
    fn parses_complete_permission() {
        let p = perm("RL::EditRole::self::3f0c");

        assert_eq!(p.ownership_level(), OwnershipLevel::Lender);
        assert_eq!(p.action().as_str(), "EditRole");
        assert_eq!(p.service().as_str(), "self");
        assert!(p.resource_hierarchy().is_open());
        assert_eq!(p.resource_hierarchy().size(), 1);
    }

    #[test]
    fn hierarchy_is_built_from_every_trailing_part() {
        let p = perm("RO::Deploy::maestro::sniper-3d::na::sniper3d-red");

        let rh = p.resource_hierarchy();
        assert!(!rh.is_open());
        assert_eq!(rh.size(), 3);
        assert_eq!(rh.segments(), ["sniper-3d", "na", "sniper3d-red"]);
    }

    #[test]
    fn rejects_fewer_than_four_parts() {
        for s in ["", "RO", "RO::EditRole", "RO::EditRole::self"] {
            let err = Permission::parse(s).unwrap_err();
            assert!(
                matches!(err, PermissionError::Incomplete { .. }),
                "{s:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn rejects_unknown_ownership_level() {
        for token in ["", "ro", "RX", "Owner", "ROO"] {
            let s = format!("{token}::EditRole::self::*");
            let err = Permission::parse(&s).unwrap_err();
            assert_eq!(
                err,
                PermissionError::InvalidOwnershipLevel {
                    token: token.to_owned()
                }
            );
        }
    }

    #[test]
    fn rejects_empty_parts() {
        let cases = [
            ("RO::::self::*", 1),
            ("RO::EditRole::::*", 2),
            ("RO::EditRole::self::", 3),
            ("RO::EditRole::self::a::::b", 4),
            ("RO::EditRole::self::a::", 4),
        ];
        for (s, index) in cases {
            assert_eq!(
                Permission::parse(s).unwrap_err(),
                PermissionError::EmptyPart { index },
                "{s}"
            );
        }
    }

    #[test]
    fn single_token_hierarchy_is_open() {
        let rh = ResourceHierarchy::parse("*").unwrap();

        assert!(rh.is_open());
        assert_eq!(rh.size(), 1);
        assert_eq!(rh.segments(), ["*"]);
    }

    #[test]
    fn multi_segment_hierarchy_is_closed() {
        let rh = ResourceHierarchy::parse("a::b::c").unwrap();

        assert!(!rh.is_open());
        assert_eq!(rh.size(), 3);
        assert_eq!(rh.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn display_round_trips() {
        for s in [
            "RL::EditRole::self::3f0c",
            "RO::Deploy::maestro::sniper-3d::na::*",
            "RO::ListServices::self::*",
        ] {
            let p = perm(s);
            assert_eq!(p.to_string(), s);
            assert_eq!(perm(&p.to_string()), p);
        }
    }

    #[test]
    fn ownership_level_serializes_as_token() {
        assert_eq!(
            serde_json::to_string(&OwnershipLevel::Owner).unwrap(),
            "\"RO\""
        );
        let level: OwnershipLevel = serde_json::from_str("\"RL\"").unwrap();
        assert_eq!(level, OwnershipLevel::Lender);
    }

    #[test]
    fn with_ownership_level_keeps_the_rest() {
        let lender = perm("RL::EditRole::self::3f0c");
        let owner = lender.with_ownership_level(OwnershipLevel::Owner);

        assert_eq!(owner.to_string(), "RO::EditRole::self::3f0c");
    }

    #[test]
    fn owner_covers_lender_but_not_the_reverse() {
        let owner = perm("RO::EditRole::self::3f0c");
        let lender = perm("RL::EditRole::self::3f0c");

        assert!(owner.covers(&lender));
        assert!(owner.covers(&owner));
        assert!(lender.covers(&lender));
        assert!(!lender.covers(&owner));
    }

    #[test]
    fn trailing_wildcard_covers_any_suffix() {
        let grant = perm("RL::Deploy::maestro::sniper-3d::*");

        assert!(grant.covers(&perm("RL::Deploy::maestro::sniper-3d::na")));
        assert!(grant.covers(&perm("RL::Deploy::maestro::sniper-3d::na::red")));
        assert!(grant.covers(&perm("RL::Deploy::maestro::sniper-3d::*")));
        assert!(!grant.covers(&perm("RL::Deploy::maestro::sniper-3d")));
        assert!(!grant.covers(&perm("RL::Deploy::maestro::other::na")));
    }

    #[test]
    fn inner_wildcard_matches_one_segment() {
        let grant = perm("RL::Deploy::maestro::*::na");

        assert!(grant.covers(&perm("RL::Deploy::maestro::sniper-3d::na")));
        assert!(!grant.covers(&perm("RL::Deploy::maestro::sniper-3d::eu")));
        assert!(!grant.covers(&perm("RL::Deploy::maestro::sniper-3d::na::x")));
    }

    #[test]
    fn coverage_requires_same_action_and_service() {
        let grant = perm("RO::EditRole::self::*");

        assert!(!grant.covers(&perm("RO::ListRoles::self::*")));
        assert!(!grant.covers(&perm("RO::EditRole::maestro::*")));
    }
}
