//! Actions IAM defines over its own resources.
//!
//! The catalogs are fixed at compile time and never change at runtime.

/// Action identifiers of the self-namespace.
pub mod actions {
    pub const CREATE_ROLES: &str = "CreateRoles";
    pub const EDIT_ROLE: &str = "EditRole";
    pub const LIST_ROLES: &str = "ListRoles";

    pub const CREATE_SERVICE_ACCOUNTS: &str = "CreateServiceAccounts";
    pub const EDIT_SERVICE_ACCOUNT: &str = "EditServiceAccount";
    pub const LIST_SERVICE_ACCOUNTS: &str = "ListServiceAccounts";

    pub const CREATE_SERVICES: &str = "CreateServices";
    pub const EDIT_SERVICE: &str = "EditService";
    pub const LIST_SERVICES: &str = "ListServices";
}

const ROLES_ACTIONS: &[&str] = &[actions::CREATE_ROLES, actions::EDIT_ROLE, actions::LIST_ROLES];

const SERVICE_ACCOUNTS_ACTIONS: &[&str] = &[
    actions::CREATE_SERVICE_ACCOUNTS,
    actions::EDIT_SERVICE_ACCOUNT,
    actions::LIST_SERVICE_ACCOUNTS,
];

const SERVICES_ACTIONS: &[&str] = &[
    actions::CREATE_SERVICES,
    actions::EDIT_SERVICE,
    actions::LIST_SERVICES,
];

/// Resource type an action operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCatalog {
    Roles,
    ServiceAccounts,
    Services,
}

impl ActionCatalog {
    /// Catalogs in listing order.
    pub const ALL: [Self; 3] = [Self::Roles, Self::ServiceAccounts, Self::Services];

    #[must_use]
    pub const fn actions(self) -> &'static [&'static str] {
        match self {
            Self::Roles => ROLES_ACTIONS,
            Self::ServiceAccounts => SERVICE_ACCOUNTS_ACTIONS,
            Self::Services => SERVICES_ACTIONS,
        }
    }

    /// Catalog declaring `action`, if any.
    #[must_use]
    pub fn of(action: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|catalog| catalog.actions().contains(&action))
    }

    /// Every action of every catalog, roles first.
    pub fn all_actions() -> impl Iterator<Item = &'static str> {
        Self::ALL
            .into_iter()
            .flat_map(|catalog| catalog.actions().iter().copied())
    }
}

/// Whether a role action targets one concrete role.
///
/// Creating and listing roles act on the collection, so nothing lies below them.
#[must_use]
pub fn addresses_single_role(action: &str) -> bool {
    ActionCatalog::of(action) == Some(ActionCatalog::Roles)
        && action != actions::CREATE_ROLES
        && action != actions::LIST_ROLES
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn all_actions_preserve_catalog_order() {
        let all: Vec<_> = ActionCatalog::all_actions().collect();
        assert_eq!(
            all,
            [
                "CreateRoles",
                "EditRole",
                "ListRoles",
                "CreateServiceAccounts",
                "EditServiceAccount",
                "ListServiceAccounts",
                "CreateServices",
                "EditService",
                "ListServices",
            ]
        );
    }

    #[test]
    fn finds_catalog_of_action() {
        assert_eq!(ActionCatalog::of("EditRole"), Some(ActionCatalog::Roles));
        assert_eq!(
            ActionCatalog::of("ListServiceAccounts"),
            Some(ActionCatalog::ServiceAccounts)
        );
        assert_eq!(ActionCatalog::of("EditService"), Some(ActionCatalog::Services));
        assert_eq!(ActionCatalog::of("Deploy"), None);
        assert_eq!(ActionCatalog::of("editrole"), None);
    }

    #[test]
    fn only_edit_role_addresses_a_single_role() {
        assert!(addresses_single_role(actions::EDIT_ROLE));
        assert!(!addresses_single_role(actions::CREATE_ROLES));
        assert!(!addresses_single_role(actions::LIST_ROLES));
        assert!(!addresses_single_role(actions::EDIT_SERVICE_ACCOUNT));
        assert!(!addresses_single_role("Unknown"));
    }
}
