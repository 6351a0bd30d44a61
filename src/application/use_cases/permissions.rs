//! Role and ownership based permission evaluation.
//!
//! A pure predicate over (user, property, action): no state, no
//! transitions, safe to call from any context. Admins hold every
//! permission; regular users are scoped to properties they manage.
//! Denials just return `false`; surfacing a message is the caller's job.

use crate::domain::auth::{Action, MenuItem, Permission, PropertyAccess, Role, User};

/// Grants held by each role. Admins get the full set; regular users are
/// limited to their own listings and performance.
fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => &[
            Permission::ViewAllProperties,
            Permission::ViewOwnProperties,
            Permission::CreateProperty,
            Permission::EditAllProperties,
            Permission::EditOwnProperties,
            Permission::DeleteAllProperties,
            Permission::DeleteOwnProperties,
            Permission::ViewUsers,
            Permission::ManageUsers,
            Permission::ViewAllPerformance,
            Permission::ViewOwnPerformance,
            Permission::BulkUpload,
        ],
        Role::User => &[
            Permission::ViewOwnProperties,
            Permission::CreateProperty,
            Permission::EditOwnProperties,
            Permission::DeleteOwnProperties,
            Permission::ViewOwnPerformance,
        ],
    }
}

/// Whether a user holds a fine-grained grant.
pub fn has_permission(user: Option<&User>, permission: Permission) -> bool {
    match user {
        Some(user) => role_permissions(user.role).contains(&permission),
        None => false,
    }
}

/// Ownership test: the property's user or manager reference matches any
/// identity shape this user can appear under.
fn owns(user: &User, property: &PropertyAccess) -> bool {
    if property.user_id.as_deref() == Some(user.id.as_str()) {
        return true;
    }
    match property.manager_id.as_deref() {
        Some(manager_id) => user
            .manager_identities()
            .iter()
            .any(|identity| identity == manager_id),
        None => false,
    }
}

/// Decide whether `user` may perform `action` on `property`.
///
/// Anonymous callers may do nothing. Any authenticated user may view and
/// comment on any property; editing, deleting, and reading contact info
/// require admin or ownership.
pub fn can_perform(user: Option<&User>, property: &PropertyAccess, action: Action) -> bool {
    let user = match user {
        Some(user) => user,
        None => return false,
    };

    if user.is_admin() {
        return true;
    }

    match action {
        Action::View | Action::Comment => true,
        Action::Edit | Action::Delete | Action::ViewContactInfo => owns(user, property),
    }
}

const BASE_MENU: &[MenuItem] = &[
    MenuItem {
        label: "Dashboard",
        path: "/",
        permission: Some(Permission::ViewOwnProperties),
    },
    MenuItem {
        label: "My Properties",
        path: "/my-properties",
        permission: Some(Permission::ViewOwnProperties),
    },
];

const ADMIN_MENU: &[MenuItem] = &[
    MenuItem {
        label: "All Properties",
        path: "/properties",
        permission: Some(Permission::ViewAllProperties),
    },
    MenuItem {
        label: "User Management",
        path: "/users",
        permission: Some(Permission::ManageUsers),
    },
    MenuItem {
        label: "Staff Performance",
        path: "/performance",
        permission: Some(Permission::ViewAllPerformance),
    },
    MenuItem {
        label: "CSV Import",
        path: "/csv-import",
        permission: Some(Permission::BulkUpload),
    },
];

const SETTINGS_MENU: MenuItem = MenuItem {
    label: "Settings",
    path: "/settings",
    permission: None,
};

/// The navigation entries this user may see, in fixed order: base items,
/// admin items for admins, settings last. Items without a permission are
/// visible to everyone, including anonymous sessions.
pub fn authorized_menu(user: Option<&User>) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = BASE_MENU.to_vec();

    if user.map(User::is_admin).unwrap_or(false) {
        items.extend(ADMIN_MENU.iter().cloned());
    }
    items.push(SETTINGS_MENU);

    items
        .into_iter()
        .filter(|item| match item.permission {
            Some(permission) => has_permission(user, permission),
            None => true,
        })
        .collect()
}
