// ============================================================
// AUTH DOMAIN TYPES
// ============================================================
// Users, roles, grants, and the ownership reference carried by a
// property record. Pure data; evaluation lives in the application
// layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// An authenticated user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    /// Legacy admin flag from the bypass login path; either this or
    /// `role == Admin` marks an administrator.
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin || self.is_admin
    }

    /// The identifier shapes under which this user may appear as a
    /// property's manager. The manager reference was written by three
    /// different login paths over time, so ownership has to match any
    /// of them.
    pub fn manager_identities(&self) -> [String; 3] {
        [
            self.id.clone(),
            self.email.clone(),
            format!("hardcoded-{}", self.email),
        ]
    }
}

/// Ownership reference of a property record, as stored alongside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyAccess {
    pub user_id: Option<String>,
    pub manager_id: Option<String>,
}

/// An operation a caller wants to perform on a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Delete,
    Comment,
    ViewContactInfo,
}

/// Fine-grained grants backing menu filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewAllProperties,
    ViewOwnProperties,
    CreateProperty,
    EditAllProperties,
    EditOwnProperties,
    DeleteAllProperties,
    DeleteOwnProperties,
    ViewUsers,
    ManageUsers,
    ViewAllPerformance,
    ViewOwnPerformance,
    BulkUpload,
}

/// A navigation entry with the grant it requires. `permission: None`
/// means the entry is visible to everyone.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub permission: Option<Permission>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_flag_or_role() {
        let by_role = User {
            id: "u1".to_string(),
            email: "a@the-realty.co.kr".to_string(),
            role: Role::Admin,
            is_admin: false,
        };
        let by_flag = User {
            id: "u2".to_string(),
            email: "b@the-realty.co.kr".to_string(),
            role: Role::User,
            is_admin: true,
        };

        assert!(by_role.is_admin());
        assert!(by_flag.is_admin());
    }

    #[test]
    fn test_manager_identities_shapes() {
        let user = User {
            id: "u3".to_string(),
            email: "jma@the-realty.co.kr".to_string(),
            role: Role::User,
            is_admin: false,
        };

        let ids = user.manager_identities();
        assert!(ids.contains(&"u3".to_string()));
        assert!(ids.contains(&"jma@the-realty.co.kr".to_string()));
        assert!(ids.contains(&"hardcoded-jma@the-realty.co.kr".to_string()));
    }
}
