use chrono::{DateTime, Utc};

use super::{Entity, Id, Role};
use crate::patch::{assign, Patch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub role_id: Id,
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
}

impl Entity for User {
    const RESOURCE: &'static str = "user";

    fn id(&self) -> Id {
        self.id
    }
}

/// Partial update for a user. Email is fixed after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<Option<String>>,
    pub password: Option<String>,
    pub role_id: Option<Id>,
}

impl Patch<User> for UserPatch {
    fn apply(self, user: &mut User) {
        assign(&mut user.name, self.name);
        assign(&mut user.password, self.password);

        if let Some(role_id) = self.role_id {
            if role_id != user.role_id {
                // loaded role no longer matches the key
                user.role = None;
            }
            user.role_id = role_id;
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none() && self.role_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> User {
        User {
            id: 5,
            name: Some("Ana".into()),
            email: "ana@example.com".into(),
            password: "secret1".into(),
            role_id: 1,
            role: Some(Role {
                id: 1,
                name: "student".into(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn changing_role_id_drops_stale_role() {
        let merged = UserPatch {
            role_id: Some(2),
            ..Default::default()
        }
        .merge(student());

        assert_eq!(merged.role_id, 2);
        assert!(merged.role.is_none());
    }

    #[test]
    fn same_role_id_keeps_loaded_role() {
        let merged = UserPatch {
            role_id: Some(1),
            password: Some("changed".into()),
            ..Default::default()
        }
        .merge(student());

        assert_eq!(merged.password, "changed");
        assert!(merged.role.is_some());
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = UserPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.merge(student()), student());
    }
}
