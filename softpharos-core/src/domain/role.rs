use chrono::{DateTime, Utc};

use super::{Entity, Id};
use crate::patch::{assign, Patch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Role {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Role {
    const RESOURCE: &'static str = "role";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl Patch<Role> for RolePatch {
    fn apply(self, role: &mut Role) {
        assign(&mut role.name, self.name);
        assign(&mut role.description, self.description);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_description_keeps_name() {
        let role = Role {
            id: 2,
            name: "professor".into(),
            description: Some("grades milestones".into()),
            ..Default::default()
        };

        let merged = RolePatch {
            description: Some(None),
            ..Default::default()
        }
        .merge(role);

        assert_eq!(merged.name, "professor");
        assert_eq!(merged.description, None);
    }
}
