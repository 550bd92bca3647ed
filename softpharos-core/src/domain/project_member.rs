use chrono::{DateTime, Utc};

use super::{Entity, Id, Project, User};
use crate::patch::{assign, Patch};

/// Membership of a user in a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMember {
    pub id: Id,
    pub project_id: Id,
    pub project: Option<Project>,
    pub user_id: Id,
    pub user: Option<User>,
    /// Role inside the project ("lead", "developer", ...), unrelated to [`super::Role`]
    pub role: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Entity for ProjectMember {
    const RESOURCE: &'static str = "project member";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMemberPatch {
    pub role: Option<Option<String>>,
}

impl Patch<ProjectMember> for ProjectMemberPatch {
    fn apply(self, member: &mut ProjectMember) {
        assign(&mut member.role, self.role);
    }

    fn is_empty(&self) -> bool {
        self.role.is_none()
    }
}
