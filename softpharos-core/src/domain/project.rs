use chrono::{DateTime, Utc};

use super::{Entity, Id, User};
use crate::patch::{assign, Patch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    pub id: Id,
    pub name: Option<String>,
    pub objective: Option<String>,
    pub created_by: Id,
    /// Creator, resolved from `created_by`
    pub owner: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Project {
    const RESOURCE: &'static str = "project";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<Option<String>>,
    pub objective: Option<Option<String>>,
}

impl Patch<Project> for ProjectPatch {
    fn apply(self, project: &mut Project) {
        assign(&mut project.name, self.name);
        assign(&mut project.objective, self.objective);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.objective.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only_patch_leaves_objective() {
        let project = Project {
            id: 1,
            name: Some("A".into()),
            objective: Some("B".into()),
            created_by: 3,
            ..Default::default()
        };

        let merged = ProjectPatch {
            name: Some(Some("C".into())),
            ..Default::default()
        }
        .merge(project);

        assert_eq!(merged.name.as_deref(), Some("C"));
        assert_eq!(merged.objective.as_deref(), Some("B"));
        assert_eq!(merged.created_by, 3);
    }
}
