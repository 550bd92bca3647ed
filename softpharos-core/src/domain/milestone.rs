use chrono::{DateTime, Utc};

use super::{Entity, Id, Project};
use crate::patch::{assign, Patch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Milestone {
    pub id: Id,
    pub project_id: Id,
    pub project: Option<Project>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Week of the course the milestone belongs to
    pub class_week: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Milestone {
    const RESOURCE: &'static str = "milestone";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestonePatch {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub class_week: Option<Option<i32>>,
}

impl Patch<Milestone> for MilestonePatch {
    fn apply(self, milestone: &mut Milestone) {
        assign(&mut milestone.title, self.title);
        assign(&mut milestone.description, self.description);
        assign(&mut milestone.class_week, self.class_week);
    }

    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.class_week.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_in_one_patch() {
        let milestone = Milestone {
            id: 4,
            project_id: 1,
            title: Some("Sprint 1".into()),
            description: Some("setup".into()),
            class_week: Some(2),
            ..Default::default()
        };

        let merged = MilestonePatch {
            class_week: Some(Some(3)),
            description: Some(None),
            ..Default::default()
        }
        .merge(milestone);

        assert_eq!(merged.title.as_deref(), Some("Sprint 1"));
        assert_eq!(merged.description, None);
        assert_eq!(merged.class_week, Some(3));
    }
}
