use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use softpharos_core::domain::{Id, Milestone};

use super::ProjectRecord;
use crate::db::record::{embed, load, PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct MilestoneRecord {
    pub id: Id,
    pub project_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub project: Option<Json<ProjectRecord>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub class_week: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl MilestoneRecord {
    pub const PROJECT: Relation<Self> = Relation::new("project", ProjectRecord::TABLE, "project_id");
}

impl Record for MilestoneRecord {
    type Entity = Milestone;

    const TABLE: &'static str = "milestones";
    const COLUMNS: &'static [&'static str] = &["project_id", "title", "description", "class_week"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[Self::PROJECT];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.project_id)
            .bind(&self.title)
            .bind(&self.description)
            .bind(self.class_week)
    }

    fn into_entity(self) -> Milestone {
        Milestone {
            id: self.id,
            project_id: self.project_id,
            project: load(self.project),
            title: self.title,
            description: self.description,
            class_week: self.class_week,
            created_at: self.created_at,
        }
    }

    fn from_entity(milestone: &Milestone) -> Self {
        Self {
            id: milestone.id,
            project_id: milestone.project_id,
            project: embed(milestone.project.as_ref()),
            title: milestone.title.clone(),
            description: milestone.description.clone(),
            class_week: milestone.class_week,
            created_at: milestone.created_at,
        }
    }

    fn write_back(&self, milestone: &mut Milestone) {
        milestone.id = self.id;
        milestone.created_at = self.created_at;
    }
}
