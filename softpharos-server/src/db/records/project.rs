use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use softpharos_core::domain::{Id, Project};

use super::UserRecord;
use crate::db::record::{embed, load, PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct ProjectRecord {
    pub id: Id,
    pub name: Option<String>,
    pub objective: Option<String>,
    pub created_by: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub owner: Option<Json<UserRecord>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    pub const OWNER: Relation<Self> = Relation::new("owner", UserRecord::TABLE, "created_by");
}

impl Record for ProjectRecord {
    type Entity = Project;

    const TABLE: &'static str = "projects";
    const COLUMNS: &'static [&'static str] = &["name", "objective", "created_by"];
    const REFRESHED_ON_UPDATE: &'static [&'static str] = &["updated_at"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[Self::OWNER];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(&self.objective)
            .bind(self.created_by)
    }

    fn into_entity(self) -> Project {
        Project {
            id: self.id,
            name: self.name,
            objective: self.objective,
            created_by: self.created_by,
            owner: load(self.owner),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_entity(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            objective: project.objective.clone(),
            created_by: project.created_by,
            owner: embed(project.owner.as_ref()),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }

    fn write_back(&self, project: &mut Project) {
        project.id = self.id;
        project.created_at = self.created_at;
        project.updated_at = self.updated_at;
    }
}
