use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use softpharos_core::domain::{Id, ProjectMember};

use super::{ProjectRecord, UserRecord};
use crate::db::record::{embed, load, PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct ProjectMemberRecord {
    pub id: Id,
    pub project_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub project: Option<Json<ProjectRecord>>,
    pub user_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub user: Option<Json<UserRecord>>,
    pub role: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl ProjectMemberRecord {
    pub const PROJECT: Relation<Self> = Relation::new("project", ProjectRecord::TABLE, "project_id");
    pub const USER: Relation<Self> = Relation::new("user", UserRecord::TABLE, "user_id");
}

impl Record for ProjectMemberRecord {
    type Entity = ProjectMember;

    const TABLE: &'static str = "project_members";
    const COLUMNS: &'static [&'static str] = &["project_id", "user_id", "role"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[Self::PROJECT, Self::USER];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.project_id)
            .bind(self.user_id)
            .bind(&self.role)
    }

    fn into_entity(self) -> ProjectMember {
        ProjectMember {
            id: self.id,
            project_id: self.project_id,
            project: load(self.project),
            user_id: self.user_id,
            user: load(self.user),
            role: self.role,
            joined_at: self.joined_at,
        }
    }

    fn from_entity(member: &ProjectMember) -> Self {
        Self {
            id: member.id,
            project_id: member.project_id,
            project: embed(member.project.as_ref()),
            user_id: member.user_id,
            user: embed(member.user.as_ref()),
            role: member.role.clone(),
            joined_at: member.joined_at,
        }
    }

    fn write_back(&self, member: &mut ProjectMember) {
        member.id = self.id;
        member.joined_at = self.joined_at;
    }
}
