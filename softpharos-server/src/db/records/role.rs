use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

use softpharos_core::domain::{Id, Role};

use crate::db::record::{PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct RoleRecord {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for RoleRecord {
    type Entity = Role;

    const TABLE: &'static str = "roles";
    const COLUMNS: &'static [&'static str] = &["name", "description"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.name).bind(&self.description)
    }

    fn into_entity(self) -> Role {
        Role {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }

    fn from_entity(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            description: role.description.clone(),
            created_at: role.created_at,
        }
    }

    fn write_back(&self, role: &mut Role) {
        role.id = self.id;
        role.created_at = self.created_at;
    }
}
