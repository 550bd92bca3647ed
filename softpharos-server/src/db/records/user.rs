use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use softpharos_core::domain::{Id, User};

use super::RoleRecord;
use crate::db::record::{embed, load, PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct UserRecord {
    pub id: Id,
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub role_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub role: Option<Json<RoleRecord>>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub const ROLE: Relation<Self> = Relation::new("role", RoleRecord::TABLE, "role_id");
}

impl Record for UserRecord {
    type Entity = User;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["name", "email", "password", "role_id"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[Self::ROLE];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.password)
            .bind(self.role_id)
    }

    fn into_entity(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            password: self.password,
            role_id: self.role_id,
            role: load(self.role),
            created_at: self.created_at,
        }
    }

    fn from_entity(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            role_id: user.role_id,
            role: embed(user.role.as_ref()),
            created_at: user.created_at,
        }
    }

    fn write_back(&self, user: &mut User) {
        user.id = self.id;
        user.created_at = self.created_at;
    }
}
