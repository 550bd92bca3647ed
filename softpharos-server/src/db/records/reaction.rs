use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use softpharos_core::domain::{Id, Reaction};

use super::{MilestoneRecord, UserRecord};
use crate::db::record::{embed, load, PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct ReactionRecord {
    pub id: Id,
    pub milestone_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub milestone: Option<Json<MilestoneRecord>>,
    pub user_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub user: Option<Json<UserRecord>>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReactionRecord {
    pub const MILESTONE: Relation<Self> =
        Relation::new("milestone", MilestoneRecord::TABLE, "milestone_id");
    pub const USER: Relation<Self> = Relation::new("user", UserRecord::TABLE, "user_id");
}

impl Record for ReactionRecord {
    type Entity = Reaction;

    const TABLE: &'static str = "reactions";
    const COLUMNS: &'static [&'static str] = &["milestone_id", "user_id", "type"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[Self::MILESTONE, Self::USER];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.milestone_id)
            .bind(self.user_id)
            .bind(&self.kind)
    }

    fn into_entity(self) -> Reaction {
        Reaction {
            id: self.id,
            milestone_id: self.milestone_id,
            milestone: load(self.milestone),
            user_id: self.user_id,
            user: load(self.user),
            kind: self.kind,
            created_at: self.created_at,
        }
    }

    fn from_entity(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id,
            milestone_id: reaction.milestone_id,
            milestone: embed(reaction.milestone.as_ref()),
            user_id: reaction.user_id,
            user: embed(reaction.user.as_ref()),
            kind: reaction.kind.clone(),
            created_at: reaction.created_at,
        }
    }

    fn write_back(&self, reaction: &mut Reaction) {
        reaction.id = self.id;
        reaction.created_at = self.created_at;
    }
}
