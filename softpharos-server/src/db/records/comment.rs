use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use softpharos_core::domain::{Comment, Id};

use super::{MilestoneRecord, UserRecord};
use crate::db::record::{embed, load, PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct CommentRecord {
    pub id: Id,
    pub milestone_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub milestone: Option<Json<MilestoneRecord>>,
    pub user_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub user: Option<Json<UserRecord>>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CommentRecord {
    pub const MILESTONE: Relation<Self> =
        Relation::new("milestone", MilestoneRecord::TABLE, "milestone_id");
    pub const USER: Relation<Self> = Relation::new("user", UserRecord::TABLE, "user_id");
}

impl Record for CommentRecord {
    type Entity = Comment;

    const TABLE: &'static str = "comments";
    const COLUMNS: &'static [&'static str] = &["milestone_id", "user_id", "content"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[Self::MILESTONE, Self::USER];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.milestone_id)
            .bind(self.user_id)
            .bind(&self.content)
    }

    fn into_entity(self) -> Comment {
        Comment {
            id: self.id,
            milestone_id: self.milestone_id,
            milestone: load(self.milestone),
            user_id: self.user_id,
            user: load(self.user),
            content: self.content,
            created_at: self.created_at,
        }
    }

    fn from_entity(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            milestone_id: comment.milestone_id,
            milestone: embed(comment.milestone.as_ref()),
            user_id: comment.user_id,
            user: embed(comment.user.as_ref()),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }

    fn write_back(&self, comment: &mut Comment) {
        comment.id = self.id;
        comment.created_at = self.created_at;
    }
}
