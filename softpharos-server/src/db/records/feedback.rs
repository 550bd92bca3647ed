use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use softpharos_core::domain::{Feedback, Id};

use super::{MilestoneRecord, UserRecord};
use crate::db::record::{embed, load, PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct FeedbackRecord {
    pub id: Id,
    pub milestone_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub milestone: Option<Json<MilestoneRecord>>,
    pub professor_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub professor: Option<Json<UserRecord>>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    pub const MILESTONE: Relation<Self> =
        Relation::new("milestone", MilestoneRecord::TABLE, "milestone_id");
    pub const PROFESSOR: Relation<Self> =
        Relation::new("professor", UserRecord::TABLE, "professor_id");
}

impl Record for FeedbackRecord {
    type Entity = Feedback;

    const TABLE: &'static str = "feedback";
    const COLUMNS: &'static [&'static str] = &["milestone_id", "professor_id", "content"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[Self::MILESTONE, Self::PROFESSOR];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.milestone_id)
            .bind(self.professor_id)
            .bind(&self.content)
    }

    fn into_entity(self) -> Feedback {
        Feedback {
            id: self.id,
            milestone_id: self.milestone_id,
            milestone: load(self.milestone),
            professor_id: self.professor_id,
            professor: load(self.professor),
            content: self.content,
            created_at: self.created_at,
        }
    }

    fn from_entity(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id,
            milestone_id: feedback.milestone_id,
            milestone: embed(feedback.milestone.as_ref()),
            professor_id: feedback.professor_id,
            professor: embed(feedback.professor.as_ref()),
            content: feedback.content.clone(),
            created_at: feedback.created_at,
        }
    }

    fn write_back(&self, feedback: &mut Feedback) {
        feedback.id = self.id;
        feedback.created_at = self.created_at;
    }
}
