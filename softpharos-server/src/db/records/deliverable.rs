use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use softpharos_core::domain::{Deliverable, Id};

use super::MilestoneRecord;
use crate::db::record::{embed, load, PgQueryAs, Record, Relation};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize)]
pub struct DeliverableRecord {
    pub id: Id,
    pub milestone_id: Id,
    #[sqlx(default)]
    #[serde(default)]
    pub milestone: Option<Json<MilestoneRecord>>,
    pub url: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DeliverableRecord {
    pub const MILESTONE: Relation<Self> =
        Relation::new("milestone", MilestoneRecord::TABLE, "milestone_id");
}

impl Record for DeliverableRecord {
    type Entity = Deliverable;

    const TABLE: &'static str = "deliverables";
    const COLUMNS: &'static [&'static str] = &["milestone_id", "url", "type"];
    const DEFAULT_PRELOAD: &'static [Relation<Self>] = &[Self::MILESTONE];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.milestone_id)
            .bind(&self.url)
            .bind(&self.kind)
    }

    fn into_entity(self) -> Deliverable {
        Deliverable {
            id: self.id,
            milestone_id: self.milestone_id,
            milestone: load(self.milestone),
            url: self.url,
            kind: self.kind,
            created_at: self.created_at,
        }
    }

    fn from_entity(deliverable: &Deliverable) -> Self {
        Self {
            id: deliverable.id,
            milestone_id: deliverable.milestone_id,
            milestone: embed(deliverable.milestone.as_ref()),
            url: deliverable.url.clone(),
            kind: deliverable.kind.clone(),
            created_at: deliverable.created_at,
        }
    }

    fn write_back(&self, deliverable: &mut Deliverable) {
        deliverable.id = self.id;
        deliverable.created_at = self.created_at;
    }
}
