use chrono::{DateTime, Utc};

use super::{Entity, Id, Milestone, User};
use crate::patch::{assign, Patch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    pub id: Id,
    pub milestone_id: Id,
    pub milestone: Option<Milestone>,
    pub user_id: Id,
    pub user: Option<User>,
    /// Reaction kind, stored in the `type` column
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Reaction {
    const RESOURCE: &'static str = "reaction";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionPatch {
    pub kind: Option<Option<String>>,
}

impl Patch<Reaction> for ReactionPatch {
    fn apply(self, reaction: &mut Reaction) {
        assign(&mut reaction.kind, self.kind);
    }

    fn is_empty(&self) -> bool {
        self.kind.is_none()
    }
}
