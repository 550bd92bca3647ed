use chrono::{DateTime, Utc};

use super::{Entity, Id, Milestone, User};
use crate::patch::{assign, Patch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub id: Id,
    pub milestone_id: Id,
    pub milestone: Option<Milestone>,
    pub user_id: Id,
    pub user: Option<User>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Comment {
    const RESOURCE: &'static str = "comment";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub content: Option<Option<String>>,
}

impl Patch<Comment> for CommentPatch {
    fn apply(self, comment: &mut Comment) {
        assign(&mut comment.content, self.content);
    }

    fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}
