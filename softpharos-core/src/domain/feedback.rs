use chrono::{DateTime, Utc};

use super::{Entity, Id, Milestone, User};
use crate::patch::{assign, Patch};

/// Professor feedback on a milestone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub id: Id,
    pub milestone_id: Id,
    pub milestone: Option<Milestone>,
    pub professor_id: Id,
    pub professor: Option<User>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Feedback {
    const RESOURCE: &'static str = "feedback";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackPatch {
    pub content: Option<String>,
}

impl Patch<Feedback> for FeedbackPatch {
    fn apply(self, feedback: &mut Feedback) {
        assign(&mut feedback.content, self.content);
    }

    fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}
