use chrono::{DateTime, Utc};

use super::{Entity, Id, Milestone};
use crate::patch::{assign, Patch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deliverable {
    pub id: Id,
    pub milestone_id: Id,
    pub milestone: Option<Milestone>,
    pub url: String,
    /// Free-form kind ("repo", "video", ...), stored in the `type` column
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Deliverable {
    const RESOURCE: &'static str = "deliverable";

    fn id(&self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverablePatch {
    pub url: Option<String>,
    pub kind: Option<Option<String>>,
}

impl Patch<Deliverable> for DeliverablePatch {
    fn apply(self, deliverable: &mut Deliverable) {
        assign(&mut deliverable.url, self.url);
        assign(&mut deliverable.kind, self.kind);
    }

    fn is_empty(&self) -> bool {
        self.url.is_none() && self.kind.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_change_keeps_kind() {
        let deliverable = Deliverable {
            id: 9,
            milestone_id: 2,
            url: "https://example.com/v1".into(),
            kind: Some("repo".into()),
            ..Default::default()
        };

        let merged = DeliverablePatch {
            url: Some("https://example.com/v2".into()),
            kind: None,
        }
        .merge(deliverable);

        assert_eq!(merged.url, "https://example.com/v2");
        assert_eq!(merged.kind.as_deref(), Some("repo"));
    }
}
