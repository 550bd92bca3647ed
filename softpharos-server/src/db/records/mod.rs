//! One record type per table.

mod comment;
mod deliverable;
mod feedback;
mod milestone;
mod project;
mod project_member;
mod reaction;
mod role;
mod user;

pub use comment::CommentRecord;
pub use deliverable::DeliverableRecord;
pub use feedback::FeedbackRecord;
pub use milestone::MilestoneRecord;
pub use project::ProjectRecord;
pub use project_member::ProjectMemberRecord;
pub use reaction::ReactionRecord;
pub use role::RoleRecord;
pub use user::UserRecord;

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use sqlx::types::Json;

    use softpharos_core::domain::{Comment, Milestone, Project, Role, User};

    use super::*;
    use crate::db::record::{list_to_domain, to_domain, to_record, Record};

    fn role() -> Role {
        Role {
            id: 1,
            name: "student".into(),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    fn user() -> User {
        User {
            id: 7,
            name: Some("Ana".into()),
            email: "ana@example.com".into(),
            password: "secret1".into(),
            role_id: 1,
            role: Some(role()),
            created_at: Utc.with_ymd_and_hms(2024, 3, 2, 10, 30, 0).unwrap(),
        }
    }

    fn project() -> Project {
        Project {
            id: 3,
            name: Some("Thesis".into()),
            objective: Some("Ship it".into()),
            created_by: 7,
            owner: Some(user()),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn none_maps_to_none() {
        assert_eq!(to_domain::<UserRecord>(None), None);
        assert!(to_record::<UserRecord>(None).is_none());
    }

    #[test]
    fn empty_list_maps_to_empty_list() {
        assert!(list_to_domain::<MilestoneRecord>(Vec::new()).is_empty());
    }

    #[test]
    fn round_trip_keeps_nested_associations() {
        let original = project();
        let record = to_record::<ProjectRecord>(Some(&original)).unwrap();

        let owner = record.owner.as_ref().map(|Json(u)| u).unwrap();
        assert_eq!(owner.email, "ana@example.com");
        assert_eq!(owner.role.as_ref().map(|Json(r)| r.name.as_str()), Some("student"));

        assert_eq!(to_domain(Some(record)), Some(original));
    }

    #[test]
    fn unloaded_association_stays_absent() {
        let record = MilestoneRecord {
            id: 11,
            project_id: 3,
            project: None,
            title: Some("Sprint 1".into()),
            description: None,
            class_week: Some(2),
            created_at: Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap(),
        };

        let milestone = record.into_entity();
        assert_eq!(milestone.project_id, 3);
        assert!(milestone.project.is_none());
    }

    #[test]
    fn mapping_twice_is_stable() {
        let comment = Comment {
            id: 21,
            milestone_id: 11,
            milestone: Some(Milestone {
                id: 11,
                project_id: 3,
                title: Some("Sprint 1".into()),
                ..Default::default()
            }),
            user_id: 7,
            user: Some(user()),
            content: Some("Looks good".into()),
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 15, 0, 0).unwrap(),
        };

        let once = CommentRecord::from_entity(&comment);
        let twice = CommentRecord::from_entity(&once.clone().into_entity());
        assert_eq!(once, twice);
        assert_eq!(twice.into_entity(), comment);
    }

    #[test]
    fn list_preserves_order() {
        let records = vec![
            RoleRecord::from_entity(&Role { id: 2, name: "professor".into(), ..role() }),
            RoleRecord::from_entity(&role()),
        ];

        let ids: Vec<_> = list_to_domain(records).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn reserved_column_name_decodes_from_json() {
        let json = r#"{"id":5,"milestone_id":11,"url":"https://git.example.com/x","type":"repo","created_at":"2024-03-08T10:00:00Z"}"#;
        let record: DeliverableRecord = serde_json::from_str(json).unwrap();

        assert!(record.milestone.is_none());
        assert_eq!(record.into_entity().kind.as_deref(), Some("repo"));
    }

    #[test]
    fn write_back_copies_storage_fields_only() {
        let stored = ProjectMemberRecord {
            id: 40,
            project_id: 3,
            project: None,
            user_id: 7,
            user: None,
            role: Some("lead".into()),
            joined_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        };
        let mut member = softpharos_core::domain::ProjectMember {
            project_id: 3,
            user_id: 7,
            role: Some("lead".into()),
            ..Default::default()
        };

        stored.write_back(&mut member);
        assert_eq!(member.id, 40);
        assert_eq!(member.joined_at, stored.joined_at);
        assert_eq!(member.role.as_deref(), Some("lead"));
    }
}
