//! Repository tests against a real database
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p softpharos-server -- --ignored

use std::sync::Arc;

use softpharos_core::domain::{
    Comment, Deliverable, DeliverablePatch, Feedback, FeedbackPatch, Milestone, Project,
    ProjectMember, ProjectMemberPatch, ProjectPatch, Reaction, ReactionPatch, Role, User,
};
use softpharos_core::ports::{
    CommentRepository, DeliverableRepository, FeedbackRepository, MilestoneRepository,
    ProjectMemberRepository, ProjectRepository, ReactionRepository, Repository, RoleRepository,
    UserRepository,
};
use softpharos_core::service::{
    DeliverableService, FeedbackService, ProjectMemberService, ProjectService, ReactionService,
};
use softpharos_server::db::records::{
    CommentRecord, DeliverableRecord, FeedbackRecord, MilestoneRecord, ProjectMemberRecord,
    ProjectRecord, ReactionRecord, RoleRecord, UserRecord,
};
use softpharos_server::db::{create_pool, migrations, PgRepository};
use sqlx::PgPool;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    pool
}

fn unique(prefix: &str) -> String {
    format!(
        "{}-{}",
        prefix,
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    )
}

struct Fixture {
    role: Role,
    user: User,
    project: Project,
}

async fn fixture(pool: &PgPool) -> Fixture {
    let mut role = Role {
        name: unique("role"),
        ..Default::default()
    };
    PgRepository::<RoleRecord>::new(pool.clone())
        .create(&mut role)
        .await
        .expect("role insert");

    let mut user = User {
        name: Some("Ana".into()),
        email: format!("{}@example.com", unique("ana")),
        password: "secret1".into(),
        role_id: role.id,
        ..Default::default()
    };
    PgRepository::<UserRecord>::new(pool.clone())
        .create(&mut user)
        .await
        .expect("user insert");

    let mut project = Project {
        name: Some("Thesis".into()),
        created_by: user.id,
        ..Default::default()
    };
    PgRepository::<ProjectRecord>::new(pool.clone())
        .create(&mut project)
        .await
        .expect("project insert");

    Fixture {
        role,
        user,
        project,
    }
}

async fn milestone(pool: &PgPool, project_id: i32) -> Milestone {
    let mut milestone = Milestone {
        project_id,
        title: Some("Sprint 1".into()),
        ..Default::default()
    };
    PgRepository::<MilestoneRecord>::new(pool.clone())
        .create(&mut milestone)
        .await
        .expect("milestone insert");
    milestone
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_writes_back_storage_fields() {
    let pool = pool().await;
    let f = fixture(&pool).await;

    assert!(f.role.id > 0);
    assert!(f.user.id > 0);
    assert!(f.project.id > 0);
    assert_eq!(f.project.created_at, f.project.updated_at);
}

#[tokio::test]
#[ignore = "requires database"]
async fn reads_eager_load_default_relations() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let users = PgRepository::<UserRecord>::new(pool.clone());

    let fetched = users.get_by_email(&f.user.email).await.unwrap();
    assert_eq!(fetched.id, f.user.id);
    assert_eq!(fetched.role.map(|r| r.name), Some(f.role.name.clone()));

    let projects = PgRepository::<ProjectRecord>::new(pool.clone());
    let project = projects.get_by_id(f.project.id).await.unwrap();
    let owner = project.owner.expect("owner loaded");
    assert_eq!(owner.email, f.user.email);
    // one level only
    assert!(owner.role.is_none());

    let bare = projects.find_by_id_with(f.project.id, &[]).await.unwrap();
    assert!(bare.owner.is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn lookups_by_parent_and_name() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let milestones = PgRepository::<MilestoneRecord>::new(pool.clone());

    for week in [1, 2] {
        let mut m = Milestone {
            project_id: f.project.id,
            class_week: Some(week),
            ..Default::default()
        };
        milestones.create(&mut m).await.unwrap();
    }

    let listed = milestones.get_by_project_id(f.project.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].id < listed[1].id);
    assert!(listed.iter().all(|m| m.project.is_some()));

    let comments = PgRepository::<CommentRecord>::new(pool.clone());
    let mut comment = Comment {
        milestone_id: listed[0].id,
        user_id: f.user.id,
        content: Some("Looks good".into()),
        ..Default::default()
    };
    comments.create(&mut comment).await.unwrap();

    let by_milestone = comments.get_by_milestone_id(listed[0].id).await.unwrap();
    assert_eq!(by_milestone.len(), 1);
    assert!(by_milestone[0].user.is_some());
    assert!(comments.get_by_milestone_id(listed[1].id).await.unwrap().is_empty());

    let roles = PgRepository::<RoleRecord>::new(pool.clone());
    assert_eq!(roles.get_by_name(&f.role.name).await.unwrap().id, f.role.id);
    assert!(roles.get_by_name(&unique("nobody")).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_and_delete_missing_rows_are_not_found() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let projects = PgRepository::<ProjectRecord>::new(pool.clone());

    let mut project = f.project.clone();
    project.objective = Some("Ship it".into());
    projects.update(&mut project).await.unwrap();
    assert!(project.updated_at >= f.project.updated_at);

    let mut ghost = Project {
        id: i32::MAX,
        created_by: f.user.id,
        ..Default::default()
    };
    assert!(projects.update(&mut ghost).await.unwrap_err().is_not_found());

    projects.delete(project.id).await.unwrap();
    assert!(projects.delete(project.id).await.unwrap_err().is_not_found());
    assert!(projects.get_by_id(project.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires database"]
async fn constraint_violation_is_a_storage_error() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let users = PgRepository::<UserRecord>::new(pool.clone());

    let mut duplicate = User {
        email: f.user.email.clone(),
        password: "secret1".into(),
        role_id: f.role.id,
        ..Default::default()
    };
    let err = users.create(&mut duplicate).await.unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(duplicate.id, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn project_patch_keeps_unsent_fields() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let repo: Arc<dyn ProjectRepository> =
        Arc::new(PgRepository::<ProjectRecord>::new(pool.clone()));
    let service = ProjectService::new(repo);

    let mut project = Project {
        name: Some("A".into()),
        objective: Some("B".into()),
        created_by: f.user.id,
        ..Default::default()
    };
    service.create(&mut project).await.unwrap();

    let patch = ProjectPatch {
        name: Some(Some("C".into())),
        ..Default::default()
    };
    service.patch(project.id, patch).await.unwrap();

    let refetched = service.get_by_id(project.id).await.unwrap();
    assert_eq!(refetched.name.as_deref(), Some("C"));
    assert_eq!(refetched.objective.as_deref(), Some("B"));
    assert_eq!(refetched.created_by, f.user.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn project_without_milestones_lists_empty() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let milestones = PgRepository::<MilestoneRecord>::new(pool.clone());

    let listed = milestones.get_by_project_id(f.project.id).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn deliverable_round_trips_type_column() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let m = milestone(&pool, f.project.id).await;
    let repo: Arc<dyn DeliverableRepository> =
        Arc::new(PgRepository::<DeliverableRecord>::new(pool.clone()));
    let service = DeliverableService::new(repo);

    let mut deliverable = Deliverable {
        milestone_id: m.id,
        url: "https://git.example.com/thesis".into(),
        kind: Some("repo".into()),
        ..Default::default()
    };
    service.create(&mut deliverable).await.unwrap();
    assert!(deliverable.id > 0);

    let listed = service.get_by_milestone_id(m.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].kind.as_deref(), Some("repo"));
    let loaded = listed[0].milestone.as_ref().expect("milestone loaded");
    assert_eq!(loaded.id, m.id);
    assert!(loaded.project.is_none());

    let patch = DeliverablePatch {
        kind: Some(None),
        ..Default::default()
    };
    service.patch(deliverable.id, patch).await.unwrap();

    let refetched = service.get_by_id(deliverable.id).await.unwrap();
    assert_eq!(refetched.kind, None);
    assert_eq!(refetched.url, "https://git.example.com/thesis");
}

#[tokio::test]
#[ignore = "requires database"]
async fn feedback_loads_professor() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let m = milestone(&pool, f.project.id).await;
    let repo: Arc<dyn FeedbackRepository> =
        Arc::new(PgRepository::<FeedbackRecord>::new(pool.clone()));
    let service = FeedbackService::new(repo);

    let mut feedback = Feedback {
        milestone_id: m.id,
        professor_id: f.user.id,
        content: "Needs a related-work section".into(),
        ..Default::default()
    };
    service.create(&mut feedback).await.unwrap();

    let fetched = service.get_by_id(feedback.id).await.unwrap();
    let professor = fetched.professor.expect("professor loaded");
    assert_eq!(professor.email, f.user.email);
    assert!(professor.role.is_none());
    assert_eq!(fetched.milestone.map(|loaded| loaded.id), Some(m.id));

    let patch = FeedbackPatch {
        content: Some("Approved".into()),
    };
    service.patch(feedback.id, patch).await.unwrap();

    let listed = service.get_by_milestone_id(m.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "Approved");
    assert_eq!(listed[0].professor_id, f.user.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn reaction_loads_user_and_type() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let m = milestone(&pool, f.project.id).await;
    let repo: Arc<dyn ReactionRepository> =
        Arc::new(PgRepository::<ReactionRecord>::new(pool.clone()));
    let service = ReactionService::new(repo);

    let mut reaction = Reaction {
        milestone_id: m.id,
        user_id: f.user.id,
        kind: Some("like".into()),
        ..Default::default()
    };
    service.create(&mut reaction).await.unwrap();

    let listed = service.get_by_milestone_id(m.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].kind.as_deref(), Some("like"));
    assert_eq!(listed[0].user.as_ref().map(|u| u.id), Some(f.user.id));
    assert!(listed[0].milestone.is_some());

    let patch = ReactionPatch {
        kind: Some(Some("celebrate".into())),
    };
    service.patch(reaction.id, patch).await.unwrap();
    let refetched = service.get_by_id(reaction.id).await.unwrap();
    assert_eq!(refetched.kind.as_deref(), Some("celebrate"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn project_member_loads_project_and_user() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let repo: Arc<dyn ProjectMemberRepository> =
        Arc::new(PgRepository::<ProjectMemberRecord>::new(pool.clone()));
    let service = ProjectMemberService::new(repo);

    let mut member = ProjectMember {
        project_id: f.project.id,
        user_id: f.user.id,
        role: Some("lead".into()),
        ..Default::default()
    };
    service.create(&mut member).await.unwrap();
    assert!(member.id > 0);
    assert_ne!(member.joined_at, chrono::DateTime::<chrono::Utc>::default());

    let listed = service.get_by_project_id(f.project.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    let project = listed[0].project.as_ref().expect("project loaded");
    assert_eq!(project.id, f.project.id);
    assert!(project.owner.is_none());
    let user = listed[0].user.as_ref().expect("user loaded");
    assert_eq!(user.email, f.user.email);

    let patch = ProjectMemberPatch {
        role: Some(Some("developer".into())),
    };
    service.patch(member.id, patch).await.unwrap();
    let refetched = service.get_by_id(member.id).await.unwrap();
    assert_eq!(refetched.role.as_deref(), Some("developer"));
    assert_eq!(refetched.joined_at, member.joined_at);
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_a_referenced_project_keeps_children() {
    let pool = pool().await;
    let f = fixture(&pool).await;
    let m = milestone(&pool, f.project.id).await;
    let projects = PgRepository::<ProjectRecord>::new(pool.clone());
    let milestones = PgRepository::<MilestoneRecord>::new(pool.clone());

    let err = projects.delete(f.project.id).await.unwrap_err();
    assert!(!err.is_not_found());

    assert_eq!(milestones.get_by_id(m.id).await.unwrap().project_id, f.project.id);
    assert!(projects.get_by_id(f.project.id).await.is_ok());

    milestones.delete(m.id).await.unwrap();
    projects.delete(f.project.id).await.unwrap();
}
