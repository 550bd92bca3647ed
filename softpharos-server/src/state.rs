//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use softpharos_core::service::{
    CommentService, DeliverableService, FeedbackService, MilestoneService, ProjectMemberService,
    ProjectService, ReactionService, RoleService, UserService,
};

use crate::db::records::{
    CommentRecord, DeliverableRecord, FeedbackRecord, MilestoneRecord, ProjectMemberRecord,
    ProjectRecord, ReactionRecord, RoleRecord, UserRecord,
};
use crate::db::PgRepository;

/// One service per resource. Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub roles: RoleService,
    pub users: UserService,
    pub projects: ProjectService,
    pub milestones: MilestoneService,
    pub comments: CommentService,
    pub deliverables: DeliverableService,
    pub feedback: FeedbackService,
    pub reactions: ReactionService,
    pub project_members: ProjectMemberService,
}

impl AppState {
    /// Wire every service to a Postgres repository sharing `pool`.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            roles: RoleService::new(Arc::new(PgRepository::<RoleRecord>::new(pool.clone()))),
            users: UserService::new(Arc::new(PgRepository::<UserRecord>::new(pool.clone()))),
            projects: ProjectService::new(Arc::new(PgRepository::<ProjectRecord>::new(
                pool.clone(),
            ))),
            milestones: MilestoneService::new(Arc::new(PgRepository::<MilestoneRecord>::new(
                pool.clone(),
            ))),
            comments: CommentService::new(Arc::new(PgRepository::<CommentRecord>::new(
                pool.clone(),
            ))),
            deliverables: DeliverableService::new(Arc::new(
                PgRepository::<DeliverableRecord>::new(pool.clone()),
            )),
            feedback: FeedbackService::new(Arc::new(PgRepository::<FeedbackRecord>::new(
                pool.clone(),
            ))),
            reactions: ReactionService::new(Arc::new(PgRepository::<ReactionRecord>::new(
                pool.clone(),
            ))),
            project_members: ProjectMemberService::new(Arc::new(PgRepository::<
                ProjectMemberRecord,
            >::new(pool))),
        }
    }
}
