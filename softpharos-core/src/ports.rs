//! Repository ports
//!
//! One generic CRUD trait plus an extension trait per entity family for its
//! lookups by field. Implementations issue a single storage round trip per
//! call and hand storage errors back unchanged.

use async_trait::async_trait;

use crate::domain::{
    Comment, Deliverable, Entity, Feedback, Id, Milestone, Project, ProjectMember, Reaction, Role,
    User,
};
use crate::error::DbResult;

#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: Entity + Send + Sync + 'static;

    /// Every row, with the associations responses need. Empty table = empty vec.
    async fn get_all(&self) -> DbResult<Vec<Self::Entity>>;

    /// Exactly one row, or `DbError::NotFound`.
    async fn get_by_id(&self, id: Id) -> DbResult<Self::Entity>;

    /// Insert `entity`. On success its storage-assigned fields (id,
    /// timestamps) are overwritten in place; on failure it is untouched.
    async fn create(&self, entity: &mut Self::Entity) -> DbResult<()>;

    /// Overwrite the stored row with the entity's current field values.
    async fn update(&self, entity: &mut Self::Entity) -> DbResult<()>;

    /// Hard delete. Zero matching rows is `DbError::NotFound`.
    async fn delete(&self, id: Id) -> DbResult<()>;
}

#[async_trait]
pub trait RoleRepository: Repository<Entity = Role> {
    async fn get_by_name(&self, name: &str) -> DbResult<Role>;
}

#[async_trait]
pub trait UserRepository: Repository<Entity = User> {
    async fn get_by_email(&self, email: &str) -> DbResult<User>;
}

#[async_trait]
pub trait ProjectRepository: Repository<Entity = Project> {
    async fn get_by_owner(&self, owner_id: Id) -> DbResult<Vec<Project>>;
}

#[async_trait]
pub trait MilestoneRepository: Repository<Entity = Milestone> {
    async fn get_by_project_id(&self, project_id: Id) -> DbResult<Vec<Milestone>>;
}

#[async_trait]
pub trait CommentRepository: Repository<Entity = Comment> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Comment>>;
}

#[async_trait]
pub trait DeliverableRepository: Repository<Entity = Deliverable> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Deliverable>>;
}

#[async_trait]
pub trait FeedbackRepository: Repository<Entity = Feedback> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Feedback>>;
}

#[async_trait]
pub trait ReactionRepository: Repository<Entity = Reaction> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Reaction>>;
}

#[async_trait]
pub trait ProjectMemberRepository: Repository<Entity = ProjectMember> {
    async fn get_by_project_id(&self, project_id: Id) -> DbResult<Vec<ProjectMember>>;
}
