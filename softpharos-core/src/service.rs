//! Domain services
//!
//! Pass-through layer between handlers and repositories. Every method
//! forwards to the repository and returns its result untouched; this is
//! where cross-entity rules would go.

use std::sync::Arc;

use crate::domain::{
    Comment, Deliverable, Entity, Feedback, Id, Milestone, Project, ProjectMember, Reaction, Role,
    User,
};
use crate::error::DbResult;
use crate::patch::Patch;
use crate::ports::{
    CommentRepository, DeliverableRepository, FeedbackRepository, MilestoneRepository,
    ProjectMemberRepository, ProjectRepository, ReactionRepository, Repository, RoleRepository,
    UserRepository,
};

pub type RoleService = Service<dyn RoleRepository>;
pub type UserService = Service<dyn UserRepository>;
pub type ProjectService = Service<dyn ProjectRepository>;
pub type MilestoneService = Service<dyn MilestoneRepository>;
pub type CommentService = Service<dyn CommentRepository>;
pub type DeliverableService = Service<dyn DeliverableRepository>;
pub type FeedbackService = Service<dyn FeedbackRepository>;
pub type ReactionService = Service<dyn ReactionRepository>;
pub type ProjectMemberService = Service<dyn ProjectMemberRepository>;

/// Service over one repository
pub struct Service<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> Clone for Service<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> Service<R>
where
    R: Repository + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> DbResult<Vec<R::Entity>> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: Id) -> DbResult<R::Entity> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, entity: &mut R::Entity) -> DbResult<()> {
        self.repo.create(entity).await
    }

    pub async fn update(&self, entity: &mut R::Entity) -> DbResult<()> {
        self.repo.update(entity).await
    }

    pub async fn delete(&self, id: Id) -> DbResult<()> {
        self.repo.delete(id).await
    }

    /// Fetch, merge the present fields of `patch`, persist, and return the
    /// merged entity.
    pub async fn patch<P>(&self, id: Id, patch: P) -> DbResult<R::Entity>
    where
        P: Patch<R::Entity> + Send,
    {
        let mut entity = self.repo.get_by_id(id).await?;
        if patch.is_empty() {
            tracing::debug!(resource = <R::Entity as Entity>::RESOURCE, id, "empty patch");
        }
        patch.apply(&mut entity);
        self.repo.update(&mut entity).await?;
        Ok(entity)
    }
}

impl Service<dyn RoleRepository> {
    pub async fn get_by_name(&self, name: &str) -> DbResult<Role> {
        self.repo.get_by_name(name).await
    }
}

impl Service<dyn UserRepository> {
    pub async fn get_by_email(&self, email: &str) -> DbResult<User> {
        self.repo.get_by_email(email).await
    }
}

impl Service<dyn ProjectRepository> {
    pub async fn get_by_owner(&self, owner_id: Id) -> DbResult<Vec<Project>> {
        self.repo.get_by_owner(owner_id).await
    }
}

impl Service<dyn MilestoneRepository> {
    pub async fn get_by_project_id(&self, project_id: Id) -> DbResult<Vec<Milestone>> {
        self.repo.get_by_project_id(project_id).await
    }
}

impl Service<dyn CommentRepository> {
    pub async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Comment>> {
        self.repo.get_by_milestone_id(milestone_id).await
    }
}

impl Service<dyn DeliverableRepository> {
    pub async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Deliverable>> {
        self.repo.get_by_milestone_id(milestone_id).await
    }
}

impl Service<dyn FeedbackRepository> {
    pub async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Feedback>> {
        self.repo.get_by_milestone_id(milestone_id).await
    }
}

impl Service<dyn ReactionRepository> {
    pub async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Reaction>> {
        self.repo.get_by_milestone_id(milestone_id).await
    }
}

impl Service<dyn ProjectMemberRepository> {
    pub async fn get_by_project_id(&self, project_id: Id) -> DbResult<Vec<ProjectMember>> {
        self.repo.get_by_project_id(project_id).await
    }
}
