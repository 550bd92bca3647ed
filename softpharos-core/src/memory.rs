//! In-memory repositories for tests
//!
//! Rows live in a `BTreeMap` keyed by id, so listings come back in id
//! order like the Postgres repositories. Associations are never resolved:
//! every association field of a returned entity is whatever the caller
//! stored. A repository built with [`MemoryRepository::failing`] rejects
//! every call with a storage error.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    Comment, Deliverable, Entity, Feedback, Id, Milestone, Project, ProjectMember, Reaction, Role,
    User,
};
use crate::error::{DbError, DbResult};
use crate::ports::{
    CommentRepository, DeliverableRepository, FeedbackRepository, MilestoneRepository,
    ProjectMemberRepository, ProjectRepository, ReactionRepository, Repository, RoleRepository,
    UserRepository,
};

/// Storage-assigned fields, written the way a database default would.
pub trait Stored: Entity + Clone {
    fn assign(&mut self, id: Id, at: DateTime<Utc>);

    /// Refresh columns maintained on update.
    fn touch(&mut self, _at: DateTime<Utc>) {}
}

struct Table<E> {
    rows: BTreeMap<Id, E>,
    next_id: Id,
}

pub struct MemoryRepository<E> {
    table: Mutex<Table<E>>,
    failure: Option<String>,
}

impl<E: Stored> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
            failure: None,
        }
    }

    /// Repository whose every operation fails with `sqlx::Error::Protocol(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Store `rows` as-is, keeping their ids.
    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Self {
        let repo = Self::new();
        {
            let mut table = repo.lock();
            for row in rows {
                table.next_id = table.next_id.max(row.id() + 1);
                table.rows.insert(row.id(), row);
            }
        }
        repo
    }

    fn lock(&self) -> MutexGuard<'_, Table<E>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> DbResult<()> {
        match &self.failure {
            Some(message) => Err(DbError::Sqlx(sqlx::Error::Protocol(message.clone()))),
            None => Ok(()),
        }
    }

    fn filter(&self, keep: impl Fn(&E) -> bool) -> DbResult<Vec<E>> {
        self.check()?;
        Ok(self.lock().rows.values().filter(|e| keep(*e)).cloned().collect())
    }

    fn find(&self, key: &str, matches: impl Fn(&E) -> bool) -> DbResult<E> {
        self.check()?;
        self.lock()
            .rows
            .values()
            .find(|e| matches(*e))
            .cloned()
            .ok_or_else(|| DbError::not_found(E::RESOURCE, key))
    }
}

impl<E: Stored> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E> Repository for MemoryRepository<E>
where
    E: Stored + Send + Sync + 'static,
{
    type Entity = E;

    async fn get_all(&self) -> DbResult<Vec<E>> {
        self.filter(|_| true)
    }

    async fn get_by_id(&self, id: Id) -> DbResult<E> {
        self.check()?;
        self.lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found(E::RESOURCE, id))
    }

    async fn create(&self, entity: &mut E) -> DbResult<()> {
        self.check()?;
        let mut table = self.lock();
        let id = table.next_id;
        table.next_id += 1;

        let mut row = entity.clone();
        row.assign(id, Utc::now());
        table.rows.insert(id, row.clone());
        *entity = row;
        Ok(())
    }

    async fn update(&self, entity: &mut E) -> DbResult<()> {
        self.check()?;
        let mut table = self.lock();
        let Some(slot) = table.rows.get_mut(&entity.id()) else {
            return Err(DbError::not_found(E::RESOURCE, entity.id()));
        };
        entity.touch(Utc::now());
        *slot = entity.clone();
        Ok(())
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        self.check()?;
        match self.lock().rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DbError::not_found(E::RESOURCE, id)),
        }
    }
}

impl Stored for Role {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }
}

impl Stored for User {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }
}

impl Stored for Project {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
        self.updated_at = at;
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Stored for Milestone {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }
}

impl Stored for Comment {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }
}

impl Stored for Deliverable {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }
}

impl Stored for Feedback {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }
}

impl Stored for Reaction {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }
}

impl Stored for ProjectMember {
    fn assign(&mut self, id: Id, at: DateTime<Utc>) {
        self.id = id;
        self.joined_at = at;
    }
}

#[async_trait]
impl RoleRepository for MemoryRepository<Role> {
    async fn get_by_name(&self, name: &str) -> DbResult<Role> {
        self.find(name, |r| r.name == name)
    }
}

#[async_trait]
impl UserRepository for MemoryRepository<User> {
    async fn get_by_email(&self, email: &str) -> DbResult<User> {
        self.find(email, |u| u.email == email)
    }
}

#[async_trait]
impl ProjectRepository for MemoryRepository<Project> {
    async fn get_by_owner(&self, owner_id: Id) -> DbResult<Vec<Project>> {
        self.filter(|p| p.created_by == owner_id)
    }
}

#[async_trait]
impl MilestoneRepository for MemoryRepository<Milestone> {
    async fn get_by_project_id(&self, project_id: Id) -> DbResult<Vec<Milestone>> {
        self.filter(|m| m.project_id == project_id)
    }
}

#[async_trait]
impl CommentRepository for MemoryRepository<Comment> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Comment>> {
        self.filter(|c| c.milestone_id == milestone_id)
    }
}

#[async_trait]
impl DeliverableRepository for MemoryRepository<Deliverable> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Deliverable>> {
        self.filter(|d| d.milestone_id == milestone_id)
    }
}

#[async_trait]
impl FeedbackRepository for MemoryRepository<Feedback> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Feedback>> {
        self.filter(|f| f.milestone_id == milestone_id)
    }
}

#[async_trait]
impl ReactionRepository for MemoryRepository<Reaction> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Reaction>> {
        self.filter(|r| r.milestone_id == milestone_id)
    }
}

#[async_trait]
impl ProjectMemberRepository for MemoryRepository<ProjectMember> {
    async fn get_by_project_id(&self, project_id: Id) -> DbResult<Vec<ProjectMember>> {
        self.filter(|m| m.project_id == project_id)
    }
}
