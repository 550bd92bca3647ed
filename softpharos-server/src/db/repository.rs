//! Generic Postgres repository
//!
//! `PgRepository<R>` implements the core repository ports for any
//! [`Record`]. Reads take an explicit relation list (`*_with`); the port
//! methods use the record's default relations.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use softpharos_core::domain::{
    Comment, Deliverable, Entity, Feedback, Id, Milestone, Project, ProjectMember, Reaction, Role,
    User,
};
use softpharos_core::ports::{
    CommentRepository, DeliverableRepository, FeedbackRepository, MilestoneRepository,
    ProjectMemberRepository, ProjectRepository, ReactionRepository, Repository, RoleRepository,
    UserRepository,
};
use softpharos_core::{DbError, DbResult};

use super::record::{
    delete_sql, insert_sql, list_to_domain, select_sql, update_sql, Record, Relation,
};
use super::records::{
    CommentRecord, DeliverableRecord, FeedbackRecord, MilestoneRecord, ProjectMemberRecord,
    ProjectRecord, ReactionRecord, RoleRecord, UserRecord,
};

pub struct PgRepository<R> {
    pool: PgPool,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for PgRepository<R> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<R> PgRepository<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<R: Record> PgRepository<R> {
    fn resource() -> &'static str {
        <R::Entity as Entity>::RESOURCE
    }

    pub async fn find_all_with(&self, preload: &[Relation<R>]) -> DbResult<Vec<R::Entity>> {
        let sql = select_sql(preload, None);
        let rows: Vec<R> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        debug!(table = R::TABLE, count = rows.len(), "fetched all");
        Ok(list_to_domain(rows))
    }

    pub async fn find_by_id_with(&self, id: Id, preload: &[Relation<R>]) -> DbResult<R::Entity> {
        let sql = select_sql(preload, Some("id"));
        let row: Option<R> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        debug!(table = R::TABLE, id, found = row.is_some(), "fetched by id");
        row.map(R::into_entity)
            .ok_or_else(|| DbError::not_found(Self::resource(), id))
    }

    /// Every row whose `column` equals `value`; no match is an empty vec.
    pub async fn find_where(
        &self,
        column: &str,
        value: Id,
        preload: &[Relation<R>],
    ) -> DbResult<Vec<R::Entity>> {
        let sql = select_sql(preload, Some(column));
        let rows: Vec<R> = sqlx::query_as(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;

        debug!(table = R::TABLE, column, value, count = rows.len(), "filtered");
        Ok(list_to_domain(rows))
    }

    /// The first row whose text `column` equals `value`, or Not-Found.
    pub async fn find_one_by(
        &self,
        column: &str,
        value: &str,
        preload: &[Relation<R>],
    ) -> DbResult<R::Entity> {
        let sql = format!("{} LIMIT 1", select_sql(preload, Some(column)));
        let row: Option<R> = sqlx::query_as(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        debug!(table = R::TABLE, column, found = row.is_some(), "fetched one");
        row.map(R::into_entity)
            .ok_or_else(|| DbError::not_found(Self::resource(), value))
    }

    pub async fn insert(&self, entity: &mut R::Entity) -> DbResult<()> {
        let record = R::from_entity(entity);
        let sql = insert_sql::<R>();
        let stored: R = record
            .bind(sqlx::query_as(&sql))
            .fetch_one(&self.pool)
            .await?;

        stored.write_back(entity);
        debug!(table = R::TABLE, id = entity.id(), "inserted");
        Ok(())
    }

    /// Overwrite every writable column of the row with the entity's id.
    pub async fn save(&self, entity: &mut R::Entity) -> DbResult<()> {
        let id = entity.id();
        let record = R::from_entity(entity);
        let sql = update_sql::<R>();
        let stored: Option<R> = record
            .bind(sqlx::query_as(&sql))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let stored = stored.ok_or_else(|| DbError::not_found(Self::resource(), id))?;
        stored.write_back(entity);
        debug!(table = R::TABLE, id, "updated");
        Ok(())
    }

    pub async fn remove(&self, id: Id) -> DbResult<()> {
        let result = sqlx::query(&delete_sql::<R>())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Self::resource(), id));
        }

        debug!(table = R::TABLE, id, "deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: Record> Repository for PgRepository<R> {
    type Entity = R::Entity;

    async fn get_all(&self) -> DbResult<Vec<R::Entity>> {
        self.find_all_with(R::DEFAULT_PRELOAD).await
    }

    async fn get_by_id(&self, id: Id) -> DbResult<R::Entity> {
        self.find_by_id_with(id, R::DEFAULT_PRELOAD).await
    }

    async fn create(&self, entity: &mut R::Entity) -> DbResult<()> {
        self.insert(entity).await
    }

    async fn update(&self, entity: &mut R::Entity) -> DbResult<()> {
        self.save(entity).await
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        self.remove(id).await
    }
}

#[async_trait]
impl RoleRepository for PgRepository<RoleRecord> {
    async fn get_by_name(&self, name: &str) -> DbResult<Role> {
        self.find_one_by("name", name, RoleRecord::DEFAULT_PRELOAD)
            .await
    }
}

#[async_trait]
impl UserRepository for PgRepository<UserRecord> {
    async fn get_by_email(&self, email: &str) -> DbResult<User> {
        self.find_one_by("email", email, UserRecord::DEFAULT_PRELOAD)
            .await
    }
}

#[async_trait]
impl ProjectRepository for PgRepository<ProjectRecord> {
    async fn get_by_owner(&self, owner_id: Id) -> DbResult<Vec<Project>> {
        self.find_where("created_by", owner_id, ProjectRecord::DEFAULT_PRELOAD)
            .await
    }
}

#[async_trait]
impl MilestoneRepository for PgRepository<MilestoneRecord> {
    async fn get_by_project_id(&self, project_id: Id) -> DbResult<Vec<Milestone>> {
        self.find_where("project_id", project_id, MilestoneRecord::DEFAULT_PRELOAD)
            .await
    }
}

#[async_trait]
impl CommentRepository for PgRepository<CommentRecord> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Comment>> {
        self.find_where("milestone_id", milestone_id, CommentRecord::DEFAULT_PRELOAD)
            .await
    }
}

#[async_trait]
impl DeliverableRepository for PgRepository<DeliverableRecord> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Deliverable>> {
        self.find_where("milestone_id", milestone_id, DeliverableRecord::DEFAULT_PRELOAD)
            .await
    }
}

#[async_trait]
impl FeedbackRepository for PgRepository<FeedbackRecord> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Feedback>> {
        self.find_where("milestone_id", milestone_id, FeedbackRecord::DEFAULT_PRELOAD)
            .await
    }
}

#[async_trait]
impl ReactionRepository for PgRepository<ReactionRecord> {
    async fn get_by_milestone_id(&self, milestone_id: Id) -> DbResult<Vec<Reaction>> {
        self.find_where("milestone_id", milestone_id, ReactionRecord::DEFAULT_PRELOAD)
            .await
    }
}

#[async_trait]
impl ProjectMemberRepository for PgRepository<ProjectMemberRecord> {
    async fn get_by_project_id(&self, project_id: Id) -> DbResult<Vec<ProjectMember>> {
        self.find_where("project_id", project_id, ProjectMemberRecord::DEFAULT_PRELOAD)
            .await
    }
}
