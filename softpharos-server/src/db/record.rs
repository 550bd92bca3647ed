//! Record ↔ entity mapping and SQL generation
//!
//! A [`Record`] is the storage-shaped twin of a domain entity: one struct
//! per table, with association fields that are only filled when the query
//! joined them. The trait carries everything the generic repository needs
//! to read and write that table.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::types::Json;
use sqlx::{FromRow, Postgres};

use softpharos_core::domain::Entity;

pub type PgQueryAs<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Storage representation of one entity family.
pub trait Record:
    for<'r> FromRow<'r, PgRow> + DeserializeOwned + Send + Sync + Unpin + Sized + 'static
{
    type Entity: Entity + Send + Sync + 'static;

    const TABLE: &'static str;

    /// Columns written by insert and update, in [`Record::bind`] order.
    const COLUMNS: &'static [&'static str];

    /// Columns storage resets to `NOW()` on every update.
    const REFRESHED_ON_UPDATE: &'static [&'static str] = &[];

    /// Relations resolved by the repository port reads.
    const DEFAULT_PRELOAD: &'static [Relation<Self>];

    /// Bind the values of [`Record::COLUMNS`].
    fn bind<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    fn into_entity(self) -> Self::Entity;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Copy storage-assigned fields (id, timestamps) into `entity`.
    fn write_back(&self, entity: &mut Self::Entity);
}

/// A many-to-one association of record `R`, joined through a foreign key.
pub struct Relation<R> {
    /// Result column and join alias; matches the record field
    pub name: &'static str,
    pub table: &'static str,
    pub foreign_key: &'static str,
    _owner: PhantomData<fn() -> R>,
}

impl<R> Relation<R> {
    pub const fn new(name: &'static str, table: &'static str, foreign_key: &'static str) -> Self {
        Self {
            name,
            table,
            foreign_key,
            _owner: PhantomData,
        }
    }
}

impl<R> Clone for Relation<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Relation<R> {}

impl<R> PartialEq for Relation<R> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.table == other.table
            && self.foreign_key == other.foreign_key
    }
}

impl<R> fmt::Debug for Relation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("name", &self.name)
            .field("table", &self.table)
            .field("foreign_key", &self.foreign_key)
            .finish()
    }
}

pub fn to_domain<R: Record>(record: Option<R>) -> Option<R::Entity> {
    record.map(R::into_entity)
}

pub fn to_record<R: Record>(entity: Option<&R::Entity>) -> Option<R> {
    entity.map(R::from_entity)
}

/// Element-wise, order preserving. Empty in, empty out.
pub fn list_to_domain<R: Record>(records: Vec<R>) -> Vec<R::Entity> {
    records.into_iter().map(R::into_entity).collect()
}

/// Entity for a joined association, `None` when it was not loaded or no row matched.
pub(crate) fn load<R: Record>(association: Option<Json<R>>) -> Option<R::Entity> {
    association.map(|Json(record)| record.into_entity())
}

pub(crate) fn embed<R: Record>(entity: Option<&R::Entity>) -> Option<Json<R>> {
    entity.map(|e| Json(R::from_entity(e)))
}

/// `SELECT` for `R` with one `LEFT JOIN` per relation in `preload`.
///
/// Each joined row is folded into a jsonb column named after the relation,
/// NULL when the join found nothing. `filter` adds `WHERE t.<column> = $1`.
pub(crate) fn select_sql<R: Record>(preload: &[Relation<R>], filter: Option<&str>) -> String {
    let mut sql = String::from("SELECT t.*");
    for rel in preload {
        sql.push_str(&format!(
            ", CASE WHEN \"{name}\".id IS NULL THEN NULL ELSE to_jsonb(\"{name}\") END AS \"{name}\"",
            name = rel.name
        ));
    }

    sql.push_str(&format!(" FROM \"{}\" t", R::TABLE));
    for rel in preload {
        sql.push_str(&format!(
            " LEFT JOIN \"{table}\" \"{name}\" ON \"{name}\".id = t.\"{fk}\"",
            table = rel.table,
            name = rel.name,
            fk = rel.foreign_key
        ));
    }

    if let Some(column) = filter {
        sql.push_str(&format!(" WHERE t.\"{column}\" = $1"));
    }
    sql.push_str(" ORDER BY t.id");
    sql
}

pub(crate) fn insert_sql<R: Record>() -> String {
    let columns = R::COLUMNS
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let params = (1..=R::COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO \"{}\" ({columns}) VALUES ({params}) RETURNING *",
        R::TABLE
    )
}

/// Full overwrite by id; the id is the last parameter.
pub(crate) fn update_sql<R: Record>() -> String {
    let mut assignments: Vec<String> = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("\"{c}\" = ${}", i + 1))
        .collect();
    assignments.extend(
        R::REFRESHED_ON_UPDATE
            .iter()
            .map(|c| format!("\"{c}\" = NOW()")),
    );

    format!(
        "UPDATE \"{}\" SET {} WHERE id = ${} RETURNING *",
        R::TABLE,
        assignments.join(", "),
        R::COLUMNS.len() + 1
    )
}

pub(crate) fn delete_sql<R: Record>() -> String {
    format!("DELETE FROM \"{}\" WHERE id = $1", R::TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::records::{CommentRecord, ProjectRecord, RoleRecord};

    #[test]
    fn select_without_preload() {
        assert_eq!(
            select_sql::<RoleRecord>(&[], None),
            r#"SELECT t.* FROM "roles" t ORDER BY t.id"#
        );
    }

    #[test]
    fn select_joins_each_relation() {
        let sql = select_sql::<ProjectRecord>(&[ProjectRecord::OWNER], Some("id"));
        assert_eq!(
            sql,
            concat!(
                r#"SELECT t.*, CASE WHEN "owner".id IS NULL THEN NULL ELSE to_jsonb("owner") END AS "owner""#,
                r#" FROM "projects" t"#,
                r#" LEFT JOIN "users" "owner" ON "owner".id = t."created_by""#,
                r#" WHERE t."id" = $1 ORDER BY t.id"#
            )
        );
    }

    #[test]
    fn select_with_two_relations() {
        let sql = select_sql::<CommentRecord>(CommentRecord::DEFAULT_PRELOAD, Some("milestone_id"));
        assert!(sql.contains(r#"LEFT JOIN "milestones" "milestone" ON "milestone".id = t."milestone_id""#));
        assert!(sql.contains(r#"LEFT JOIN "users" "user" ON "user".id = t."user_id""#));
        assert!(sql.contains(r#"WHERE t."milestone_id" = $1"#));
    }

    #[test]
    fn insert_lists_writable_columns() {
        assert_eq!(
            insert_sql::<ProjectRecord>(),
            r#"INSERT INTO "projects" ("name", "objective", "created_by") VALUES ($1, $2, $3) RETURNING *"#
        );
    }

    #[test]
    fn update_refreshes_timestamps_and_binds_id_last() {
        assert_eq!(
            update_sql::<ProjectRecord>(),
            r#"UPDATE "projects" SET "name" = $1, "objective" = $2, "created_by" = $3, "updated_at" = NOW() WHERE id = $4 RETURNING *"#
        );
        assert_eq!(
            update_sql::<RoleRecord>(),
            r#"UPDATE "roles" SET "name" = $1, "description" = $2 WHERE id = $3 RETURNING *"#
        );
    }

    #[test]
    fn delete_by_id() {
        assert_eq!(delete_sql::<RoleRecord>(), r#"DELETE FROM "roles" WHERE id = $1"#);
    }
}
