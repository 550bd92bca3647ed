//! Route handlers organized by resource
//!
//! Nested associations are rendered as small summaries, never the full
//! entity, so a user's password cannot leak through a comment or project.

use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;

use softpharos_core::domain::{Id, Milestone, Project, Role, User};

use crate::state::AppState;

pub mod comments;
pub mod deliverables;
pub mod feedback;
pub mod health;
pub mod milestones;
pub mod project_members;
pub mod projects;
pub mod reactions;
pub mod roles;
pub mod users;

/// Every resource router merged together
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(roles::router())
        .merge(users::router())
        .merge(projects::router())
        .merge(milestones::router())
        .merge(comments::router())
        .merge(deliverables::router())
        .merge(feedback::router())
        .merge(reactions::router())
        .merge(project_members::router())
}

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
}

impl From<Role> for RoleSummary {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Id,
    pub name: Option<String>,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub id: Id,
    pub name: Option<String>,
    pub objective: Option<String>,
}

impl From<Project> for ProjectSummary {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            objective: p.objective,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MilestoneSummary {
    pub id: Id,
    pub title: Option<String>,
}

impl From<Milestone> for MilestoneSummary {
    fn from(m: Milestone) -> Self {
        Self {
            id: m.id,
            title: m.title,
        }
    }
}

pub(crate) fn summary<T, S: From<T>>(association: Option<T>) -> Option<S> {
    association.map(S::from)
}

pub(crate) fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}
