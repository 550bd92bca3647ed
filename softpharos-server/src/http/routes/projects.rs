//! Project endpoints

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Id, Project, ProjectPatch};

use super::{rfc3339, summary, UserSummary};
use crate::http::extractors::{deserialize_some, IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{non_empty, positive, ValidationError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub objective: Option<String>,
    pub created_by: Id,
}

impl CreateProjectRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("name", &self.name)?;
        positive("created_by", self.created_by)
    }

    fn into_project(self) -> Project {
        Project {
            name: Some(self.name),
            objective: self.objective,
            created_by: self.created_by,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub objective: Option<Option<String>>,
}

impl UpdateProjectRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(Some(name)) => non_empty("name", name),
            _ => Ok(()),
        }
    }
}

impl From<UpdateProjectRequest> for ProjectPatch {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            name: req.name,
            objective: req.objective,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Id,
    pub name: Option<String>,
    pub objective: Option<String>,
    pub created_by: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserSummary>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            objective: p.objective,
            created_by: p.created_by,
            creator: summary(p.owner),
            created_at: rfc3339(p.created_at),
            updated_at: rfc3339(p.updated_at),
        }
    }
}

fn responses(projects: Vec<Project>) -> Vec<ProjectResponse> {
    projects.into_iter().map(ProjectResponse::from).collect()
}

/// GET /projects
async fn list_projects(State(state): State<AppState>) -> ApiResult<Vec<ProjectResponse>> {
    ok(responses(state.projects.get_all().await?))
}

/// GET /projects/{id}
async fn get_project(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<ProjectResponse> {
    let project = state.projects.get_by_id(id).await?;
    ok(project.into())
}

/// GET /projects/owner/{owner_id}
async fn list_projects_by_owner(
    State(state): State<AppState>,
    IdParam(owner_id): IdParam,
) -> ApiResult<Vec<ProjectResponse>> {
    ok(responses(state.projects.get_by_owner(owner_id).await?))
}

/// POST /projects
async fn create_project(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateProjectRequest>,
) -> Created<ProjectResponse> {
    req.validate()?;
    let mut project = req.into_project();
    state.projects.create(&mut project).await?;

    tracing::info!(id = project.id, owner = project.created_by, "project created");
    created(project.into())
}

/// PUT /projects/{id}
async fn update_project(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateProjectRequest>,
) -> ApiResult<ProjectResponse> {
    req.validate()?;
    let project = state.projects.patch(id, ProjectPatch::from(req)).await?;
    ok(project.into())
}

/// DELETE /projects/{id}
async fn delete_project(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.projects.delete(id).await?;
    deleted("project")
}

/// Project routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/owner/{owner_id}", get(list_projects_by_owner))
}
