//! Project membership endpoints (mounted under `/project-members`)

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Id, ProjectMember, ProjectMemberPatch};

use super::{rfc3339, summary, ProjectSummary, UserSummary};
use crate::http::extractors::{deserialize_some, IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{positive, ValidationError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProjectMemberRequest {
    pub project_id: Id,
    pub user_id: Id,
    #[serde(default)]
    pub role: Option<String>,
}

impl CreateProjectMemberRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("project_id", self.project_id)?;
        positive("user_id", self.user_id)
    }

    fn into_member(self) -> ProjectMember {
        ProjectMember {
            project_id: self.project_id,
            user_id: self.user_id,
            role: self.role,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectMemberRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub role: Option<Option<String>>,
}

impl From<UpdateProjectMemberRequest> for ProjectMemberPatch {
    fn from(req: UpdateProjectMemberRequest) -> Self {
        Self { role: req.role }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectMemberResponse {
    pub id: Id,
    pub project_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSummary>,
    pub user_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    pub role: Option<String>,
    pub joined_at: String,
}

impl From<ProjectMember> for ProjectMemberResponse {
    fn from(m: ProjectMember) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            project: summary(m.project),
            user_id: m.user_id,
            user: summary(m.user),
            role: m.role,
            joined_at: rfc3339(m.joined_at),
        }
    }
}

fn responses(members: Vec<ProjectMember>) -> Vec<ProjectMemberResponse> {
    members
        .into_iter()
        .map(ProjectMemberResponse::from)
        .collect()
}

/// GET /project-members
async fn list_members(State(state): State<AppState>) -> ApiResult<Vec<ProjectMemberResponse>> {
    ok(responses(state.project_members.get_all().await?))
}

/// GET /project-members/{id}
async fn get_member(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<ProjectMemberResponse> {
    let member = state.project_members.get_by_id(id).await?;
    ok(member.into())
}

/// GET /project-members/project/{project_id}
async fn list_members_by_project(
    State(state): State<AppState>,
    IdParam(project_id): IdParam,
) -> ApiResult<Vec<ProjectMemberResponse>> {
    ok(responses(
        state.project_members.get_by_project_id(project_id).await?,
    ))
}

/// POST /project-members
async fn create_member(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateProjectMemberRequest>,
) -> Created<ProjectMemberResponse> {
    req.validate()?;
    let mut member = req.into_member();
    state.project_members.create(&mut member).await?;

    created(member.into())
}

/// PUT /project-members/{id}
async fn update_member(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateProjectMemberRequest>,
) -> ApiResult<ProjectMemberResponse> {
    let member = state
        .project_members
        .patch(id, ProjectMemberPatch::from(req))
        .await?;
    ok(member.into())
}

/// DELETE /project-members/{id}
async fn delete_member(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.project_members.delete(id).await?;
    deleted("project member")
}

/// Project member routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project-members", get(list_members).post(create_member))
        .route(
            "/project-members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route(
            "/project-members/project/{project_id}",
            get(list_members_by_project),
        )
}
