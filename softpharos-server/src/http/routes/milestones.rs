//! Milestone endpoints

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Id, Milestone, MilestonePatch};

use super::{rfc3339, summary, ProjectSummary};
use crate::http::extractors::{deserialize_some, IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{positive, ValidationError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMilestoneRequest {
    pub project_id: Id,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub class_week: Option<i32>,
}

impl CreateMilestoneRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("project_id", self.project_id)
    }

    fn into_milestone(self) -> Milestone {
        Milestone {
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            class_week: self.class_week,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMilestoneRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub class_week: Option<Option<i32>>,
}

impl From<UpdateMilestoneRequest> for MilestonePatch {
    fn from(req: UpdateMilestoneRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            class_week: req.class_week,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MilestoneResponse {
    pub id: Id,
    pub project_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSummary>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub class_week: Option<i32>,
    pub created_at: String,
}

impl From<Milestone> for MilestoneResponse {
    fn from(m: Milestone) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            project: summary(m.project),
            title: m.title,
            description: m.description,
            class_week: m.class_week,
            created_at: rfc3339(m.created_at),
        }
    }
}

fn responses(milestones: Vec<Milestone>) -> Vec<MilestoneResponse> {
    milestones.into_iter().map(MilestoneResponse::from).collect()
}

/// GET /milestones
async fn list_milestones(State(state): State<AppState>) -> ApiResult<Vec<MilestoneResponse>> {
    ok(responses(state.milestones.get_all().await?))
}

/// GET /milestones/{id}
async fn get_milestone(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MilestoneResponse> {
    let milestone = state.milestones.get_by_id(id).await?;
    ok(milestone.into())
}

/// GET /milestones/project/{project_id}
async fn list_milestones_by_project(
    State(state): State<AppState>,
    IdParam(project_id): IdParam,
) -> ApiResult<Vec<MilestoneResponse>> {
    ok(responses(state.milestones.get_by_project_id(project_id).await?))
}

/// POST /milestones
async fn create_milestone(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateMilestoneRequest>,
) -> Created<MilestoneResponse> {
    req.validate()?;
    let mut milestone = req.into_milestone();
    state.milestones.create(&mut milestone).await?;

    created(milestone.into())
}

/// PUT /milestones/{id}
async fn update_milestone(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateMilestoneRequest>,
) -> ApiResult<MilestoneResponse> {
    let milestone = state.milestones.patch(id, MilestonePatch::from(req)).await?;
    ok(milestone.into())
}

/// DELETE /milestones/{id}
async fn delete_milestone(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.milestones.delete(id).await?;
    deleted("milestone")
}

/// Milestone routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/milestones", get(list_milestones).post(create_milestone))
        .route(
            "/milestones/{id}",
            get(get_milestone)
                .put(update_milestone)
                .delete(delete_milestone),
        )
        .route(
            "/milestones/project/{project_id}",
            get(list_milestones_by_project),
        )
}
