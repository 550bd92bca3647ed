//! Deliverable endpoints

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Deliverable, DeliverablePatch, Id};

use super::{rfc3339, summary, MilestoneSummary};
use crate::http::extractors::{deserialize_some, IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{non_empty, positive, ValidationError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateDeliverableRequest {
    pub milestone_id: Id,
    pub url: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl CreateDeliverableRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("milestone_id", self.milestone_id)?;
        non_empty("url", &self.url)
    }

    fn into_deliverable(self) -> Deliverable {
        Deliverable {
            milestone_id: self.milestone_id,
            url: self.url,
            kind: self.kind,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateDeliverableRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "deserialize_some")]
    pub kind: Option<Option<String>>,
}

impl UpdateDeliverableRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.url {
            Some(url) => non_empty("url", url),
            None => Ok(()),
        }
    }
}

impl From<UpdateDeliverableRequest> for DeliverablePatch {
    fn from(req: UpdateDeliverableRequest) -> Self {
        Self {
            url: req.url,
            kind: req.kind,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeliverableResponse {
    pub id: Id,
    pub milestone_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<MilestoneSummary>,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: String,
}

impl From<Deliverable> for DeliverableResponse {
    fn from(d: Deliverable) -> Self {
        Self {
            id: d.id,
            milestone_id: d.milestone_id,
            milestone: summary(d.milestone),
            url: d.url,
            kind: d.kind,
            created_at: rfc3339(d.created_at),
        }
    }
}

fn responses(deliverables: Vec<Deliverable>) -> Vec<DeliverableResponse> {
    deliverables
        .into_iter()
        .map(DeliverableResponse::from)
        .collect()
}

/// GET /deliverables
async fn list_deliverables(State(state): State<AppState>) -> ApiResult<Vec<DeliverableResponse>> {
    ok(responses(state.deliverables.get_all().await?))
}

/// GET /deliverables/{id}
async fn get_deliverable(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<DeliverableResponse> {
    let deliverable = state.deliverables.get_by_id(id).await?;
    ok(deliverable.into())
}

/// GET /deliverables/milestone/{milestone_id}
async fn list_deliverables_by_milestone(
    State(state): State<AppState>,
    IdParam(milestone_id): IdParam,
) -> ApiResult<Vec<DeliverableResponse>> {
    ok(responses(
        state.deliverables.get_by_milestone_id(milestone_id).await?,
    ))
}

/// POST /deliverables
async fn create_deliverable(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateDeliverableRequest>,
) -> Created<DeliverableResponse> {
    req.validate()?;
    let mut deliverable = req.into_deliverable();
    state.deliverables.create(&mut deliverable).await?;

    created(deliverable.into())
}

/// PUT /deliverables/{id}
async fn update_deliverable(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateDeliverableRequest>,
) -> ApiResult<DeliverableResponse> {
    req.validate()?;
    let deliverable = state
        .deliverables
        .patch(id, DeliverablePatch::from(req))
        .await?;
    ok(deliverable.into())
}

/// DELETE /deliverables/{id}
async fn delete_deliverable(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.deliverables.delete(id).await?;
    deleted("deliverable")
}

/// Deliverable routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/deliverables",
            get(list_deliverables).post(create_deliverable),
        )
        .route(
            "/deliverables/{id}",
            get(get_deliverable)
                .put(update_deliverable)
                .delete(delete_deliverable),
        )
        .route(
            "/deliverables/milestone/{milestone_id}",
            get(list_deliverables_by_milestone),
        )
}
