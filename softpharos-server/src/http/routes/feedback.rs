//! Feedback endpoints (mounted under `/feedbacks`)

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Feedback, FeedbackPatch, Id};

use super::{rfc3339, summary, MilestoneSummary, UserSummary};
use crate::http::extractors::{IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{non_empty, positive, ValidationError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub milestone_id: Id,
    pub professor_id: Id,
    pub content: String,
}

impl CreateFeedbackRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("milestone_id", self.milestone_id)?;
        positive("professor_id", self.professor_id)?;
        non_empty("content", &self.content)
    }

    fn into_feedback(self) -> Feedback {
        Feedback {
            milestone_id: self.milestone_id,
            professor_id: self.professor_id,
            content: self.content,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateFeedbackRequest {
    #[serde(default)]
    pub content: Option<String>,
}

impl UpdateFeedbackRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.content {
            Some(content) => non_empty("content", content),
            None => Ok(()),
        }
    }
}

impl From<UpdateFeedbackRequest> for FeedbackPatch {
    fn from(req: UpdateFeedbackRequest) -> Self {
        Self {
            content: req.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: Id,
    pub milestone_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<MilestoneSummary>,
    pub professor_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor: Option<UserSummary>,
    pub content: String,
    pub created_at: String,
}

impl From<Feedback> for FeedbackResponse {
    fn from(f: Feedback) -> Self {
        Self {
            id: f.id,
            milestone_id: f.milestone_id,
            milestone: summary(f.milestone),
            professor_id: f.professor_id,
            professor: summary(f.professor),
            content: f.content,
            created_at: rfc3339(f.created_at),
        }
    }
}

fn responses(feedback: Vec<Feedback>) -> Vec<FeedbackResponse> {
    feedback.into_iter().map(FeedbackResponse::from).collect()
}

/// GET /feedbacks
async fn list_feedback(State(state): State<AppState>) -> ApiResult<Vec<FeedbackResponse>> {
    ok(responses(state.feedback.get_all().await?))
}

/// GET /feedbacks/{id}
async fn get_feedback(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<FeedbackResponse> {
    let feedback = state.feedback.get_by_id(id).await?;
    ok(feedback.into())
}

/// GET /feedbacks/milestone/{milestone_id}
async fn list_feedback_by_milestone(
    State(state): State<AppState>,
    IdParam(milestone_id): IdParam,
) -> ApiResult<Vec<FeedbackResponse>> {
    ok(responses(state.feedback.get_by_milestone_id(milestone_id).await?))
}

/// POST /feedbacks
async fn create_feedback(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateFeedbackRequest>,
) -> Created<FeedbackResponse> {
    req.validate()?;
    let mut feedback = req.into_feedback();
    state.feedback.create(&mut feedback).await?;

    created(feedback.into())
}

/// PUT /feedbacks/{id}
async fn update_feedback(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateFeedbackRequest>,
) -> ApiResult<FeedbackResponse> {
    req.validate()?;
    let feedback = state.feedback.patch(id, FeedbackPatch::from(req)).await?;
    ok(feedback.into())
}

/// DELETE /feedbacks/{id}
async fn delete_feedback(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.feedback.delete(id).await?;
    deleted("feedback")
}

/// Feedback routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedbacks", get(list_feedback).post(create_feedback))
        .route(
            "/feedbacks/{id}",
            get(get_feedback).put(update_feedback).delete(delete_feedback),
        )
        .route(
            "/feedbacks/milestone/{milestone_id}",
            get(list_feedback_by_milestone),
        )
}
