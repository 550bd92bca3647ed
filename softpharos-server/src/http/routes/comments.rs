//! Comment endpoints

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Comment, CommentPatch, Id};

use super::{rfc3339, summary, MilestoneSummary, UserSummary};
use crate::http::extractors::{deserialize_some, IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{positive, ValidationError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub milestone_id: Id,
    pub user_id: Id,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreateCommentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("milestone_id", self.milestone_id)?;
        positive("user_id", self.user_id)
    }

    fn into_comment(self) -> Comment {
        Comment {
            milestone_id: self.milestone_id,
            user_id: self.user_id,
            content: self.content,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCommentRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub content: Option<Option<String>>,
}

impl From<UpdateCommentRequest> for CommentPatch {
    fn from(req: UpdateCommentRequest) -> Self {
        Self {
            content: req.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: Id,
    pub milestone_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<MilestoneSummary>,
    pub user_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    pub content: Option<String>,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            milestone_id: c.milestone_id,
            milestone: summary(c.milestone),
            user_id: c.user_id,
            user: summary(c.user),
            content: c.content,
            created_at: rfc3339(c.created_at),
        }
    }
}

fn responses(comments: Vec<Comment>) -> Vec<CommentResponse> {
    comments.into_iter().map(CommentResponse::from).collect()
}

/// GET /comments
async fn list_comments(State(state): State<AppState>) -> ApiResult<Vec<CommentResponse>> {
    ok(responses(state.comments.get_all().await?))
}

/// GET /comments/{id}
async fn get_comment(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<CommentResponse> {
    let comment = state.comments.get_by_id(id).await?;
    ok(comment.into())
}

/// GET /comments/milestone/{milestone_id}
async fn list_comments_by_milestone(
    State(state): State<AppState>,
    IdParam(milestone_id): IdParam,
) -> ApiResult<Vec<CommentResponse>> {
    ok(responses(state.comments.get_by_milestone_id(milestone_id).await?))
}

/// POST /comments
async fn create_comment(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateCommentRequest>,
) -> Created<CommentResponse> {
    req.validate()?;
    let mut comment = req.into_comment();
    state.comments.create(&mut comment).await?;

    created(comment.into())
}

/// PUT /comments/{id}
async fn update_comment(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateCommentRequest>,
) -> ApiResult<CommentResponse> {
    let comment = state.comments.patch(id, CommentPatch::from(req)).await?;
    ok(comment.into())
}

/// DELETE /comments/{id}
async fn delete_comment(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.comments.delete(id).await?;
    deleted("comment")
}

/// Comment routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route(
            "/comments/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        .route(
            "/comments/milestone/{milestone_id}",
            get(list_comments_by_milestone),
        )
}
