//! Reaction endpoints

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Id, Reaction, ReactionPatch};

use super::{rfc3339, summary, MilestoneSummary, UserSummary};
use crate::http::extractors::{deserialize_some, IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{positive, ValidationError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReactionRequest {
    pub milestone_id: Id,
    pub user_id: Id,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl CreateReactionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        positive("milestone_id", self.milestone_id)?;
        positive("user_id", self.user_id)
    }

    fn into_reaction(self) -> Reaction {
        Reaction {
            milestone_id: self.milestone_id,
            user_id: self.user_id,
            kind: self.kind,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateReactionRequest {
    #[serde(default, rename = "type", deserialize_with = "deserialize_some")]
    pub kind: Option<Option<String>>,
}

impl From<UpdateReactionRequest> for ReactionPatch {
    fn from(req: UpdateReactionRequest) -> Self {
        Self { kind: req.kind }
    }
}

#[derive(Debug, Serialize)]
pub struct ReactionResponse {
    pub id: Id,
    pub milestone_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<MilestoneSummary>,
    pub user_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: String,
}

impl From<Reaction> for ReactionResponse {
    fn from(r: Reaction) -> Self {
        Self {
            id: r.id,
            milestone_id: r.milestone_id,
            milestone: summary(r.milestone),
            user_id: r.user_id,
            user: summary(r.user),
            kind: r.kind,
            created_at: rfc3339(r.created_at),
        }
    }
}

fn responses(reactions: Vec<Reaction>) -> Vec<ReactionResponse> {
    reactions.into_iter().map(ReactionResponse::from).collect()
}

/// GET /reactions
async fn list_reactions(State(state): State<AppState>) -> ApiResult<Vec<ReactionResponse>> {
    ok(responses(state.reactions.get_all().await?))
}

/// GET /reactions/{id}
async fn get_reaction(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<ReactionResponse> {
    let reaction = state.reactions.get_by_id(id).await?;
    ok(reaction.into())
}

/// GET /reactions/milestone/{milestone_id}
async fn list_reactions_by_milestone(
    State(state): State<AppState>,
    IdParam(milestone_id): IdParam,
) -> ApiResult<Vec<ReactionResponse>> {
    ok(responses(state.reactions.get_by_milestone_id(milestone_id).await?))
}

/// POST /reactions
async fn create_reaction(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateReactionRequest>,
) -> Created<ReactionResponse> {
    req.validate()?;
    let mut reaction = req.into_reaction();
    state.reactions.create(&mut reaction).await?;

    created(reaction.into())
}

/// PUT /reactions/{id}
async fn update_reaction(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateReactionRequest>,
) -> ApiResult<ReactionResponse> {
    let reaction = state.reactions.patch(id, ReactionPatch::from(req)).await?;
    ok(reaction.into())
}

/// DELETE /reactions/{id}
async fn delete_reaction(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.reactions.delete(id).await?;
    deleted("reaction")
}

/// Reaction routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reactions", get(list_reactions).post(create_reaction))
        .route(
            "/reactions/{id}",
            get(get_reaction).put(update_reaction).delete(delete_reaction),
        )
        .route(
            "/reactions/milestone/{milestone_id}",
            get(list_reactions_by_milestone),
        )
}
