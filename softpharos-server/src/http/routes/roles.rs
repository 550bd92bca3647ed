//! Role endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Id, Role, RolePatch};

use super::rfc3339;
use crate::http::extractors::{deserialize_some, IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{non_empty, ValidationError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateRoleRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("name", &self.name)
    }

    fn into_role(self) -> Role {
        Role {
            name: self.name,
            description: self.description,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateRoleRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
}

impl UpdateRoleRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => non_empty("name", name),
            None => Ok(()),
        }
    }
}

impl From<UpdateRoleRequest> for RolePatch {
    fn from(req: UpdateRoleRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<Role> for RoleResponse {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            created_at: rfc3339(r.created_at),
        }
    }
}

/// GET /roles
async fn list_roles(State(state): State<AppState>) -> ApiResult<Vec<RoleResponse>> {
    let roles = state.roles.get_all().await?;
    ok(roles.into_iter().map(RoleResponse::from).collect())
}

/// GET /roles/{id}
async fn get_role(State(state): State<AppState>, IdParam(id): IdParam) -> ApiResult<RoleResponse> {
    let role = state.roles.get_by_id(id).await?;
    ok(role.into())
}

/// GET /roles/name/{name}
async fn get_role_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<RoleResponse> {
    non_empty("name", &name)?;
    let role = state.roles.get_by_name(&name).await?;
    ok(role.into())
}

/// POST /roles
async fn create_role(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateRoleRequest>,
) -> Created<RoleResponse> {
    req.validate()?;
    let mut role = req.into_role();
    state.roles.create(&mut role).await?;

    created(role.into())
}

/// PUT /roles/{id}
async fn update_role(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateRoleRequest>,
) -> ApiResult<RoleResponse> {
    req.validate()?;
    let role = state.roles.patch(id, RolePatch::from(req)).await?;
    ok(role.into())
}

/// DELETE /roles/{id}
async fn delete_role(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.roles.delete(id).await?;
    deleted("role")
}

/// Role routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(list_roles).post(create_role))
        .route(
            "/roles/{id}",
            get(get_role).put(update_role).delete(delete_role),
        )
        .route("/roles/name/{name}", get(get_role_by_name))
}
