//! User endpoints
//!
//! Responses never carry the password.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use softpharos_core::domain::{Id, User, UserPatch};

use super::{rfc3339, summary, RoleSummary};
use crate::http::extractors::{deserialize_some, IdParam, ValidJson};
use crate::http::response::{created, deleted, ok, ApiResult, Created, MessageResponse};
use crate::http::validation::{email, min_len, positive, ValidationError};
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub role_id: Id,
}

impl CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        email("email", &self.email)?;
        min_len("password", &self.password, MIN_PASSWORD_LEN)?;
        positive("role_id", self.role_id)
    }

    fn into_user(self) -> User {
        User {
            name: self.name,
            email: self.email,
            password: self.password,
            role_id: self.role_id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role_id: Option<Id>,
}

impl UpdateUserRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(password) = &self.password {
            min_len("password", password, MIN_PASSWORD_LEN)?;
        }
        if let Some(role_id) = self.role_id {
            positive("role_id", role_id)?;
        }
        Ok(())
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            password: req.password,
            role_id: req.role_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Id,
    pub name: Option<String>,
    pub email: String,
    pub role_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleSummary>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role_id: u.role_id,
            role: summary(u.role),
            created_at: rfc3339(u.created_at),
        }
    }
}

/// GET /users
async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    let users = state.users.get_all().await?;
    ok(users.into_iter().map(UserResponse::from).collect())
}

/// GET /users/{id}
async fn get_user(State(state): State<AppState>, IdParam(id): IdParam) -> ApiResult<UserResponse> {
    let user = state.users.get_by_id(id).await?;
    ok(user.into())
}

/// GET /users/email/{email}
async fn get_user_by_email(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ApiResult<UserResponse> {
    let user = state.users.get_by_email(&address).await?;
    ok(user.into())
}

/// POST /users
async fn create_user(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateUserRequest>,
) -> Created<UserResponse> {
    req.validate()?;
    let mut user = req.into_user();
    state.users.create(&mut user).await?;

    tracing::info!(id = user.id, "user created");
    created(user.into())
}

/// PUT /users/{id}
async fn update_user(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    req.validate()?;
    let user = state.users.patch(id, UserPatch::from(req)).await?;
    ok(user.into())
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<MessageResponse> {
    state.users.delete(id).await?;
    deleted("user")
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/email/{email}", get(get_user_by_email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use softpharos_core::domain::Role;

    #[test]
    fn response_has_no_password() {
        let user = User {
            id: 1,
            email: "ana@example.com".into(),
            password: "secret1".into(),
            role_id: 2,
            role: Some(Role {
                id: 2,
                name: "student".into(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let body = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["role"]["name"], "student");
    }

    #[test]
    fn create_rejects_short_password() {
        let req = CreateUserRequest {
            name: None,
            email: "ana@example.com".into(),
            password: "123".into(),
            role_id: 1,
        };
        assert_eq!(
            req.validate(),
            Err(ValidationError::TooShort {
                field: "password",
                min: 6
            })
        );
    }

    #[test]
    fn create_rejects_bad_email_and_role() {
        let mut req = CreateUserRequest {
            name: None,
            email: "not-an-email".into(),
            password: "secret1".into(),
            role_id: 1,
        };
        assert!(req.validate().is_err());

        req.email = "ana@example.com".into();
        req.role_id = 0;
        assert_eq!(
            req.validate(),
            Err(ValidationError::NotPositive { field: "role_id" })
        );
    }
}
