//! JSON envelope shared by every endpoint

use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::ApiError;

/// `{"success", "data"?, "error"?, "timestamp"}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Body of a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code,
                message: message.into(),
            }),
            timestamp: Utc::now(),
        }
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

pub type Created<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::ok(data)))
}

pub fn created<T>(data: T) -> Created<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(data))))
}

pub fn deleted(resource: &str) -> ApiResult<MessageResponse> {
    ok(MessageResponse {
        message: format!("{resource} deleted successfully"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_error() {
        let body = serde_json::to_value(ApiResponse::ok(5)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 5);
        assert!(body.get("error").is_none());
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn failure_omits_data() {
        let body = serde_json::to_value(ApiResponse::error("NOT_FOUND", "role not found")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "role not found");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn delete_message_names_resource() {
        let Json(body) = deleted("comment").unwrap();
        assert_eq!(body.data.unwrap().message, "comment deleted successfully");
    }
}
