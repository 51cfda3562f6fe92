use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod get_user;
pub mod login;
pub mod register;
pub mod update_user;

/// Message returned for every rejected bearer token.
const UNAUTHORIZED_MESSAGE: &str = "unauthorized";

/// Message returned for every internal failure.
const INTERNAL_ERROR_MESSAGE: &str = "something went wrong";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Detail is logged, never sent to the client.
    InternalServerError(String),
    BadRequest(String),
    Validation(Vec<String>),
    Conflict(String),
    Forbidden,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(messages) => {
                let status = StatusCode::BAD_REQUEST;
                return (
                    status,
                    Json(ApiResponseBody::new(status, ValidationErrorData { messages })),
                )
                    .into_response();
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, UNAUTHORIZED_MESSAGE.to_string()),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(report) => ApiError::Validation(report.messages()),
            UserError::MalformedRequest(_)
            | UserError::EmptyUpdate
            | UserError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            UserError::PhoneNumberAlreadyRegistered => ApiError::Conflict(err.to_string()),
            // The only lookups by id come from token subjects
            UserError::Unauthorized | UserError::NotFound(_) => ApiError::Forbidden,
            UserError::InvalidUserId(_)
            | UserError::Password(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorData {
    pub messages: Vec<String>,
}

/// Public profile of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileData {
    pub full_name: String,
    pub phone_number: String,
}

impl From<&User> for UserProfileData {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            phone_number: user.phone_number.as_str().to_string(),
        }
    }
}

/// Raw `Authorization` header value, if present and valid UTF-8.
pub(crate) fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}
