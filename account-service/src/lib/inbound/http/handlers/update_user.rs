use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::authorization_header;
use super::ApiError;
use super::ApiSuccess;
use super::UserProfileData;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for updating a user (raw JSON)
///
/// Omitted fields deserialize as empty strings and are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub full_name: String,
    pub phone_number: String,
}

impl From<UpdateUserRequest> for UpdateUserCommand {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            full_name: req.full_name,
            phone_number: req.phone_number,
        }
    }
}

/// A body rejection is handed to the service rather than returned here, so an
/// unauthenticated caller gets 403 whatever the body holds.
pub async fn update_user<S: UserServicePort>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserProfileData>, ApiError> {
    let command = body
        .map(|Json(req)| UpdateUserCommand::from(req))
        .map_err(|rejection| UserError::MalformedRequest(rejection.body_text()));

    state
        .user_service
        .update_user(authorization_header(&headers), command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
