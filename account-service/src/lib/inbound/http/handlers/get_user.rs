use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::authorization_header;
use super::ApiError;
use super::ApiSuccess;
use super::UserProfileData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_user<S: UserServicePort>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Result<ApiSuccess<UserProfileData>, ApiError> {
    state
        .user_service
        .get_user(authorization_header(&headers))
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
