use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_user::get_user;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_user::update_user;
use crate::domain::user::ports::UserServicePort;

pub struct AppState<S: UserServicePort> {
    pub user_service: Arc<S>,
}

impl<S: UserServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
        }
    }
}

pub fn create_router<S: UserServicePort>(user_service: Arc<S>) -> Router {
    let state = AppState { user_service };

    let user_routes = Router::new()
        .route(
            "/user",
            post(register::<S>).get(get_user::<S>).put(update_user::<S>),
        )
        .route("/login", post(login::<S>));

    // Headers are left out of the span so bearer tokens never reach the logs.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    user_routes
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
