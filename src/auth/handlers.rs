//! Authentication HTTP Handlers
//!
//! Login and signup always answer with the `LoginResponse` envelope so the
//! client sees one shape on every path; unexpected faults get a generic
//! message with the detail kept server-side.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

use crate::auth::models::{LoginRequest, LoginResponse, SignupRequest};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", post(logout))
}

/// POST /api/auth/login
pub async fn login(State(state): State<Arc<AppState>>, Json(req): Json<LoginRequest>) -> Response {
    tracing::info!(email = %req.email, role = %req.role, "Login attempt");

    if let Err(err) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure(&req.email, &req.role, err.to_string())),
        )
            .into_response();
    }

    match state.auth.login(&req).await {
        Ok(resp) => {
            tracing::info!(email = %req.email, "Login successful");
            (StatusCode::OK, Json(resp)).into_response()
        }
        Err(err) if err.is_client_error() => {
            tracing::warn!(email = %req.email, error = %err, "Login failed");
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse::failure(&req.email, &req.role, err.to_string())),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(email = %req.email, error = %err, "Unexpected login error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LoginResponse::failure(
                    &req.email,
                    &req.role,
                    "Unexpected error during login",
                )),
            )
                .into_response()
        }
    }
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Response {
    tracing::info!(email = %req.email, role = %req.role, "Signup attempt");

    if let Err(err) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure(&req.email, &req.role, err.to_string())),
        )
            .into_response();
    }

    match state.auth.signup(&req).await {
        Ok(resp) => (StatusCode::CREATED, Json(resp)).into_response(),
        Err(err) if err.is_client_error() => {
            tracing::warn!(email = %req.email, error = %err, "Signup failed");
            (
                StatusCode::BAD_REQUEST,
                Json(LoginResponse::failure(&req.email, &req.role, err.to_string())),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(email = %req.email, error = %err, "Unexpected signup error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LoginResponse::failure(
                    &req.email,
                    &req.role,
                    "Unexpected error during signup",
                )),
            )
                .into_response()
        }
    }
}

/// POST /api/auth/logout
///
/// Audit-only: the token from the Authorization header is recorded, never
/// invalidated. Plain-text response.
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    tracing::info!("Logout request received");

    let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let email = headers.get("X-User-Email").and_then(|v| v.to_str().ok());

    state.auth.logout(token, email).await;

    tracing::info!("Logout successful");
    (StatusCode::OK, "Logged out successfully").into_response()
}
