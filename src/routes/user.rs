use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use recipebox_user::{LoginInput, RegisterInput, UpdateProfileInput, User};
use serde::{Deserialize, Serialize};

use crate::{auth::AuthUser, error::ApiResult, routes::AppState};

use super::input::Payload;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateUserPayload {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct TokenPayload {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateMePayload {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /user/create/
#[tracing::instrument(skip_all)]
pub async fn create(
    State(app): State<AppState>,
    Payload(payload): Payload<CreateUserPayload>,
) -> ApiResult<impl IntoResponse> {
    let user = app
        .user_command
        .register(RegisterInput {
            email: payload.email,
            password: payload.password,
            name: payload.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /user/token/
#[tracing::instrument(skip_all)]
pub async fn token(
    State(app): State<AppState>,
    Payload(payload): Payload<TokenPayload>,
) -> ApiResult<Json<TokenResponse>> {
    let token = app
        .user_command
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(Json(TokenResponse { token }))
}

/// GET /user/me/
pub async fn me(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}

/// PATCH /user/me/
#[tracing::instrument(skip_all)]
pub async fn update_me(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Payload(payload): Payload<UpdateMePayload>,
) -> ApiResult<Json<User>> {
    let user = app
        .user_command
        .update_profile(
            &user.id,
            UpdateProfileInput {
                name: payload.name,
                password: payload.password,
            },
        )
        .await?;

    Ok(Json(user))
}
