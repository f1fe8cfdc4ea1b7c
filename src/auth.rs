use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use recipebox_shared::Error;

use crate::{error::ApiError, routes::AppState};

const SCHEMES: [&str; 2] = ["Token", "Bearer"];

/// The authenticated, active user making the request.
pub struct AuthUser(pub recipebox_user::User);

/// Extracts the credential from an `Authorization: Token <jwt>` or
/// `Authorization: Bearer <jwt>` header value.
fn credential(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
        return None;
    }

    let token = token.trim();
    if token.is_empty() || token.contains(' ') {
        return None;
    }

    Some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(credential)
            .ok_or(Error::Unauthorized)?;

        let user = state.user_command.authenticate(token).await?;

        Ok(AuthUser(user))
    }
}
