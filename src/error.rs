use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use recipebox_shared::Error;
use serde_json::{Map, Value, json};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] Error),

    /// The request could not be decoded (bad body, bad query string).
    #[error("{0}")]
    Malformed(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Domain(Error::Unknown(err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": message.into() }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(Error::Validate(errors)) => {
                let body = Error::field_messages(&errors)
                    .into_iter()
                    .map(|(field, messages)| (field, Value::from(messages)))
                    .collect::<Map<_, _>>();

                (StatusCode::BAD_REQUEST, Json(Value::Object(body))).into_response()
            }
            ApiError::Domain(Error::Unauthorized) => {
                let mut response = detail(
                    StatusCode::UNAUTHORIZED,
                    "Authentication credentials were not provided or are invalid.",
                );
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Token"));
                response
            }
            ApiError::Domain(Error::NotFound(what)) => {
                tracing::debug!(%what, "not found");
                detail(StatusCode::NOT_FOUND, "Not found.")
            }
            ApiError::Domain(Error::Unknown(e)) => {
                tracing::error!("internal error: {e:?}");
                detail(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.",
                )
            }
            ApiError::Malformed(msg) => detail(StatusCode::BAD_REQUEST, msg),
        }
    }
}
