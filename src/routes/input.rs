//! Request decoding shared by the JSON API handlers.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use axum_extra::extract::{Form, Query};
use recipebox_shared::Error;
use serde::de::DeserializeOwned;
use validator::{ValidationError, ValidationErrors};

use crate::error::ApiError;

/// A request body sent either as JSON or as an urlencoded form. Forms may
/// repeat a key to send a list.
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Malformed(e.to_string()))?;

            return Ok(Payload(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Malformed(e.body_text()))?;

        Ok(Payload(value))
    }
}

/// Query string parameters; keys may repeat.
pub struct Params<T>(pub T);

impl<T, S> FromRequestParts<S> for Params<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        Ok(Params(value))
    }
}

/// Collects "This field is required." errors for missing body fields.
pub struct Required(ValidationErrors);

impl Default for Required {
    fn default() -> Self {
        Self(ValidationErrors::new())
    }
}

impl Required {
    pub fn take<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            let mut error = ValidationError::new("required");
            error.message = Some("This field is required.".into());
            self.0.add(field, error);
        }

        value
    }

    pub fn finish(self) -> Result<(), Error> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(Error::Validate(self.0))
        }
    }
}

/// Splits comma separated ids; `?tags=a,b&tags=c` yields `[a, b, c]`.
pub fn split_ids(values: Vec<String>) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses an integer flag such as `assigned_only=1`.
pub fn int_flag(field: &'static str, value: Option<&str>) -> Result<bool, Error> {
    let Some(value) = value else {
        return Ok(false);
    };

    value
        .trim()
        .parse::<i64>()
        .map(|v| v != 0)
        .map_err(|_| Error::field(field, "A valid integer is required."))
}
