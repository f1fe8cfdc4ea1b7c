//! Handlers shared by the ingredient and tag endpoints.

use axum::{Json, http::StatusCode, response::IntoResponse};
use recipebox_recipe::{Attribute, Catalog, CreateAttributeInput};
use serde::Deserialize;

use crate::error::ApiResult;

use super::input::int_flag;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    pub assigned_only: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreatePayload {
    pub name: String,
}

pub(crate) async fn list(
    catalog: Catalog<'_>,
    owner: &str,
    params: ListParams,
) -> ApiResult<Json<Vec<Attribute>>> {
    let assigned_only = int_flag("assigned_only", params.assigned_only.as_deref())?;

    Ok(Json(catalog.list(owner, assigned_only).await?))
}

pub(crate) async fn create(
    catalog: Catalog<'_>,
    owner: &str,
    payload: CreatePayload,
) -> ApiResult<impl IntoResponse + use<>> {
    let attribute = catalog
        .create(owner, CreateAttributeInput { name: payload.name })
        .await?;

    Ok((StatusCode::CREATED, Json(attribute)))
}
