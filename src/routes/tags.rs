use axum::{Json, extract::State, response::IntoResponse};
use recipebox_recipe::Attribute;

use crate::{auth::AuthUser, error::ApiResult, routes::AppState};

use super::{
    attributes::{self, CreatePayload, ListParams},
    input::{Params, Payload},
};

/// GET /recipe/tags/
pub async fn list(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Params(params): Params<ListParams>,
) -> ApiResult<Json<Vec<Attribute>>> {
    attributes::list(app.recipe_command.tags(), &user.id, params).await
}

/// POST /recipe/tags/
#[tracing::instrument(skip_all)]
pub async fn create(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Payload(payload): Payload<CreatePayload>,
) -> ApiResult<impl IntoResponse> {
    attributes::create(app.recipe_command.tags(), &user.id, payload).await
}
