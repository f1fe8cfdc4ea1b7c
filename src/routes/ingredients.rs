use axum::{Json, extract::State, response::IntoResponse};
use recipebox_recipe::Attribute;

use crate::{auth::AuthUser, error::ApiResult, routes::AppState};

use super::{
    attributes::{self, CreatePayload, ListParams},
    input::{Params, Payload},
};

/// GET /recipe/ingredients/
pub async fn list(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Params(params): Params<ListParams>,
) -> ApiResult<Json<Vec<Attribute>>> {
    attributes::list(app.recipe_command.ingredients(), &user.id, params).await
}

/// POST /recipe/ingredients/
#[tracing::instrument(skip_all)]
pub async fn create(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Payload(payload): Payload<CreatePayload>,
) -> ApiResult<impl IntoResponse> {
    attributes::create(app.recipe_command.ingredients(), &user.id, payload).await
}
