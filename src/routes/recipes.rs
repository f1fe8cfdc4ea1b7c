use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use recipebox_recipe::{Price, Recipe, RecipeInput, RecipesQuery, UpdateRecipeInput};
use serde::{Deserialize, Serialize};

use crate::{auth::AuthUser, error::ApiResult, routes::AppState};

use super::input::{Params, Payload, Required, split_ids};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RecipePayload {
    pub title: Option<String>,
    pub time_minutes: Option<i64>,
    pub price: Option<Price>,
    pub link: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl RecipePayload {
    /// Full representation for create and replace; missing required fields
    /// are reported together.
    fn into_input(self) -> recipebox_shared::Result<RecipeInput> {
        let mut required = Required::default();
        let title = required.take("title", self.title);
        let time_minutes = required.take("time_minutes", self.time_minutes);
        let price = required.take("price", self.price);
        required.finish()?;

        match (title, time_minutes, price) {
            (Some(title), Some(time_minutes), Some(price)) => Ok(RecipeInput {
                title,
                time_minutes,
                price,
                link: self.link.unwrap_or_default(),
                ingredients: self.ingredients.unwrap_or_default(),
                tags: self.tags.unwrap_or_default(),
            }),
            _ => Err(anyhow::anyhow!("required recipe fields vanished").into()),
        }
    }
}

impl From<RecipePayload> for UpdateRecipeInput {
    fn from(value: RecipePayload) -> Self {
        Self {
            title: value.title,
            time_minutes: value.time_minutes,
            price: value.price,
            link: value.link,
            ingredients: value.ingredients,
            tags: value.tags,
        }
    }
}

/// List representation: related ingredients and tags as ids.
#[derive(Serialize, Debug)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub tags: Vec<String>,
    pub time_minutes: i64,
    pub price: Price,
    pub link: String,
}

impl From<Recipe> for RecipeSummary {
    fn from(value: Recipe) -> Self {
        Self {
            ingredients: value.ingredient_ids(),
            tags: value.tag_ids(),
            id: value.id,
            title: value.title,
            time_minutes: value.time_minutes,
            price: value.price,
            link: value.link,
        }
    }
}

/// GET /recipe/recipes/
pub async fn list(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Params(params): Params<ListParams>,
) -> ApiResult<Json<Vec<RecipeSummary>>> {
    let recipes = app
        .recipe_command
        .list(
            &user.id,
            RecipesQuery {
                tags: split_ids(params.tags),
                ingredients: split_ids(params.ingredients),
            },
        )
        .await?;

    Ok(Json(recipes.into_iter().map(RecipeSummary::from).collect()))
}

/// POST /recipe/recipes/
#[tracing::instrument(skip_all)]
pub async fn create(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Payload(payload): Payload<RecipePayload>,
) -> ApiResult<impl IntoResponse> {
    let recipe = app
        .recipe_command
        .create(&user.id, payload.into_input()?)
        .await?;

    Ok((StatusCode::CREATED, Json(RecipeSummary::from(recipe))))
}

/// GET /recipe/recipes/{id}/
pub async fn detail(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Recipe>> {
    let Some(recipe) = app.recipe_command.find(&user.id, &id).await? else {
        return Err(recipebox_shared::Error::NotFound(format!("recipe {id}")).into());
    };

    Ok(Json(recipe))
}

/// PUT /recipe/recipes/{id}/
#[tracing::instrument(skip_all)]
pub async fn replace(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Payload(payload): Payload<RecipePayload>,
) -> ApiResult<Json<RecipeSummary>> {
    let input = payload.into_input()?;
    let recipe = app
        .recipe_command
        .update(&user.id, id, UpdateRecipeInput::from(input))
        .await?;

    Ok(Json(recipe.into()))
}

/// PATCH /recipe/recipes/{id}/
#[tracing::instrument(skip_all)]
pub async fn update(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Payload(payload): Payload<RecipePayload>,
) -> ApiResult<Json<RecipeSummary>> {
    let recipe = app
        .recipe_command
        .update(&user.id, id, payload.into())
        .await?;

    Ok(Json(recipe.into()))
}

/// DELETE /recipe/recipes/{id}/
#[tracing::instrument(skip_all)]
pub async fn delete(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    app.recipe_command.delete(&user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
