use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::error::ApiError;

mod attributes;
mod health;
mod ingredients;
mod input;
mod recipes;
mod tags;
mod user;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: recipebox_user::Command,
    pub recipe_command: recipebox_recipe::Command,
    pub pool: SqlitePool,
}

pub async fn fallback() -> ApiError {
    recipebox_shared::Error::NotFound("route".to_owned()).into()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/user/create/", post(user::create))
        .route("/user/token/", post(user::token))
        .route("/user/me/", get(user::me).patch(user::update_me))
        .route(
            "/recipe/ingredients/",
            get(ingredients::list).post(ingredients::create),
        )
        .route("/recipe/tags/", get(tags::list).post(tags::create))
        .route(
            "/recipe/recipes/",
            get(recipes::list).post(recipes::create),
        )
        .route(
            "/recipe/recipes/{id}/",
            get(recipes::detail)
                .put(recipes::replace)
                .patch(recipes::update)
                .delete(recipes::delete),
        )
        .fallback(fallback)
        .with_state(app_state)
}
