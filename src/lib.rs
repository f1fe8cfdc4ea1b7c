pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use routes::{AppState, router};

/// Builds the application state over a single pool, used by tests and CLI
/// commands that do not need the read/write split.
pub fn single_pool_state(config: config::Config, pool: sqlx::SqlitePool) -> AppState {
    let state = recipebox_shared::State::single(pool.clone());

    AppState {
        user_command: recipebox_user::Command::new(state.clone(), config.jwt.clone()),
        recipe_command: recipebox_recipe::Command::new(state),
        config,
        pool,
    }
}
