use std::{path::PathBuf, str::FromStr};

use recipebox_user::{RegisterInput, TokenConfig};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<recipebox_user::Command> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    recipebox_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(recipebox_user::Command::new(
        recipebox_shared::State::single(pool),
        token_config(),
    ))
}

pub fn token_config() -> TokenConfig {
    TokenConfig {
        secret: "test_secret_key_minimum_32_characters_long".to_owned(),
        issuer: "recipebox".to_owned(),
        audience: "recipebox-api".to_owned(),
        expiration_days: 1,
    }
}

#[allow(dead_code)]
pub async fn create_user(
    cmd: &recipebox_user::Command,
    name: impl Into<String>,
) -> anyhow::Result<String> {
    let name = name.into();
    let user = cmd
        .register(RegisterInput {
            email: format!("{name}@recipebox.localhost"),
            password: "my_password".to_owned(),
            name,
        })
        .await?;

    Ok(user.id)
}
