use std::{path::PathBuf, str::FromStr};

use recipebox_recipe::{CreateAttributeInput, Price, RecipeInput};
use recipebox_user::{RegisterInput, TokenConfig};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<recipebox_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    recipebox_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(recipebox_shared::State::single(pool))
}

pub async fn create_user(
    state: &recipebox_shared::State,
    name: impl Into<String>,
) -> anyhow::Result<String> {
    let cmd = recipebox_user::Command::new(
        state.clone(),
        TokenConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            issuer: "recipebox".to_owned(),
            audience: "recipebox-api".to_owned(),
            expiration_days: 1,
        },
    );

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

#[allow(dead_code)]
pub fn name(value: &str) -> CreateAttributeInput {
    CreateAttributeInput {
        name: value.to_owned(),
    }
}

#[allow(dead_code)]
pub fn recipe(title: &str, ingredients: Vec<String>, tags: Vec<String>) -> RecipeInput {
    RecipeInput {
        title: title.to_owned(),
        time_minutes: 10,
        price: Price::from_cents(500).unwrap(),
        link: String::new(),
        ingredients,
        tags,
    }
}
