use clap::ValueEnum;
use recipebox::config::Config;
use recipebox_user::RegisterInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AccountState {
    Active,
    Suspended,
}

fn command(config: &Config, pool: sqlx::SqlitePool) -> recipebox_user::Command {
    recipebox_user::Command::new(recipebox_shared::State::single(pool), config.jwt.clone())
}

#[tracing::instrument(skip(config, password))]
pub async fn create(
    config: Config,
    email: String,
    password: String,
    name: String,
) -> anyhow::Result<()> {
    let pool = recipebox::db::create_pool(&config.database.url, 1).await?;
    let command = command(&config, pool.clone());

    let result = command
        .register(RegisterInput {
            email,
            password,
            name,
        })
        .await;
    pool.close().await;

    let user = result?;
    tracing::info!("user {} created", user.email);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn set_state(config: Config, email: String, state: AccountState) -> anyhow::Result<()> {
    let pool = recipebox::db::create_pool(&config.database.url, 1).await?;
    let command = command(&config, pool.clone());

    let Some(user) = command.find_by_email(&email).await? else {
        tracing::error!("user {email} not found");
        pool.close().await;
        return Ok(());
    };

    match state {
        AccountState::Active => command.activate(user.id).await?,
        AccountState::Suspended => command.suspend(user.id).await?,
    }
    pool.close().await;

    tracing::info!("{email} is now {state:?}");

    Ok(())
}
