use sqlx_migrator::vec_box;

/// Implements `sqlx_migrator::Operation` for a unit struct by running the
/// SQL produced by a pair of sea-query statement builders.
macro_rules! operation {
    ($name:ident, $up:ident, $down:ident) => {
        pub struct $name;

        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $name {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

pub(crate) use operation;

mod ingredient;
mod recipe;
mod recipe_ingredient;
mod recipe_tag;
mod tag;
mod user;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "recipebox",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        ingredient::CreateTable,
        ingredient::CreateIdx1,
        tag::CreateTable,
        tag::CreateIdx1,
        recipe::CreateTable,
        recipe::CreateIdx1,
        recipe_ingredient::CreateTable,
        recipe_ingredient::CreateIdx1,
        recipe_tag::CreateTable,
        recipe_tag::CreateIdx1
    ]
);
