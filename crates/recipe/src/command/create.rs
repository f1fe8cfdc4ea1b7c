use recipebox_db::table::Recipe as RecipeTable;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{Kind, Recipe, attribute::ensure_owned};

use super::{RecipeInput, dedup, replace_links};

impl super::Command {
    pub async fn create(
        &self,
        owner: impl Into<String>,
        input: RecipeInput,
    ) -> recipebox_shared::Result<Recipe> {
        let input = RecipeInput {
            title: input.title.trim().to_owned(),
            ingredients: dedup(input.ingredients),
            tags: dedup(input.tags),
            ..input
        };

        input.validate()?;

        let owner = owner.into();
        ensure_owned(&self.read_db, Kind::Ingredient, &owner, &input.ingredients).await?;
        ensure_owned(&self.read_db, Kind::Tag, &owner, &input.tags).await?;

        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(RecipeTable::Table)
            .columns([
                RecipeTable::Id,
                RecipeTable::UserId,
                RecipeTable::Title,
                RecipeTable::TimeMinutes,
                RecipeTable::PriceCents,
                RecipeTable::Link,
                RecipeTable::CreatedAt,
                RecipeTable::UpdatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                owner.to_owned().into(),
                input.title.to_owned().into(),
                input.time_minutes.into(),
                input.price.cents().into(),
                input.link.to_owned().into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let mut tx = self.write_db.begin().await?;
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        replace_links(&mut tx, Kind::Ingredient, &id, &input.ingredients).await?;
        replace_links(&mut tx, Kind::Tag, &id, &input.tags).await?;
        tx.commit().await?;

        tracing::info!(owner = %owner, recipe_id = %id, "recipe created");

        self.find(&owner, &id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("recipe {id} missing after insert").into())
    }
}
