use recipebox_db::table::Recipe as RecipeTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use validator::Validate;

use crate::{Kind, Price, Recipe, attribute::ensure_owned};

use super::{RecipeInput, dedup, replace_links};

/// Partial recipe update. `None` leaves a field untouched; a provided
/// ingredient or tag list replaces the current set.
#[derive(Validate, Clone, Debug, Default)]
pub struct UpdateRecipeInput {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Ensure this field has between 1 and 255 characters."
    ))]
    pub title: Option<String>,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub time_minutes: Option<i64>,
    pub price: Option<Price>,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub link: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl From<RecipeInput> for UpdateRecipeInput {
    fn from(value: RecipeInput) -> Self {
        Self {
            title: Some(value.title),
            time_minutes: Some(value.time_minutes),
            price: Some(value.price),
            link: Some(value.link),
            ingredients: Some(value.ingredients),
            tags: Some(value.tags),
        }
    }
}

impl super::Command {
    pub async fn update(
        &self,
        owner: impl Into<String>,
        id: impl Into<String>,
        input: UpdateRecipeInput,
    ) -> recipebox_shared::Result<Recipe> {
        let input = UpdateRecipeInput {
            title: input.title.map(|t| t.trim().to_owned()),
            ingredients: input.ingredients.map(dedup),
            tags: input.tags.map(dedup),
            ..input
        };

        input.validate()?;

        let owner = owner.into();
        let id = id.into();

        if self.find(&owner, &id).await?.is_none() {
            recipebox_shared::not_found!("recipe {id}");
        }

        if let Some(ids) = input.ingredients.as_ref() {
            ensure_owned(&self.read_db, Kind::Ingredient, &owner, ids).await?;
        }

        if let Some(ids) = input.tags.as_ref() {
            ensure_owned(&self.read_db, Kind::Tag, &owner, ids).await?;
        }

        let mut statement = Query::update()
            .table(RecipeTable::Table)
            .value(
                RecipeTable::UpdatedAt,
                OffsetDateTime::now_utc().unix_timestamp(),
            )
            .and_where(Expr::col(RecipeTable::Id).eq(id.to_owned()))
            .and_where(Expr::col(RecipeTable::UserId).eq(owner.to_owned()))
            .to_owned();

        if let Some(title) = input.title {
            statement.value(RecipeTable::Title, title);
        }

        if let Some(time_minutes) = input.time_minutes {
            statement.value(RecipeTable::TimeMinutes, time_minutes);
        }

        if let Some(price) = input.price {
            statement.value(RecipeTable::PriceCents, price.cents());
        }

        if let Some(link) = input.link {
            statement.value(RecipeTable::Link, link);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let mut tx = self.write_db.begin().await?;
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if let Some(ids) = input.ingredients.as_ref() {
            replace_links(&mut tx, Kind::Ingredient, &id, ids).await?;
        }

        if let Some(ids) = input.tags.as_ref() {
            replace_links(&mut tx, Kind::Tag, &id, ids).await?;
        }

        tx.commit().await?;

        tracing::info!(owner = %owner, recipe_id = %id, "recipe updated");

        self.find(&owner, &id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("recipe {id} missing after update").into())
    }
}
