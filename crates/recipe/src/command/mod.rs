use std::ops::Deref;

use recipebox_db::table::{RecipeIngredient, RecipeTag};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqliteConnection;
use validator::Validate;

use crate::{Catalog, Kind, Price, Recipe, RecipesQuery};

mod create;
mod delete;
mod update;

pub use update::UpdateRecipeInput;

#[derive(Clone)]
pub struct Command {
    state: recipebox_shared::State,
}

impl Deref for Command {
    type Target = recipebox_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: recipebox_shared::State) -> Self {
        Self { state }
    }

    pub fn ingredients(&self) -> Catalog<'_> {
        Catalog {
            kind: Kind::Ingredient,
            state: &self.state,
        }
    }

    pub fn tags(&self) -> Catalog<'_> {
        Catalog {
            kind: Kind::Tag,
            state: &self.state,
        }
    }

    pub async fn list(
        &self,
        owner: impl AsRef<str>,
        query: RecipesQuery,
    ) -> recipebox_shared::Result<Vec<Recipe>> {
        crate::query::list(&self.read_db, owner.as_ref(), query).await
    }

    /// Returns the recipe only when it belongs to `owner`.
    pub async fn find(
        &self,
        owner: impl AsRef<str>,
        id: impl AsRef<str>,
    ) -> recipebox_shared::Result<Option<Recipe>> {
        crate::query::find(&self.read_db, owner.as_ref(), id.as_ref()).await
    }
}

#[derive(Validate, Clone, Debug)]
pub struct RecipeInput {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Ensure this field has between 1 and 255 characters."
    ))]
    pub title: String,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub time_minutes: i64,
    pub price: Price,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub link: String,
    pub ingredients: Vec<String>,
    pub tags: Vec<String>,
}

fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.to_owned())).collect()
}

/// Replaces the set of `kind` attributes linked to a recipe.
async fn replace_links(
    conn: &mut SqliteConnection,
    kind: Kind,
    recipe_id: &str,
    ids: &[String],
) -> recipebox_shared::Result<()> {
    let (delete_sql, delete_values) = match kind {
        Kind::Ingredient => Query::delete()
            .from_table(RecipeIngredient::Table)
            .and_where(Expr::col(RecipeIngredient::RecipeId).eq(recipe_id))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder),
        Kind::Tag => Query::delete()
            .from_table(RecipeTag::Table)
            .and_where(Expr::col(RecipeTag::RecipeId).eq(recipe_id))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder),
    };

    sqlx::query_with(&delete_sql, delete_values)
        .execute(&mut *conn)
        .await?;

    if ids.is_empty() {
        return Ok(());
    }

    let mut statement = match kind {
        Kind::Ingredient => Query::insert()
            .into_table(RecipeIngredient::Table)
            .columns([RecipeIngredient::RecipeId, RecipeIngredient::IngredientId])
            .to_owned(),
        Kind::Tag => Query::insert()
            .into_table(RecipeTag::Table)
            .columns([RecipeTag::RecipeId, RecipeTag::TagId])
            .to_owned(),
    };

    for id in ids {
        statement.values_panic([recipe_id.into(), id.as_str().into()]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}
