use recipebox_db::table::{Recipe as RecipeTable, RecipeIngredient, RecipeTag};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use crate::{
    Kind, Recipe,
    attribute::load_for_recipes,
    types::RecipeRow,
};

/// Filters for the recipe list, which is ordered newest first. A recipe matches a filter when it references
/// any of the listed ids; both filters must match when both are given.
#[derive(Debug, Default, Clone)]
pub struct RecipesQuery {
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
}

fn base_select() -> SelectStatement {
    Query::select()
        .columns([
            RecipeTable::Id,
            RecipeTable::Title,
            RecipeTable::TimeMinutes,
            RecipeTable::PriceCents,
            RecipeTable::Link,
        ])
        .from(RecipeTable::Table)
        .to_owned()
}

pub(crate) async fn list(
    pool: &SqlitePool,
    owner: &str,
    query: RecipesQuery,
) -> recipebox_shared::Result<Vec<Recipe>> {
    let mut statement = base_select()
        .and_where(Expr::col(RecipeTable::UserId).eq(owner))
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .to_owned();

    if !query.tags.is_empty() {
        statement.and_where(
            Expr::col(RecipeTable::Id).in_subquery(
                Query::select()
                    .column(RecipeTag::RecipeId)
                    .from(RecipeTag::Table)
                    .and_where(Expr::col(RecipeTag::TagId).is_in(query.tags))
                    .to_owned(),
            ),
        );
    }

    if !query.ingredients.is_empty() {
        statement.and_where(
            Expr::col(RecipeTable::Id).in_subquery(
                Query::select()
                    .column(RecipeIngredient::RecipeId)
                    .from(RecipeIngredient::Table)
                    .and_where(Expr::col(RecipeIngredient::IngredientId).is_in(query.ingredients))
                    .to_owned(),
            ),
        );
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    with_attributes(pool, rows).await
}

pub(crate) async fn find(
    pool: &SqlitePool,
    owner: &str,
    id: &str,
) -> recipebox_shared::Result<Option<Recipe>> {
    let statement = base_select()
        .and_where(Expr::col(RecipeTable::UserId).eq(owner))
        .and_where(Expr::col(RecipeTable::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let Some(row) = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };

    Ok(with_attributes(pool, vec![row]).await?.pop())
}

async fn with_attributes(
    pool: &SqlitePool,
    rows: Vec<RecipeRow>,
) -> recipebox_shared::Result<Vec<Recipe>> {
    let ids = rows.iter().map(|r| r.id.to_owned()).collect::<Vec<_>>();
    let mut ingredients = load_for_recipes(pool, Kind::Ingredient, &ids).await?;
    let mut tags = load_for_recipes(pool, Kind::Tag, &ids).await?;

    rows.into_iter()
        .map(|row| {
            let ingredients = ingredients.remove(&row.id).unwrap_or_default();
            let tags = tags.remove(&row.id).unwrap_or_default();

            Recipe::from_row(row, ingredients, tags)
        })
        .collect()
}
