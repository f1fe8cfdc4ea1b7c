use recipebox_db::table::Recipe as RecipeTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::Kind;

use super::replace_links;

impl super::Command {
    /// Deletes the recipe and its ingredient/tag links. Another user's recipe
    /// is reported as not found.
    pub async fn delete(
        &self,
        owner: impl Into<String>,
        id: impl Into<String>,
    ) -> recipebox_shared::Result<()> {
        let owner = owner.into();
        let id = id.into();

        let mut tx = self.write_db.begin().await?;
        replace_links(&mut tx, Kind::Ingredient, &id, &[]).await?;
        replace_links(&mut tx, Kind::Tag, &id, &[]).await?;

        let statement = Query::delete()
            .from_table(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(id.to_owned()))
            .and_where(Expr::col(RecipeTable::UserId).eq(owner.to_owned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            recipebox_shared::not_found!("recipe {id}");
        }

        tx.commit().await?;

        tracing::info!(owner = %owner, recipe_id = %id, "recipe deleted");

        Ok(())
    }
}
