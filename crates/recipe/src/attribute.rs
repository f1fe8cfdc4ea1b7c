//! Ingredients and tags: named labels owned by a user that recipes refer to
//! through a join table.

use std::collections::{HashMap, HashSet};

use recipebox_db::table::Recipe;
use sea_query::{Alias, Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Ingredient,
    Tag,
}

impl Kind {
    /// Field name used for this kind in recipe payloads and error bodies.
    pub fn field(self) -> &'static str {
        match self {
            Kind::Ingredient => "ingredients",
            Kind::Tag => "tags",
        }
    }

    fn table(self) -> Alias {
        match self {
            Kind::Ingredient => Alias::new("ingredient"),
            Kind::Tag => Alias::new("tag"),
        }
    }

    fn join_table(self) -> Alias {
        match self {
            Kind::Ingredient => Alias::new("recipe_ingredient"),
            Kind::Tag => Alias::new("recipe_tag"),
        }
    }

    fn join_column(self) -> Alias {
        match self {
            Kind::Ingredient => Alias::new("ingredient_id"),
            Kind::Tag => Alias::new("tag_id"),
        }
    }
}

fn col_id() -> Alias {
    Alias::new("id")
}

fn col_user_id() -> Alias {
    Alias::new("user_id")
}

fn col_name() -> Alias {
    Alias::new("name")
}

fn col_created_at() -> Alias {
    Alias::new("created_at")
}

fn col_recipe_id() -> Alias {
    Alias::new("recipe_id")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Attribute {
    pub id: String,
    pub name: String,
}

#[derive(Validate)]
pub struct CreateAttributeInput {
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub name: String,
}

/// Owner-scoped access to one kind of attribute.
pub struct Catalog<'a> {
    pub(crate) kind: Kind,
    pub(crate) state: &'a recipebox_shared::State,
}

impl Catalog<'_> {
    /// Lists the owner's attributes by name, descending. With `assigned_only`
    /// the list is narrowed to attributes referenced by at least one of the
    /// owner's recipes, each returned once.
    pub async fn list(
        &self,
        owner: impl Into<String>,
        assigned_only: bool,
    ) -> recipebox_shared::Result<Vec<Attribute>> {
        let owner = owner.into();
        let table = self.kind.table();
        let mut statement = Query::select()
            .column((table.clone(), col_id()))
            .column((table.clone(), col_name()))
            .from(table.clone())
            .and_where(Expr::col((table.clone(), col_user_id())).eq(owner.to_owned()))
            .order_by((table.clone(), col_name()), Order::Desc)
            .order_by((table.clone(), col_id()), Order::Desc)
            .to_owned();

        if assigned_only {
            let join = self.kind.join_table();
            statement
                .distinct()
                .inner_join(
                    join.clone(),
                    Expr::col((join.clone(), self.kind.join_column()))
                        .equals((table.clone(), col_id())),
                )
                .inner_join(
                    Recipe::Table,
                    Expr::col((Recipe::Table, Recipe::Id)).equals((join, col_recipe_id())),
                )
                .and_where(Expr::col((Recipe::Table, Recipe::UserId)).eq(owner));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Attribute, _>(&sql, values)
            .fetch_all(&self.state.read_db)
            .await?)
    }

    pub async fn create(
        &self,
        owner: impl Into<String>,
        input: CreateAttributeInput,
    ) -> recipebox_shared::Result<Attribute> {
        let input = CreateAttributeInput {
            name: input.name.trim().to_owned(),
        };

        if input.name.is_empty() {
            recipebox_shared::field!("name", "This field may not be blank.");
        }

        input.validate()?;

        let owner = owner.into();
        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(self.kind.table())
            .columns([col_id(), col_user_id(), col_name(), col_created_at()])
            .values_panic([
                id.to_owned().into(),
                owner.to_owned().into(),
                input.name.to_owned().into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.state.write_db)
            .await?;

        tracing::info!(owner = %owner, kind = ?self.kind, id = %id, "attribute created");

        Ok(Attribute {
            id,
            name: input.name,
        })
    }

    pub async fn exists(
        &self,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> recipebox_shared::Result<bool> {
        let statement = Query::select()
            .column(col_id())
            .from(self.kind.table())
            .and_where(Expr::col(col_user_id()).eq(owner.into()))
            .and_where(Expr::col(col_name()).eq(name.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.state.read_db)
            .await?;

        Ok(row.is_some())
    }
}

/// Returns the subset of `ids` owned by `owner`.
pub(crate) async fn owned_ids(
    pool: &SqlitePool,
    kind: Kind,
    owner: &str,
    ids: &[String],
) -> recipebox_shared::Result<HashSet<String>> {
    if ids.is_empty() {
        return Ok(HashSet::new());
    }

    let statement = Query::select()
        .column(col_id())
        .from(kind.table())
        .and_where(Expr::col(col_user_id()).eq(owner))
        .and_where(Expr::col(col_id()).is_in(ids.iter().cloned()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}

/// Rejects any id not owned by `owner`, naming the first offender.
pub(crate) async fn ensure_owned(
    pool: &SqlitePool,
    kind: Kind,
    owner: &str,
    ids: &[String],
) -> recipebox_shared::Result<()> {
    let owned = owned_ids(pool, kind, owner, ids).await?;

    if let Some(missing) = ids.iter().find(|id| !owned.contains(*id)) {
        return Err(recipebox_shared::Error::field(
            kind.field(),
            format!("Invalid pk \"{missing}\" - object does not exist."),
        ));
    }

    Ok(())
}

/// Loads the attributes attached to each recipe, sorted by name.
pub(crate) async fn load_for_recipes(
    pool: &SqlitePool,
    kind: Kind,
    recipe_ids: &[String],
) -> recipebox_shared::Result<HashMap<String, Vec<Attribute>>> {
    if recipe_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let table = kind.table();
    let join = kind.join_table();
    let statement = Query::select()
        .column((join.clone(), col_recipe_id()))
        .column((table.clone(), col_id()))
        .column((table.clone(), col_name()))
        .from(join.clone())
        .inner_join(
            table.clone(),
            Expr::col((table.clone(), col_id())).equals((join.clone(), kind.join_column())),
        )
        .and_where(Expr::col((join, col_recipe_id())).is_in(recipe_ids.iter().cloned()))
        .order_by((table.clone(), col_name()), Order::Asc)
        .order_by((table, col_id()), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, (String, String, String), _>(&sql, values)
        .fetch_all(pool)
        .await?;

    let mut attributes: HashMap<String, Vec<Attribute>> = HashMap::new();
    for (recipe_id, id, name) in rows {
        attributes
            .entry(recipe_id)
            .or_default()
            .push(Attribute { id, name });
    }

    Ok(attributes)
}
