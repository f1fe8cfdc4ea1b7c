use recipebox_db::table::User;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use crate::State;

#[derive(FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub state: sqlx::types::Text<State>,
}

impl From<UserRow> for crate::User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
            state: row.state.0,
        }
    }
}

pub enum FindType {
    Id(String),
    Email(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> recipebox_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([User::Id, User::Email, User::Password, User::Name, User::State])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::cust_with_values(
            r#""email" = ? COLLATE NOCASE"#,
            [email],
        )),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) struct CreateInput {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

pub(crate) async fn create(pool: &SqlitePool, input: CreateInput) -> sqlx::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Id,
            User::Email,
            User::Password,
            User::Name,
            User::State,
            User::CreatedAt,
        ])
        .values_panic([
            input.id.into(),
            input.email.into(),
            input.password.into(),
            input.name.into(),
            State::Active.to_string().into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) struct UpdateInput {
    pub id: String,
    pub name: Option<String>,
    pub password: Option<String>,
    pub state: Option<State>,
}

pub(crate) async fn update(pool: &SqlitePool, input: UpdateInput) -> recipebox_shared::Result<()> {
    if input.name.is_none() && input.password.is_none() && input.state.is_none() {
        return Ok(());
    }

    let mut statement = Query::update()
        .table(User::Table)
        .and_where(Expr::col(User::Id).eq(input.id))
        .to_owned();

    if let Some(name) = input.name {
        statement.value(User::Name, name);
    }

    if let Some(password) = input.password {
        statement.value(User::Password, password);
    }

    if let Some(state) = input.state {
        statement.value(User::State, state.as_ref());
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
