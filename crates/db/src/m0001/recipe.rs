use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Recipe, User};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Recipe::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Recipe::Title)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(Recipe::TimeMinutes).integer().not_null())
        .col(ColumnDef::new(Recipe::PriceCents).big_integer().not_null())
        .col(
            ColumnDef::new(Recipe::Link)
                .string()
                .not_null()
                .string_len(255)
                .default(""),
        )
        .col(ColumnDef::new(Recipe::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Recipe::UpdatedAt).big_integer())
        .foreign_key(
            ForeignKey::create()
                .from(Recipe::Table, Recipe::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Recipe::Table).to_owned()
}

super::operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_Tz3kBa")
        .table(Recipe::Table)
        .col(Recipe::UserId)
        .col(Recipe::Id)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_Tz3kBa")
        .table(Recipe::Table)
        .to_owned()
}

super::operation!(CreateIdx1, create_idx_1, drop_idx_1);
