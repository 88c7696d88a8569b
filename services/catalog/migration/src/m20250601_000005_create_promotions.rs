use sea_orm_migration::prelude::*;

use crate::decimal_column;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promotions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Promotions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Promotions::Name).string().not_null())
                    .col(decimal_column(manager, Promotions::Percent, 5, 2).null())
                    .col(decimal_column(manager, Promotions::Amount, 18, 2).null())
                    .col(ColumnDef::new(Promotions::BookId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Promotions::Table, Promotions::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Promotions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Promotions {
    Table,
    Id,
    Name,
    Percent,
    Amount,
    BookId,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}
