use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookCategory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BookCategory::BookId).integer().not_null())
                    .col(ColumnDef::new(BookCategory::CategoryId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(BookCategory::BookId)
                            .col(BookCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookCategory::Table, BookCategory::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookCategory::Table, BookCategory::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookCategory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BookCategory {
    Table,
    BookId,
    CategoryId,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
}
