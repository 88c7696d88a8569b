use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookAuthor::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BookAuthor::BookId).integer().not_null())
                    .col(ColumnDef::new(BookAuthor::AuthorId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(BookAuthor::BookId)
                            .col(BookAuthor::AuthorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookAuthor::Table, BookAuthor::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookAuthor::Table, BookAuthor::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookAuthor::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BookAuthor {
    Table,
    BookId,
    AuthorId,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
}
