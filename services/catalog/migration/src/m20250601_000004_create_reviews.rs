use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::UserName).string().not_null())
                    .col(ColumnDef::new(Reviews::UserEmail).string().not_null())
                    .col(
                        ColumnDef::new(Reviews::Comment)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Reviews::Stars).small_integer().not_null())
                    .col(ColumnDef::new(Reviews::BookId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    UserName,
    UserEmail,
    Comment,
    Stars,
    BookId,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}
