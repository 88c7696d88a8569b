use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(BookAuthor::Table)
                    .col(BookAuthor::AuthorId)
                    .name("idx_book_author_author_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(BookCategory::Table)
                    .col(BookCategory::CategoryId)
                    .name("idx_book_category_category_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Reviews::Table)
                    .col(Reviews::BookId)
                    .name("idx_reviews_book_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Promotions::Table)
                    .col(Promotions::BookId)
                    .name("idx_promotions_book_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_promotions_book_id",
            "idx_reviews_book_id",
            "idx_book_category_category_id",
            "idx_book_author_author_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum BookAuthor {
    Table,
    AuthorId,
}

#[derive(Iden)]
enum BookCategory {
    Table,
    CategoryId,
}

#[derive(Iden)]
enum Reviews {
    Table,
    BookId,
}

#[derive(Iden)]
enum Promotions {
    Table,
    BookId,
}
