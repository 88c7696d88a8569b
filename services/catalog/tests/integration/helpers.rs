use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm_migration::MigratorTrait;

use bookstore_catalog::domain::repository::{AuthorRepository, BookRepository};
use bookstore_catalog::domain::types::{Author, Book};
use bookstore_catalog::infra::db::{
    DbAuthorRepository, DbBookRepository, DbCategoryRepository, DbPromotionRepository,
    DbReviewRepository,
};
use bookstore_catalog_migration::Migrator;
use bookstore_core::session::SessionFactory;

/// Fresh, fully migrated in-memory catalog. Each call gets its own database.
pub async fn test_sessions() -> SessionFactory {
    let sessions = SessionFactory::connect("sqlite::memory:").await.unwrap();
    Migrator::up(sessions.connection(), None).await.unwrap();
    sessions
}

pub fn authors(sessions: &SessionFactory) -> DbAuthorRepository {
    DbAuthorRepository {
        sessions: sessions.clone(),
    }
}

pub fn books(sessions: &SessionFactory) -> DbBookRepository {
    DbBookRepository {
        sessions: sessions.clone(),
    }
}

pub fn reviews(sessions: &SessionFactory) -> DbReviewRepository {
    DbReviewRepository {
        sessions: sessions.clone(),
    }
}

pub fn promotions(sessions: &SessionFactory) -> DbPromotionRepository {
    DbPromotionRepository {
        sessions: sessions.clone(),
    }
}

pub fn categories(sessions: &SessionFactory) -> DbCategoryRepository {
    DbCategoryRepository {
        sessions: sessions.clone(),
    }
}

pub fn test_book(title: &str) -> Book {
    Book::new(
        title,
        format!("About {title}"),
        NaiveDate::from_ymd_opt(2001, 9, 14).unwrap(),
        Decimal::new(1250, 2),
    )
}

pub async fn add_author(sessions: &SessionFactory, name: &str) -> i32 {
    authors(sessions).add(&Author::new(name)).await.unwrap()
}

pub async fn add_book(sessions: &SessionFactory, title: &str) -> i32 {
    books(sessions).add(&test_book(title)).await.unwrap()
}

/// Sorted ids of the loaded authors of a book.
pub fn author_ids(book: &Book) -> Vec<i32> {
    let mut ids: Vec<i32> = book
        .authors
        .as_slice()
        .expect("authors should be loaded")
        .iter()
        .map(|a| a.id)
        .collect();
    ids.sort_unstable();
    ids
}
