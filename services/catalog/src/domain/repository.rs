#![allow(async_fn_in_trait)]

use bookstore_domain::include::BookInclude;

use crate::domain::types::{Author, Book, Category, Promotion, Review};
use crate::error::CatalogError;

// Every method runs in its own session. Lookups return `None` for unknown ids;
// `edit`/`update`/`delete` return `false` when the row does not exist.
// Name searches are case-sensitive substring matches in unspecified order.

/// Repository for authors.
pub trait AuthorRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Author>, CatalogError>;
    async fn get(&self, id: i32) -> Result<Option<Author>, CatalogError>;
    async fn get_with_books(&self, id: i32) -> Result<Option<Author>, CatalogError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Author>, CatalogError>;

    /// Insert an author. Returns the id assigned by storage.
    async fn add(&self, author: &Author) -> Result<i32, CatalogError>;
    async fn edit(&self, author: &Author) -> Result<bool, CatalogError>;
    async fn delete(&self, author: &Author) -> Result<bool, CatalogError>;
}

/// Repository for books and their author links.
pub trait BookRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Book>, CatalogError>;
    async fn list_all_with_authors(&self) -> Result<Vec<Book>, CatalogError>;
    async fn get(&self, id: i32) -> Result<Option<Book>, CatalogError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Book>, CatalogError>;

    /// Fetch a book with the requested associations loaded.
    async fn get_with(
        &self,
        id: i32,
        include: BookInclude,
    ) -> Result<Option<Book>, CatalogError>;

    async fn get_with_promotions(&self, id: i32) -> Result<Option<Book>, CatalogError> {
        self.get_with(id, BookInclude::PROMOTIONS).await
    }

    async fn get_with_authors(&self, id: i32) -> Result<Option<Book>, CatalogError> {
        self.get_with(id, BookInclude::AUTHORS).await
    }

    async fn get_with_categories_and_authors(
        &self,
        id: i32,
    ) -> Result<Option<Book>, CatalogError> {
        self.get_with(id, BookInclude::CATEGORIES_AND_AUTHORS).await
    }

    async fn get_with_authors_and_reviews(&self, id: i32) -> Result<Option<Book>, CatalogError> {
        self.get_with(id, BookInclude::AUTHORS_AND_REVIEWS).await
    }

    async fn get_with_authors_reviews_and_categories(
        &self,
        id: i32,
    ) -> Result<Option<Book>, CatalogError> {
        self.get_with(id, BookInclude::AUTHORS_REVIEWS_AND_CATEGORIES)
            .await
    }

    /// Insert a book linked to those of its authors that exist in storage.
    /// Returns the id assigned by storage.
    async fn add(&self, book: &Book) -> Result<i32, CatalogError>;

    /// Overwrite title, description, publication date and price, then replace
    /// the author links with the incoming (existing) author ids when the
    /// incoming `authors` association is loaded.
    async fn edit(&self, book: &Book) -> Result<bool, CatalogError>;
    async fn delete(&self, book: &Book) -> Result<bool, CatalogError>;
}

/// Repository for reviews. Reviews are never edited.
pub trait ReviewRepository: Send + Sync {
    async fn list_for_book(&self, book_id: i32) -> Result<Vec<Review>, CatalogError>;
    async fn get(&self, id: i32) -> Result<Option<Review>, CatalogError>;
    async fn add(&self, review: &Review) -> Result<i32, CatalogError>;
    async fn delete(&self, review: &Review) -> Result<bool, CatalogError>;
}

/// Repository for promotions.
pub trait PromotionRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Promotion>, CatalogError>;
    async fn get(&self, id: i32) -> Result<Option<Promotion>, CatalogError>;
    async fn add(&self, promotion: &Promotion) -> Result<i32, CatalogError>;
    async fn edit(&self, promotion: &Promotion) -> Result<bool, CatalogError>;
    async fn delete(&self, promotion: &Promotion) -> Result<bool, CatalogError>;
}

/// Repository for categories.
pub trait CategoryRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Category>, CatalogError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Category>, CatalogError>;
    async fn get(&self, id: i32) -> Result<Option<Category>, CatalogError>;
    async fn get_with_books(&self, id: i32) -> Result<Option<Category>, CatalogError>;
    async fn add(&self, category: &Category) -> Result<i32, CatalogError>;
    async fn update(&self, category: &Category) -> Result<bool, CatalogError>;
    async fn delete(&self, category: &Category) -> Result<bool, CatalogError>;
}
