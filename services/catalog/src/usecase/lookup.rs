use std::fmt::Write as _;

use bookstore_domain::include::BookInclude;

use crate::domain::repository::BookRepository;
use crate::domain::types::Book;
use crate::error::CatalogError;

pub const INVALID_ID_MESSAGE: &str = "Invalid ID.";
pub const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found.";

/// Parse a user-typed book id, ignoring surrounding whitespace.
pub fn parse_book_id(raw: &str) -> Result<i32, CatalogError> {
    raw.trim().parse().map_err(|_| CatalogError::InvalidId)
}

/// Multi-line description of a book.
///
/// The `Authors:` header is always present; reviews, categories and
/// promotions get a section only when they were loaded.
pub fn format_book_details(book: &Book) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID: {}", book.id);
    let _ = writeln!(out, "Title: {}", book.title);
    let _ = writeln!(out, "Description: {}", book.description);
    let _ = writeln!(out, "Published On: {}", book.published_on.format("%Y-%m-%d"));
    let _ = writeln!(out, "Price: {}", book.price);
    let _ = writeln!(out, "Publisher: {}", book.publisher.as_deref().unwrap_or(""));
    out.push_str("Authors:");
    for author in book.authors.as_slice().unwrap_or_default() {
        let _ = write!(out, "\n  - {}", author.name);
    }
    if let Some(reviews) = book.reviews.as_slice() {
        out.push_str("\nReviews:");
        for review in reviews {
            let _ = write!(
                out,
                "\n  - {}/5 by {}: {}",
                review.stars, review.user_name, review.comment
            );
        }
    }
    if let Some(categories) = book.categories.as_slice() {
        out.push_str("\nCategories:");
        for category in categories {
            let _ = write!(out, "\n  - {}", category.name);
        }
    }
    if let Some(promotions) = book.promotions.as_slice() {
        out.push_str("\nPromotions:");
        for promotion in promotions {
            let _ = write!(out, "\n  - {}", promotion.name);
            if let Some(discount) = promotion.discount() {
                let _ = write!(out, " ({discount})");
            }
        }
    }
    out
}

/// Parse a `--include` value such as `"reviews,promotions"`.
pub fn parse_include(names: &str) -> Result<BookInclude, String> {
    BookInclude::from_names(names).ok_or_else(|| {
        format!("unknown relation in `{names}`; expected authors, reviews, categories or promotions")
    })
}

// ── FindBook ─────────────────────────────────────────────────────────────────

/// Looks a book up by a user-typed id and renders it.
///
/// Authors are always loaded on top of `include`: a plain `get` would leave
/// the `Authors:` section empty.
pub struct FindBookUseCase<R: BookRepository> {
    pub repo: R,
    pub include: BookInclude,
}

impl<R: BookRepository> FindBookUseCase<R> {
    pub async fn execute(&self, raw_id: &str) -> Result<String, CatalogError> {
        let Ok(id) = parse_book_id(raw_id) else {
            return Ok(INVALID_ID_MESSAGE.to_owned());
        };
        let include = self.include.with_authors();
        Ok(match self.repo.get_with(id, include).await? {
            Some(book) => format_book_details(&book),
            None => BOOK_NOT_FOUND_MESSAGE.to_owned(),
        })
    }
}

// ── DeleteBook ───────────────────────────────────────────────────────────────

pub struct DeleteBookUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> DeleteBookUseCase<R> {
    pub async fn execute(&self, raw_id: &str) -> Result<String, CatalogError> {
        let Ok(id) = parse_book_id(raw_id) else {
            return Ok(INVALID_ID_MESSAGE.to_owned());
        };
        let Some(book) = self.repo.get(id).await? else {
            return Ok(BOOK_NOT_FOUND_MESSAGE.to_owned());
        };
        self.repo.delete(&book).await?;
        Ok(format!("Book with ID {id} deleted."))
    }
}
