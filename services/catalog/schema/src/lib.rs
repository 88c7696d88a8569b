//! sea-orm entities for the catalog tables.

pub mod authors;
pub mod book_author;
pub mod book_category;
pub mod books;
pub mod categories;
pub mod promotions;
pub mod reviews;
