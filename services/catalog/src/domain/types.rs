use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use bookstore_domain::association::Association;
use bookstore_domain::stars::Stars;

/// Id carried by records that have not been stored yet.
pub const UNSAVED_ID: i32 = 0;

/// Catalog book with its populate-on-demand associations.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub published_on: NaiveDate,
    pub price: Decimal,
    pub publisher: Option<String>,
    pub authors: Association<Author>,
    pub reviews: Association<Review>,
    pub categories: Association<Category>,
    pub promotions: Association<Promotion>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        published_on: NaiveDate,
        price: Decimal,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            title: title.into(),
            description: description.into(),
            published_on,
            price,
            publisher: None,
            authors: Association::NotLoaded,
            reviews: Association::NotLoaded,
            categories: Association::NotLoaded,
            promotions: Association::NotLoaded,
        }
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Replace the author association with bare authors carrying only these ids.
    pub fn with_author_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.authors = ids
            .into_iter()
            .map(Author::reference)
            .collect::<Vec<_>>()
            .into();
        self
    }
}

/// Book author.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub books: Association<Book>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            books: Association::NotLoaded,
        }
    }

    /// An author known only by id, for linking.
    pub fn reference(id: i32) -> Self {
        Self {
            id,
            name: String::new(),
            books: Association::NotLoaded,
        }
    }
}

/// Reader review attached to a book.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub user_name: String,
    pub user_email: String,
    pub comment: String,
    pub stars: Stars,
    pub book_id: i32,
}

impl Review {
    pub fn new(
        book_id: i32,
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        comment: impl Into<String>,
        stars: Stars,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            user_name: user_name.into(),
            user_email: user_email.into(),
            comment: comment.into(),
            stars,
            book_id,
        }
    }
}

/// Discount on a book. Conventionally exactly one of `percent`/`amount` is set.
#[derive(Debug, Clone)]
pub struct Promotion {
    pub id: i32,
    pub name: String,
    pub percent: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub book_id: i32,
}

impl Promotion {
    pub fn percent_off(book_id: i32, name: impl Into<String>, percent: Decimal) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            percent: Some(percent),
            amount: None,
            book_id,
        }
    }

    pub fn amount_off(book_id: i32, name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            percent: None,
            amount: Some(amount),
            book_id,
        }
    }

    /// Percent when set, otherwise the fixed amount.
    pub fn discount(&self) -> Option<Decimal> {
        self.percent.or(self.amount)
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name - {}\nDiscount - ", self.name)?;
        match self.discount() {
            Some(discount) => write!(f, "{discount}"),
            None => Ok(()),
        }
    }
}

/// Book category.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub books: Association<Book>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            description: description.into(),
            books: Association::NotLoaded,
        }
    }
}

macro_rules! identity_by_id {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    self.id == other.id
                }
            }

            impl Eq for $ty {}

            impl Hash for $ty {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.id.hash(state);
                }
            }
        )+
    };
}

identity_by_id!(Book, Author, Review, Promotion, Category);
