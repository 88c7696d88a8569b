//! Eager-load shapes for book lookups.

/// Which associations a book lookup should populate.
///
/// Every flag left `false` keeps the matching association `NotLoaded`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BookInclude {
    pub authors: bool,
    pub reviews: bool,
    pub categories: bool,
    pub promotions: bool,
}

impl BookInclude {
    pub const NONE: Self = Self {
        authors: false,
        reviews: false,
        categories: false,
        promotions: false,
    };
    pub const AUTHORS: Self = Self::NONE.with_authors();
    pub const PROMOTIONS: Self = Self::NONE.with_promotions();
    pub const AUTHORS_AND_REVIEWS: Self = Self::AUTHORS.with_reviews();
    pub const CATEGORIES_AND_AUTHORS: Self = Self::AUTHORS.with_categories();
    pub const AUTHORS_REVIEWS_AND_CATEGORIES: Self = Self::AUTHORS_AND_REVIEWS.with_categories();
    pub const ALL: Self = Self::AUTHORS_REVIEWS_AND_CATEGORIES.with_promotions();

    pub const fn with_authors(mut self) -> Self {
        self.authors = true;
        self
    }

    pub const fn with_reviews(mut self) -> Self {
        self.reviews = true;
        self
    }

    pub const fn with_categories(mut self) -> Self {
        self.categories = true;
        self
    }

    pub const fn with_promotions(mut self) -> Self {
        self.promotions = true;
        self
    }

    /// Parse a comma-separated relation list such as `"authors,reviews"`.
    pub fn from_names(names: &str) -> Option<Self> {
        let mut include = Self::NONE;
        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            include = match name {
                "authors" => include.with_authors(),
                "reviews" => include.with_reviews(),
                "categories" => include.with_categories(),
                "promotions" => include.with_promotions(),
                _ => return None,
            };
        }
        Some(include)
    }
}
