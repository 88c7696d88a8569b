use bookstore_domain::stars::StarsError;

/// Catalog error variants.
///
/// A lookup that finds nothing is not an error; repositories return `None`
/// (or `false` for writes) instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid id")]
    InvalidId,
    #[error("stars must be between 1 and 5, got {0}")]
    InvalidStars(u8),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::InvalidStars(_) => "INVALID_STARS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<StarsError> for CatalogError {
    fn from(err: StarsError) -> Self {
        Self::InvalidStars(err.0)
    }
}
