//! Populate-on-demand association collections.

/// A related collection that is only present when the caller asked for it.
///
/// `NotLoaded` means the repository was not asked to fetch the relation;
/// `Loaded(vec![])` means it was fetched and there are no related rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Association<T> {
    NotLoaded,
    Loaded(Vec<T>),
}

impl<T> Default for Association<T> {
    fn default() -> Self {
        Self::NotLoaded
    }
}

impl<T> Association<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The loaded items, or `None` when the relation was not fetched.
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(items) => Some(items),
        }
    }
}

impl<T> From<Vec<T>> for Association<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Loaded(items)
    }
}
