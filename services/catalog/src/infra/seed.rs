use anyhow::Context as _;
use sea_orm::{ActiveValue::Set, EntityTrait, PaginatorTrait};
use tracing::info;

use bookstore_catalog_schema::authors;
use bookstore_core::session::SessionFactory;

use crate::error::CatalogError;

/// Authors inserted into an empty catalog.
pub const SEED_AUTHORS: [&str; 5] = [
    "Jess Kidd",
    "Martha McPhee",
    "Megan Miranda",
    "Helen Phillips",
    "Karen Kingsbury",
];

/// Insert [`SEED_AUTHORS`] when no author exists yet.
///
/// Returns `true` when the batch was written. Safe to call on every startup.
pub async fn seed_authors(sessions: &SessionFactory) -> Result<bool, CatalogError> {
    let txn = sessions.begin().await.context("begin session")?;
    let existing = authors::Entity::find()
        .count(&txn)
        .await
        .context("count authors")?;
    if existing > 0 {
        info!(existing, "authors already present, skipping seed");
        return Ok(false);
    }

    authors::Entity::insert_many(SEED_AUTHORS.iter().map(|name| authors::ActiveModel {
        name: Set((*name).to_owned()),
        ..Default::default()
    }))
    .exec(&txn)
    .await
    .context("insert seed authors")?;
    txn.commit().await.context("commit session")?;

    info!(count = SEED_AUTHORS.len(), "seeded authors");
    Ok(true)
}
