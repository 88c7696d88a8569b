use sea_orm_migration::prelude::*;

mod m20250601_000001_create_books;
mod m20250601_000002_create_authors;
mod m20250601_000003_create_book_author;
mod m20250601_000004_create_reviews;
mod m20250601_000005_create_promotions;
mod m20250601_000006_create_categories;
mod m20250601_000007_create_book_category;
mod m20250601_000008_add_foreign_key_indexes;

/// Money/percentage column. SQLite has no decimal storage and would coerce
/// whole values to INTEGER under NUMERIC affinity, so it gets a REAL column.
pub(crate) fn decimal_column<T: IntoIden>(
    manager: &SchemaManager,
    column: T,
    precision: u32,
    scale: u32,
) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    match manager.get_database_backend() {
        sea_orm_migration::sea_orm::DatabaseBackend::Sqlite => def.double(),
        _ => def.decimal_len(precision, scale),
    };
    def
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_books::Migration),
            Box::new(m20250601_000002_create_authors::Migration),
            Box::new(m20250601_000003_create_book_author::Migration),
            Box::new(m20250601_000004_create_reviews::Migration),
            Box::new(m20250601_000005_create_promotions::Migration),
            Box::new(m20250601_000006_create_categories::Migration),
            Box::new(m20250601_000007_create_book_category::Migration),
            Box::new(m20250601_000008_add_foreign_key_indexes::Migration),
        ]
    }
}
