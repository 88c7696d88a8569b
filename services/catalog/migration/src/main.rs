use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(bookstore_catalog_migration::Migrator).await;
}
