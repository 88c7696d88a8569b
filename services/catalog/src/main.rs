//! Catalog shell: look up, delete, migrate and seed the bookstore catalog.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema, then insert the starter authors into an empty catalog
//! DATABASE_URL=sqlite://catalog.db?mode=rwc catalog seed
//!
//! # Show a book by id, with its reviews
//! catalog find 3 --include reviews
//! ```
//!
//! Without `DATABASE_URL` the connection string is read from
//! `ConnectionStrings.DefaultConnection` in `appsettings.json`
//! (or the file named by `APPSETTINGS_PATH`).

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use bookstore_catalog::config::CatalogConfig;
use bookstore_catalog::error::CatalogError;
use bookstore_catalog::infra::db::DbBookRepository;
use bookstore_catalog::infra::seed::seed_authors;
use bookstore_catalog::usecase::lookup::{DeleteBookUseCase, FindBookUseCase, parse_include};
use bookstore_catalog_migration::Migrator;
use bookstore_core::session::SessionFactory;
use bookstore_core::tracing::init_tracing;
use bookstore_domain::include::BookInclude;

#[derive(Parser)]
#[command(name = "catalog", about = "Bookstore catalog shell")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the details of a book
    Find {
        /// Book id as typed by the user
        id: String,
        /// Extra relations to show, e.g. `reviews,categories,promotions`
        #[arg(long, value_parser = parse_include, default_value = "authors")]
        include: BookInclude,
    },
    /// Delete a book together with its reviews, promotions and links
    Delete {
        /// Book id as typed by the user
        id: String,
    },
    /// Apply pending schema migrations
    Migrate,
    /// Apply migrations, then insert the starter authors if none exist
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = CatalogConfig::from_env();
    let sessions = config
        .open_sessions()
        .await
        .context("failed to open catalog database")?;

    match args.command {
        Command::Find { id, include } => {
            let usecase = FindBookUseCase {
                repo: DbBookRepository { sessions },
                include,
            };
            render(usecase.execute(&id).await)
        }
        Command::Delete { id } => {
            let usecase = DeleteBookUseCase {
                repo: DbBookRepository { sessions },
            };
            render(usecase.execute(&id).await)
        }
        Command::Migrate => migrate(&sessions).await,
        Command::Seed => {
            migrate(&sessions).await?;
            let seeded = seed_authors(&sessions).await?;
            println!(
                "{}",
                if seeded {
                    "Seeded authors."
                } else {
                    "Authors already present."
                }
            );
            Ok(())
        }
    }
}

async fn migrate(sessions: &SessionFactory) -> Result<()> {
    Migrator::up(sessions.connection(), None)
        .await
        .context("failed to apply migrations")?;
    info!("migrations applied");
    Ok(())
}

fn render(result: Result<String, CatalogError>) -> Result<()> {
    match result {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(err) => {
            error!(kind = err.kind(), error = ?err, "catalog operation failed");
            Err(err.into())
        }
    }
}
