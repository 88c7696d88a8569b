use std::collections::BTreeSet;

use anyhow::Context as _;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseTransaction, EntityTrait,
    IntoActiveModel as _, LoaderTrait, ModelTrait, QueryFilter, QueryOrder,
};
use tracing::debug;

use bookstore_catalog_schema::{
    authors, book_author, books, categories, promotions, reviews,
};
use bookstore_core::session::SessionFactory;
use bookstore_domain::include::BookInclude;
use bookstore_domain::stars::Stars;

use crate::domain::repository::{
    AuthorRepository, BookRepository, CategoryRepository, PromotionRepository, ReviewRepository,
};
use crate::domain::types::{Author, Book, Category, Promotion, Review};
use crate::error::CatalogError;

// ── Sessions ─────────────────────────────────────────────────────────────────

async fn begin(sessions: &SessionFactory) -> Result<DatabaseTransaction, CatalogError> {
    Ok(sessions.begin().await.context("begin session")?)
}

async fn commit(txn: DatabaseTransaction) -> Result<(), CatalogError> {
    txn.commit().await.context("commit session")?;
    Ok(())
}

/// `LIKE` narrows the candidates in SQL; the exact `contains` keeps the match
/// case-sensitive on backends whose `LIKE` folds case (SQLite).
fn matches_name(value: &str, needle: &str) -> bool {
    value.contains(needle)
}

/// Scale of the stored price, percent and amount columns.
pub const MONEY_SCALE: u32 = 2;

/// SQLite returns decimals through `f64`, which drops trailing zeros and may
/// add noise past the column scale; restore the scale on the way out.
fn money(mut value: Decimal) -> Decimal {
    value.rescale(MONEY_SCALE);
    value
}

// ── Author repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthorRepository {
    pub sessions: SessionFactory,
}

impl AuthorRepository for DbAuthorRepository {
    async fn list_all(&self) -> Result<Vec<Author>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = authors::Entity::find()
            .order_by_asc(authors::Column::Id)
            .all(&txn)
            .await
            .context("list authors")?;
        commit(txn).await?;
        Ok(models.into_iter().map(author_from_model).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Author>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = authors::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find author by id")?;
        commit(txn).await?;
        Ok(model.map(author_from_model))
    }

    async fn get_with_books(&self, id: i32) -> Result<Option<Author>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let Some(model) = authors::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find author by id")?
        else {
            return Ok(None);
        };
        let books = model
            .find_related(books::Entity)
            .order_by_asc(books::Column::Id)
            .all(&txn)
            .await
            .context("load author books")?;
        commit(txn).await?;

        let mut author = author_from_model(model);
        author.books = books
            .into_iter()
            .map(book_from_model)
            .collect::<Vec<_>>()
            .into();
        Ok(Some(author))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Author>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = authors::Entity::find()
            .filter(authors::Column::Name.contains(name))
            .order_by_asc(authors::Column::Id)
            .all(&txn)
            .await
            .context("find authors by name")?;
        commit(txn).await?;
        Ok(models
            .into_iter()
            .filter(|m| matches_name(&m.name, name))
            .map(author_from_model)
            .collect())
    }

    async fn add(&self, author: &Author) -> Result<i32, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = authors::ActiveModel {
            name: Set(author.name.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert author")?;
        commit(txn).await?;
        debug!(author_id = model.id, "author added");
        Ok(model.id)
    }

    async fn edit(&self, author: &Author) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let result = authors::Entity::update_many()
            .set(authors::ActiveModel {
                name: Set(author.name.clone()),
                ..Default::default()
            })
            .filter(authors::Column::Id.eq(author.id))
            .exec(&txn)
            .await
            .context("update author")?;
        commit(txn).await?;
        debug!(author_id = author.id, rows = result.rows_affected, "author edited");
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, author: &Author) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let result = authors::Entity::delete_by_id(author.id)
            .exec(&txn)
            .await
            .context("delete author")?;
        commit(txn).await?;
        debug!(author_id = author.id, rows = result.rows_affected, "author deleted");
        Ok(result.rows_affected > 0)
    }
}

fn author_from_model(model: authors::Model) -> Author {
    Author {
        id: model.id,
        name: model.name,
        books: Default::default(),
    }
}

// ── Book repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookRepository {
    pub sessions: SessionFactory,
}

impl BookRepository for DbBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = books::Entity::find()
            .order_by_asc(books::Column::Id)
            .all(&txn)
            .await
            .context("list books")?;
        commit(txn).await?;
        Ok(models.into_iter().map(book_from_model).collect())
    }

    async fn list_all_with_authors(&self) -> Result<Vec<Book>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = books::Entity::find()
            .order_by_asc(books::Column::Id)
            .all(&txn)
            .await
            .context("list books")?;
        let authors = models
            .load_many_to_many(authors::Entity, book_author::Entity, &txn)
            .await
            .context("load authors for books")?;
        commit(txn).await?;

        Ok(models
            .into_iter()
            .zip(authors)
            .map(|(model, authors)| {
                let mut book = book_from_model(model);
                book.authors = authors
                    .into_iter()
                    .map(author_from_model)
                    .collect::<Vec<_>>()
                    .into();
                book
            })
            .collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = books::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find book by id")?;
        commit(txn).await?;
        Ok(model.map(book_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Book>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = books::Entity::find()
            .filter(books::Column::Title.contains(name))
            .order_by_asc(books::Column::Id)
            .all(&txn)
            .await
            .context("find books by title")?;
        commit(txn).await?;
        Ok(models
            .into_iter()
            .filter(|m| matches_name(&m.title, name))
            .map(book_from_model)
            .collect())
    }

    async fn get_with(
        &self,
        id: i32,
        include: BookInclude,
    ) -> Result<Option<Book>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let Some(model) = books::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find book by id")?
        else {
            return Ok(None);
        };
        let mut book = book_from_model(model.clone());

        if include.authors {
            let rows = model
                .find_related(authors::Entity)
                .order_by_asc(authors::Column::Id)
                .all(&txn)
                .await
                .context("load book authors")?;
            book.authors = rows
                .into_iter()
                .map(author_from_model)
                .collect::<Vec<_>>()
                .into();
        }
        if include.reviews {
            let rows = model
                .find_related(reviews::Entity)
                .order_by_asc(reviews::Column::Id)
                .all(&txn)
                .await
                .context("load book reviews")?;
            book.reviews = rows
                .into_iter()
                .map(review_from_model)
                .collect::<Result<Vec<_>, _>>()?
                .into();
        }
        if include.categories {
            let rows = model
                .find_related(categories::Entity)
                .order_by_asc(categories::Column::Id)
                .all(&txn)
                .await
                .context("load book categories")?;
            book.categories = rows
                .into_iter()
                .map(category_from_model)
                .collect::<Vec<_>>()
                .into();
        }
        if include.promotions {
            let rows = model
                .find_related(promotions::Entity)
                .order_by_asc(promotions::Column::Id)
                .all(&txn)
                .await
                .context("load book promotions")?;
            book.promotions = rows
                .into_iter()
                .map(promotion_from_model)
                .collect::<Vec<_>>()
                .into();
        }

        commit(txn).await?;
        Ok(Some(book))
    }

    async fn add(&self, book: &Book) -> Result<i32, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = books::ActiveModel {
            title: Set(book.title.clone()),
            description: Set(book.description.clone()),
            published_on: Set(book.published_on),
            price: Set(book.price),
            publisher: Set(book.publisher.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert book")?;

        if let Some(authors) = book.authors.as_slice() {
            let author_ids = existing_author_ids(&txn, authors)
                .await
                .context("resolve book authors")?;
            link_authors(&txn, model.id, &author_ids)
                .await
                .context("link book authors")?;
        }
        commit(txn).await?;
        debug!(book_id = model.id, "book added");
        Ok(model.id)
    }

    async fn edit(&self, book: &Book) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let Some(current) = books::Entity::find_by_id(book.id)
            .one(&txn)
            .await
            .context("find book for edit")?
        else {
            return Ok(false);
        };

        let mut active = current.into_active_model();
        active.title = Set(book.title.clone());
        active.description = Set(book.description.clone());
        active.published_on = Set(book.published_on);
        active.price = Set(book.price);
        active.update(&txn).await.context("update book")?;

        // Replace, not merge: every existing link goes, the incoming ids come back.
        if let Some(authors) = book.authors.as_slice() {
            let author_ids = existing_author_ids(&txn, authors)
                .await
                .context("resolve book authors")?;
            book_author::Entity::delete_many()
                .filter(book_author::Column::BookId.eq(book.id))
                .exec(&txn)
                .await
                .context("unlink book authors")?;
            link_authors(&txn, book.id, &author_ids)
                .await
                .context("link book authors")?;
        }
        commit(txn).await?;
        debug!(book_id = book.id, "book edited");
        Ok(true)
    }

    async fn delete(&self, book: &Book) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let result = books::Entity::delete_by_id(book.id)
            .exec(&txn)
            .await
            .context("delete book")?;
        commit(txn).await?;
        debug!(book_id = book.id, rows = result.rows_affected, "book deleted");
        Ok(result.rows_affected > 0)
    }
}

/// Ids of the given authors that exist in storage; unknown ids are dropped.
async fn existing_author_ids(
    txn: &DatabaseTransaction,
    authors: &[Author],
) -> Result<Vec<i32>, sea_orm::DbErr> {
    let wanted: BTreeSet<i32> = authors.iter().map(|a| a.id).collect();
    if wanted.is_empty() {
        return Ok(Vec::new());
    }
    let models = authors::Entity::find()
        .filter(authors::Column::Id.is_in(wanted))
        .all(txn)
        .await?;
    Ok(models.into_iter().map(|m| m.id).collect())
}

async fn link_authors(
    txn: &DatabaseTransaction,
    book_id: i32,
    author_ids: &[i32],
) -> Result<(), sea_orm::DbErr> {
    if author_ids.is_empty() {
        return Ok(());
    }
    book_author::Entity::insert_many(author_ids.iter().map(|&author_id| {
        book_author::ActiveModel {
            book_id: Set(book_id),
            author_id: Set(author_id),
        }
    }))
    .exec_without_returning(txn)
    .await?;
    Ok(())
}

fn book_from_model(model: books::Model) -> Book {
    Book {
        id: model.id,
        title: model.title,
        description: model.description,
        published_on: model.published_on,
        price: money(model.price),
        publisher: model.publisher,
        authors: Default::default(),
        reviews: Default::default(),
        categories: Default::default(),
        promotions: Default::default(),
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub sessions: SessionFactory,
}

impl ReviewRepository for DbReviewRepository {
    async fn list_for_book(&self, book_id: i32) -> Result<Vec<Review>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = reviews::Entity::find()
            .filter(reviews::Column::BookId.eq(book_id))
            .order_by_asc(reviews::Column::Id)
            .all(&txn)
            .await
            .context("list reviews for book")?;
        commit(txn).await?;
        models.into_iter().map(review_from_model).collect()
    }

    async fn get(&self, id: i32) -> Result<Option<Review>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = reviews::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find review by id")?;
        commit(txn).await?;
        model.map(review_from_model).transpose()
    }

    async fn add(&self, review: &Review) -> Result<i32, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = reviews::ActiveModel {
            user_name: Set(review.user_name.clone()),
            user_email: Set(review.user_email.clone()),
            comment: Set(review.comment.clone()),
            stars: Set(i16::from(review.stars.get())),
            book_id: Set(review.book_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert review")?;
        commit(txn).await?;
        debug!(review_id = model.id, book_id = model.book_id, "review added");
        Ok(model.id)
    }

    async fn delete(&self, review: &Review) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let result = reviews::Entity::delete_by_id(review.id)
            .exec(&txn)
            .await
            .context("delete review")?;
        commit(txn).await?;
        debug!(review_id = review.id, rows = result.rows_affected, "review deleted");
        Ok(result.rows_affected > 0)
    }
}

fn review_from_model(model: reviews::Model) -> Result<Review, CatalogError> {
    let stars = u8::try_from(model.stars)
        .with_context(|| format!("review {} has stars {}", model.id, model.stars))?;
    Ok(Review {
        id: model.id,
        user_name: model.user_name,
        user_email: model.user_email,
        comment: model.comment,
        stars: Stars::new(stars)?,
        book_id: model.book_id,
    })
}

// ── Promotion repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPromotionRepository {
    pub sessions: SessionFactory,
}

impl PromotionRepository for DbPromotionRepository {
    async fn list_all(&self) -> Result<Vec<Promotion>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = promotions::Entity::find()
            .order_by_asc(promotions::Column::Id)
            .all(&txn)
            .await
            .context("list promotions")?;
        commit(txn).await?;
        Ok(models.into_iter().map(promotion_from_model).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Promotion>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = promotions::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find promotion by id")?;
        commit(txn).await?;
        Ok(model.map(promotion_from_model))
    }

    async fn add(&self, promotion: &Promotion) -> Result<i32, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = promotions::ActiveModel {
            name: Set(promotion.name.clone()),
            percent: Set(promotion.percent),
            amount: Set(promotion.amount),
            book_id: Set(promotion.book_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert promotion")?;
        commit(txn).await?;
        debug!(promotion_id = model.id, book_id = model.book_id, "promotion added");
        Ok(model.id)
    }

    async fn edit(&self, promotion: &Promotion) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let result = promotions::Entity::update_many()
            .set(promotions::ActiveModel {
                name: Set(promotion.name.clone()),
                percent: Set(promotion.percent),
                amount: Set(promotion.amount),
                book_id: Set(promotion.book_id),
                ..Default::default()
            })
            .filter(promotions::Column::Id.eq(promotion.id))
            .exec(&txn)
            .await
            .context("update promotion")?;
        commit(txn).await?;
        debug!(promotion_id = promotion.id, rows = result.rows_affected, "promotion edited");
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, promotion: &Promotion) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let result = promotions::Entity::delete_by_id(promotion.id)
            .exec(&txn)
            .await
            .context("delete promotion")?;
        commit(txn).await?;
        debug!(promotion_id = promotion.id, rows = result.rows_affected, "promotion deleted");
        Ok(result.rows_affected > 0)
    }
}

fn promotion_from_model(model: promotions::Model) -> Promotion {
    Promotion {
        id: model.id,
        name: model.name,
        percent: model.percent.map(money),
        amount: model.amount.map(money),
        book_id: model.book_id,
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub sessions: SessionFactory,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&txn)
            .await
            .context("list categories")?;
        commit(txn).await?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Category>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let models = categories::Entity::find()
            .filter(categories::Column::Name.contains(name))
            .order_by_asc(categories::Column::Id)
            .all(&txn)
            .await
            .context("find categories by name")?;
        commit(txn).await?;
        Ok(models
            .into_iter()
            .filter(|m| matches_name(&m.name, name))
            .map(category_from_model)
            .collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Category>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = categories::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find category by id")?;
        commit(txn).await?;
        Ok(model.map(category_from_model))
    }

    async fn get_with_books(&self, id: i32) -> Result<Option<Category>, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let Some(model) = categories::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find category by id")?
        else {
            return Ok(None);
        };
        let books = model
            .find_related(books::Entity)
            .order_by_asc(books::Column::Id)
            .all(&txn)
            .await
            .context("load category books")?;
        commit(txn).await?;

        let mut category = category_from_model(model);
        category.books = books
            .into_iter()
            .map(book_from_model)
            .collect::<Vec<_>>()
            .into();
        Ok(Some(category))
    }

    async fn add(&self, category: &Category) -> Result<i32, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let model = categories::ActiveModel {
            name: Set(category.name.clone()),
            description: Set(category.description.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert category")?;
        commit(txn).await?;
        debug!(category_id = model.id, "category added");
        Ok(model.id)
    }

    async fn update(&self, category: &Category) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let result = categories::Entity::update_many()
            .set(categories::ActiveModel {
                name: Set(category.name.clone()),
                description: Set(category.description.clone()),
                ..Default::default()
            })
            .filter(categories::Column::Id.eq(category.id))
            .exec(&txn)
            .await
            .context("update category")?;
        commit(txn).await?;
        debug!(category_id = category.id, rows = result.rows_affected, "category updated");
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, category: &Category) -> Result<bool, CatalogError> {
        let txn = begin(&self.sessions).await?;
        let result = categories::Entity::delete_by_id(category.id)
            .exec(&txn)
            .await
            .context("delete category")?;
        commit(txn).await?;
        debug!(category_id = category.id, rows = result.rows_affected, "category deleted");
        Ok(result.rows_affected > 0)
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        description: model.description,
        books: Default::default(),
    }
}
