use bookstore_catalog::domain::repository::ReviewRepository;
use bookstore_catalog::domain::types::Review;
use bookstore_domain::stars::Stars;

use crate::helpers::{add_book, reviews, test_sessions};

fn review(book_id: i32, user: &str, stars: u8) -> Review {
    Review::new(
        book_id,
        user,
        format!("{user}@example.com"),
        "Worth a read",
        Stars::new(stars).unwrap(),
    )
}

#[tokio::test]
async fn should_add_and_get_review() {
    let sessions = test_sessions().await;
    let book_id = add_book(&sessions, "Reviewed").await;
    let id = reviews(&sessions).add(&review(book_id, "ann", 4)).await.unwrap();

    let stored = reviews(&sessions).get(id).await.unwrap().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.book_id, book_id);
    assert_eq!(stored.user_name, "ann");
    assert_eq!(stored.user_email, "ann@example.com");
    assert_eq!(stored.comment, "Worth a read");
    assert_eq!(stored.stars.get(), 4);
}

#[tokio::test]
async fn should_return_none_for_unknown_review() {
    let sessions = test_sessions().await;
    assert!(reviews(&sessions).get(9).await.unwrap().is_none());
}

#[tokio::test]
async fn should_list_reviews_for_one_book() {
    let sessions = test_sessions().await;
    let first = add_book(&sessions, "First").await;
    let second = add_book(&sessions, "Second").await;
    let repo = reviews(&sessions);
    repo.add(&review(first, "ann", 5)).await.unwrap();
    repo.add(&review(first, "bob", 1)).await.unwrap();
    repo.add(&review(second, "cid", 3)).await.unwrap();

    let listed = repo.list_for_book(first).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|r| r.book_id == first));
    assert!(repo.list_for_book(404).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_review_for_unknown_book() {
    let sessions = test_sessions().await;
    let result = reviews(&sessions).add(&review(404, "ann", 2)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn should_delete_review() {
    let sessions = test_sessions().await;
    let book_id = add_book(&sessions, "Reviewed").await;
    let repo = reviews(&sessions);
    let id = repo.add(&review(book_id, "ann", 3)).await.unwrap();

    let stored = repo.get(id).await.unwrap().unwrap();
    assert!(repo.delete(&stored).await.unwrap());
    assert!(repo.get(id).await.unwrap().is_none());
    assert!(!repo.delete(&stored).await.unwrap());
}
