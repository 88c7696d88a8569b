use bookstore_catalog::domain::repository::{AuthorRepository, BookRepository};
use bookstore_catalog::domain::types::Author;

use crate::helpers::{add_author, authors, books, test_book, test_sessions};

#[tokio::test]
async fn should_add_and_get_author() {
    let sessions = test_sessions().await;
    let id = add_author(&sessions, "Jess Kidd").await;

    let author = authors(&sessions).get(id).await.unwrap().unwrap();
    assert_eq!(author.id, id);
    assert_eq!(author.name, "Jess Kidd");
    assert!(!author.books.is_loaded());
}

#[tokio::test]
async fn should_return_none_for_unknown_author() {
    let sessions = test_sessions().await;
    assert!(authors(&sessions).get(404).await.unwrap().is_none());
    assert!(authors(&sessions).get_with_books(404).await.unwrap().is_none());
}

#[tokio::test]
async fn should_list_all_authors() {
    let sessions = test_sessions().await;
    add_author(&sessions, "Megan Miranda").await;
    add_author(&sessions, "Helen Phillips").await;

    let mut names: Vec<String> = authors(&sessions)
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Helen Phillips", "Megan Miranda"]);
}

#[tokio::test]
async fn should_find_authors_by_name_case_sensitively() {
    let sessions = test_sessions().await;
    add_author(&sessions, "Martha McPhee").await;
    add_author(&sessions, "martha lowercase").await;
    add_author(&sessions, "Karen Kingsbury").await;

    let found = authors(&sessions).find_by_name("Martha").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Martha McPhee");
}

#[tokio::test]
async fn should_load_author_books_on_demand() {
    let sessions = test_sessions().await;
    let author_id = add_author(&sessions, "Jess Kidd").await;
    let book_id = books(&sessions)
        .add(&test_book("Things in Jars").with_author_ids([author_id]))
        .await
        .unwrap();

    let author = authors(&sessions)
        .get_with_books(author_id)
        .await
        .unwrap()
        .unwrap();
    let loaded = author.books.as_slice().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, book_id);

    let lonely = add_author(&sessions, "Nobody").await;
    let author = authors(&sessions).get_with_books(lonely).await.unwrap().unwrap();
    assert!(author.books.as_slice().unwrap().is_empty());
}

#[tokio::test]
async fn should_edit_author_name() {
    let sessions = test_sessions().await;
    let id = add_author(&sessions, "Helen Philips").await;

    let mut author = authors(&sessions).get(id).await.unwrap().unwrap();
    author.name = "Helen Phillips".into();
    assert!(authors(&sessions).edit(&author).await.unwrap());

    let stored = authors(&sessions).get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Helen Phillips");
}

#[tokio::test]
async fn should_report_edit_of_missing_author() {
    let sessions = test_sessions().await;
    let mut ghost = Author::new("Ghost");
    ghost.id = 77;
    assert!(!authors(&sessions).edit(&ghost).await.unwrap());
}

#[tokio::test]
async fn should_delete_author_and_unlink_books() {
    let sessions = test_sessions().await;
    let author_id = add_author(&sessions, "Karen Kingsbury").await;
    let book_id = books(&sessions)
        .add(&test_book("The Bridge").with_author_ids([author_id]))
        .await
        .unwrap();

    let author = authors(&sessions).get(author_id).await.unwrap().unwrap();
    assert!(authors(&sessions).delete(&author).await.unwrap());
    assert!(authors(&sessions).get(author_id).await.unwrap().is_none());

    let book = books(&sessions).get_with_authors(book_id).await.unwrap().unwrap();
    assert!(book.authors.as_slice().unwrap().is_empty());
}

#[tokio::test]
async fn should_ignore_delete_of_missing_author() {
    let sessions = test_sessions().await;
    let mut ghost = Author::new("Ghost");
    ghost.id = 12;
    assert!(!authors(&sessions).delete(&ghost).await.unwrap());
}
