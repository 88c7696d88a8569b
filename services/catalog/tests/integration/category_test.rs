use bookstore_catalog::domain::repository::CategoryRepository;
use bookstore_catalog::domain::types::Category;

use crate::helpers::{categories, test_sessions};

#[tokio::test]
async fn should_add_and_get_category() {
    let sessions = test_sessions().await;
    let id = categories(&sessions)
        .add(&Category::new("Thriller", "Page turners"))
        .await
        .unwrap();

    let stored = categories(&sessions).get(id).await.unwrap().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.name, "Thriller");
    assert_eq!(stored.description, "Page turners");
    assert!(!stored.books.is_loaded());
}

#[tokio::test]
async fn should_return_none_for_unknown_category() {
    let sessions = test_sessions().await;
    let repo = categories(&sessions);
    assert!(repo.get(1).await.unwrap().is_none());
    assert!(repo.get_with_books(1).await.unwrap().is_none());
}

#[tokio::test]
async fn should_list_and_find_categories() {
    let sessions = test_sessions().await;
    let repo = categories(&sessions);
    repo.add(&Category::new("Science Fiction", "Futures")).await.unwrap();
    repo.add(&Category::new("Historical Fiction", "Pasts")).await.unwrap();
    repo.add(&Category::new("fiction, lowercase", "Odd")).await.unwrap();
    repo.add(&Category::new("Poetry", "Verse")).await.unwrap();

    assert_eq!(repo.list_all().await.unwrap().len(), 4);

    let mut names: Vec<String> = repo
        .find_by_name("Fiction")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Historical Fiction", "Science Fiction"]);
}

#[tokio::test]
async fn should_load_empty_books_on_demand() {
    let sessions = test_sessions().await;
    let id = categories(&sessions)
        .add(&Category::new("Empty", "Nothing yet"))
        .await
        .unwrap();

    let category = categories(&sessions).get_with_books(id).await.unwrap().unwrap();
    assert!(category.books.as_slice().unwrap().is_empty());
}

#[tokio::test]
async fn should_update_category() {
    let sessions = test_sessions().await;
    let repo = categories(&sessions);
    let id = repo.add(&Category::new("Mistery", "Whodunits")).await.unwrap();

    let mut category = repo.get(id).await.unwrap().unwrap();
    category.name = "Mystery".into();
    category.description = "Crime and detection".into();
    assert!(repo.update(&category).await.unwrap());

    let stored = repo.get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Mystery");
    assert_eq!(stored.description, "Crime and detection");
}

#[tokio::test]
async fn should_delete_category() {
    let sessions = test_sessions().await;
    let repo = categories(&sessions);
    let id = repo.add(&Category::new("Short", "Brief")).await.unwrap();

    let category = repo.get(id).await.unwrap().unwrap();
    assert!(repo.delete(&category).await.unwrap());
    assert!(repo.get(id).await.unwrap().is_none());
    assert!(!repo.delete(&category).await.unwrap());
    assert!(!repo.update(&category).await.unwrap());
}
