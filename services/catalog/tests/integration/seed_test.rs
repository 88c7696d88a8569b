use bookstore_catalog::domain::repository::AuthorRepository;
use bookstore_catalog::infra::seed::{SEED_AUTHORS, seed_authors};

use crate::helpers::{add_author, authors, test_sessions};

async fn author_names(sessions: &bookstore_core::session::SessionFactory) -> Vec<String> {
    let mut names: Vec<String> = authors(sessions)
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn should_seed_empty_catalog_with_five_authors() {
    let sessions = test_sessions().await;
    assert!(seed_authors(&sessions).await.unwrap());

    assert_eq!(
        author_names(&sessions).await,
        vec![
            "Helen Phillips",
            "Jess Kidd",
            "Karen Kingsbury",
            "Martha McPhee",
            "Megan Miranda",
        ]
    );
    assert_eq!(SEED_AUTHORS.len(), 5);
}

#[tokio::test]
async fn should_not_seed_twice() {
    let sessions = test_sessions().await;
    assert!(seed_authors(&sessions).await.unwrap());
    let before = author_names(&sessions).await;

    assert!(!seed_authors(&sessions).await.unwrap());
    assert_eq!(author_names(&sessions).await, before);
    assert_eq!(before.len(), 5);
}

#[tokio::test]
async fn should_not_seed_when_any_author_exists() {
    let sessions = test_sessions().await;
    add_author(&sessions, "Someone").await;

    assert!(!seed_authors(&sessions).await.unwrap());
    assert_eq!(author_names(&sessions).await, vec!["Someone"]);
}
