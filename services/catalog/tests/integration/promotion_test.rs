use rust_decimal::Decimal;

use bookstore_catalog::domain::repository::PromotionRepository;
use bookstore_catalog::domain::types::Promotion;

use crate::helpers::{add_book, promotions, test_sessions};

#[tokio::test]
async fn should_add_and_get_percent_promotion() {
    let sessions = test_sessions().await;
    let book_id = add_book(&sessions, "On Sale").await;
    let id = promotions(&sessions)
        .add(&Promotion::percent_off(book_id, "Spring", Decimal::new(15, 0)))
        .await
        .unwrap();

    let stored = promotions(&sessions).get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Spring");
    assert_eq!(stored.percent, Some(Decimal::new(15, 0)));
    assert_eq!(stored.amount, None);
    assert_eq!(stored.book_id, book_id);
    assert_eq!(stored.to_string(), "Name - Spring\nDiscount - 15.00");
}

#[tokio::test]
async fn should_return_none_for_unknown_promotion() {
    let sessions = test_sessions().await;
    assert!(promotions(&sessions).get(3).await.unwrap().is_none());
}

#[tokio::test]
async fn should_list_all_promotions() {
    let sessions = test_sessions().await;
    let book_id = add_book(&sessions, "On Sale").await;
    let repo = promotions(&sessions);
    repo.add(&Promotion::percent_off(book_id, "Spring", Decimal::new(10, 0)))
        .await
        .unwrap();
    repo.add(&Promotion::amount_off(book_id, "Clearance", Decimal::new(3, 0)))
        .await
        .unwrap();

    let mut names: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Clearance", "Spring"]);
}

#[tokio::test]
async fn should_edit_promotion() {
    let sessions = test_sessions().await;
    let book_id = add_book(&sessions, "On Sale").await;
    let repo = promotions(&sessions);
    let id = repo
        .add(&Promotion::percent_off(book_id, "Spring", Decimal::new(10, 0)))
        .await
        .unwrap();

    let mut promo = repo.get(id).await.unwrap().unwrap();
    promo.name = "Summer".into();
    promo.percent = None;
    promo.amount = Some(Decimal::new(4, 0));
    assert!(repo.edit(&promo).await.unwrap());

    let stored = repo.get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Summer");
    assert_eq!(stored.percent, None);
    assert_eq!(stored.amount, Some(Decimal::new(4, 0)));
}

#[tokio::test]
async fn should_report_edit_and_delete_of_missing_promotion() {
    let sessions = test_sessions().await;
    let book_id = add_book(&sessions, "On Sale").await;
    let mut ghost = Promotion::amount_off(book_id, "Ghost", Decimal::ONE);
    ghost.id = 88;

    let repo = promotions(&sessions);
    assert!(!repo.edit(&ghost).await.unwrap());
    assert!(!repo.delete(&ghost).await.unwrap());
}

#[tokio::test]
async fn should_delete_promotion() {
    let sessions = test_sessions().await;
    let book_id = add_book(&sessions, "On Sale").await;
    let repo = promotions(&sessions);
    let id = repo
        .add(&Promotion::amount_off(book_id, "Clearance", Decimal::new(2, 0)))
        .await
        .unwrap();

    let promo = repo.get(id).await.unwrap().unwrap();
    assert!(repo.delete(&promo).await.unwrap());
    assert!(repo.get(id).await.unwrap().is_none());
}
