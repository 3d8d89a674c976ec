//! MongoDB repository tests. Need Docker; run with `--ignored`.

use chrono::{NaiveDate, NaiveTime};
use domain_events::*;
use domain_packages::Category;
use test_utils::{TestMongo, assertions};

fn event(title: &str) -> Event {
    Event::new(
        title,
        NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
        NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        "Rose Garden",
        "Ceremony and reception",
    )
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_mongo_event_lifecycle() {
    let mongo = TestMongo::new("event_lifecycle").await;
    let repo = MongoEventRepository::new(&mongo.database());
    repo.create_indexes().await.unwrap();

    let wedding = repo
        .create(event("Summer Wedding").with_category(Some(Category::Weddings), None))
        .await
        .unwrap();
    let party = repo.create(event("Office Party")).await.unwrap();

    let titles: Vec<_> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, ["Summer Wedding", "Office Party"]);

    let fetched = assertions::assert_some(repo.get_by_id(wedding.id).await.unwrap(), "get wedding");
    assert_eq!(fetched.category, Some(Category::Weddings));
    assert_eq!(fetched.time, wedding.time);

    let completed = assertions::assert_some(repo.complete(wedding.id).await.unwrap(), "complete");
    assert_eq!(completed.status, EventStatus::Completed);
    let again = assertions::assert_some(repo.complete(wedding.id).await.unwrap(), "complete again");
    assert_eq!(again.status, EventStatus::Completed);

    let mut renamed = party.clone();
    renamed.title = "Team Party".into();
    repo.update(renamed).await.unwrap();
    assert_eq!(repo.get_by_id(party.id).await.unwrap().unwrap().title, "Team Party");

    assert!(repo.delete(party.id).await.unwrap());
    assert!(!repo.delete(party.id).await.unwrap());
    assert!(repo.complete(party.id).await.unwrap().is_none());
    assert!(matches!(repo.update(party).await, Err(EventError::NotFound { .. })));
    assert_eq!(repo.count().await.unwrap(), 1);
}
