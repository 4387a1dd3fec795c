mod common;

use barangay::{
    domain::{parse_announcement_date, NewAnnouncement},
    repository::{AnnouncementRepository, SqliteAnnouncementRepository},
};

fn announcement(title: &str, date: &str) -> NewAnnouncement {
    NewAnnouncement {
        title: title.to_string(),
        description: format!("{title} details"),
        date: parse_announcement_date(date).expect("valid test date"),
        link: None,
    }
}

#[tokio::test]
async fn test_announcement_crud() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool.clone());

    // Empty to begin with
    assert!(repo.list().await?.is_empty());

    // Create
    let mut new = announcement("Road Closure", "2025-03-01");
    new.link = Some("https://example.com".to_string());
    let created = repo.create(new.clone()).await?;
    assert!(created.id > 0);
    assert_eq!(created.title, new.title);
    assert_eq!(created.description, new.description);
    assert_eq!(created.date, new.date);
    assert_eq!(created.link.as_deref(), Some("https://example.com"));

    // List round-trips the stored record
    let listed = repo.list().await?;
    assert_eq!(listed, vec![created.clone()]);

    // Delete
    repo.delete(created.id).await?;
    assert!(repo.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_ids_are_unique() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool);

    let first = repo.create(announcement("Same", "2025-01-01")).await?;
    let second = repo.create(announcement("Same", "2025-01-01")).await?;
    repo.delete(second.id).await?;
    let third = repo.create(announcement("Same", "2025-01-01")).await?;

    assert_ne!(first.id, second.id);
    // Deleted ids are not handed out again
    assert_ne!(third.id, second.id);
    assert_ne!(third.id, first.id);

    Ok(())
}

#[tokio::test]
async fn test_list_orders_by_date_descending() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool);

    for (title, date) in [
        ("Middle", "2025-02-15"),
        ("Oldest", "2024-12-31"),
        ("Newest", "2025-06-01"),
        ("Same day, later time", "2025-02-15T09:30:00Z"),
    ] {
        repo.create(announcement(title, date)).await?;
    }

    let titles: Vec<String> = repo.list().await?.into_iter().map(|a| a.title).collect();
    assert_eq!(titles, vec!["Newest", "Same day, later time", "Middle", "Oldest"]);

    Ok(())
}

#[tokio::test]
async fn test_delete_is_idempotent() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool);

    let kept = repo.create(announcement("Kept", "2025-01-01")).await?;

    repo.delete(9999).await?;
    repo.delete(9999).await?;

    let listed = repo.list().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept.id);

    Ok(())
}

#[tokio::test]
async fn test_creates_minus_deletes() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool);

    let mut ids = Vec::new();
    for day in 1..=6 {
        let created = repo.create(announcement(&format!("Notice {day}"), &format!("2025-01-0{day}"))).await?;
        ids.push(created.id);
    }

    repo.delete(ids[1]).await?;
    repo.delete(ids[4]).await?;

    let listed = repo.list().await?;
    assert_eq!(listed.len(), 4);
    assert!(listed.windows(2).all(|w| w[0].date >= w[1].date));
    assert!(listed.iter().all(|a| a.id != ids[1] && a.id != ids[4]));

    Ok(())
}

#[tokio::test]
async fn test_storage_failure_is_reported() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool.clone());

    pool.close().await;

    let err = repo.list().await.expect_err("closed pool should fail");
    assert!(matches!(err, barangay::error::AppError::Database(_)));

    Ok(())
}
