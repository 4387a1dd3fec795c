use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::{
    domain::{Announcement, AnnouncementId, NewAnnouncement},
    error::{AppError, Result},
    repository::AnnouncementRepository,
};

#[derive(FromRow)]
struct AnnouncementRow {
    id: i64,
    title: String,
    description: String,
    date: NaiveDateTime,
    link: Option<String>,
}

impl From<AnnouncementRow> for Announcement {
    fn from(row: AnnouncementRow) -> Self {
        Announcement {
            id: row.id,
            title: row.title,
            description: row.description,
            date: DateTime::from_naive_utc_and_offset(row.date, Utc),
            link: row.link,
        }
    }
}

pub struct SqliteAnnouncementRepository {
    pool: SqlitePool,
}

impl SqliteAnnouncementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementRepository for SqliteAnnouncementRepository {
    async fn list(&self) -> Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, title, description, date, link
            FROM announcements
            ORDER BY date DESC, id DESC
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Announcement::from).collect())
    }

    async fn create(&self, announcement: NewAnnouncement) -> Result<Announcement> {
        // Single statement so the id is assigned and returned atomically.
        let row = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            INSERT INTO announcements (title, description, date, link)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, description, date, link
            "#
        )
        .bind(&announcement.title)
        .bind(&announcement.description)
        .bind(announcement.date.naive_utc())
        .bind(&announcement.link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!("Stored announcement {}", row.id);

        Ok(row.into())
    }

    async fn delete(&self, id: AnnouncementId) -> Result<()> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            tracing::debug!("Announcement {} was already absent", id);
        }

        Ok(())
    }
}
