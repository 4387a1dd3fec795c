use std::sync::Arc;

use crate::{
    domain::{Announcement, CreateAnnouncementRequest, DeleteAnnouncementRequest},
    error::Result,
    repository::AnnouncementRepository,
};

pub struct AnnouncementService {
    repo: Arc<dyn AnnouncementRepository>,
}

impl AnnouncementService {
    pub fn new(repo: Arc<dyn AnnouncementRepository>) -> Self {
        Self { repo }
    }

    /// List every announcement, most recent first
    pub async fn list(&self) -> Result<Vec<Announcement>> {
        self.repo.list().await
    }

    /// Validate and store a new announcement
    pub async fn create(&self, request: CreateAnnouncementRequest) -> Result<Announcement> {
        let new_announcement = request.validate().map_err(|e| {
            tracing::debug!("Rejected announcement: {}", e);
            e
        })?;

        let announcement = self.repo.create(new_announcement).await?;
        tracing::info!("Created announcement {} ({})", announcement.id, announcement.title);

        Ok(announcement)
    }

    /// Delete an announcement by id. Succeeds whether or not it existed.
    pub async fn delete(&self, request: DeleteAnnouncementRequest) -> Result<()> {
        let id = request.validate()?;

        self.repo.delete(id).await?;
        tracing::info!("Deleted announcement {}", id);

        Ok(())
    }
}
