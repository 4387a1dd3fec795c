use async_trait::async_trait;
use crate::domain::*;
use crate::error::Result;

pub mod announcement_repository;
pub mod upload_repository;

pub use announcement_repository::SqliteAnnouncementRepository;
pub use upload_repository::SqliteFileUploadRepository;

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// All announcements, most recent `date` first.
    async fn list(&self) -> Result<Vec<Announcement>>;
    async fn create(&self, announcement: NewAnnouncement) -> Result<Announcement>;
    /// Removing an id that does not exist is not an error.
    async fn delete(&self, id: AnnouncementId) -> Result<()>;
}

#[async_trait]
pub trait FileUploadRepository: Send + Sync {
    async fn create(&self, upload: NewFileUpload) -> Result<FileUpload>;
    async fn list_by_uploader(&self, uploaded_by: &str) -> Result<Vec<FileUpload>>;
}
